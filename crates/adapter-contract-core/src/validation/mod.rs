// crates/adapter-contract-core/src/validation/mod.rs
// ============================================================================
// Module: Adapter Contract Validation
// Description: Conformance validators for manifests and adapter reports.
// Purpose: Reject malformed or policy-violating adapter output.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Each validator is a pure function returning an [`ErrorSet`]; the
//! `validate` methods on the payload types wrap it into a
//! `Result<(), ValidationError>`.
//! Invariants:
//! - Validators never stop at the first violation, except that a report
//!   built against a different manifest version yields only the version
//!   violation.
//! - Message wording is stable; downstream tooling matches it verbatim.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod capacity;
pub mod errorset;
pub mod info;
mod render;
mod shape;
pub mod usage;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use capacity::validate_capacity_report;
pub use errorset::ErrorSet;
pub use errorset::ValidationError;
pub use info::validate_service_info;
pub use usage::validate_usage_report;
