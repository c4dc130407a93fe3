// crates/adapter-contract-core/src/policy/mod.rs
// ============================================================================
// Module: Adapter Contract Policy
// Description: Decision rules over commitment change requests.
// Purpose: Decide whether a commitment batch needs explicit authorization.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Policy functions are pure predicates over already-deserialized requests.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod confirmation;
