// crates/adapter-contract-config/src/lib.rs
// ============================================================================
// Module: Adapter Contract Config Library
// Description: Configuration model for the offline adapter checker.
// Purpose: Single source of truth for adapter-contract.toml semantics.
// Dependencies: adapter-contract-core, serde, toml
// ============================================================================

//! ## Overview
//! `adapter-contract-config` defines the configuration of the offline
//! checker: the canonical zone list reports are validated against, input
//! size limits, and logging defaults. Validation is strict and fails closed.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::AdapterContractConfig;
pub use config::ConfigError;
pub use config::LimitsConfig;
pub use config::LogFormat;
pub use config::LoggingConfig;
pub use config::ZonesConfig;
