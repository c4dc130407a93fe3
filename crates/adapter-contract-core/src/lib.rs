// crates/adapter-contract-core/src/lib.rs
// ============================================================================
// Module: Adapter Contract Core
// Description: Payload model, conformance validation and commitment policy.
// Purpose: Check adapter output against its declared manifest.
// Dependencies: serde, time, bigdecimal, indexmap, regex, thiserror, tracing
// ============================================================================

//! ## Overview
//! Service adapters declare their resources and rates in a [`ServiceInfo`]
//! manifest and then answer capacity and usage scrapes. This crate holds the
//! payload types of that exchange together with:
//!
//! - manifest, capacity report and usage report validators that return every
//!   violation as an [`ErrorSet`], and
//! - the confirmation policy deciding whether a
//!   [`CommitmentChangeRequest`] must be explicitly confirmed.
//!
//! Invariants:
//! - All operations are pure; nothing here performs I/O.
//! - Validation messages are stable strings matched verbatim downstream.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod policy;
pub mod validation;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use crate::core::capacity::AzResourceCapacityReport;
pub use crate::core::capacity::ResourceCapacityReport;
pub use crate::core::capacity::ResourceDemand;
pub use crate::core::capacity::ResourceDemandInAz;
pub use crate::core::capacity::ServiceCapacityReport;
pub use crate::core::capacity::ServiceCapacityRequest;
pub use crate::core::capacity::Subcapacity;
pub use crate::core::commitment::Commitment;
pub use crate::core::commitment::CommitmentChangeRequest;
pub use crate::core::commitment::CommitmentChangeResponse;
pub use crate::core::commitment::CommitmentStatus;
pub use crate::core::commitment::ProjectCommitmentChangeset;
pub use crate::core::commitment::ResourceCommitmentChangeset;
pub use crate::core::identifiers::AvailabilityZone;
pub use crate::core::identifiers::CategoryName;
pub use crate::core::identifiers::CommitmentUuid;
pub use crate::core::identifiers::MetricName;
pub use crate::core::identifiers::ProjectUuid;
pub use crate::core::identifiers::RateName;
pub use crate::core::identifiers::ResourceName;
pub use crate::core::info::CategoryInfo;
pub use crate::core::info::RateInfo;
pub use crate::core::info::ResourceInfo;
pub use crate::core::info::ServiceInfo;
pub use crate::core::metrics::Metric;
pub use crate::core::metrics::MetricFamilyInfo;
pub use crate::core::metrics::MetricType;
pub use crate::core::overcommit::OvercommitFactor;
pub use crate::core::project::DomainMetadata;
pub use crate::core::project::ProjectMetadata;
pub use crate::core::quota::AzResourceQuotaRequest;
pub use crate::core::quota::ResourceQuotaRequest;
pub use crate::core::quota::ServiceQuotaRequest;
pub use crate::core::topology::Topology;
pub use crate::core::units::Unit;
pub use crate::core::units::UnitError;
pub use crate::core::units::ValueWithUnit;
pub use crate::core::usage::AzRateUsageReport;
pub use crate::core::usage::AzResourceUsageReport;
pub use crate::core::usage::RateUsageReport;
pub use crate::core::usage::ResourceUsageReport;
pub use crate::core::usage::ServiceUsageReport;
pub use crate::core::usage::ServiceUsageRequest;
pub use crate::core::usage::Subresource;
pub use crate::validation::ErrorSet;
pub use crate::validation::ValidationError;
pub use crate::validation::validate_capacity_report;
pub use crate::validation::validate_service_info;
pub use crate::validation::validate_usage_report;
