// crates/adapter-contract-core/src/core/mod.rs
// ============================================================================
// Module: Adapter Contract Core Types
// Description: Wire types exchanged between the orchestrator and adapters.
// Purpose: Provide the canonical, serializable payload model.
// Dependencies: serde, time, bigdecimal
// ============================================================================

//! ## Overview
//! Core types mirror the JSON payloads of the adapter protocol. They are
//! deliberately permissive on input: unknown topologies and malformed
//! names deserialize successfully so that validation can report them.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod capacity;
pub mod commitment;
pub mod identifiers;
pub mod info;
pub mod metrics;
pub mod overcommit;
pub mod project;
pub mod quota;
pub mod topology;
pub mod units;
pub mod usage;
pub(crate) mod wire;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use capacity::AzResourceCapacityReport;
pub use capacity::ResourceCapacityReport;
pub use capacity::ResourceDemand;
pub use capacity::ResourceDemandInAz;
pub use capacity::ServiceCapacityReport;
pub use capacity::ServiceCapacityRequest;
pub use capacity::Subcapacity;
pub use commitment::Commitment;
pub use commitment::CommitmentChangeRequest;
pub use commitment::CommitmentChangeResponse;
pub use commitment::CommitmentStatus;
pub use commitment::ProjectCommitmentChangeset;
pub use commitment::ResourceCommitmentChangeset;
pub use identifiers::AvailabilityZone;
pub use identifiers::CategoryName;
pub use identifiers::CommitmentUuid;
pub use identifiers::MetricName;
pub use identifiers::ProjectUuid;
pub use identifiers::RateName;
pub use identifiers::ResourceName;
pub use info::CategoryInfo;
pub use info::RateInfo;
pub use info::ResourceInfo;
pub use info::ServiceInfo;
pub use metrics::Metric;
pub use metrics::MetricFamilyInfo;
pub use metrics::MetricType;
pub use overcommit::OvercommitFactor;
pub use project::DomainMetadata;
pub use project::ProjectMetadata;
pub use quota::AzResourceQuotaRequest;
pub use quota::ResourceQuotaRequest;
pub use quota::ServiceQuotaRequest;
pub use topology::Topology;
pub use units::Unit;
pub use units::UnitError;
pub use units::ValueWithUnit;
pub use usage::AzRateUsageReport;
pub use usage::AzResourceUsageReport;
pub use usage::RateUsageReport;
pub use usage::ResourceUsageReport;
pub use usage::ServiceUsageReport;
pub use usage::ServiceUsageRequest;
pub use usage::Subresource;
