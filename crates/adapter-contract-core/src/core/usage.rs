// crates/adapter-contract-core/src/core/usage.rs
// ============================================================================
// Module: Adapter Contract Usage Types
// Description: Usage scrape request and report payloads.
// Purpose: Carry per-project usage, quota and rate counters to the orchestrator.
// Dependencies: bigdecimal, serde, serde_json
// ============================================================================

//! ## Overview
//! The orchestrator sends a [`ServiceUsageRequest`] per project; the adapter
//! answers with a [`ServiceUsageReport`] holding resource usage (and quota,
//! placed according to topology) plus rate counters per zone.
//!
//! Rate usage is an arbitrary-precision integer. On the wire the `usage`
//! field may be absent, `null`, or a number (or decimal string); the
//! three cases stay distinguishable after deserialization because
//! validation treats "absent" and "null" as different violations.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use bigdecimal::num_bigint::BigInt;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::core::identifiers::AvailabilityZone;
use crate::core::identifiers::MetricName;
use crate::core::identifiers::RateName;
use crate::core::identifiers::ResourceName;
use crate::core::metrics::Metric;
use crate::core::project::ProjectMetadata;
use crate::core::wire;

// ============================================================================
// SECTION: Request
// ============================================================================

/// Usage scrape request for one project.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceUsageRequest {
    /// All real availability zones known to the orchestrator.
    #[serde(rename = "allAZs", default)]
    pub all_azs: Vec<AvailabilityZone>,
    /// Project metadata, present when the manifest asks for it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_metadata: Option<ProjectMetadata>,
    /// Opaque state returned by the previous usage report.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serialized_state: Option<Value>,
}

// ============================================================================
// SECTION: Report
// ============================================================================

/// Usage report for one project.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceUsageReport {
    /// Manifest version the report was produced against.
    pub info_version: i64,
    /// Usage per resource.
    #[serde(default)]
    pub resources: BTreeMap<ResourceName, ResourceUsageReport>,
    /// Usage per rate.
    #[serde(default)]
    pub rates: BTreeMap<RateName, RateUsageReport>,
    /// Metric samples per usage metric family.
    #[serde(default)]
    pub metrics: BTreeMap<MetricName, Vec<Metric>>,
    /// Opaque state the orchestrator hands back on the next request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serialized_state: Option<Value>,
}

/// Usage of one resource in one project.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceUsageReport {
    /// Whether the project may not use this resource at all.
    #[serde(default)]
    pub forbidden: bool,
    /// Resource-level quota (flat and az-aware topologies).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quota: Option<i64>,
    /// Usage per zone; keys must match the resource's topology.
    #[serde(rename = "perAZ", default)]
    pub per_az: BTreeMap<AvailabilityZone, AzResourceUsageReport>,
}

/// Usage of one resource in one zone.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AzResourceUsageReport {
    /// Usage counted against quota.
    pub usage: u64,
    /// Optional physical usage (e.g. bytes actually written).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physical_usage: Option<u64>,
    /// Zone-level quota (az-separated topology only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quota: Option<i64>,
    /// Optional breakdown of the usage.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subresources: Vec<Subresource>,
}

impl AzResourceUsageReport {
    /// Creates a zone entry with only a usage value.
    #[must_use]
    pub const fn with_usage(usage: u64) -> Self {
        Self {
            usage,
            physical_usage: None,
            quota: None,
            subresources: Vec::new(),
        }
    }

    /// Creates a zone entry with usage and zone-level quota.
    #[must_use]
    pub const fn with_usage_and_quota(usage: u64, quota: i64) -> Self {
        Self {
            usage,
            physical_usage: None,
            quota: Some(quota),
            subresources: Vec::new(),
        }
    }
}

/// Part of a zone's usage, such as a single instance or volume.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subresource {
    /// Backend identifier.
    #[serde(default)]
    pub id: String,
    /// Backend display name.
    #[serde(default)]
    pub name: String,
    /// Optional usage of this part.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<u64>,
    /// Opaque adapter-specific attributes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Value>,
}

/// Usage of one rate in one project.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateUsageReport {
    /// Counter value per zone; keys must match the rate's topology.
    #[serde(rename = "perAZ", default)]
    pub per_az: BTreeMap<AvailabilityZone, AzRateUsageReport>,
}

/// Counter value of one rate in one zone.
///
/// `usage` is `None` when the field was absent and `Some(None)` when it was
/// explicitly `null`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AzRateUsageReport {
    /// Monotonic counter value.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "wire::present_big_int"
    )]
    pub usage: Option<Option<BigInt>>,
}

impl AzRateUsageReport {
    /// Creates a zone entry carrying a counter value.
    #[must_use]
    pub fn with_usage(usage: impl Into<BigInt>) -> Self {
        Self {
            usage: Some(Some(usage.into())),
        }
    }
}
