// crates/adapter-contract-core/src/core/capacity.rs
// ============================================================================
// Module: Adapter Contract Capacity Types
// Description: Capacity scrape request and report payloads.
// Purpose: Carry per-zone capacity from an adapter to the orchestrator.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! The orchestrator sends a [`ServiceCapacityRequest`] listing all real
//! availability zones and, for resources that need it, the current demand.
//! The adapter answers with a [`ServiceCapacityReport`] keyed by resource
//! and zone.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::core::identifiers::AvailabilityZone;
use crate::core::identifiers::MetricName;
use crate::core::identifiers::ResourceName;
use crate::core::metrics::Metric;
use crate::core::overcommit::OvercommitFactor;

// ============================================================================
// SECTION: Request
// ============================================================================

/// Capacity scrape request sent to an adapter.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCapacityRequest {
    /// All real availability zones known to the orchestrator.
    #[serde(rename = "allAZs", default)]
    pub all_azs: Vec<AvailabilityZone>,
    /// Demand for resources declared with `needs_resource_demand`.
    #[serde(default)]
    pub demand_by_resource: BTreeMap<ResourceName, ResourceDemand>,
}

/// Demand for one resource across zones.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDemand {
    /// Overcommit factor the demand values are expressed in.
    #[serde(default)]
    pub overcommit_factor: OvercommitFactor,
    /// Demand per zone.
    #[serde(rename = "perAZ", default)]
    pub per_az: BTreeMap<AvailabilityZone, ResourceDemandInAz>,
}

/// Demand for one resource in one zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDemandInAz {
    /// Usage across all projects.
    pub usage: u64,
    /// Confirmed commitments not yet covered by usage.
    pub unused_commitments: u64,
    /// Pending commitments awaiting confirmation.
    pub pending_commitments: u64,
}

// ============================================================================
// SECTION: Report
// ============================================================================

/// Capacity report returned by an adapter.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCapacityReport {
    /// Manifest version the report was produced against.
    pub info_version: i64,
    /// Capacity per resource.
    #[serde(default)]
    pub resources: BTreeMap<ResourceName, ResourceCapacityReport>,
    /// Metric samples per capacity metric family.
    #[serde(default)]
    pub metrics: BTreeMap<MetricName, Vec<Metric>>,
}

/// Capacity of one resource.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceCapacityReport {
    /// Capacity per zone; keys must match the resource's topology.
    #[serde(rename = "perAZ", default)]
    pub per_az: BTreeMap<AvailabilityZone, AzResourceCapacityReport>,
}

/// Capacity of one resource in one zone.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AzResourceCapacityReport {
    /// Raw capacity.
    pub capacity: u64,
    /// Optional usage as seen by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<u64>,
    /// Optional breakdown of the capacity.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subcapacities: Vec<Subcapacity>,
}

impl AzResourceCapacityReport {
    /// Creates a zone entry with only a capacity value.
    #[must_use]
    pub const fn with_capacity(capacity: u64) -> Self {
        Self {
            capacity,
            usage: None,
            subcapacities: Vec::new(),
        }
    }
}

/// Part of a zone's capacity, such as a single hypervisor.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subcapacity {
    /// Backend identifier.
    #[serde(default)]
    pub id: String,
    /// Backend display name.
    #[serde(default)]
    pub name: String,
    /// Capacity of this part.
    pub capacity: u64,
    /// Optional usage of this part.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<u64>,
    /// Opaque adapter-specific attributes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Value>,
}
