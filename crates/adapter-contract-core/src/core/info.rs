// crates/adapter-contract-core/src/core/info.rs
// ============================================================================
// Module: Adapter Contract Service Manifest
// Description: Self-declared capability set of one backend service.
// Purpose: Define the manifest types that reports are validated against.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! A [`ServiceInfo`] is the manifest an adapter publishes for its service:
//! which resources and rates exist, what data each one carries
//! (`has_capacity`, `has_quota`, `has_usage`), at which topology, and which
//! metric families accompany capacity and usage scrapes.
//!
//! The `version` field identifies the manifest generation. Reports carry it
//! back as `info_version` so the orchestrator can detect reports produced
//! against a stale manifest.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::core::identifiers::CategoryName;
use crate::core::identifiers::MetricName;
use crate::core::identifiers::RateName;
use crate::core::identifiers::ResourceName;
use crate::core::metrics::MetricFamilyInfo;
use crate::core::topology::Topology;
use crate::core::units::Unit;

// ============================================================================
// SECTION: Service Manifest
// ============================================================================

/// Manifest of a single backend service.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInfo {
    /// Manifest generation; reports must echo it as `info_version`.
    pub version: i64,
    /// Human-readable service name.
    #[serde(default)]
    pub display_name: String,
    /// Declared display categories.
    #[serde(default)]
    pub categories: BTreeMap<CategoryName, CategoryInfo>,
    /// Declared resources.
    #[serde(default)]
    pub resources: BTreeMap<ResourceName, ResourceInfo>,
    /// Declared rates.
    #[serde(default)]
    pub rates: BTreeMap<RateName, RateInfo>,
    /// Metric families reported with capacity data.
    #[serde(default)]
    pub capacity_metric_families: BTreeMap<MetricName, MetricFamilyInfo>,
    /// Metric families reported with usage data.
    #[serde(default)]
    pub usage_metric_families: BTreeMap<MetricName, MetricFamilyInfo>,
    /// Whether usage requests must include project metadata.
    #[serde(default)]
    pub usage_report_needs_project_metadata: bool,
    /// Whether quota requests must include project metadata.
    #[serde(default)]
    pub quota_update_needs_project_metadata: bool,
    /// Whether commitment change requests must include project metadata.
    #[serde(default)]
    pub commitment_handling_needs_project_metadata: bool,
}

/// Display category declared by a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInfo {
    /// Human-readable label; must be non-empty.
    #[serde(default)]
    pub display_name: String,
}

/// Declaration of one resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceInfo {
    /// Human-readable name.
    #[serde(default)]
    pub display_name: String,
    /// Optional display category.
    #[serde(default)]
    pub category: Option<CategoryName>,
    /// Unit of capacity, quota and usage values.
    #[serde(default)]
    pub unit: Unit,
    /// Spatial granularity of reports.
    #[serde(default = "Topology::unset")]
    pub topology: Topology,
    /// Whether capacity reports include this resource.
    #[serde(default)]
    pub has_capacity: bool,
    /// Whether capacity requests must carry demand for this resource.
    #[serde(default)]
    pub needs_resource_demand: bool,
    /// Whether usage reports include this resource and carry quota for it.
    #[serde(default)]
    pub has_quota: bool,
    /// Whether the adapter takes part in commitment changes for this resource.
    #[serde(default)]
    pub handles_commitments: bool,
    /// Opaque adapter-specific attributes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Value>,
}

impl ResourceInfo {
    /// Creates a resource declaration with the given topology and flags.
    #[must_use]
    pub fn new(topology: Topology, has_capacity: bool, has_quota: bool) -> Self {
        Self {
            display_name: String::new(),
            category: None,
            unit: Unit::None,
            topology,
            has_capacity,
            needs_resource_demand: false,
            has_quota,
            handles_commitments: false,
            attributes: None,
        }
    }
}

/// Declaration of one rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateInfo {
    /// Human-readable name.
    #[serde(default)]
    pub display_name: String,
    /// Optional display category.
    #[serde(default)]
    pub category: Option<CategoryName>,
    /// Unit of usage values.
    #[serde(default)]
    pub unit: Unit,
    /// Spatial granularity of reports.
    #[serde(default = "Topology::unset")]
    pub topology: Topology,
    /// Whether usage reports include this rate; must be true.
    #[serde(default)]
    pub has_usage: bool,
}

impl RateInfo {
    /// Creates a usage-bearing rate declaration with the given topology.
    #[must_use]
    pub fn new(topology: Topology) -> Self {
        Self {
            display_name: String::new(),
            category: None,
            unit: Unit::None,
            topology,
            has_usage: true,
        }
    }
}
