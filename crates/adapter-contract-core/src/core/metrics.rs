// crates/adapter-contract-core/src/core/metrics.rs
// ============================================================================
// Module: Adapter Contract Metrics
// Description: Metric family declarations and reported metric samples.
// Purpose: Let adapters forward backend metrics through capacity and usage reports.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A manifest declares metric families for capacity scrapes and usage
//! scrapes separately. Each reported [`Metric`] must carry one label value
//! per declared label key of its family.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Metric Types
// ============================================================================

/// Exposition type of a metric family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricType {
    /// Value that can go up and down.
    Gauge,
    /// Monotonically increasing value.
    Counter,
}

/// Declaration of one metric family in a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricFamilyInfo {
    /// Exposition type.
    #[serde(rename = "type")]
    pub metric_type: MetricType,
    /// Help text shown by metric exporters.
    #[serde(default)]
    pub help: String,
    /// Ordered label keys; every sample carries one value per key.
    #[serde(default)]
    pub label_keys: Vec<String>,
}

/// Single metric sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    /// Sample value.
    pub value: f64,
    /// Label values, positionally matching the family's label keys.
    #[serde(default)]
    pub label_values: Vec<String>,
}
