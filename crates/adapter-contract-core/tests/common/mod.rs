// crates/adapter-contract-core/tests/common/mod.rs
// ============================================================================
// Module: Common Test Utilities
// Description: Shared fixtures for adapter-contract-core tests.
// Purpose: Provide the reference manifest and error-set assertions.
// Dependencies: adapter-contract-core
// ============================================================================

//! ## Overview
//! The reference manifest declares one resource per topology/flag
//! combination exercised by the report validators, four rates and two
//! metric families per report kind. Reports are checked against the zone
//! list `["az-one", "az-two"]`.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]
#![allow(dead_code, reason = "Shared test helpers may be unused in some cases.")]

use std::collections::BTreeMap;

use adapter_contract_core::AvailabilityZone;
use adapter_contract_core::ErrorSet;
use adapter_contract_core::Metric;
use adapter_contract_core::MetricFamilyInfo;
use adapter_contract_core::MetricName;
use adapter_contract_core::MetricType;
use adapter_contract_core::RateInfo;
use adapter_contract_core::RateName;
use adapter_contract_core::ResourceInfo;
use adapter_contract_core::ResourceName;
use adapter_contract_core::ServiceInfo;
use adapter_contract_core::Topology;

/// Manifest version used by the reference manifest.
pub const INFO_VERSION: i64 = 73;

/// Zones supplied by the orchestrator in every reference request.
pub fn all_zones() -> Vec<AvailabilityZone> {
    vec![AvailabilityZone::from("az-one"), AvailabilityZone::from("az-two")]
}

/// Builds a per-zone map from `(zone, value)` pairs.
pub fn per_az<V>(entries: impl IntoIterator<Item = (&'static str, V)>) -> BTreeMap<AvailabilityZone, V> {
    entries.into_iter().map(|(zone, value)| (AvailabilityZone::from(zone), value)).collect()
}

/// Metric samples with two label values each.
pub fn labelled_metric(value: f64) -> Vec<Metric> {
    vec![Metric {
        value,
        label_values: vec!["val1".to_string(), "val2".to_string()],
    }]
}

/// Metric sample without label values.
pub fn unlabelled_metric(value: f64) -> Vec<Metric> {
    vec![Metric {
        value,
        label_values: Vec::new(),
    }]
}

fn gauge_family() -> MetricFamilyInfo {
    MetricFamilyInfo {
        metric_type: MetricType::Gauge,
        help: String::new(),
        label_keys: vec!["lk1".to_string(), "lk2".to_string()],
    }
}

/// Reference manifest shared by the report validation tests.
pub fn reference_info() -> ServiceInfo {
    let resources = [
        ("foo", ResourceInfo::new(Topology::AzAware, true, true)),
        ("bar", ResourceInfo::new(Topology::Flat, true, true)),
        ("baz", ResourceInfo::new(Topology::Flat, false, false)),
        ("qux", ResourceInfo::new(Topology::AzSeparated, true, true)),
        ("quux", ResourceInfo::new(Topology::AzSeparated, true, true)),
    ];
    let rates = [
        ("corge", RateInfo::new(Topology::AzAware)),
        ("grault", RateInfo::new(Topology::Flat)),
        ("garply", RateInfo::new(Topology::AzAware)),
        ("waldo", RateInfo::new(Topology::AzAware)),
    ];
    ServiceInfo {
        version: INFO_VERSION,
        resources: resources.into_iter().map(|(name, info)| (ResourceName::from(name), info)).collect(),
        rates: rates.into_iter().map(|(name, info)| (RateName::from(name), info)).collect(),
        capacity_metric_families: [
            (MetricName::from("capacityMetric1"), gauge_family()),
            (MetricName::from("capacityMetric2"), gauge_family()),
        ]
        .into_iter()
        .collect(),
        usage_metric_families: [
            (MetricName::from("usageMetric1"), gauge_family()),
            (MetricName::from("usageMetric2"), gauge_family()),
        ]
        .into_iter()
        .collect(),
        ..ServiceInfo::default()
    }
}

/// Asserts that `errors` holds exactly the `expected` messages, in any order.
pub fn assert_error_set(errors: &ErrorSet, expected: &[&str]) {
    for message in expected {
        assert!(errors.contains(message), "expected error to be present: {message}\nactual errors: {errors}");
    }
    for message in errors {
        assert!(expected.contains(&message.as_str()), "unexpected error: {message}");
    }
}
