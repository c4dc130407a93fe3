// crates/adapter-contract-core/src/validation/shape.rs
// ============================================================================
// Module: Adapter Contract Shape Checks
// Description: Zone-key and metric checks shared by report validators.
// Purpose: Apply identical structural rules to capacity and usage reports.
// Dependencies: none
// ============================================================================

//! ## Overview
//! Both report kinds key their per-resource (and per-rate) data by zone and
//! forward metric samples. The checks here compare those shapes against the
//! manifest and append violations to an [`ErrorSet`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use crate::core::identifiers::AvailabilityZone;
use crate::core::identifiers::MetricName;
use crate::core::metrics::Metric;
use crate::core::metrics::MetricFamilyInfo;
use crate::core::topology::Topology;
use crate::validation::errorset::ErrorSet;
use crate::validation::render::ZoneList;
use crate::validation::render::quoted;

// ============================================================================
// SECTION: Zone Keys
// ============================================================================

/// Checks that the keys of a per-zone map match the topology's expected zones.
///
/// `path` is the message prefix for the owning entry, e.g. `.Resources["foo"]`.
pub(crate) fn check_zone_keys<V>(
    errors: &mut ErrorSet,
    path: &str,
    per_az: &BTreeMap<AvailabilityZone, V>,
    topology: &Topology,
    all_zones: &[AvailabilityZone],
) {
    let expected = topology.expected_zones(all_zones);
    let expected_set: BTreeSet<&AvailabilityZone> = expected.iter().collect();
    let actual_set: BTreeSet<&AvailabilityZone> = per_az.keys().collect();
    if actual_set == expected_set {
        return;
    }
    let actual: Vec<AvailabilityZone> = per_az.keys().cloned().collect();
    errors.add(format!(
        "{path}.PerAZ has entries for {}, which is invalid for topology {} (expected entries for {})",
        ZoneList(&actual),
        quoted(topology.as_str()),
        ZoneList(&expected),
    ));
}

// ============================================================================
// SECTION: Metrics
// ============================================================================

/// Checks reported metric samples against the declared metric families.
///
/// `families_field` names the manifest field in messages, e.g.
/// `.CapacityMetricFamilies`.
pub(crate) fn check_metrics(
    errors: &mut ErrorSet,
    reported: &BTreeMap<MetricName, Vec<Metric>>,
    declared: &BTreeMap<MetricName, MetricFamilyInfo>,
    families_field: &str,
) {
    for name in declared.keys() {
        if !reported.contains_key(name) {
            errors.add(format!(
                "missing value for .Metrics[{}] (declared in {families_field})",
                quoted(name.as_str())
            ));
        }
    }
    for (name, metrics) in reported {
        let Some(family) = declared.get(name) else {
            errors.add(format!(
                "unexpected value for .Metrics[{}] (not declared in {families_field})",
                quoted(name.as_str())
            ));
            continue;
        };
        let expected = family.label_keys.len();
        for (index, metric) in metrics.iter().enumerate() {
            let actual = metric.label_values.len();
            if actual != expected {
                errors.add(format!(
                    "malformed value for .Metrics[{}][{index}].LabelValues (expected {expected}, but got {actual} entries)",
                    quoted(name.as_str())
                ));
            }
        }
    }
}
