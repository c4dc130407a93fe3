// crates/adapter-contract-core/src/validation/capacity.rs
// ============================================================================
// Module: Adapter Contract Capacity Report Validation
// Description: Conformance checks for capacity reports.
// Purpose: Catch malformed adapter capacity output before it is stored.
// Dependencies: tracing
// ============================================================================

//! ## Overview
//! A capacity report is first checked for the manifest generation it was
//! built against; a stale report yields exactly one violation and no
//! further checks. Otherwise resource presence (gated on `has_capacity`),
//! zone keys per topology and metric families are checked independently.

// ============================================================================
// SECTION: Imports
// ============================================================================

use tracing::debug;

use crate::core::capacity::ServiceCapacityReport;
use crate::core::capacity::ServiceCapacityRequest;
use crate::core::info::ServiceInfo;
use crate::validation::errorset::ErrorSet;
use crate::validation::errorset::ValidationError;
use crate::validation::render::quoted;
use crate::validation::shape::check_metrics;
use crate::validation::shape::check_zone_keys;

// ============================================================================
// SECTION: Entry Points
// ============================================================================

/// Validates a capacity report against its request and manifest.
#[must_use]
pub fn validate_capacity_report(
    report: &ServiceCapacityReport,
    request: &ServiceCapacityRequest,
    info: &ServiceInfo,
) -> ErrorSet {
    let mut errors = ErrorSet::new();
    if report.info_version != info.version {
        errors.add(format!(
            "received ServiceCapacityReport is invalid: expected .InfoVersion = {}, but got {}",
            info.version, report.info_version
        ));
        debug!(
            expected = info.version,
            actual = report.info_version,
            "rejected stale ServiceCapacityReport"
        );
        return errors;
    }

    check_resource_presence(&mut errors, report, info);
    check_resource_zones(&mut errors, report, request, info);
    check_metrics(
        &mut errors,
        &report.metrics,
        &info.capacity_metric_families,
        ".CapacityMetricFamilies",
    );
    debug!(
        resources = report.resources.len(),
        violations = errors.len(),
        "validated ServiceCapacityReport"
    );
    errors
}

impl ServiceCapacityReport {
    /// Validates the report against its request and manifest.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] listing every violation found.
    pub fn validate(
        &self,
        request: &ServiceCapacityRequest,
        info: &ServiceInfo,
    ) -> Result<(), ValidationError> {
        validate_capacity_report(self, request, info).into_result()
    }
}

// ============================================================================
// SECTION: Passes
// ============================================================================

/// Flags missing resources with capacity and reported resources without it.
fn check_resource_presence(
    errors: &mut ErrorSet,
    report: &ServiceCapacityReport,
    info: &ServiceInfo,
) {
    for (name, resource) in &info.resources {
        if resource.has_capacity && !report.resources.contains_key(name) {
            errors.add(format!(
                "missing value for .Resources[{}] (resource was declared with HasCapacity = true)",
                quoted(name.as_str())
            ));
        }
    }
    for name in report.resources.keys() {
        match info.resources.get(name) {
            None => errors.add(format!(
                "unexpected value for .Resources[{}] (resource was not declared)",
                quoted(name.as_str())
            )),
            Some(resource) if !resource.has_capacity => errors.add(format!(
                "unexpected value for .Resources[{}] (resource was declared with HasCapacity = false)",
                quoted(name.as_str())
            )),
            Some(_) => {}
        }
    }
}

/// Checks zone keys of every declared resource with capacity.
fn check_resource_zones(
    errors: &mut ErrorSet,
    report: &ServiceCapacityReport,
    request: &ServiceCapacityRequest,
    info: &ServiceInfo,
) {
    for (name, resource_report) in &report.resources {
        let Some(resource) = info.resources.get(name).filter(|resource| resource.has_capacity)
        else {
            continue;
        };
        check_zone_keys(
            errors,
            &format!(".Resources[{}]", quoted(name.as_str())),
            &resource_report.per_az,
            &resource.topology,
            &request.all_azs,
        );
    }
}
