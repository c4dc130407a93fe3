// crates/adapter-contract-core/src/validation/usage.rs
// ============================================================================
// Module: Adapter Contract Usage Report Validation
// Description: Conformance checks for usage reports, including quota placement.
// Purpose: Catch malformed adapter usage output before it is stored.
// Dependencies: tracing
// ============================================================================

//! ## Overview
//! Usage validation mirrors capacity validation for resources (gated on
//! `has_quota`) and extends it to rates. On top of the shape checks it
//! enforces where quota values may appear:
//!
//! - `has_quota = false`: no quota anywhere.
//! - `flat` / `az-aware`: exactly one resource-level quota; `az-aware`
//!   additionally forbids zone-level quota.
//! - `az-separated`: one quota per expected zone, none at resource level.
//!
//! Every pass runs independently so one violation never hides another.

// ============================================================================
// SECTION: Imports
// ============================================================================

use tracing::debug;

use crate::core::identifiers::AvailabilityZone;
use crate::core::identifiers::RateName;
use crate::core::identifiers::ResourceName;
use crate::core::info::ResourceInfo;
use crate::core::info::ServiceInfo;
use crate::core::topology::Topology;
use crate::core::usage::RateUsageReport;
use crate::core::usage::ResourceUsageReport;
use crate::core::usage::ServiceUsageReport;
use crate::core::usage::ServiceUsageRequest;
use crate::validation::errorset::ErrorSet;
use crate::validation::errorset::ValidationError;
use crate::validation::render::quoted;
use crate::validation::shape::check_metrics;
use crate::validation::shape::check_zone_keys;

// ============================================================================
// SECTION: Entry Points
// ============================================================================

/// Validates a usage report against its request and manifest.
#[must_use]
pub fn validate_usage_report(
    report: &ServiceUsageReport,
    request: &ServiceUsageRequest,
    info: &ServiceInfo,
) -> ErrorSet {
    let mut errors = ErrorSet::new();
    if report.info_version != info.version {
        errors.add(format!(
            "received ServiceUsageReport is invalid: expected .InfoVersion = {}, but got {}",
            info.version, report.info_version
        ));
        debug!(
            expected = info.version,
            actual = report.info_version,
            "rejected stale ServiceUsageReport"
        );
        return errors;
    }

    check_resource_presence(&mut errors, report, info);
    check_resource_zones(&mut errors, report, request, info);
    check_quota_placement(&mut errors, report, request, info);
    check_rate_presence(&mut errors, report, info);
    check_rate_zones(&mut errors, report, request, info);
    check_rate_payloads(&mut errors, report, info);
    check_metrics(&mut errors, &report.metrics, &info.usage_metric_families, ".UsageMetricFamilies");
    debug!(
        resources = report.resources.len(),
        rates = report.rates.len(),
        violations = errors.len(),
        "validated ServiceUsageReport"
    );
    errors
}

impl ServiceUsageReport {
    /// Validates the report against its request and manifest.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] listing every violation found.
    pub fn validate(
        &self,
        request: &ServiceUsageRequest,
        info: &ServiceInfo,
    ) -> Result<(), ValidationError> {
        validate_usage_report(self, request, info).into_result()
    }
}

// ============================================================================
// SECTION: Resource Passes
// ============================================================================

/// Message prefix for a resource entry.
fn resource_path(name: &ResourceName) -> String {
    format!(".Resources[{}]", quoted(name.as_str()))
}

/// Message prefix for a rate entry.
fn rate_path(name: &RateName) -> String {
    format!(".Rates[{}]", quoted(name.as_str()))
}

/// Flags missing resources with quota and reported resources without it.
fn check_resource_presence(errors: &mut ErrorSet, report: &ServiceUsageReport, info: &ServiceInfo) {
    for (name, resource) in &info.resources {
        if resource.has_quota && !report.resources.contains_key(name) {
            errors.add(format!(
                "missing value for {} (resource was declared with HasQuota = true)",
                resource_path(name)
            ));
        }
    }
    for name in report.resources.keys() {
        match info.resources.get(name) {
            None => errors.add(format!(
                "unexpected value for {} (resource was not declared)",
                resource_path(name)
            )),
            Some(resource) if !resource.has_quota => errors.add(format!(
                "unexpected value for {} (resource was declared with HasQuota = false)",
                resource_path(name)
            )),
            Some(_) => {}
        }
    }
}

/// Checks zone keys of every declared resource with quota.
fn check_resource_zones(
    errors: &mut ErrorSet,
    report: &ServiceUsageReport,
    request: &ServiceUsageRequest,
    info: &ServiceInfo,
) {
    for (name, resource_report) in &report.resources {
        let Some(resource) = info.resources.get(name).filter(|resource| resource.has_quota) else {
            continue;
        };
        check_zone_keys(
            errors,
            &resource_path(name),
            &resource_report.per_az,
            &resource.topology,
            &request.all_azs,
        );
    }
}

/// Checks where quota values appear on every reported, declared resource.
fn check_quota_placement(
    errors: &mut ErrorSet,
    report: &ServiceUsageReport,
    request: &ServiceUsageRequest,
    info: &ServiceInfo,
) {
    for (name, resource_report) in &report.resources {
        let Some(resource) = info.resources.get(name) else {
            continue;
        };
        let path = resource_path(name);
        if resource.has_quota {
            check_declared_quota(errors, &path, resource, resource_report, &request.all_azs);
        } else {
            check_absent_quota(errors, &path, resource_report);
        }
    }
}

/// A resource without quota must not carry any quota value.
fn check_absent_quota(errors: &mut ErrorSet, path: &str, report: &ResourceUsageReport) {
    if report.quota.is_some() {
        errors.add(format!(
            "{path} has quota reported on resource level, which is invalid for HasQuota = false"
        ));
    }
    if report.per_az.values().any(|az_report| az_report.quota.is_some()) {
        errors.add(format!(
            "{path} has quota reported on AZ level, which is invalid for HasQuota = false"
        ));
    }
}

/// A resource with quota must place it according to its topology.
fn check_declared_quota(
    errors: &mut ErrorSet,
    path: &str,
    resource: &ResourceInfo,
    report: &ResourceUsageReport,
    all_zones: &[AvailabilityZone],
) {
    match &resource.topology {
        Topology::Flat | Topology::AzAware => {
            if report.quota.is_none() {
                errors.add(format!(
                    "{path} has no quota reported on resource level, which is invalid for HasQuota = true and topology {}",
                    quoted(resource.topology.as_str())
                ));
            }
            if resource.topology == Topology::AzAware
                && report.per_az.values().any(|az_report| az_report.quota.is_some())
            {
                errors.add(format!(
                    "{path} has quota reported on AZ level, which is invalid for topology \"az-aware\""
                ));
            }
        }
        Topology::AzSeparated => check_separated_quota(errors, path, report, all_zones),
        Topology::Unrecognized(_) => {}
    }
}

/// Placement rules for `az-separated` resources.
fn check_separated_quota(
    errors: &mut ErrorSet,
    path: &str,
    report: &ResourceUsageReport,
    all_zones: &[AvailabilityZone],
) {
    if report.quota.is_some() {
        errors.add(format!(
            "{path} has quota reported on resource level, which is invalid for topology \"az-separated\""
        ));
    } else {
        let missing: Vec<&str> = all_zones
            .iter()
            .filter(|zone| report.per_az.get(*zone).is_none_or(|az_report| az_report.quota.is_none()))
            .map(AvailabilityZone::as_str)
            .collect();
        if !missing.is_empty() {
            errors.add(format!(
                "{path} with topology \"az-separated\" is missing quota reports on the following AZs: {}",
                missing.join(", ")
            ));
        }
    }
    for (zone, az_report) in &report.per_az {
        if az_report.quota.is_some() && !all_zones.contains(zone) {
            errors.add(format!(
                "{path} reports quota in AZ {}, which is invalid for topology \"az-separated\"",
                quoted(zone.as_str())
            ));
        }
    }
}

// ============================================================================
// SECTION: Rate Passes
// ============================================================================

/// Flags missing declared rates and reported undeclared rates.
fn check_rate_presence(errors: &mut ErrorSet, report: &ServiceUsageReport, info: &ServiceInfo) {
    for name in info.rates.keys() {
        if !report.rates.contains_key(name) {
            errors.add(format!("missing value for {}", rate_path(name)));
        }
    }
    for name in report.rates.keys() {
        if !info.rates.contains_key(name) {
            errors.add(format!("unexpected value for {} (rate was not declared)", rate_path(name)));
        }
    }
}

/// Checks zone keys of every declared rate.
fn check_rate_zones(
    errors: &mut ErrorSet,
    report: &ServiceUsageReport,
    request: &ServiceUsageRequest,
    info: &ServiceInfo,
) {
    for (name, rate_report) in &report.rates {
        let Some(rate) = info.rates.get(name) else {
            continue;
        };
        check_zone_keys(errors, &rate_path(name), &rate_report.per_az, &rate.topology, &request.all_azs);
    }
}

/// Flags reported zones of declared rates whose usage is absent or null.
fn check_rate_payloads(errors: &mut ErrorSet, report: &ServiceUsageReport, info: &ServiceInfo) {
    for (name, rate_report) in &report.rates {
        if info.rates.contains_key(name) {
            check_rate_payload(errors, name, rate_report);
        }
    }
}

/// Checks the usage slot of every zone of one rate.
fn check_rate_payload(errors: &mut ErrorSet, name: &RateName, report: &RateUsageReport) {
    for (zone, az_report) in &report.per_az {
        let path = format!("{}.PerAZ[{}].Usage", rate_path(name), quoted(zone.as_str()));
        match &az_report.usage {
            None => errors.add(format!(
                "missing value for {path} (rate was declared with HasUsage = true)"
            )),
            Some(None) => errors.add(format!("unexpected nil value in payload of {path}")),
            Some(Some(_)) => {}
        }
    }
}
