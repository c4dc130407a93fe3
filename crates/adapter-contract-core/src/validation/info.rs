// crates/adapter-contract-core/src/validation/info.rs
// ============================================================================
// Module: Adapter Contract Manifest Validation
// Description: Structural checks for service manifests.
// Purpose: Reject manifests that reports could never be validated against.
// Dependencies: tracing
// ============================================================================

//! ## Overview
//! Manifest validation runs one independent pass per concern (names,
//! topologies, rate flags, category references, category declarations)
//! and collects every violation into a single [`ErrorSet`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use tracing::debug;

use crate::core::identifiers::CategoryName;
use crate::core::identifiers::IDENTIFIER_PATTERN;
use crate::core::info::CategoryInfo;
use crate::core::info::ServiceInfo;
use crate::validation::errorset::ErrorSet;
use crate::validation::errorset::ValidationError;
use crate::validation::render::quoted;

// ============================================================================
// SECTION: Entry Points
// ============================================================================

/// Validates a manifest and returns every violation found.
#[must_use]
pub fn validate_service_info(info: &ServiceInfo) -> ErrorSet {
    let mut errors = ErrorSet::new();
    check_names(&mut errors, info);
    check_topologies(&mut errors, info);
    check_rate_usage_flags(&mut errors, info);
    check_category_references(&mut errors, info);
    check_category_declarations(&mut errors, info);
    debug!(
        resources = info.resources.len(),
        rates = info.rates.len(),
        violations = errors.len(),
        "validated ServiceInfo"
    );
    errors
}

impl ServiceInfo {
    /// Validates the manifest.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] listing every violation found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_service_info(self).into_result()
    }
}

// ============================================================================
// SECTION: Passes
// ============================================================================

/// Message prefix for a resource entry.
fn resource_path(name: &str) -> String {
    format!(".Resources[{}]", quoted(name))
}

/// Message prefix for a rate entry.
fn rate_path(name: &str) -> String {
    format!(".Rates[{}]", quoted(name))
}

/// Flags resource and rate names outside the identifier pattern.
fn check_names(errors: &mut ErrorSet, info: &ServiceInfo) {
    for name in info.resources.keys() {
        if !name.is_valid() {
            errors.add(format!(
                "{} has invalid name (must match /{IDENTIFIER_PATTERN}/)",
                resource_path(name.as_str())
            ));
        }
    }
    for name in info.rates.keys() {
        if !name.is_valid() {
            errors.add(format!(
                "{} has invalid name (must match /{IDENTIFIER_PATTERN}/)",
                rate_path(name.as_str())
            ));
        }
    }
}

/// Flags topologies outside the three recognized values.
fn check_topologies(errors: &mut ErrorSet, info: &ServiceInfo) {
    for (name, resource) in &info.resources {
        if !resource.topology.is_valid() {
            errors.add(format!(
                "{} has invalid topology {}",
                resource_path(name.as_str()),
                quoted(resource.topology.as_str())
            ));
        }
    }
    for (name, rate) in &info.rates {
        if !rate.topology.is_valid() {
            errors.add(format!(
                "{} has invalid topology {}",
                rate_path(name.as_str()),
                quoted(rate.topology.as_str())
            ));
        }
    }
}

/// Flags rates declared without usage.
fn check_rate_usage_flags(errors: &mut ErrorSet, info: &ServiceInfo) {
    for (name, rate) in &info.rates {
        if !rate.has_usage {
            errors.add(format!(
                "{} declared with HasUsage = false, but must be true",
                rate_path(name.as_str())
            ));
        }
    }
}

/// Flags category references that are empty or do not resolve.
fn check_category_references(errors: &mut ErrorSet, info: &ServiceInfo) {
    let references = info
        .resources
        .iter()
        .map(|(name, resource)| (resource_path(name.as_str()), resource.category.as_ref()))
        .chain(
            info.rates.iter().map(|(name, rate)| (rate_path(name.as_str()), rate.category.as_ref())),
        );
    for (path, category) in references {
        let Some(category) = category else {
            continue;
        };
        if category.as_str().is_empty() {
            errors.add(format!("{path}.Category is invalid: category name may not be empty"));
        } else if !info.categories.contains_key(category) {
            errors.add(format!(
                "{path}.Category refers to undeclared category {}",
                quoted(category.as_str())
            ));
        }
    }
}

/// Flags declared categories that are malformed, reserved, or unused.
fn check_category_declarations(errors: &mut ErrorSet, info: &ServiceInfo) {
    let used = referenced_categories(info);
    for (name, category) in &info.categories {
        check_category_declaration(errors, name, category, used.contains(name));
    }
}

/// Checks a single category declaration.
fn check_category_declaration(
    errors: &mut ErrorSet,
    name: &CategoryName,
    category: &CategoryInfo,
    is_used: bool,
) {
    let path = format!(".Categories[{}]", quoted(name.as_str()));
    if name.as_str().is_empty() {
        errors.add(format!("{path} is invalid: category name may not be empty"));
    }
    if name.is_reserved() {
        errors.add(format!("{path} is invalid: category name {} is reserved", quoted(name.as_str())));
    }
    if category.display_name.is_empty() {
        errors.add(format!("{path}.DisplayName may not be empty"));
    }
    if !is_used {
        errors.add(format!("{path} is declared, but not used by any resource or rate"));
    }
}

/// Collects all category names referenced by resources and rates.
fn referenced_categories(info: &ServiceInfo) -> BTreeSet<&CategoryName> {
    let resources = info.resources.values().filter_map(|resource| resource.category.as_ref());
    let rates = info.rates.values().filter_map(|rate| rate.category.as_ref());
    resources.chain(rates).collect()
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::validate_service_info;
    use crate::core::identifiers::CategoryName;
    use crate::core::identifiers::ResourceName;
    use crate::core::info::CategoryInfo;
    use crate::core::info::ResourceInfo;
    use crate::core::info::ServiceInfo;
    use crate::core::topology::Topology;

    fn categories(entries: &[(&str, &str)]) -> BTreeMap<CategoryName, CategoryInfo> {
        entries
            .iter()
            .map(|(name, display_name)| {
                (
                    CategoryName::from(*name),
                    CategoryInfo {
                        display_name: (*display_name).to_string(),
                    },
                )
            })
            .collect()
    }

    #[test]
    fn unused_and_reserved_categories_are_both_reported() {
        let info = ServiceInfo {
            categories: categories(&[("default", "Default")]),
            ..ServiceInfo::default()
        };
        let errors = validate_service_info(&info);
        assert!(errors.contains(r#".Categories["default"] is invalid: category name "default" is reserved"#));
        assert!(errors.contains(r#".Categories["default"] is declared, but not used by any resource or rate"#));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn referenced_category_counts_as_used() {
        let mut resource = ResourceInfo::new(Topology::Flat, false, true);
        resource.category = Some(CategoryName::from("compute"));
        let mut info = ServiceInfo {
            categories: categories(&[("compute", "Compute")]),
            ..ServiceInfo::default()
        };
        info.resources.insert(ResourceName::from("cores"), resource);
        assert!(validate_service_info(&info).is_empty());
    }
}
