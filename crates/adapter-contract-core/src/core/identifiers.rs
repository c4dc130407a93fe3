// crates/adapter-contract-core/src/core/identifiers.rs
// ============================================================================
// Module: Adapter Contract Identifiers
// Description: Canonical string identifiers used by manifests and reports.
// Purpose: Provide strongly typed, serializable names with stable string forms.
// Dependencies: regex, serde
// ============================================================================

//! ## Overview
//! Identifiers are opaque strings on the wire. Resource and rate names carry
//! a syntactic rule (see [`IDENTIFIER_PATTERN`]) which is enforced by
//! manifest validation, not by these wrappers, so malformed names survive
//! deserialization and can be reported alongside every other violation.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Identifier Pattern
// ============================================================================

/// Pattern every resource and rate name must match.
pub const IDENTIFIER_PATTERN: &str = "^[a-zA-Z][a-zA-Z0-9._-]*$";

/// Compiled form of [`IDENTIFIER_PATTERN`]; `None` only if compilation failed.
static IDENTIFIER_REGEX: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(IDENTIFIER_PATTERN).ok());

/// Returns true when `name` matches [`IDENTIFIER_PATTERN`].
fn is_valid_identifier(name: &str) -> bool {
    IDENTIFIER_REGEX.as_ref().is_some_and(|regex| regex.is_match(name))
}

// ============================================================================
// SECTION: Identifier Types
// ============================================================================

/// Declares a transparent string identifier with the shared helper surface.
macro_rules! string_identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self::new(value)
            }
        }
    };
}

string_identifier!(
    /// Availability zone name as used by the orchestrator.
    AvailabilityZone
);

string_identifier!(
    /// Resource name within a single service manifest.
    ResourceName
);

string_identifier!(
    /// Rate name within a single service manifest.
    RateName
);

string_identifier!(
    /// Metric family name reported alongside capacity or usage data.
    MetricName
);

string_identifier!(
    /// Category identifier grouping resources and rates for display.
    CategoryName
);

string_identifier!(
    /// Project UUID owning a commitment changeset.
    ProjectUuid
);

string_identifier!(
    /// Commitment UUID, stable across status transitions.
    CommitmentUuid
);

// ============================================================================
// SECTION: Pseudo Zones
// ============================================================================

/// Zone name used for the single implicit zone of flat topologies.
pub const ANY_ZONE: &str = "any";

/// Zone name used by the orchestrator for data it cannot attribute to a real zone.
pub const UNKNOWN_ZONE: &str = "unknown";

impl AvailabilityZone {
    /// Returns the pseudo-zone carrying flat-topology data.
    #[must_use]
    pub fn any() -> Self {
        Self::new(ANY_ZONE)
    }

    /// Returns the pseudo-zone for unattributable data.
    #[must_use]
    pub fn unknown() -> Self {
        Self::new(UNKNOWN_ZONE)
    }

    /// Returns true for the `any` and `unknown` pseudo-zones.
    #[must_use]
    pub fn is_pseudo(&self) -> bool {
        matches!(self.as_str(), ANY_ZONE | UNKNOWN_ZONE)
    }
}

impl ResourceName {
    /// Returns true when the name matches [`IDENTIFIER_PATTERN`].
    #[must_use]
    pub fn is_valid(&self) -> bool {
        is_valid_identifier(self.as_str())
    }
}

impl RateName {
    /// Returns true when the name matches [`IDENTIFIER_PATTERN`].
    #[must_use]
    pub fn is_valid(&self) -> bool {
        is_valid_identifier(self.as_str())
    }
}

/// Category identifier reserved for uncategorized resources and rates.
pub const DEFAULT_CATEGORY: &str = "default";

impl CategoryName {
    /// Returns true for the reserved `default` category.
    #[must_use]
    pub fn is_reserved(&self) -> bool {
        self.as_str() == DEFAULT_CATEGORY
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
