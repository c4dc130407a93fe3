// crates/adapter-contract-core/src/core/topology.rs
// ============================================================================
// Module: Adapter Contract Topology Model
// Description: Spatial granularity of resource and rate reports.
// Purpose: Derive the zone keys a report must carry for a declared topology.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Every resource and rate declares a [`Topology`]. The topology decides which
//! availability zones its per-zone report map must contain:
//!
//! - `flat`: exactly the `any` pseudo-zone.
//! - `az-aware` / `az-separated`: exactly the orchestrator's zone list.
//!
//! Values outside the three known tags are preserved as
//! [`Topology::Unrecognized`] so manifest validation can report them instead
//! of failing at deserialization time.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::AvailabilityZone;

// ============================================================================
// SECTION: Topology
// ============================================================================

/// Wire tag for [`Topology::Flat`].
const FLAT: &str = "flat";
/// Wire tag for [`Topology::AzAware`].
const AZ_AWARE: &str = "az-aware";
/// Wire tag for [`Topology::AzSeparated`].
const AZ_SEPARATED: &str = "az-separated";

/// Spatial granularity of a resource or rate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Topology {
    /// Single implicit zone named `any`.
    Flat,
    /// Usage per zone, quota once on resource level.
    AzAware,
    /// Usage and quota per zone, no resource-level quota.
    AzSeparated,
    /// Any other tag, including the empty string of an omitted field.
    Unrecognized(String),
}

impl Topology {
    /// Returns the wire tag for this topology.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Flat => FLAT,
            Self::AzAware => AZ_AWARE,
            Self::AzSeparated => AZ_SEPARATED,
            Self::Unrecognized(value) => value,
        }
    }

    /// Returns true for the three recognized topologies.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }

    /// Returns the value used when a manifest omits the topology field.
    #[must_use]
    pub const fn unset() -> Self {
        Self::Unrecognized(String::new())
    }

    /// Returns the zone keys a per-zone report map must carry.
    ///
    /// Flat topologies always expect the `any` pseudo-zone; zone-aware
    /// topologies expect `all_zones` in the given order. An unrecognized
    /// topology expects nothing, so every report for it is rejected.
    #[must_use]
    pub fn expected_zones(&self, all_zones: &[AvailabilityZone]) -> Vec<AvailabilityZone> {
        match self {
            Self::Flat => vec![AvailabilityZone::any()],
            Self::AzAware | Self::AzSeparated => all_zones.to_vec(),
            Self::Unrecognized(_) => Vec::new(),
        }
    }
}

impl From<String> for Topology {
    fn from(value: String) -> Self {
        match value.as_str() {
            FLAT => Self::Flat,
            AZ_AWARE => Self::AzAware,
            AZ_SEPARATED => Self::AzSeparated,
            _ => Self::Unrecognized(value),
        }
    }
}

impl From<&str> for Topology {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<Topology> for String {
    fn from(value: Topology) -> Self {
        match value {
            Topology::Unrecognized(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
