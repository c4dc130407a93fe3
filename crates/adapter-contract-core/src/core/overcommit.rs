// crates/adapter-contract-core/src/core/overcommit.rs
// ============================================================================
// Module: Adapter Contract Overcommit Factor
// Description: Ratio between raw and effective capacity.
// Purpose: Translate capacity values in both directions with integer results.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The orchestrator may overcommit capacity by a configured factor. Raw
//! capacity reported by an adapter is multiplied by the factor and floored;
//! the reverse direction finds the raw value that produced an effective one.
//! A factor of `0` means "not configured" and behaves like `1`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Overcommit Factor
// ============================================================================

/// Multiplier applied to raw capacity to obtain effective capacity.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OvercommitFactor(pub f64);

impl OvercommitFactor {
    /// Returns true when the factor changes nothing. Unset, negative and
    /// non-finite factors are treated like `1`.
    #[must_use]
    fn is_identity(self) -> bool {
        !(self.0.is_finite() && self.0 > 0.0) || (self.0 - 1.0).abs() < f64::EPSILON
    }

    /// Converts raw capacity into effective capacity.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss,
        reason = "Capacity values are floored to whole units; saturating float casts are intended."
    )]
    pub fn apply_to(self, raw: u64) -> u64 {
        if self.is_identity() {
            return raw;
        }
        (raw as f64 * self.0) as u64
    }

    /// Converts effective capacity back into the largest raw capacity whose
    /// effective value does not exceed `effective`.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss,
        reason = "The float estimate is corrected by exact integer stepping below."
    )]
    pub fn apply_in_reverse_to(self, effective: u64) -> u64 {
        if self.is_identity() {
            return effective;
        }
        let mut raw = ((effective as f64 + 1.0) / self.0) as u64;
        while raw > 0 && self.apply_to(raw) > effective {
            raw -= 1;
        }
        while raw < u64::MAX && self.apply_to(raw + 1) <= effective {
            raw += 1;
        }
        raw
    }
}

impl fmt::Display for OvercommitFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
