// crates/adapter-contract-core/src/validation/render.rs
// ============================================================================
// Module: Adapter Contract Message Rendering
// Description: Quoting and list formatting shared by validation messages.
// Purpose: Keep message wording byte-stable across validators.
// Dependencies: none
// ============================================================================

//! ## Overview
//! Names are rendered double-quoted with backslash escapes; zone lists
//! render as `["az-one", "az-two"]` in the order given.

use std::fmt;

use crate::core::identifiers::AvailabilityZone;

/// Returns `value` wrapped in double quotes with special characters escaped.
pub(crate) fn quoted(value: &str) -> String {
    format!("\"{}\"", value.escape_debug())
}

/// Display adapter rendering a zone list as a bracketed, quoted sequence.
pub(crate) struct ZoneList<'a>(pub(crate) &'a [AvailabilityZone]);

impl fmt::Display for ZoneList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, zone) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            f.write_str(&quoted(zone.as_str()))?;
        }
        f.write_str("]")
    }
}
