// crates/adapter-contract-core/src/core/units.rs
// ============================================================================
// Module: Adapter Contract Units
// Description: Measurement units for resource and rate values.
// Purpose: Convert integer values between compatible units without rounding.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Units are either a plain count (serialized as the empty string) or one of
//! the binary byte multiples. Conversions only succeed between units sharing
//! a base unit and when the result is an exact integer.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Units
// ============================================================================

/// Measurement unit of a resource or rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Unit {
    /// Dimensionless count.
    #[default]
    #[serde(rename = "")]
    None,
    /// Bytes.
    #[serde(rename = "B")]
    Bytes,
    /// 2^10 bytes.
    #[serde(rename = "KiB")]
    Kibibytes,
    /// 2^20 bytes.
    #[serde(rename = "MiB")]
    Mebibytes,
    /// 2^30 bytes.
    #[serde(rename = "GiB")]
    Gibibytes,
    /// 2^40 bytes.
    #[serde(rename = "TiB")]
    Tebibytes,
    /// 2^50 bytes.
    #[serde(rename = "PiB")]
    Pebibytes,
    /// 2^60 bytes.
    #[serde(rename = "EiB")]
    Exbibytes,
}

impl Unit {
    /// Returns the base unit and how many base units one of `self` is.
    #[must_use]
    pub const fn base(self) -> (Self, u64) {
        match self {
            Self::None => (Self::None, 1),
            Self::Bytes => (Self::Bytes, 1),
            Self::Kibibytes => (Self::Bytes, 1 << 10),
            Self::Mebibytes => (Self::Bytes, 1 << 20),
            Self::Gibibytes => (Self::Bytes, 1 << 30),
            Self::Tebibytes => (Self::Bytes, 1 << 40),
            Self::Pebibytes => (Self::Bytes, 1 << 50),
            Self::Exbibytes => (Self::Bytes, 1 << 60),
        }
    }

    /// Returns the wire form of the unit (empty for counts).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Bytes => "B",
            Self::Kibibytes => "KiB",
            Self::Mebibytes => "MiB",
            Self::Gibibytes => "GiB",
            Self::Tebibytes => "TiB",
            Self::Pebibytes => "PiB",
            Self::Exbibytes => "EiB",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("<count>"),
            unit => f.write_str(unit.as_str()),
        }
    }
}

// ============================================================================
// SECTION: Values
// ============================================================================

/// Integer value tagged with its unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueWithUnit {
    /// Magnitude in `unit`.
    pub value: u64,
    /// Unit of `value`.
    pub unit: Unit,
}

impl ValueWithUnit {
    /// Creates a new value.
    #[must_use]
    pub const fn new(value: u64, unit: Unit) -> Self {
        Self {
            value,
            unit,
        }
    }

    /// Converts the value into `target` without losing precision.
    ///
    /// # Errors
    ///
    /// Returns [`UnitError`] when the units do not share a base unit, when
    /// the result is not an integer, or when it does not fit into `u64`.
    pub fn convert_to(self, target: Unit) -> Result<Self, UnitError> {
        if self.unit == target {
            return Ok(self);
        }
        let (source_base, source_multiple) = self.unit.base();
        let (target_base, target_multiple) = target.base();
        if source_base != target_base {
            return Err(UnitError::Incompatible {
                from: self.unit,
                to: target,
            });
        }
        let base_value = u128::from(self.value) * u128::from(source_multiple);
        let multiple = u128::from(target_multiple);
        let converted = u64::try_from(base_value / multiple).ok();
        match converted {
            Some(value) if base_value % multiple == 0 => Ok(Self::new(value, target)),
            _ => Err(UnitError::NotRepresentable {
                value: self,
                to: target,
            }),
        }
    }
}

impl fmt::Display for ValueWithUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            Unit::None => write!(f, "{}", self.value),
            unit => write!(f, "{} {unit}", self.value),
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Unit conversion errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    /// Units have different base units.
    #[error("cannot convert value from {from} to {to} because units are incompatible")]
    Incompatible {
        /// Source unit.
        from: Unit,
        /// Requested unit.
        to: Unit,
    },
    /// Result would not be an integer (or overflows).
    #[error("value of {value} cannot be represented as integer number of {to}")]
    NotRepresentable {
        /// Value being converted.
        value: ValueWithUnit,
        /// Requested unit.
        to: Unit,
    },
}
