// crates/adapter-contract-core/src/core/wire.rs
// ============================================================================
// Module: Adapter Contract Wire Helpers
// Description: Serde adapters for payload fields without a native JSON form.
// Purpose: Keep "absent" and "null" distinct for arbitrary-precision counters.
// Dependencies: bigdecimal, serde
// ============================================================================

//! ## Overview
//! Rate counters are unbounded integers. They serialize as JSON numbers when
//! they fit into 64 bits and as decimal strings otherwise; both forms are
//! accepted on input.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::str::FromStr;

use bigdecimal::num_bigint::BigInt;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serializer;
use serde::de;
use serde::de::Visitor;

// ============================================================================
// SECTION: Big Integers
// ============================================================================

/// Deserialization wrapper accepting integers and decimal strings.
struct WireBigInt(BigInt);

/// Visitor producing [`WireBigInt`] values.
struct WireBigIntVisitor;

impl Visitor<'_> for WireBigIntVisitor {
    type Value = WireBigInt;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("an integer or a decimal integer string")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(WireBigInt(BigInt::from(value)))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(WireBigInt(BigInt::from(value)))
    }

    fn visit_i128<E: de::Error>(self, value: i128) -> Result<Self::Value, E> {
        Ok(WireBigInt(BigInt::from(value)))
    }

    fn visit_u128<E: de::Error>(self, value: u128) -> Result<Self::Value, E> {
        Ok(WireBigInt(BigInt::from(value)))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        BigInt::from_str(value.trim())
            .map(WireBigInt)
            .map_err(|_| E::invalid_value(de::Unexpected::Str(value), &self))
    }
}

impl<'de> Deserialize<'de> for WireBigInt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(WireBigIntVisitor)
    }
}

/// Serializes a big integer as a JSON number when it fits, else as a string.
fn serialize_big_int<S: Serializer>(value: &BigInt, serializer: S) -> Result<S::Ok, S::Error> {
    if let Ok(small) = i64::try_from(value) {
        return serializer.serialize_i64(small);
    }
    if let Ok(small) = u64::try_from(value) {
        return serializer.serialize_u64(small);
    }
    serializer.collect_str(value)
}

/// Serde adapter for `Option<Option<BigInt>>` fields that must distinguish
/// an absent field (`None`) from an explicit `null` (`Some(None)`).
///
/// Use together with `#[serde(default, skip_serializing_if = "Option::is_none")]`.
pub mod present_big_int {
    use bigdecimal::num_bigint::BigInt;
    use serde::Deserialize;
    use serde::Deserializer;
    use serde::Serializer;

    use super::WireBigInt;
    use super::serialize_big_int;

    /// Serializes a present value; `Some(None)` becomes `null`.
    ///
    /// # Errors
    ///
    /// Returns the serializer's error when writing fails.
    #[allow(
        clippy::ref_option,
        reason = "Signature is dictated by serde's `with` attribute."
    )]
    pub fn serialize<S: Serializer>(
        value: &Option<Option<BigInt>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(Some(number)) => serialize_big_int(number, serializer),
            Some(None) | None => serializer.serialize_none(),
        }
    }

    /// Deserializes a present field; `null` becomes `Some(None)`.
    ///
    /// # Errors
    ///
    /// Returns the deserializer's error for non-integer payloads.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Option<BigInt>>, D::Error> {
        let value = Option::<WireBigInt>::deserialize(deserializer)?;
        Ok(Some(value.map(|wire| wire.0)))
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
