// crates/adapter-contract-core/tests/units_and_overcommit.rs
// ============================================================================
// Module: Unit and Overcommit Tests
// Description: Unit conversion and overcommit factor arithmetic.
// Purpose: Ensure capacity values convert exactly or fail loudly.
// Dependencies: adapter-contract-core, serde_json
// ============================================================================

//! Unit conversion and overcommit factor tests.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use adapter_contract_core::OvercommitFactor;
use adapter_contract_core::Unit;
use adapter_contract_core::UnitError;
use adapter_contract_core::ValueWithUnit;

#[test]
fn conversions_within_byte_units_are_exact() {
    let value = ValueWithUnit::new(3, Unit::Gibibytes);
    assert_eq!(value.convert_to(Unit::Mebibytes).unwrap(), ValueWithUnit::new(3072, Unit::Mebibytes));
    assert_eq!(
        ValueWithUnit::new(2048, Unit::Kibibytes).convert_to(Unit::Mebibytes).unwrap(),
        ValueWithUnit::new(2, Unit::Mebibytes)
    );
    assert_eq!(value.convert_to(Unit::Gibibytes).unwrap(), value);
}

#[test]
fn fractional_results_are_rejected() {
    let err = ValueWithUnit::new(1536, Unit::Mebibytes).convert_to(Unit::Gibibytes).unwrap_err();
    assert_eq!(err.to_string(), "value of 1536 MiB cannot be represented as integer number of GiB");
}

#[test]
fn overflowing_results_are_rejected() {
    let err = ValueWithUnit::new(u64::MAX, Unit::Exbibytes).convert_to(Unit::Bytes).unwrap_err();
    assert!(matches!(err, UnitError::NotRepresentable { .. }));
}

#[test]
fn counts_and_bytes_are_incompatible() {
    let err = ValueWithUnit::new(5, Unit::None).convert_to(Unit::Bytes).unwrap_err();
    assert_eq!(err.to_string(), "cannot convert value from <count> to B because units are incompatible");
    assert_eq!(ValueWithUnit::new(5, Unit::None).to_string(), "5");
    assert_eq!(ValueWithUnit::new(5, Unit::Kibibytes).to_string(), "5 KiB");
}

#[test]
fn units_use_their_wire_names() {
    let units: Vec<Unit> = serde_json::from_str(r#"["", "B", "MiB", "EiB"]"#).unwrap();
    assert_eq!(units, vec![Unit::None, Unit::Bytes, Unit::Mebibytes, Unit::Exbibytes]);
    assert!(serde_json::from_str::<Unit>(r#""MB""#).is_err());
}

#[test]
fn overcommit_factor_examples() {
    for (factor, raw, effective) in [(0.0, 42, 42), (1.0, 42, 42), (1.2, 42, 50)] {
        let factor = OvercommitFactor(factor);
        assert_eq!(factor.apply_to(raw), effective, "{factor}.apply_to({raw})");
        assert_eq!(factor.apply_in_reverse_to(effective), raw, "{factor}.apply_in_reverse_to({effective})");
    }
}

#[test]
fn reverse_application_recovers_raw_capacity() {
    for factor in [0.0, 1.0, 1.1, 1.2, 1.5, 2.0, 2.5, 3.0, 4.0] {
        let factor = OvercommitFactor(factor);
        for raw in 0 .. 100 {
            let effective = factor.apply_to(raw);
            assert_eq!(factor.apply_in_reverse_to(effective), raw, "factor {factor}, raw {raw}");
        }
    }
}

#[test]
fn degenerate_factors_behave_like_identity() {
    for factor in [f64::NAN, f64::INFINITY, -2.0] {
        let factor = OvercommitFactor(factor);
        assert_eq!(factor.apply_to(17), 17);
        assert_eq!(factor.apply_in_reverse_to(17), 17);
    }
}
