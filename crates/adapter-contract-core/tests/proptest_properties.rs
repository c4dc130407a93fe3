// crates/adapter-contract-core/tests/proptest_properties.rs
// ============================================================================
// Module: Property-Based Tests
// Description: Invariants of zone expectations, error sets and policy rules.
// Purpose: Detect panics and invariant breaks across wide input ranges.
// ============================================================================

//! Property-based tests for core invariants.

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
    reason = "Test-only assertions and helpers are permitted."
)]

use adapter_contract_core::AvailabilityZone;
use adapter_contract_core::Commitment;
use adapter_contract_core::CommitmentStatus;
use adapter_contract_core::CommitmentUuid;
use adapter_contract_core::ErrorSet;
use adapter_contract_core::OvercommitFactor;
use adapter_contract_core::ResourceCommitmentChangeset;
use adapter_contract_core::Topology;
use proptest::prelude::*;
use time::macros::datetime;

fn zones_strategy() -> impl Strategy<Value = Vec<AvailabilityZone>> {
    prop::collection::vec("az-[a-z]{1,6}", 0 .. 6)
        .prop_map(|zones| zones.into_iter().map(AvailabilityZone::from).collect())
}

fn status_strategy() -> impl Strategy<Value = Option<CommitmentStatus>> {
    prop::option::of(prop::sample::select(CommitmentStatus::ALL.to_vec()))
}

fn commitment_strategy() -> impl Strategy<Value = Commitment> {
    (status_strategy(), status_strategy(), any::<u64>()).prop_map(|(old_status, new_status, amount)| {
        Commitment {
            uuid: CommitmentUuid::from("30c343c8-7540-451a-bff5-fed9c35f8a43"),
            old_status,
            new_status,
            amount,
            confirm_by: None,
            expires_at: datetime!(2025-07-02 12:00 UTC),
            old_expires_at: None,
        }
    })
}

proptest! {
    #[test]
    fn flat_topology_always_expects_any(zones in zones_strategy()) {
        prop_assert_eq!(Topology::Flat.expected_zones(&zones), vec![AvailabilityZone::any()]);
    }

    #[test]
    fn zone_aware_topologies_expect_the_zone_list(zones in zones_strategy()) {
        prop_assert_eq!(Topology::AzAware.expected_zones(&zones), zones.clone());
        prop_assert_eq!(Topology::AzSeparated.expected_zones(&zones), zones);
    }

    #[test]
    fn error_set_keeps_first_occurrence_order(messages in prop::collection::vec("[a-c]{1,2}", 0 .. 20)) {
        let errors: ErrorSet = messages.iter().map(String::as_str).collect();
        let mut expected: Vec<&str> = Vec::new();
        for message in &messages {
            if !expected.contains(&message.as_str()) {
                expected.push(message);
            }
        }
        prop_assert_eq!(errors.len(), expected.len());
        prop_assert_eq!(errors.join("\n"), expected.join("\n"));
    }

    #[test]
    fn overcommit_reverse_is_a_left_inverse(factor in 1.0f64 .. 8.0, raw in 0u64 .. 1_000_000) {
        let factor = OvercommitFactor(factor);
        prop_assert_eq!(factor.apply_in_reverse_to(factor.apply_to(raw)), raw);
    }

    #[test]
    fn overcommit_reverse_never_overshoots(factor in 0.1f64 .. 8.0, effective in 0u64 .. 1_000_000) {
        let factor = OvercommitFactor(factor);
        let raw = factor.apply_in_reverse_to(effective);
        prop_assert!(factor.apply_to(raw) <= effective || raw == 0);
    }

    #[test]
    fn unchanged_totals_without_reserved_deletion_need_no_confirmation(
        confirmed in any::<u64>(),
        guaranteed in any::<u64>(),
        commitments in prop::collection::vec(commitment_strategy(), 0 .. 6),
    ) {
        let changeset = ResourceCommitmentChangeset {
            total_confirmed_before: confirmed,
            total_confirmed_after: confirmed,
            total_guaranteed_before: guaranteed,
            total_guaranteed_after: guaranteed,
            commitments,
        };
        prop_assert!(!changeset.increases_reserved_total());
        let expected = changeset.commitments.iter().any(Commitment::is_reserved_deletion);
        prop_assert_eq!(changeset.deletes_reserved_commitment(), expected);
    }
}
