// crates/adapter-contract-core/src/policy/confirmation.rs
// ============================================================================
// Module: Adapter Contract Confirmation Policy
// Description: Rules deciding when a commitment batch must be confirmed.
// Purpose: Flag changes that grow or drop reserved capacity.
// Dependencies: tracing
// ============================================================================

//! ## Overview
//! A [`CommitmentChangeRequest`] requires confirmation when either rule holds:
//!
//! 1. Reserved growth: some resource changeset ends with a larger
//!    confirmed-plus-guaranteed total than it started with.
//! 2. Reserved deletion: some commitment in `guaranteed` or `confirmed`
//!    is deleted outright. Moving into `superseded` or `expired` is not a
//!    deletion.
//!
//! The rules are evaluated separately and combined with a logical OR.

// ============================================================================
// SECTION: Imports
// ============================================================================

use tracing::debug;

use crate::core::commitment::Commitment;
use crate::core::commitment::CommitmentChangeRequest;
use crate::core::commitment::ResourceCommitmentChangeset;

// ============================================================================
// SECTION: Rules
// ============================================================================

impl ResourceCommitmentChangeset {
    /// Reserved total (confirmed plus guaranteed) before the batch.
    #[must_use]
    pub fn reserved_total_before(&self) -> u128 {
        u128::from(self.total_confirmed_before) + u128::from(self.total_guaranteed_before)
    }

    /// Reserved total (confirmed plus guaranteed) after the batch.
    #[must_use]
    pub fn reserved_total_after(&self) -> u128 {
        u128::from(self.total_confirmed_after) + u128::from(self.total_guaranteed_after)
    }

    /// Returns true when the batch grows this resource's reserved total.
    #[must_use]
    pub fn increases_reserved_total(&self) -> bool {
        self.reserved_total_after() > self.reserved_total_before()
    }

    /// Returns true when any commitment in this changeset is a reserved deletion.
    #[must_use]
    pub fn deletes_reserved_commitment(&self) -> bool {
        self.commitments.iter().any(Commitment::is_reserved_deletion)
    }
}

impl Commitment {
    /// Returns true when a reserved commitment is deleted outright.
    #[must_use]
    pub fn is_reserved_deletion(&self) -> bool {
        self.new_status.is_none() && self.old_status.is_some_and(|status| status.is_reserved())
    }
}

impl CommitmentChangeRequest {
    /// Iterates every resource changeset across all projects.
    pub fn resource_changesets(&self) -> impl Iterator<Item = &ResourceCommitmentChangeset> {
        self.by_project.values().flat_map(|project| project.by_resource.values())
    }

    /// Returns true when any resource changeset grows its reserved total.
    #[must_use]
    pub fn grows_reserved_capacity(&self) -> bool {
        self.resource_changesets().any(ResourceCommitmentChangeset::increases_reserved_total)
    }

    /// Returns true when any reserved commitment is deleted outright.
    #[must_use]
    pub fn deletes_reserved_capacity(&self) -> bool {
        self.resource_changesets().any(ResourceCommitmentChangeset::deletes_reserved_commitment)
    }

    /// Returns true when the batch needs explicit confirmation by the adapter.
    #[must_use]
    pub fn requires_confirmation(&self) -> bool {
        let growth = self.grows_reserved_capacity();
        let deletion = self.deletes_reserved_capacity();
        debug!(
            az = %self.az,
            projects = self.by_project.len(),
            growth,
            deletion,
            "evaluated commitment confirmation rules"
        );
        growth || deletion
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use crate::core::commitment::Commitment;
    use crate::core::commitment::CommitmentStatus;
    use crate::core::commitment::ResourceCommitmentChangeset;
    use crate::core::identifiers::CommitmentUuid;

    fn transition(old: Option<CommitmentStatus>, new: Option<CommitmentStatus>) -> Commitment {
        Commitment {
            uuid: CommitmentUuid::from("30c343c8-7540-451a-bff5-fed9c35f8a43"),
            old_status: old,
            new_status: new,
            amount: 10,
            confirm_by: None,
            expires_at: datetime!(2025-07-02 12:00 UTC),
            old_expires_at: None,
        }
    }

    #[test]
    fn only_outright_deletion_of_reserved_status_counts() {
        for status in CommitmentStatus::ALL {
            let deleted = transition(Some(status), None);
            assert_eq!(deleted.is_reserved_deletion(), status.is_reserved(), "{status}");
        }
        assert!(!transition(Some(CommitmentStatus::Confirmed), Some(CommitmentStatus::Expired)).is_reserved_deletion());
        assert!(!transition(Some(CommitmentStatus::Guaranteed), Some(CommitmentStatus::Superseded)).is_reserved_deletion());
        assert!(!transition(None, None).is_reserved_deletion());
    }

    #[test]
    fn shift_between_confirmed_and_guaranteed_is_not_growth() {
        let changeset = ResourceCommitmentChangeset {
            total_confirmed_before: 50,
            total_confirmed_after: 60,
            total_guaranteed_before: 25,
            total_guaranteed_after: 15,
            ..ResourceCommitmentChangeset::default()
        };
        assert!(!changeset.increases_reserved_total());
    }

    #[test]
    fn totals_near_the_integer_limit_do_not_overflow() {
        let changeset = ResourceCommitmentChangeset {
            total_confirmed_before: u64::MAX,
            total_confirmed_after: u64::MAX,
            total_guaranteed_before: u64::MAX - 1,
            total_guaranteed_after: u64::MAX,
            ..ResourceCommitmentChangeset::default()
        };
        assert!(changeset.increases_reserved_total());
    }
}
