// crates/adapter-contract-core/src/core/commitment.rs
// ============================================================================
// Module: Adapter Contract Commitment Types
// Description: Commitment lifecycle states and change requests.
// Purpose: Describe proposed commitment transitions across projects and resources.
// Dependencies: serde, time
// ============================================================================

//! ## Overview
//! A commitment reserves capacity for a project over a fixed term. The
//! orchestrator proposes batches of lifecycle transitions as a
//! [`CommitmentChangeRequest`]; each resource changeset carries the reserved
//! totals before and after the whole batch so adapters can judge the net
//! effect without replaying individual transitions.
//!
//! ## Lifecycle
//! - Created with no `old_status` and a `new_status` in
//!   `planned | pending | guaranteed | confirmed`.
//! - Moves between those statuses over time.
//! - Ends in `superseded` or `expired`, or is deleted (`new_status` absent).
//!
//! The order of transitions is enforced by the orchestrator, not here.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use time::OffsetDateTime;

use crate::core::identifiers::AvailabilityZone;
use crate::core::identifiers::CommitmentUuid;
use crate::core::identifiers::ProjectUuid;
use crate::core::identifiers::ResourceName;
use crate::core::project::ProjectMetadata;

// ============================================================================
// SECTION: Status
// ============================================================================

/// Lifecycle status of a commitment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommitmentStatus {
    /// Waiting for its `confirm_by` date.
    Planned,
    /// Past `confirm_by`, waiting for capacity.
    Pending,
    /// Capacity is set aside but the term has not started.
    Guaranteed,
    /// Capacity is set aside and the term is running.
    Confirmed,
    /// Replaced by one or more other commitments.
    Superseded,
    /// Term has ended.
    Expired,
}

impl CommitmentStatus {
    /// All statuses in lifecycle order.
    pub const ALL: [Self; 6] = [
        Self::Planned,
        Self::Pending,
        Self::Guaranteed,
        Self::Confirmed,
        Self::Superseded,
        Self::Expired,
    ];

    /// Returns the wire form of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::Pending => "pending",
            Self::Guaranteed => "guaranteed",
            Self::Confirmed => "confirmed",
            Self::Superseded => "superseded",
            Self::Expired => "expired",
        }
    }

    /// Returns true for statuses that hold reserved capacity.
    #[must_use]
    pub const fn is_reserved(self) -> bool {
        matches!(self, Self::Guaranteed | Self::Confirmed)
    }

    /// Returns true for statuses a new commitment may be created in.
    #[must_use]
    pub const fn is_alive(self) -> bool {
        matches!(self, Self::Planned | Self::Pending | Self::Guaranteed | Self::Confirmed)
    }
}

impl fmt::Display for CommitmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Change Request
// ============================================================================

/// Batch of commitment transitions within one availability zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitmentChangeRequest {
    /// Zone all affected commitments live in.
    #[serde(rename = "az")]
    pub az: AvailabilityZone,
    /// Manifest version the orchestrator used to build the request.
    pub info_version: i64,
    /// Changesets per affected project.
    #[serde(default)]
    pub by_project: BTreeMap<ProjectUuid, ProjectCommitmentChangeset>,
}

/// Transitions within one project.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCommitmentChangeset {
    /// Changesets per affected resource.
    #[serde(default)]
    pub by_resource: BTreeMap<ResourceName, ResourceCommitmentChangeset>,
    /// Project metadata, present when the manifest asks for it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_metadata: Option<ProjectMetadata>,
}

/// Transitions for one resource within one project, with reserved totals.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceCommitmentChangeset {
    /// Sum of confirmed commitments before the batch.
    #[serde(default)]
    pub total_confirmed_before: u64,
    /// Sum of confirmed commitments after the batch.
    #[serde(default)]
    pub total_confirmed_after: u64,
    /// Sum of guaranteed commitments before the batch.
    #[serde(default)]
    pub total_guaranteed_before: u64,
    /// Sum of guaranteed commitments after the batch.
    #[serde(default)]
    pub total_guaranteed_after: u64,
    /// Individual transitions in proposal order.
    #[serde(default)]
    pub commitments: Vec<Commitment>,
}

/// One commitment transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commitment {
    /// Commitment UUID.
    #[serde(rename = "uuid")]
    pub uuid: CommitmentUuid,
    /// Status before the transition; absent for newly created commitments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_status: Option<CommitmentStatus>,
    /// Status after the transition; absent when the commitment is deleted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_status: Option<CommitmentStatus>,
    /// Committed amount in the resource's unit.
    pub amount: u64,
    /// Date by which a planned commitment should be confirmed.
    #[serde(default, skip_serializing_if = "Option::is_none", with = "time::serde::rfc3339::option")]
    pub confirm_by: Option<OffsetDateTime>,
    /// End of the commitment term.
    #[serde(with = "time::serde::rfc3339")]
    pub expires_at: OffsetDateTime,
    /// Previous end of term when the transition extends the commitment.
    #[serde(default, skip_serializing_if = "Option::is_none", with = "time::serde::rfc3339::option")]
    pub old_expires_at: Option<OffsetDateTime>,
}

/// Adapter answer to a [`CommitmentChangeRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitmentChangeResponse {
    /// Reason for rejecting the batch; empty when accepted.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub rejection_reason: String,
    /// Earliest time a rejected batch may be retried.
    #[serde(default, skip_serializing_if = "Option::is_none", with = "time::serde::rfc3339::option")]
    pub retry_at: Option<OffsetDateTime>,
}

impl CommitmentChangeResponse {
    /// Returns true when the adapter accepted the batch.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.rejection_reason.is_empty()
    }
}
