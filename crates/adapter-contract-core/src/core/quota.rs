// crates/adapter-contract-core/src/core/quota.rs
// ============================================================================
// Module: Adapter Contract Quota Types
// Description: Quota update request payloads.
// Purpose: Carry quota values from the orchestrator to an adapter.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Quota updates always carry the resource-level total and, for zone-aware
//! resources, the per-zone split the orchestrator computed.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::AvailabilityZone;
use crate::core::identifiers::ResourceName;
use crate::core::project::ProjectMetadata;

/// Quota update request for one project.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceQuotaRequest {
    /// Quota per resource declared with `has_quota`.
    #[serde(default)]
    pub resources: BTreeMap<ResourceName, ResourceQuotaRequest>,
    /// Project metadata, present when the manifest asks for it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_metadata: Option<ProjectMetadata>,
}

/// Quota for one resource.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceQuotaRequest {
    /// Resource-level quota.
    pub quota: u64,
    /// Per-zone split of the quota.
    #[serde(rename = "perAZ", default)]
    pub per_az: BTreeMap<AvailabilityZone, AzResourceQuotaRequest>,
}

/// Quota for one resource in one zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AzResourceQuotaRequest {
    /// Zone-level quota.
    pub quota: u64,
}
