// crates/adapter-contract-core/src/core/project.rs
// ============================================================================
// Module: Adapter Contract Project Metadata
// Description: Identity of the project a request is about.
// Purpose: Give adapters the project and domain names they may need.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Project metadata is only attached when the manifest asks for it through
//! one of its `*_needs_project_metadata` flags.

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::ProjectUuid;

/// Project identity attached to usage, quota and commitment requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Project UUID.
    #[serde(rename = "uuid")]
    pub uuid: ProjectUuid,
    /// Project name.
    pub name: String,
    /// Owning domain.
    pub domain: DomainMetadata,
}

/// Domain identity of a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainMetadata {
    /// Domain UUID.
    #[serde(rename = "uuid")]
    pub uuid: String,
    /// Domain name.
    pub name: String,
}
