//! About section model.
//!
//! The `description1` field name is part of the wire contract the frontend
//! already consumes; it is kept verbatim.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vitrine_core::types::{DbId, Timestamp};

/// An about section row from the `about_sections` table (one per project).
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutSection {
    pub id: DbId,
    pub project_id: DbId,
    pub label: String,
    pub title: String,
    pub description1: String,
    pub image: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Upsert payload for the about section. `label`, `title`, and
/// `description1` are required; an omitted `image` keeps the stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertAboutSection {
    pub label: Option<String>,
    pub title: Option<String>,
    pub description1: Option<String>,
    pub image: Option<String>,
}

/// Nested about payload inside project creation.
pub type AboutSectionInput = UpsertAboutSection;
