//! Hero section model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vitrine_core::types::{DbId, Timestamp};

/// A hero section row from the `hero_sections` table (one per project).
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSection {
    pub id: DbId,
    pub project_id: DbId,
    pub headline: String,
    pub headline_highlight: Option<String>,
    pub subheadline: String,
    pub primary_cta_text: Option<String>,
    pub primary_cta_link: Option<String>,
    pub secondary_cta_text: Option<String>,
    pub secondary_cta_link: Option<String>,
    pub background_image: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Nested hero payload inside project creation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSectionInput {
    pub headline: Option<String>,
    pub headline_highlight: Option<String>,
    pub subheadline: Option<String>,
    pub primary_cta_text: Option<String>,
    pub primary_cta_link: Option<String>,
    pub secondary_cta_text: Option<String>,
    pub secondary_cta_link: Option<String>,
    pub background_image: Option<String>,
    pub is_active: Option<bool>,
}
