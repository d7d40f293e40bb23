//! Why-us section and feature models. Mirrors the services pair.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vitrine_core::types::{DbId, Timestamp};

/// A why-us section row from the `why_us_sections` table (one per project).
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WhyUsSection {
    pub id: DbId,
    pub project_id: DbId,
    pub label: String,
    pub title: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A feature row from the `why_us_features` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WhyUsFeature {
    pub id: DbId,
    pub section_id: DbId,
    pub icon: String,
    pub title: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Ownership lookup for a feature: the section and project it belongs to.
#[derive(Debug, Clone, FromRow)]
pub struct WhyUsFeatureOwner {
    pub id: DbId,
    pub section_id: DbId,
    pub project_id: DbId,
}

/// Upsert payload for the why-us section header.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertWhyUsSection {
    pub label: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Feature payload shared by nested creation and the add-feature endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhyUsFeatureInput {
    pub icon: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Nested why-us payload inside project creation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhyUsSectionInput {
    pub label: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub features: Option<Vec<WhyUsFeatureInput>>,
}

/// Update payload for a single feature; the id travels in the body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWhyUsFeature {
    pub feature_id: Option<DbId>,
    pub icon: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Delete payload for a single feature.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteWhyUsFeature {
    pub feature_id: Option<DbId>,
}

/// Why-us section with its features, as the dashboard reads it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WhyUsSectionWithFeatures {
    #[serde(flatten)]
    pub section: WhyUsSection,
    pub features: Vec<WhyUsFeature>,
}
