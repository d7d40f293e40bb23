//! Gallery image model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vitrine_core::types::{DbId, Timestamp};

/// A gallery image row from the `gallery_images` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub id: DbId,
    pub project_id: DbId,
    pub url: String,
    pub alt: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Nested gallery payload inside project creation (URLs already hosted).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImageInput {
    pub url: Option<String>,
    pub alt: Option<String>,
}

/// Delete payload; the image id travels in the body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteGalleryImage {
    pub image_id: Option<DbId>,
}
