//! Site settings model (brand identity, contact details, SEO keywords).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vitrine_core::types::{DbId, Timestamp};

/// A site settings row from the `site_settings` table (one per project).
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    pub id: DbId,
    pub project_id: DbId,
    pub brand_name: Option<String>,
    pub site_title: Option<String>,
    pub site_description: Option<String>,
    pub site_keywords: Vec<String>,
    pub phone: Option<String>,
    pub whatsapp: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Nested site-settings payload inside project creation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettingsInput {
    pub brand_name: Option<String>,
    pub site_title: Option<String>,
    pub site_description: Option<String>,
    pub site_keywords: Option<Vec<String>>,
    pub phone: Option<String>,
    pub whatsapp: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

/// Keywords update payload. The value is validated as a string array by the
/// handler so a wrong type yields a 400, not a deserialization error.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateKeywords {
    pub keywords: Option<serde_json::Value>,
}

/// Response body for keyword reads and writes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordsData {
    pub keywords: Vec<String>,
    pub updated_at: Timestamp,
}
