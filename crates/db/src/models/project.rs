//! Project root entity, the nested creation payload, and the combined
//! "main data" update that spans project, site settings, and hero section.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vitrine_core::types::{DbId, Timestamp};

use crate::models::about::AboutSectionInput;
use crate::models::gallery::GalleryImageInput;
use crate::models::hero::{HeroSection, HeroSectionInput};
use crate::models::services::ServicesSectionInput;
use crate::models::site_settings::{SiteSettings, SiteSettingsInput};
use crate::models::why_us::WhyUsSectionInput;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a project with all of its sections in one call.
///
/// `project_id` is the caller-chosen slug the frontend build is pinned to.
/// Every section is optional; present sections are created inside the same
/// transaction as the project row.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    pub project_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
    pub site_settings: Option<SiteSettingsInput>,
    pub hero_section: Option<HeroSectionInput>,
    pub about_section: Option<AboutSectionInput>,
    pub services_section: Option<ServicesSectionInput>,
    pub why_us_section: Option<WhyUsSectionInput>,
    pub contact_section: Option<ContactSectionInput>,
    pub gallery_images: Option<Vec<GalleryImageInput>>,
}

/// A contact section row from the `contact_sections` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSection {
    pub id: DbId,
    pub project_id: DbId,
    pub label: String,
    pub title: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Nested contact section payload inside [`CreateProject`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSectionInput {
    pub label: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Body of the combined main-data update.
///
/// `project_name` and `project_description` are required; the site-settings
/// and hero fields keep their stored value when omitted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMainData {
    pub project_name: Option<String>,
    pub project_description: Option<String>,
    pub brand_name: Option<String>,
    pub site_title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub whatsapp: Option<String>,
    pub address: Option<String>,
    pub hero_headline: Option<String>,
    pub hero_subheadline: Option<String>,
}

/// Result of the combined main-data update: the three rows it touched.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MainData {
    pub project: Project,
    pub site_settings: SiteSettings,
    pub hero_section: HeroSection,
}

/// Dashboard read of the main data; settings and hero may not exist yet.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MainDataView {
    pub project: Project,
    pub site_settings: Option<SiteSettings>,
    pub hero_section: Option<HeroSection>,
}
