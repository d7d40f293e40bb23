//! Public read projection: the denormalized payload the site renders from,
//! plus the SEO metadata document.
//!
//! Missing sections serialize as `null` (or an empty list for collections);
//! only a missing project is an error. Keys and field names match what the
//! deployed frontend destructures.

use serde::Serialize;
use vitrine_core::types::DbId;

use crate::models::rating::RatingSummary;

/// Everything the public page needs, assembled in one response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectContent {
    pub header: HeaderData,
    pub hero: Option<HeroData>,
    pub about: Option<AboutData>,
    pub services: Option<ServicesData>,
    pub why_us: Option<WhyUsData>,
    pub gallery: Vec<GalleryItemData>,
    pub footer: FooterData,
    pub packages: Vec<PackageData>,
    pub rating: Option<RatingSummary>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderData {
    pub brand_name: String,
}

/// Hero copy plus the WhatsApp number the floating contact button uses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroData {
    pub headline: String,
    pub subheadline: String,
    pub whats_app: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutData {
    pub label: String,
    pub title: String,
    pub description1: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicesData {
    pub label: String,
    pub title: String,
    pub description: String,
    pub items: Vec<ServiceItemData>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceItemData {
    pub id: DbId,
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WhyUsData {
    pub label: String,
    pub title: String,
    pub description: String,
    pub features: Vec<WhyUsFeatureData>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WhyUsFeatureData {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItemData {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterData {
    pub brand_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageData {
    pub id: DbId,
    pub title: String,
    pub image: String,
    pub features: Vec<String>,
}

/// SEO metadata document built from site settings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Vec<String>,
    pub brand_name: Option<String>,
}
