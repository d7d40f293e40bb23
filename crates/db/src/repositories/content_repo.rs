//! Read-side assembly of the public page payload and the SEO metadata
//! document. Pure reads; the API layer caches the results per project.

use sqlx::PgPool;
use vitrine_core::types::DbId;

use crate::models::content::{
    AboutData, FooterData, GalleryItemData, HeaderData, HeroData, PackageData, ProjectContent,
    ProjectMetadata, ServiceItemData, ServicesData, WhyUsData, WhyUsFeatureData,
};
use crate::repositories::{
    AboutRepo, GalleryRepo, HeroRepo, PackageRepo, ProjectRepo, RatingRepo, ServicesRepo,
    SiteSettingsRepo, WhyUsRepo,
};

/// Assembles the denormalized documents the public endpoints serve.
pub struct ContentRepo;

impl ContentRepo {
    /// Build the full page payload for a project.
    ///
    /// Returns `None` only when the project itself is missing. Absent
    /// sections come back as `null` keys or empty lists so a half-filled
    /// project still renders.
    pub async fn project_content(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ProjectContent>, sqlx::Error> {
        if ProjectRepo::find_by_id(pool, id).await?.is_none() {
            return Ok(None);
        }

        let settings = SiteSettingsRepo::find_by_project(pool, id).await?;
        let hero_row = HeroRepo::find_by_project(pool, id).await?;
        let about_row = AboutRepo::find_by_project(pool, id).await?;

        let services = match ServicesRepo::find_section_by_project(pool, id).await? {
            Some(section) => {
                let items = ServicesRepo::list_items(pool, section.id).await?;
                Some(ServicesData {
                    label: section.label,
                    title: section.title,
                    description: section.description,
                    items: items
                        .into_iter()
                        .map(|item| ServiceItemData {
                            id: item.id,
                            icon: item.icon,
                            title: item.title,
                            description: item.description,
                        })
                        .collect(),
                })
            }
            None => None,
        };

        let why_us = match WhyUsRepo::find_section_by_project(pool, id).await? {
            Some(section) => {
                let features = WhyUsRepo::list_features(pool, section.id).await?;
                Some(WhyUsData {
                    label: section.label,
                    title: section.title,
                    description: section.description,
                    features: features
                        .into_iter()
                        .map(|feature| WhyUsFeatureData {
                            icon: feature.icon,
                            title: feature.title,
                            description: feature.description,
                        })
                        .collect(),
                })
            }
            None => None,
        };

        let gallery = GalleryRepo::list_by_project(pool, id)
            .await?
            .into_iter()
            .map(|image| GalleryItemData {
                url: image.url,
                alt: image.alt,
            })
            .collect();

        let packages = PackageRepo::list_by_project(pool, id)
            .await?
            .into_iter()
            .map(|package| PackageData {
                id: package.id,
                title: package.title,
                image: package.image,
                features: package.features,
            })
            .collect();

        // The widget hides itself until at least one rating exists.
        let summary = RatingRepo::summary(pool, id).await?;
        let rating = (summary.total_ratings > 0).then_some(summary);

        let brand_name = settings
            .as_ref()
            .and_then(|s| s.brand_name.clone())
            .unwrap_or_default();

        let header = HeaderData {
            brand_name: brand_name.clone(),
        };

        // The floating contact button lives inside the hero block on the
        // page, so the WhatsApp number rides along with the hero copy.
        let hero = hero_row.map(|h| HeroData {
            headline: h.headline,
            subheadline: h.subheadline,
            whats_app: settings
                .as_ref()
                .and_then(|s| s.whatsapp.clone())
                .unwrap_or_default(),
        });

        let about = about_row.map(|a| AboutData {
            label: a.label,
            title: a.title,
            description1: a.description1,
            image: a.image,
        });

        let footer = FooterData {
            brand_name,
            phone: settings
                .as_ref()
                .and_then(|s| s.phone.clone())
                .unwrap_or_default(),
            email: settings
                .as_ref()
                .and_then(|s| s.email.clone())
                .unwrap_or_default(),
            address: settings
                .as_ref()
                .and_then(|s| s.address.clone())
                .unwrap_or_default(),
        };

        Ok(Some(ProjectContent {
            header,
            hero,
            about,
            services,
            why_us,
            gallery,
            footer,
            packages,
            rating,
        }))
    }

    /// Build the SEO metadata document from site settings. Returns `None`
    /// when the settings row is absent (which also covers a missing
    /// project).
    pub async fn project_metadata(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ProjectMetadata>, sqlx::Error> {
        let settings = SiteSettingsRepo::find_by_project(pool, id).await?;
        Ok(settings.map(|s| ProjectMetadata {
            title: s.site_title,
            description: s.site_description,
            keywords: s.site_keywords,
            brand_name: s.brand_name,
        }))
    }
}
