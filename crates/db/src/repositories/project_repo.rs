//! Repository for the `projects` table and the multi-table writes that span
//! a project's singleton sections.

use sqlx::PgPool;
use vitrine_core::icons::normalize_icon_key;
use vitrine_core::types::DbId;

use crate::models::hero::HeroSection;
use crate::models::project::{CreateProject, MainData, MainDataView, Project, UpdateMainData};
use crate::models::site_settings::SiteSettings;
use crate::repositories::{hero_repo, site_settings_repo, HeroRepo, SiteSettingsRepo};

/// Column list shared across queries.
const COLUMNS: &str = "id, slug, name, description, is_active, created_at, updated_at";

/// Provides data access for projects and the combined main-data write.
pub struct ProjectRepo;

impl ProjectRepo {
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE slug = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Create a project together with every section present in the payload,
    /// all inside one transaction. Section text fields default to empty
    /// strings when omitted; gallery entries without a URL are skipped.
    ///
    /// Returns the created project row. A duplicate slug surfaces as a
    /// unique-violation database error the API layer maps to 409.
    pub async fn create_full(
        pool: &PgPool,
        slug: &str,
        name: &str,
        description: &str,
        input: &CreateProject,
    ) -> Result<Project, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO projects (slug, name, description, is_active)
             VALUES ($1, $2, $3, COALESCE($4, true))
             RETURNING {COLUMNS}"
        );
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(slug)
            .bind(name)
            .bind(description)
            .bind(input.is_active)
            .fetch_one(&mut *tx)
            .await?;

        if let Some(settings) = &input.site_settings {
            sqlx::query(
                "INSERT INTO site_settings
                    (project_id, brand_name, site_title, site_description, site_keywords,
                     phone, whatsapp, email, address)
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
            )
            .bind(project.id)
            .bind(&settings.brand_name)
            .bind(&settings.site_title)
            .bind(&settings.site_description)
            .bind(settings.site_keywords.as_deref().unwrap_or(&[]))
            .bind(&settings.phone)
            .bind(&settings.whatsapp)
            .bind(&settings.email)
            .bind(&settings.address)
            .execute(&mut *tx)
            .await?;
        }

        if let Some(hero) = &input.hero_section {
            sqlx::query(
                "INSERT INTO hero_sections
                    (project_id, headline, headline_highlight, subheadline,
                     primary_cta_text, primary_cta_link, secondary_cta_text,
                     secondary_cta_link, background_image, is_active)
                 VALUES ($1, COALESCE($2, ''), $3, COALESCE($4, ''),
                         $5, $6, $7, $8, $9, COALESCE($10, true))",
            )
            .bind(project.id)
            .bind(&hero.headline)
            .bind(&hero.headline_highlight)
            .bind(&hero.subheadline)
            .bind(&hero.primary_cta_text)
            .bind(&hero.primary_cta_link)
            .bind(&hero.secondary_cta_text)
            .bind(&hero.secondary_cta_link)
            .bind(&hero.background_image)
            .bind(hero.is_active)
            .execute(&mut *tx)
            .await?;
        }

        if let Some(about) = &input.about_section {
            sqlx::query(
                "INSERT INTO about_sections (project_id, label, title, description1, image)
                 VALUES ($1, COALESCE($2, ''), COALESCE($3, ''), COALESCE($4, ''), $5)",
            )
            .bind(project.id)
            .bind(&about.label)
            .bind(&about.title)
            .bind(&about.description1)
            .bind(&about.image)
            .execute(&mut *tx)
            .await?;
        }

        if let Some(section) = &input.services_section {
            let section_id: DbId = sqlx::query_scalar(
                "INSERT INTO services_sections (project_id, label, title, description)
                 VALUES ($1, COALESCE($2, ''), COALESCE($3, ''), COALESCE($4, ''))
                 RETURNING id",
            )
            .bind(project.id)
            .bind(&section.label)
            .bind(&section.title)
            .bind(&section.description)
            .fetch_one(&mut *tx)
            .await?;

            for item in section.services.as_deref().unwrap_or(&[]) {
                let icon = normalize_icon_key(item.icon.as_deref().unwrap_or(""));
                sqlx::query(
                    "INSERT INTO services (section_id, icon, title, description)
                     VALUES ($1, $2, COALESCE($3, ''), COALESCE($4, ''))",
                )
                .bind(section_id)
                .bind(&icon)
                .bind(&item.title)
                .bind(&item.description)
                .execute(&mut *tx)
                .await?;
            }
        }

        if let Some(section) = &input.why_us_section {
            let section_id: DbId = sqlx::query_scalar(
                "INSERT INTO why_us_sections (project_id, label, title, description)
                 VALUES ($1, COALESCE($2, ''), COALESCE($3, ''), COALESCE($4, ''))
                 RETURNING id",
            )
            .bind(project.id)
            .bind(&section.label)
            .bind(&section.title)
            .bind(&section.description)
            .fetch_one(&mut *tx)
            .await?;

            for feature in section.features.as_deref().unwrap_or(&[]) {
                let icon = normalize_icon_key(feature.icon.as_deref().unwrap_or(""));
                sqlx::query(
                    "INSERT INTO why_us_features (section_id, icon, title, description)
                     VALUES ($1, $2, COALESCE($3, ''), COALESCE($4, ''))",
                )
                .bind(section_id)
                .bind(&icon)
                .bind(&feature.title)
                .bind(&feature.description)
                .execute(&mut *tx)
                .await?;
            }
        }

        if let Some(contact) = &input.contact_section {
            sqlx::query(
                "INSERT INTO contact_sections (project_id, label, title, description)
                 VALUES ($1, COALESCE($2, ''), COALESCE($3, ''), COALESCE($4, ''))",
            )
            .bind(project.id)
            .bind(&contact.label)
            .bind(&contact.title)
            .bind(&contact.description)
            .execute(&mut *tx)
            .await?;
        }

        for image in input.gallery_images.as_deref().unwrap_or(&[]) {
            let Some(url) = image.url.as_deref().filter(|u| !u.trim().is_empty()) else {
                continue;
            };
            sqlx::query("INSERT INTO gallery_images (project_id, url, alt) VALUES ($1, $2, $3)")
                .bind(project.id)
                .bind(url)
                .bind(&image.alt)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(project)
    }

    /// Apply the combined main-data update: project name/description, the
    /// optional site-settings fields, and the hero copy, in one transaction.
    ///
    /// Settings and hero rows are created when absent. On update, omitted
    /// fields keep their stored values: the conflict branch coalesces the
    /// raw bind against the live column, never `EXCLUDED`, so the insert
    /// branch's defaults cannot leak into an existing row.
    ///
    /// Returns `None` (writing nothing) if the project does not exist.
    pub async fn update_main_data(
        pool: &PgPool,
        id: DbId,
        name: &str,
        description: &str,
        input: &UpdateMainData,
    ) -> Result<Option<MainData>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE projects SET name = $2, description = $3 WHERE id = $1 RETURNING {COLUMNS}"
        );
        let Some(project) = sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(name)
            .bind(description)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let settings_query = format!(
            "INSERT INTO site_settings
                (project_id, brand_name, site_title, email, phone, whatsapp, address)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             ON CONFLICT (project_id) DO UPDATE SET
                brand_name = COALESCE($2, site_settings.brand_name),
                site_title = COALESCE($3, site_settings.site_title),
                email = COALESCE($4, site_settings.email),
                phone = COALESCE($5, site_settings.phone),
                whatsapp = COALESCE($6, site_settings.whatsapp),
                address = COALESCE($7, site_settings.address)
             RETURNING {columns}",
            columns = site_settings_repo::COLUMNS
        );
        let site_settings = sqlx::query_as::<_, SiteSettings>(&settings_query)
            .bind(id)
            .bind(&input.brand_name)
            .bind(&input.site_title)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.whatsapp)
            .bind(&input.address)
            .fetch_one(&mut *tx)
            .await?;

        let hero_query = format!(
            "INSERT INTO hero_sections (project_id, headline, subheadline)
             VALUES ($1, COALESCE($2, ''), COALESCE($3, ''))
             ON CONFLICT (project_id) DO UPDATE SET
                headline = COALESCE($2, hero_sections.headline),
                subheadline = COALESCE($3, hero_sections.subheadline)
             RETURNING {columns}",
            columns = hero_repo::COLUMNS
        );
        let hero_section = sqlx::query_as::<_, HeroSection>(&hero_query)
            .bind(id)
            .bind(&input.hero_headline)
            .bind(&input.hero_subheadline)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(Some(MainData {
            project,
            site_settings,
            hero_section,
        }))
    }

    /// Dashboard read of a project's main data. Settings and hero are `None`
    /// until first written.
    pub async fn find_main_data(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<MainDataView>, sqlx::Error> {
        let Some(project) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let site_settings = SiteSettingsRepo::find_by_project(pool, id).await?;
        let hero_section = HeroRepo::find_by_project(pool, id).await?;
        Ok(Some(MainDataView {
            project,
            site_settings,
            hero_section,
        }))
    }
}
