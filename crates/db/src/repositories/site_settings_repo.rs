//! Repository for the `site_settings` table (one row per project).

use sqlx::PgPool;
use vitrine_core::types::DbId;

use crate::models::site_settings::SiteSettings;

/// Column list shared across queries; also used by the main-data
/// transaction in `ProjectRepo`.
pub(crate) const COLUMNS: &str = "id, project_id, brand_name, site_title, site_description, \
     site_keywords, phone, whatsapp, email, address, created_at, updated_at";

/// Provides data access for per-project site settings.
pub struct SiteSettingsRepo;

impl SiteSettingsRepo {
    pub async fn find_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Option<SiteSettings>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM site_settings WHERE project_id = $1");
        sqlx::query_as::<_, SiteSettings>(&query)
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }

    /// Replace the keyword list wholesale. Returns `None` when the project
    /// has no settings row yet; keywords cannot be set before the row exists.
    pub async fn update_keywords(
        pool: &PgPool,
        project_id: DbId,
        keywords: &[String],
    ) -> Result<Option<SiteSettings>, sqlx::Error> {
        let query = format!(
            "UPDATE site_settings SET site_keywords = $2
             WHERE project_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SiteSettings>(&query)
            .bind(project_id)
            .bind(keywords)
            .fetch_optional(pool)
            .await
    }
}
