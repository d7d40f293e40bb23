//! Repository for the `hero_sections` table (one row per project).

use sqlx::PgPool;
use vitrine_core::types::DbId;

use crate::models::hero::HeroSection;

/// Column list shared across queries; also used by the main-data
/// transaction in `ProjectRepo`.
pub(crate) const COLUMNS: &str = "id, project_id, headline, headline_highlight, subheadline, \
     primary_cta_text, primary_cta_link, secondary_cta_text, secondary_cta_link, \
     background_image, is_active, created_at, updated_at";

/// Provides data access for per-project hero sections.
pub struct HeroRepo;

impl HeroRepo {
    pub async fn find_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Option<HeroSection>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hero_sections WHERE project_id = $1");
        sqlx::query_as::<_, HeroSection>(&query)
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }
}
