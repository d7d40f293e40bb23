//! Repository for the `about_sections` table (one row per project).

use sqlx::PgPool;
use vitrine_core::types::DbId;

use crate::models::about::AboutSection;

/// Column list shared across queries.
const COLUMNS: &str =
    "id, project_id, label, title, description1, image, created_at, updated_at";

/// Provides data access for per-project about sections.
pub struct AboutRepo;

impl AboutRepo {
    pub async fn find_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Option<AboutSection>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM about_sections WHERE project_id = $1");
        sqlx::query_as::<_, AboutSection>(&query)
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }

    /// Upsert the about section for a project.
    ///
    /// `label`, `title`, and `description1` are always written. An omitted
    /// `image` keeps the stored value on update (`COALESCE($5, ...)` against
    /// the existing column, not `EXCLUDED`, so a fresh row still gets NULL).
    pub async fn upsert(
        pool: &PgPool,
        project_id: DbId,
        label: &str,
        title: &str,
        description1: &str,
        image: Option<&str>,
    ) -> Result<AboutSection, sqlx::Error> {
        let query = format!(
            "INSERT INTO about_sections (project_id, label, title, description1, image)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT (project_id) DO UPDATE SET
                label = $2,
                title = $3,
                description1 = $4,
                image = COALESCE($5, about_sections.image)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AboutSection>(&query)
            .bind(project_id)
            .bind(label)
            .bind(title)
            .bind(description1)
            .bind(image)
            .fetch_one(pool)
            .await
    }
}
