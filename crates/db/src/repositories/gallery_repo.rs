//! Repository for the `gallery_images` table.

use sqlx::PgPool;
use vitrine_core::types::DbId;

use crate::models::gallery::GalleryImage;

/// Column list shared across queries.
const COLUMNS: &str = "id, project_id, url, alt, created_at, updated_at";

/// Provides data access for project gallery images.
pub struct GalleryRepo;

impl GalleryRepo {
    /// List a project's gallery newest first, matching the dashboard and
    /// the public page (the only collection not in creation order).
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<GalleryImage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM gallery_images WHERE project_id = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, GalleryImage>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<GalleryImage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM gallery_images WHERE id = $1");
        sqlx::query_as::<_, GalleryImage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn insert(
        pool: &PgPool,
        project_id: DbId,
        url: &str,
        alt: Option<&str>,
    ) -> Result<GalleryImage, sqlx::Error> {
        let query = format!(
            "INSERT INTO gallery_images (project_id, url, alt)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GalleryImage>(&query)
            .bind(project_id)
            .bind(url)
            .bind(alt)
            .fetch_one(pool)
            .await
    }

    /// Delete a gallery image by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM gallery_images WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
