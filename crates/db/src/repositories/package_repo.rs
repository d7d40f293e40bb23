//! Repository for the `packages` table.

use sqlx::PgPool;
use vitrine_core::types::DbId;

use crate::models::package::{Package, UpdatePackage};

/// Column list shared across queries.
const COLUMNS: &str = "id, project_id, title, image, features, created_at, updated_at";

/// Provides CRUD operations for pricing packages.
pub struct PackageRepo;

impl PackageRepo {
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        title: &str,
        image: &str,
        features: &[String],
    ) -> Result<Package, sqlx::Error> {
        let query = format!(
            "INSERT INTO packages (project_id, title, image, features)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Package>(&query)
            .bind(project_id)
            .bind(title)
            .bind(image)
            .bind(features)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Package>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM packages WHERE id = $1");
        sqlx::query_as::<_, Package>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's packages in creation order, the order the pricing
    /// tiers were entered in.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Package>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM packages WHERE project_id = $1 ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Package>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update a package. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePackage,
    ) -> Result<Option<Package>, sqlx::Error> {
        let query = format!(
            "UPDATE packages SET
                title = COALESCE($2, title),
                image = COALESCE($3, image),
                features = COALESCE($4, features)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Package>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.image)
            .bind(&input.features)
            .fetch_optional(pool)
            .await
    }

    /// Delete a package by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM packages WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
