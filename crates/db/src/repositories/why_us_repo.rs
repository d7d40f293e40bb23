//! Repository for the `why_us_sections` and `why_us_features` tables.

use sqlx::PgPool;
use vitrine_core::icons::normalize_icon_key;
use vitrine_core::types::DbId;

use crate::models::why_us::{WhyUsFeature, WhyUsFeatureOwner, WhyUsSection};

/// Column list for the section header.
const SECTION_COLUMNS: &str =
    "id, project_id, label, title, description, created_at, updated_at";

/// Column list for individual feature rows.
const FEATURE_COLUMNS: &str =
    "id, section_id, icon, title, description, created_at, updated_at";

/// Provides data access for the why-us section and its features.
pub struct WhyUsRepo;

impl WhyUsRepo {
    pub async fn find_section_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Option<WhyUsSection>, sqlx::Error> {
        let query = format!("SELECT {SECTION_COLUMNS} FROM why_us_sections WHERE project_id = $1");
        sqlx::query_as::<_, WhyUsSection>(&query)
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }

    /// Upsert the section header. All three fields are required by the
    /// handler, so the conflict branch overwrites them unconditionally.
    pub async fn upsert_section(
        pool: &PgPool,
        project_id: DbId,
        label: &str,
        title: &str,
        description: &str,
    ) -> Result<WhyUsSection, sqlx::Error> {
        let query = format!(
            "INSERT INTO why_us_sections (project_id, label, title, description)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (project_id) DO UPDATE SET
                label = EXCLUDED.label,
                title = EXCLUDED.title,
                description = EXCLUDED.description
             RETURNING {SECTION_COLUMNS}"
        );
        sqlx::query_as::<_, WhyUsSection>(&query)
            .bind(project_id)
            .bind(label)
            .bind(title)
            .bind(description)
            .fetch_one(pool)
            .await
    }

    /// List a section's features in creation order.
    pub async fn list_features(
        pool: &PgPool,
        section_id: DbId,
    ) -> Result<Vec<WhyUsFeature>, sqlx::Error> {
        let query = format!(
            "SELECT {FEATURE_COLUMNS} FROM why_us_features WHERE section_id = $1 ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, WhyUsFeature>(&query)
            .bind(section_id)
            .fetch_all(pool)
            .await
    }

    /// Insert a feature. The icon key is normalized to its canonical form
    /// so every stored row maps to a renderable icon.
    pub async fn insert_feature(
        pool: &PgPool,
        section_id: DbId,
        icon: &str,
        title: &str,
        description: &str,
    ) -> Result<WhyUsFeature, sqlx::Error> {
        let icon = normalize_icon_key(icon);
        let query = format!(
            "INSERT INTO why_us_features (section_id, icon, title, description)
             VALUES ($1, $2, $3, $4)
             RETURNING {FEATURE_COLUMNS}"
        );
        sqlx::query_as::<_, WhyUsFeature>(&query)
            .bind(section_id)
            .bind(&icon)
            .bind(title)
            .bind(description)
            .fetch_one(pool)
            .await
    }

    /// Resolve which section and project a feature belongs to.
    pub async fn find_feature_owner(
        pool: &PgPool,
        feature_id: DbId,
    ) -> Result<Option<WhyUsFeatureOwner>, sqlx::Error> {
        sqlx::query_as::<_, WhyUsFeatureOwner>(
            "SELECT f.id, f.section_id, sec.project_id
             FROM why_us_features f
             JOIN why_us_sections sec ON sec.id = f.section_id
             WHERE f.id = $1",
        )
        .bind(feature_id)
        .fetch_optional(pool)
        .await
    }

    pub async fn update_feature(
        pool: &PgPool,
        feature_id: DbId,
        icon: &str,
        title: &str,
        description: &str,
    ) -> Result<Option<WhyUsFeature>, sqlx::Error> {
        let icon = normalize_icon_key(icon);
        let query = format!(
            "UPDATE why_us_features SET icon = $2, title = $3, description = $4
             WHERE id = $1
             RETURNING {FEATURE_COLUMNS}"
        );
        sqlx::query_as::<_, WhyUsFeature>(&query)
            .bind(feature_id)
            .bind(&icon)
            .bind(title)
            .bind(description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a feature by ID. Returns `true` if a row was removed.
    pub async fn delete_feature(pool: &PgPool, feature_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM why_us_features WHERE id = $1")
            .bind(feature_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
