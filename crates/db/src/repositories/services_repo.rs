//! Repository for the `services_sections` and `services` tables.

use sqlx::PgPool;
use vitrine_core::icons::normalize_icon_key;
use vitrine_core::types::DbId;

use crate::models::services::{Service, ServiceOwner, ServicesSection};

/// Column list for the section header.
const SECTION_COLUMNS: &str =
    "id, project_id, label, title, description, created_at, updated_at";

/// Column list for individual service rows.
const SERVICE_COLUMNS: &str =
    "id, section_id, icon, title, description, created_at, updated_at";

/// Provides data access for the services section and its items.
pub struct ServicesRepo;

impl ServicesRepo {
    pub async fn find_section_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Option<ServicesSection>, sqlx::Error> {
        let query = format!("SELECT {SECTION_COLUMNS} FROM services_sections WHERE project_id = $1");
        sqlx::query_as::<_, ServicesSection>(&query)
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
    ) -> Result<ServicesSection, sqlx::Error> {
        let query = format!(
            "INSERT INTO services_sections (project_id, label, title, description)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (project_id) DO UPDATE SET
                label = EXCLUDED.label,
                title = EXCLUDED.title,
                description = EXCLUDED.description
             RETURNING {SECTION_COLUMNS}"
        );
        sqlx::query_as::<_, ServicesSection>(&query)
            .bind(project_id)
            .bind(label)
            .bind(title)
            .bind(description)
            .fetch_one(pool)
            .await
    }

    /// List a section's services in creation order, matching the order the
    /// public page renders them in.
    pub async fn list_items(
        pool: &PgPool,
        section_id: DbId,
    ) -> Result<Vec<Service>, sqlx::Error> {
        let query = format!(
            "SELECT {SERVICE_COLUMNS} FROM services WHERE section_id = $1 ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(section_id)
            .fetch_all(pool)
            .await
    }

    /// Insert a service. The icon key is normalized to its canonical form
    /// so every stored row maps to a renderable icon.
    pub async fn insert_item(
        pool: &PgPool,
        section_id: DbId,
        icon: &str,
        title: &str,
        description: &str,
    ) -> Result<Service, sqlx::Error> {
        let icon = normalize_icon_key(icon);
        let query = format!(
            "INSERT INTO services (section_id, icon, title, description)
             VALUES ($1, $2, $3, $4)
             RETURNING {SERVICE_COLUMNS}"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(section_id)
            .bind(&icon)
            .bind(title)
            .bind(description)
            .fetch_one(pool)
            .await
    }

    /// Resolve which section and project a service belongs to.
    pub async fn find_item_owner(
        pool: &PgPool,
        service_id: DbId,
    ) -> Result<Option<ServiceOwner>, sqlx::Error> {
        sqlx::query_as::<_, ServiceOwner>(
            "SELECT s.id, s.section_id, sec.project_id
             FROM services s
             JOIN services_sections sec ON sec.id = s.section_id
             WHERE s.id = $1",
        )
        .bind(service_id)
        .fetch_optional(pool)
        .await
    }

    pub async fn update_item(
        pool: &PgPool,
        service_id: DbId,
        icon: &str,
        title: &str,
        description: &str,
    ) -> Result<Option<Service>, sqlx::Error> {
        let icon = normalize_icon_key(icon);
        let query = format!(
            "UPDATE services SET icon = $2, title = $3, description = $4
             WHERE id = $1
             RETURNING {SERVICE_COLUMNS}"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(service_id)
            .bind(&icon)
            .bind(title)
            .bind(description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a service by ID. Returns `true` if a row was removed.
    pub async fn delete_item(pool: &PgPool, service_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(service_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
