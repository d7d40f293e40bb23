//! Services section and service item models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vitrine_core::types::{DbId, Timestamp};

/// A services section row from the `services_sections` table (one per project).
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicesSection {
    pub id: DbId,
    pub project_id: DbId,
    pub label: String,
    pub title: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A service row from the `services` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: DbId,
    pub section_id: DbId,
    pub icon: String,
    pub title: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Ownership lookup for a service: the section and project it belongs to.
/// Used to reject cross-project mutations before touching the row.
#[derive(Debug, Clone, FromRow)]
pub struct ServiceOwner {
    pub id: DbId,
    pub section_id: DbId,
    pub project_id: DbId,
}

/// Upsert payload for the services section header (label/title/description
/// all required).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertServicesSection {
    pub label: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Item payload shared by nested creation and the add-service endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInput {
    pub icon: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Nested services payload inside project creation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicesSectionInput {
    pub label: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub services: Option<Vec<ServiceInput>>,
}

/// Update payload for a single service; the id travels in the body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateService {
    pub service_id: Option<DbId>,
    pub icon: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Delete payload for a single service.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteService {
    pub service_id: Option<DbId>,
}

/// Services section with its items, as the dashboard reads it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicesSectionWithItems {
    #[serde(flatten)]
    pub section: ServicesSection,
    pub services: Vec<Service>,
}
