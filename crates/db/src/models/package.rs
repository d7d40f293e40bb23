//! Pricing package model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vitrine_core::types::{DbId, Timestamp};

/// A package row from the `packages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub id: DbId,
    pub project_id: DbId,
    pub title: String,
    pub image: String,
    pub features: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a package. The target project travels in the body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePackage {
    pub project_id: Option<DbId>,
    pub title: Option<String>,
    pub image: Option<String>,
    pub features: Option<Vec<String>>,
}

/// DTO for a partial package update. Omitted fields keep their value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePackage {
    pub title: Option<String>,
    pub image: Option<String>,
    pub features: Option<Vec<String>>,
}
