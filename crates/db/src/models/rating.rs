//! Visitor star-rating DTOs. Rows are append-only; reads are aggregates.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vitrine_core::types::DbId;

/// Rating submission body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRating {
    pub project_id: Option<DbId>,
    pub stars: Option<i32>,
}

/// Aggregate rating for a project, as shown on the public page.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingSummary {
    pub average_rating: f64,
    pub total_ratings: i64,
}
