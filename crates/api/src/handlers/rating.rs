//! Handler for public star-rating submissions.

use axum::extract::State;
use axum::Json;
use vitrine_core::error::CoreError;
use vitrine_core::validate;
use vitrine_db::models::rating::{RatingSummary, SubmitRating};
use vitrine_db::repositories::RatingRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::ensure_project;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/rating
///
/// Append a visitor rating (1..=5 stars) and return the project's new
/// aggregate. Unauthenticated: the widget sits on the public page.
pub async fn submit(
    State(state): State<AppState>,
    Json(input): Json<SubmitRating>,
) -> AppResult<Json<DataResponse<RatingSummary>>> {
    let project_id = input
        .project_id
        .ok_or_else(|| AppError::Core(CoreError::Validation("projectId is required".into())))?;
    let stars = input
        .stars
        .ok_or_else(|| AppError::Core(CoreError::Validation("stars is required".into())))?;
    validate::stars(stars)?;

    ensure_project(&state.pool, project_id).await?;

    RatingRepo::insert(&state.pool, project_id, stars).await?;
    let summary = RatingRepo::summary(&state.pool, project_id).await?;

    state.invalidator.content_changed(project_id).await;

    Ok(Json(DataResponse { data: summary }))
}
