//! Handlers for project creation, the public read projection, and the
//! cache-flush endpoints the frontend revalidation flow calls back into.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use vitrine_core::error::CoreError;
use vitrine_core::types::DbId;
use vitrine_core::validate;
use vitrine_db::models::project::CreateProject;
use vitrine_db::repositories::{ContentRepo, ProjectRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/create-project
///
/// Create a project together with every section present in the nested
/// payload, in one transaction. The slug is pre-checked so a duplicate
/// gets a friendly 409 before the insert races the unique index.
pub async fn create_project(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Json(input): Json<CreateProject>,
) -> AppResult<impl IntoResponse> {
    let slug = validate::required_text("projectId", input.project_id.as_deref())?;
    let name = validate::required_text("name", input.name.as_deref())?;
    let description = validate::required_text("description", input.description.as_deref())?;

    if ProjectRepo::find_by_slug(&state.pool, &slug).await?.is_some() {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "A project with id \"{slug}\" already exists"
        ))));
    }

    let project =
        ProjectRepo::create_full(&state.pool, &slug, &name, &description, &input).await?;

    tracing::info!(project_id = project.id, slug = %project.slug, "Project created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: project })))
}

/// GET /api/project/{id}/main-data
///
/// The denormalized projection the public site renders from. Served from
/// the content cache when warm; a miss reads the database and fills it.
pub async fn public_content(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<serde_json::Value>>> {
    if let Some(cached) = state.cache.content(id).await {
        return Ok(Json(DataResponse { data: cached }));
    }

    let content = ContentRepo::project_content(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    let data = serde_json::to_value(&content)
        .map_err(|e| AppError::InternalError(format!("Projection serialization error: {e}")))?;
    state.cache.store_content(id, data.clone()).await;

    Ok(Json(DataResponse { data }))
}

/// GET /api/project/{id}/metadata
///
/// SEO metadata built from site settings, cached in the metadata scope.
pub async fn public_metadata(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<serde_json::Value>>> {
    if let Some(cached) = state.cache.metadata(id).await {
        return Ok(Json(DataResponse { data: cached }));
    }

    let metadata = ContentRepo::project_metadata(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Site settings",
            id,
        }))?;

    let data = serde_json::to_value(&metadata)
        .map_err(|e| AppError::InternalError(format!("Metadata serialization error: {e}")))?;
    state.cache.store_metadata(id, data.clone()).await;

    Ok(Json(DataResponse { data }))
}

/// GET /api/revalidate-main-data -- flush the whole content scope.
pub async fn revalidate_content(
    State(state): State<AppState>,
) -> Json<DataResponse<serde_json::Value>> {
    state.cache.flush_content().await;
    tracing::info!("Content cache flushed");
    Json(DataResponse {
        data: serde_json::json!({ "revalidated": true }),
    })
}

/// GET /api/revalidate-metatags -- flush the whole metadata scope.
pub async fn revalidate_metadata(
    State(state): State<AppState>,
) -> Json<DataResponse<serde_json::Value>> {
    state.cache.flush_metadata().await;
    tracing::info!("Metadata cache flushed");
    Json(DataResponse {
        data: serde_json::json!({ "revalidated": true }),
    })
}
