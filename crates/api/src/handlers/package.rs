//! Handlers for the `/package` resource and the public package list.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use vitrine_core::error::CoreError;
use vitrine_core::types::DbId;
use vitrine_core::validate;
use vitrine_db::models::package::{CreatePackage, Package, UpdatePackage};
use vitrine_db::repositories::PackageRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::ensure_project;
use crate::middleware::auth::AuthAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/package
///
/// Create a pricing package. The target project travels in the body and
/// must exist; features must be non-empty strings.
pub async fn create(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Json(input): Json<CreatePackage>,
) -> AppResult<impl IntoResponse> {
    let project_id = input
        .project_id
        .ok_or_else(|| AppError::Core(CoreError::Validation("projectId is required".into())))?;
    let title = validate::required_text("title", input.title.as_deref())?;
    let image = validate::required_text("image", input.image.as_deref())?;
    let features = validate::feature_list(input.features.as_deref().unwrap_or(&[]))?;

    ensure_project(&state.pool, project_id).await?;

    let package = PackageRepo::create(&state.pool, project_id, &title, &image, &features).await?;

    state.invalidator.content_changed(project_id).await;

    Ok((StatusCode::CREATED, Json(DataResponse { data: package })))
}

/// PUT /api/package/{id}
///
/// Partial update: omitted fields keep their stored values; supplied
/// fields are validated the same as on create.
pub async fn update(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdatePackage>,
) -> AppResult<Json<DataResponse<Package>>> {
    if let Some(title) = &input.title {
        if title.trim().is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                "title must not be empty".into(),
            )));
        }
    }
    if let Some(image) = &input.image {
        if image.trim().is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                "image must not be empty".into(),
            )));
        }
    }
    if let Some(features) = input.features.take() {
        input.features = Some(validate::feature_list(&features)?);
    }

    let package = PackageRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Package",
            id,
        }))?;

    state.invalidator.content_changed(package.project_id).await;

    Ok(Json(DataResponse { data: package }))
}

/// DELETE /api/package/{id}
pub async fn delete(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let package = PackageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Package",
            id,
        }))?;

    let deleted = PackageRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Package",
            id,
        }));
    }

    state.invalidator.content_changed(package.project_id).await;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/project/{id}/packages
///
/// Public list in creation order; pricing tiers render basic to premium
/// as entered.
pub async fn list_public(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Package>>>> {
    ensure_project(&state.pool, id).await?;
    let packages = PackageRepo::list_by_project(&state.pool, id).await?;
    Ok(Json(DataResponse { data: packages }))
}
