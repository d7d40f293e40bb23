//! Dashboard handlers for the why-us section and its features. Mirrors the
//! services pair.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use vitrine_core::error::CoreError;
use vitrine_core::types::DbId;
use vitrine_core::validate;
use vitrine_db::models::why_us::{
    DeleteWhyUsFeature, UpdateWhyUsFeature, UpsertWhyUsSection, WhyUsFeature, WhyUsFeatureInput,
    WhyUsSection, WhyUsSectionWithFeatures,
};
use vitrine_db::repositories::WhyUsRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::ensure_project;
use crate::middleware::auth::AuthAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// PUT /api/dashboard/{project_id}/update-why-us-section
pub async fn update_section(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(project_id): Path<DbId>,
    Json(input): Json<UpsertWhyUsSection>,
) -> AppResult<Json<DataResponse<WhyUsSection>>> {
    let label = validate::required_text("label", input.label.as_deref())?;
    let title = validate::required_text("title", input.title.as_deref())?;
    let description = validate::required_text("description", input.description.as_deref())?;

    ensure_project(&state.pool, project_id).await?;

    let section =
        WhyUsRepo::upsert_section(&state.pool, project_id, &label, &title, &description).await?;

    state.invalidator.content_changed(project_id).await;

    Ok(Json(DataResponse { data: section }))
}

/// GET /api/dashboard/{project_id}/get-whyus
pub async fn get_section(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<DataResponse<WhyUsSectionWithFeatures>>> {
    ensure_project(&state.pool, project_id).await?;

    let section = WhyUsRepo::find_section_by_project(&state.pool, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Why-us section",
            id: project_id,
        }))?;

    let features = WhyUsRepo::list_features(&state.pool, section.id).await?;

    Ok(Json(DataResponse {
        data: WhyUsSectionWithFeatures { section, features },
    }))
}

/// POST /api/dashboard/{project_id}/add-why-us-feature
pub async fn add_feature(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(project_id): Path<DbId>,
    Json(input): Json<WhyUsFeatureInput>,
) -> AppResult<impl IntoResponse> {
    let icon = validate::required_text("icon", input.icon.as_deref())?;
    let title = validate::required_text("title", input.title.as_deref())?;
    let description = validate::required_text("description", input.description.as_deref())?;

    ensure_project(&state.pool, project_id).await?;

    let section = WhyUsRepo::find_section_by_project(&state.pool, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Why-us section",
            id: project_id,
        }))?;

    let feature =
        WhyUsRepo::insert_feature(&state.pool, section.id, &icon, &title, &description).await?;

    state.invalidator.content_changed(project_id).await;

    Ok((StatusCode::CREATED, Json(DataResponse { data: feature })))
}

/// PUT /api/dashboard/{project_id}/update-why-us-feature
pub async fn update_feature(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(project_id): Path<DbId>,
    Json(input): Json<UpdateWhyUsFeature>,
) -> AppResult<Json<DataResponse<WhyUsFeature>>> {
    let feature_id = input
        .feature_id
        .ok_or_else(|| AppError::Core(CoreError::Validation("featureId is required".into())))?;
    let icon = validate::required_text("icon", input.icon.as_deref())?;
    let title = validate::required_text("title", input.title.as_deref())?;
    let description = validate::required_text("description", input.description.as_deref())?;

    check_feature_owner(&state, project_id, feature_id).await?;

    let feature = WhyUsRepo::update_feature(&state.pool, feature_id, &icon, &title, &description)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Why-us feature",
            id: feature_id,
        }))?;

    state.invalidator.content_changed(project_id).await;

    Ok(Json(DataResponse { data: feature }))
}

/// DELETE /api/dashboard/{project_id}/delete-why-us-feature
pub async fn delete_feature(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(project_id): Path<DbId>,
    Json(input): Json<DeleteWhyUsFeature>,
) -> AppResult<StatusCode> {
    let feature_id = input
        .feature_id
        .ok_or_else(|| AppError::Core(CoreError::Validation("featureId is required".into())))?;

    check_feature_owner(&state, project_id, feature_id).await?;

    let deleted = WhyUsRepo::delete_feature(&state.pool, feature_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Why-us feature",
            id: feature_id,
        }));
    }

    state.invalidator.content_changed(project_id).await;

    Ok(StatusCode::NO_CONTENT)
}

/// 404 when the feature does not exist, 403 when it belongs to a
/// different project than the route names.
async fn check_feature_owner(
    state: &AppState,
    project_id: DbId,
    feature_id: DbId,
) -> Result<(), AppError> {
    let owner = WhyUsRepo::find_feature_owner(&state.pool, feature_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Why-us feature",
            id: feature_id,
        }))?;

    if owner.project_id != project_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Feature does not belong to this project".into(),
        )));
    }
    Ok(())
}
