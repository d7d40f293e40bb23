//! Dashboard handlers for the services section and its items.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use vitrine_core::error::CoreError;
use vitrine_core::types::DbId;
use vitrine_core::validate;
use vitrine_db::models::services::{
    DeleteService, Service, ServiceInput, ServicesSection, ServicesSectionWithItems,
    UpdateService, UpsertServicesSection,
};
use vitrine_db::repositories::ServicesRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::ensure_project;
use crate::middleware::auth::AuthAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// PUT /api/dashboard/{project_id}/update-services
///
/// Upsert the section header (label, title, description all required).
pub async fn update_section(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(project_id): Path<DbId>,
    Json(input): Json<UpsertServicesSection>,
) -> AppResult<Json<DataResponse<ServicesSection>>> {
    let label = validate::required_text("label", input.label.as_deref())?;
    let title = validate::required_text("title", input.title.as_deref())?;
    let description = validate::required_text("description", input.description.as_deref())?;

    ensure_project(&state.pool, project_id).await?;

    let section =
        ServicesRepo::upsert_section(&state.pool, project_id, &label, &title, &description)
            .await?;

    state.invalidator.content_changed(project_id).await;

    Ok(Json(DataResponse { data: section }))
}

/// GET /api/dashboard/{project_id}/get-services
///
/// The section header with its items in creation order.
pub async fn get_section(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<DataResponse<ServicesSectionWithItems>>> {
    ensure_project(&state.pool, project_id).await?;

    let section = ServicesRepo::find_section_by_project(&state.pool, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Services section",
            id: project_id,
        }))?;

    let services = ServicesRepo::list_items(&state.pool, section.id).await?;

    Ok(Json(DataResponse {
        data: ServicesSectionWithItems { section, services },
    }))
}

/// POST /api/dashboard/{project_id}/add-service
///
/// Append a service to the project's section. The section must already
/// exist; items cannot be created against a missing parent.
pub async fn add_service(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(project_id): Path<DbId>,
    Json(input): Json<ServiceInput>,
) -> AppResult<impl IntoResponse> {
    let icon = validate::required_text("icon", input.icon.as_deref())?;
    let title = validate::required_text("title", input.title.as_deref())?;
    let description = validate::required_text("description", input.description.as_deref())?;

    ensure_project(&state.pool, project_id).await?;

    let section = ServicesRepo::find_section_by_project(&state.pool, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Services section",
            id: project_id,
        }))?;

    let service =
        ServicesRepo::insert_item(&state.pool, section.id, &icon, &title, &description).await?;

    state.invalidator.content_changed(project_id).await;

    Ok((StatusCode::CREATED, Json(DataResponse { data: service })))
}

/// PUT /api/dashboard/{project_id}/update-service
///
/// Update one service by id (the id travels in the body). The service's
/// parent chain is re-resolved first; a service owned by another project
/// is a 403 and nothing is written.
pub async fn update_service(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(project_id): Path<DbId>,
    Json(input): Json<UpdateService>,
) -> AppResult<Json<DataResponse<Service>>> {
    let service_id = input
        .service_id
        .ok_or_else(|| AppError::Core(CoreError::Validation("serviceId is required".into())))?;
    let icon = validate::required_text("icon", input.icon.as_deref())?;
    let title = validate::required_text("title", input.title.as_deref())?;
    let description = validate::required_text("description", input.description.as_deref())?;

    check_service_owner(&state, project_id, service_id).await?;

    let service = ServicesRepo::update_item(&state.pool, service_id, &icon, &title, &description)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Service",
            id: service_id,
        }))?;

    state.invalidator.content_changed(project_id).await;

    Ok(Json(DataResponse { data: service }))
}

/// DELETE /api/dashboard/{project_id}/delete-service
pub async fn delete_service(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(project_id): Path<DbId>,
    Json(input): Json<DeleteService>,
) -> AppResult<StatusCode> {
    let service_id = input
        .service_id
        .ok_or_else(|| AppError::Core(CoreError::Validation("serviceId is required".into())))?;

    check_service_owner(&state, project_id, service_id).await?;

    let deleted = ServicesRepo::delete_item(&state.pool, service_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Service",
            id: service_id,
        }));
    }

    state.invalidator.content_changed(project_id).await;

    Ok(StatusCode::NO_CONTENT)
}

/// 404 when the service does not exist, 403 when it belongs to a
/// different project than the route names.
async fn check_service_owner(
    state: &AppState,
    project_id: DbId,
    service_id: DbId,
) -> Result<(), AppError> {
    let owner = ServicesRepo::find_item_owner(&state.pool, service_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Service",
            id: service_id,
        }))?;

    if owner.project_id != project_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Service does not belong to this project".into(),
        )));
    }
    Ok(())
}
