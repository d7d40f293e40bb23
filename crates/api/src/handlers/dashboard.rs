//! Dashboard handlers for the singleton sections: the combined main data
//! (project + site settings + hero), the about section, and SEO keywords.

use axum::extract::{Path, State};
use axum::Json;
use vitrine_core::error::CoreError;
use vitrine_core::types::DbId;
use vitrine_core::validate;
use vitrine_db::models::about::{AboutSection, UpsertAboutSection};
use vitrine_db::models::project::{MainData, MainDataView, UpdateMainData};
use vitrine_db::models::site_settings::{KeywordsData, UpdateKeywords};
use vitrine_db::repositories::{AboutRepo, ProjectRepo, SiteSettingsRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::ensure_project;
use crate::middleware::auth::AuthAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// PUT /api/dashboard/{project_id}/update-project-main-data
///
/// Transactional write across projects, site_settings, and hero_sections.
/// Omitted optional fields keep their stored values. Settings feed the SEO
/// document, so this invalidates both cache scopes.
pub async fn update_main_data(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(project_id): Path<DbId>,
    Json(input): Json<UpdateMainData>,
) -> AppResult<Json<DataResponse<MainData>>> {
    let name = validate::required_text("projectName", input.project_name.as_deref())?;
    let description =
        validate::required_text("projectDescription", input.project_description.as_deref())?;

    let main_data =
        ProjectRepo::update_main_data(&state.pool, project_id, &name, &description, &input)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Project",
                id: project_id,
            }))?;

    state.invalidator.content_changed(project_id).await;
    state.invalidator.metadata_changed(project_id).await;

    Ok(Json(DataResponse { data: main_data }))
}

/// GET /api/dashboard/{project_id}/get-project-main-data
pub async fn get_main_data(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<DataResponse<MainDataView>>> {
    let main_data = ProjectRepo::find_main_data(&state.pool, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }))?;
    Ok(Json(DataResponse { data: main_data }))
}

/// PUT /api/dashboard/{project_id}/update-about-project
///
/// Upsert the about section. An omitted `image` keeps the stored one; an
/// explicitly supplied value (including `""`) overwrites it.
pub async fn update_about(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(project_id): Path<DbId>,
    Json(input): Json<UpsertAboutSection>,
) -> AppResult<Json<DataResponse<AboutSection>>> {
    let label = validate::required_text("label", input.label.as_deref())?;
    let title = validate::required_text("title", input.title.as_deref())?;
    let description1 = validate::required_text("description1", input.description1.as_deref())?;

    ensure_project(&state.pool, project_id).await?;

    let about = AboutRepo::upsert(
        &state.pool,
        project_id,
        &label,
        &title,
        &description1,
        input.image.as_deref(),
    )
    .await?;

    state.invalidator.content_changed(project_id).await;

    Ok(Json(DataResponse { data: about }))
}

/// GET /api/dashboard/{project_id}/get-about-project
pub async fn get_about(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<DataResponse<AboutSection>>> {
    ensure_project(&state.pool, project_id).await?;

    let about = AboutRepo::find_by_project(&state.pool, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "About section",
            id: project_id,
        }))?;
    Ok(Json(DataResponse { data: about }))
}

/// PUT /api/dashboard/{project_id}/update-keywrords
///
/// Replace the SEO keyword list wholesale. The payload must be an array of
/// non-empty strings; anything else is rejected before the write, leaving
/// stored keywords untouched. (The route name typo is load-bearing: the
/// deployed dashboard calls it verbatim.)
pub async fn update_keywords(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(project_id): Path<DbId>,
    Json(input): Json<UpdateKeywords>,
) -> AppResult<Json<DataResponse<KeywordsData>>> {
    let value = input
        .keywords
        .ok_or_else(|| AppError::Core(CoreError::Validation("keywords is required".into())))?;
    let keywords = validate::keyword_list(&value)?;

    ensure_project(&state.pool, project_id).await?;

    let settings = SiteSettingsRepo::update_keywords(&state.pool, project_id, &keywords)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Site settings",
            id: project_id,
        }))?;

    state.invalidator.metadata_changed(project_id).await;

    Ok(Json(DataResponse {
        data: KeywordsData {
            keywords: settings.site_keywords,
            updated_at: settings.updated_at,
        },
    }))
}

/// GET /api/dashboard/{project_id}/get-keywords
pub async fn get_keywords(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<DataResponse<KeywordsData>>> {
    ensure_project(&state.pool, project_id).await?;

    let settings = SiteSettingsRepo::find_by_project(&state.pool, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Site settings",
            id: project_id,
        }))?;

    Ok(Json(DataResponse {
        data: KeywordsData {
            keywords: settings.site_keywords,
            updated_at: settings.updated_at,
        },
    }))
}
