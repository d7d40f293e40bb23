//! Route definitions for the admin dashboard.
//!
//! Every route is scoped by the project id and requires an authenticated
//! admin. Paths are kept verbatim from the deployed dashboard's fetch
//! calls -- including the `update-keywrords` typo, which is part of the
//! wire contract now.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::{dashboard, gallery, services, why_us};
use crate::state::AppState;

/// Routes mounted at `/dashboard`.
///
/// ```text
/// PUT    /{project_id}/update-project-main-data  -> dashboard::update_main_data
/// GET    /{project_id}/get-project-main-data     -> dashboard::get_main_data
/// PUT    /{project_id}/update-about-project      -> dashboard::update_about
/// GET    /{project_id}/get-about-project         -> dashboard::get_about
/// PUT    /{project_id}/update-keywrords          -> dashboard::update_keywords
/// GET    /{project_id}/get-keywords              -> dashboard::get_keywords
/// PUT    /{project_id}/update-services           -> services::update_section
/// GET    /{project_id}/get-services              -> services::get_section
/// POST   /{project_id}/add-service               -> services::add_service
/// PUT    /{project_id}/update-service            -> services::update_service
/// DELETE /{project_id}/delete-service            -> services::delete_service
/// PUT    /{project_id}/update-why-us-section     -> why_us::update_section
/// GET    /{project_id}/get-whyus                 -> why_us::get_section
/// POST   /{project_id}/add-why-us-feature        -> why_us::add_feature
/// PUT    /{project_id}/update-why-us-feature     -> why_us::update_feature
/// DELETE /{project_id}/delete-why-us-feature     -> why_us::delete_feature
/// POST   /{project_id}/add-gallery-image         -> gallery::add_image
/// DELETE /{project_id}/delete-gallery-image      -> gallery::delete_image
/// GET    /{project_id}/get-gallery-images        -> gallery::list_images
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{project_id}/update-project-main-data",
            put(dashboard::update_main_data),
        )
        .route(
            "/{project_id}/get-project-main-data",
            get(dashboard::get_main_data),
        )
        .route(
            "/{project_id}/update-about-project",
            put(dashboard::update_about),
        )
        .route(
            "/{project_id}/get-about-project",
            get(dashboard::get_about),
        )
        .route(
            "/{project_id}/update-keywrords",
            put(dashboard::update_keywords),
        )
        .route("/{project_id}/get-keywords", get(dashboard::get_keywords))
        .route(
            "/{project_id}/update-services",
            put(services::update_section),
        )
        .route("/{project_id}/get-services", get(services::get_section))
        .route("/{project_id}/add-service", post(services::add_service))
        .route(
            "/{project_id}/update-service",
            put(services::update_service),
        )
        .route(
            "/{project_id}/delete-service",
            delete(services::delete_service),
        )
        .route(
            "/{project_id}/update-why-us-section",
            put(why_us::update_section),
        )
        .route("/{project_id}/get-whyus", get(why_us::get_section))
        .route(
            "/{project_id}/add-why-us-feature",
            post(why_us::add_feature),
        )
        .route(
            "/{project_id}/update-why-us-feature",
            put(why_us::update_feature),
        )
        .route(
            "/{project_id}/delete-why-us-feature",
            delete(why_us::delete_feature),
        )
        .route(
            "/{project_id}/add-gallery-image",
            post(gallery::add_image),
        )
        .route(
            "/{project_id}/delete-gallery-image",
            delete(gallery::delete_image),
        )
        .route(
            "/{project_id}/get-gallery-images",
            get(gallery::list_images),
        )
}
