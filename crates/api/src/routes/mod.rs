pub mod auth;
pub mod dashboard;
pub mod health;
pub mod package;
pub mod project;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /admin/login                                     login (public)
/// /admin/register                                  register (public, secret-gated)
/// /admin/logout                                    logout (public)
///
/// /create-project                                  nested bulk create (admin)
///
/// /dashboard/{project_id}/update-project-main-data combined main-data upsert (admin)
/// /dashboard/{project_id}/get-project-main-data    main-data read (admin)
/// /dashboard/{project_id}/update-about-project     about upsert (admin)
/// /dashboard/{project_id}/get-about-project        about read (admin)
/// /dashboard/{project_id}/update-keywrords         keywords replace (admin)
/// /dashboard/{project_id}/get-keywords             keywords read (admin)
/// /dashboard/{project_id}/update-services          services section upsert (admin)
/// /dashboard/{project_id}/get-services             services read (admin)
/// /dashboard/{project_id}/add-service              add item (admin)
/// /dashboard/{project_id}/update-service           update item (admin)
/// /dashboard/{project_id}/delete-service           delete item (admin)
/// /dashboard/{project_id}/update-why-us-section    why-us section upsert (admin)
/// /dashboard/{project_id}/get-whyus                why-us read (admin)
/// /dashboard/{project_id}/add-why-us-feature       add feature (admin)
/// /dashboard/{project_id}/update-why-us-feature    update feature (admin)
/// /dashboard/{project_id}/delete-why-us-feature    delete feature (admin)
/// /dashboard/{project_id}/add-gallery-image        multipart upload + row (admin)
/// /dashboard/{project_id}/delete-gallery-image     delete image (admin)
/// /dashboard/{project_id}/get-gallery-images       gallery read (admin)
///
/// /upload-images                                   generic upload proxy (admin)
///
/// /package                                         create (admin)
/// /package/{id}                                    update, delete (admin)
///
/// /project/{id}/main-data                          public projection (cached)
/// /project/{id}/metadata                           public SEO metadata (cached)
/// /project/{id}/packages                           public package list
///
/// /rating                                          submit rating (public)
///
/// /revalidate-main-data                            flush content cache (public)
/// /revalidate-metatags                             flush metadata cache (public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Admin session routes (login, register, logout).
        .nest("/admin", auth::router())
        // Project creation with nested sections.
        .route("/create-project", post(handlers::project::create_project))
        // Per-project dashboard editing surface.
        .nest("/dashboard", dashboard::router())
        // Generic media upload proxy.
        .route("/upload-images", post(handlers::gallery::upload_image))
        // Pricing package CRUD.
        .nest("/package", package::router())
        // Public content reads.
        .nest("/project", project::router())
        // Public rating submissions.
        .route("/rating", post(handlers::rating::submit))
        // Cache flush hooks the frontend revalidation flow calls back into.
        .route(
            "/revalidate-main-data",
            get(handlers::project::revalidate_content),
        )
        .route(
            "/revalidate-metatags",
            get(handlers::project::revalidate_metadata),
        )
}
