//! Route definitions for the public `/project` reads.

use axum::routing::get;
use axum::Router;

use crate::handlers::{package, project};
use crate::state::AppState;

/// Routes mounted at `/project`. All public; the first two are served from
/// the read cache when warm.
///
/// ```text
/// GET /{id}/main-data  -> project::public_content
/// GET /{id}/metadata   -> project::public_metadata
/// GET /{id}/packages   -> package::list_public
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}/main-data", get(project::public_content))
        .route("/{id}/metadata", get(project::public_metadata))
        .route("/{id}/packages", get(package::list_public))
}
