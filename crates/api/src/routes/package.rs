//! Route definitions for the `/package` resource (admin CRUD).

use axum::routing::{post, put};
use axum::Router;

use crate::handlers::package;
use crate::state::AppState;

/// Routes mounted at `/package`.
///
/// ```text
/// POST   /      -> create
/// PUT    /{id}  -> update (partial)
/// DELETE /{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(package::create))
        .route("/{id}", put(package::update).delete(package::delete))
}
