//! Route definitions for the `/admin` auth resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// POST /login     -> login (sets the session cookie)
/// POST /register  -> register (shared-secret gated)
/// POST /logout    -> logout (clears the session cookie)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/register", post(auth::register))
        .route("/logout", post(auth::logout))
}
