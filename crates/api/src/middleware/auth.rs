//! Session-cookie authentication extractor.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use vitrine_core::error::CoreError;
use vitrine_core::types::DbId;

use crate::auth::cookie::token_from_cookie_header;
use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated admin extracted from the JWT session cookie.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication:
///
/// ```ignore
/// async fn my_handler(admin: AuthAdmin) -> AppResult<Json<()>> {
///     tracing::info!(admin_id = admin.admin_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
///
/// The claims are trusted as-is once the signature verifies; no database
/// lookup happens per request.
#[derive(Debug, Clone)]
pub struct AuthAdmin {
    /// The admin's internal database id (from `claims.sub`).
    pub admin_id: DbId,
    /// The admin's email address (from `claims.email`).
    pub email: String,
}

impl FromRequestParts<AppState> for AuthAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get("cookie")
            .and_then(|v| v.to_str().ok())
            .and_then(token_from_cookie_header)
            .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Not authenticated".into())))?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        Ok(AuthAdmin {
            admin_id: claims.sub,
            email: claims.email,
        })
    }
}
