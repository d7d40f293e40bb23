//! Handlers for the `/admin` auth resource (login, register, logout).

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use axum::response::{AppendHeaders, IntoResponse};
use axum::Json;
use vitrine_core::error::CoreError;
use vitrine_core::validate;
use vitrine_db::models::admin::{AdminPublic, CreateAdmin, LoginRequest, RegisterRequest};
use vitrine_db::repositories::AdminRepo;

use crate::auth::cookie::{clear_session_cookie, session_cookie};
use crate::auth::jwt::generate_token;
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/admin/login
///
/// Verify credentials and establish a session by setting the `token`
/// cookie. Unknown email and wrong password share one message so the
/// response does not reveal which admins exist.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let email = validate::required_text("email", input.email.as_deref())?;
    let password = validate::required_text("password", input.password.as_deref())?;
    let email = validate::normalize_email(&email);

    let admin = AdminRepo::find_by_email(&state.pool, &email)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
        })?;

    let password_valid = verify_password(&password, &admin.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid email or password".into(),
        )));
    }

    let token = generate_token(admin.id, &admin.email, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let max_age = state.config.jwt.expiry_days * 24 * 60 * 60;
    let cookie = session_cookie(&token, max_age, state.config.jwt.cookie_secure);

    tracing::info!(admin_id = admin.id, "Admin logged in");

    Ok((
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(DataResponse {
            data: AdminPublic::from(admin),
        }),
    ))
}

/// POST /api/admin/register
///
/// Create an admin account. Gated by the shared registration secret; a
/// wrong or missing secret is a 400 like any other invalid field.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<impl IntoResponse> {
    let email = validate::required_text("email", input.email.as_deref())?;
    let password = validate::required_text("password", input.password.as_deref())?;
    let secret = validate::required_text("secret", input.secret.as_deref())?;

    if secret != state.config.registration_secret {
        return Err(AppError::Core(CoreError::Validation(
            "Invalid registration secret".into(),
        )));
    }

    validate_password_strength(&password, validate::MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let email = validate::normalize_email(&email);

    if AdminRepo::find_by_email(&state.pool, &email).await?.is_some() {
        return Err(AppError::Core(CoreError::Conflict(
            "Admin already exists".into(),
        )));
    }

    let password_hash = hash_password(&password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let admin = AdminRepo::create(
        &state.pool,
        &CreateAdmin {
            email,
            password_hash,
        },
    )
    .await?;

    tracing::info!(admin_id = admin.id, "Admin registered");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: AdminPublic::from(admin),
        }),
    ))
}

/// POST /api/admin/logout
///
/// Clear the session cookie. Stateless tokens have nothing to revoke
/// server-side, so this succeeds whether or not a session existed.
pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    let cookie = clear_session_cookie(state.config.jwt.cookie_secure);
    (
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(DataResponse {
            data: serde_json::json!({ "success": true }),
        }),
    )
}
