//! HTTP-level integration tests for the admin auth endpoints.
//!
//! Tests cover login, registration gated by the shared secret, logout, the
//! session cookie round trip, and rejection of requests without a valid
//! cookie.

mod common;

use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use common::{
    body_json, create_test_admin, login_admin, post_json, post_json_auth, TEST_PASSWORD,
    TEST_REGISTRATION_SECRET,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

/// Successful login returns 200, sets the HttpOnly session cookie, and
/// returns the admin's public profile in the data envelope.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_success(pool: PgPool) {
    let admin = create_test_admin(&pool, "owner@test.com").await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "email": "owner@test.com", "password": TEST_PASSWORD });
    let response = post_json(app, "/api/admin/login", body).await;

    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response
        .headers()
        .get(SET_COOKIE)
        .expect("login must set the session cookie")
        .to_str()
        .unwrap()
        .to_string();
    assert!(set_cookie.starts_with("token="), "cookie name must be `token`");
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("SameSite=Lax"));
    assert!(set_cookie.contains("Path=/"));

    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], admin.id);
    assert_eq!(json["data"]["email"], "owner@test.com");
    assert!(json["data"]["createdAt"].is_string());
    assert!(
        json["data"].get("passwordHash").is_none(),
        "the password hash must never leave the server"
    );
}

/// Login with an incorrect password returns 401.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    create_test_admin(&pool, "wrongpw@test.com").await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "email": "wrongpw@test.com", "password": "incorrect_password" });
    let response = post_json(app, "/api/admin/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
    assert_eq!(json["error"], "Invalid email or password");
}

/// Login with an unknown email returns 401 with the SAME message as a wrong
/// password, so the response does not reveal which emails are registered.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_unknown_email(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "email": "ghost@test.com", "password": "whatever-pass" });
    let response = post_json(app, "/api/admin/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid email or password");
}

/// Missing email or password fields return 400, not 401.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_missing_fields(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/admin/login", serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "email": "someone@test.com" });
    let response = post_json(app, "/api/admin/login", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

/// The login email is matched case-insensitively and ignores padding.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_email_is_normalized(pool: PgPool) {
    create_test_admin(&pool, "case@test.com").await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "email": "  CASE@Test.COM ", "password": TEST_PASSWORD });
    let response = post_json(app, "/api/admin/login", body).await;

    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

/// Registering with the correct shared secret creates the admin and
/// returns 201 with the public profile.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_register_success(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let body = serde_json::json!({
        "email": "new-admin@test.com",
        "password": "a_long_enough_password",
        "secret": TEST_REGISTRATION_SECRET,
    });
    let response = post_json(app, "/api/admin/register", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["data"]["id"].is_number());
    assert_eq!(json["data"]["email"], "new-admin@test.com");

    // The new credentials must work immediately.
    let app = common::build_test_app(pool);
    let body =
        serde_json::json!({ "email": "new-admin@test.com", "password": "a_long_enough_password" });
    let response = post_json(app, "/api/admin/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
}

/// Registering an email that already exists returns 409.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_register_duplicate_email(pool: PgPool) {
    create_test_admin(&pool, "taken@test.com").await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "email": "taken@test.com",
        "password": "another_password_1",
        "secret": TEST_REGISTRATION_SECRET,
    });
    let response = post_json(app, "/api/admin/register", body).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
    assert_eq!(json["error"], "Admin already exists");
}

/// Registering with the wrong shared secret returns 400.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_register_wrong_secret(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "email": "intruder@test.com",
        "password": "whatever_password",
        "secret": "not-the-secret",
    });
    let response = post_json(app, "/api/admin/register", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid registration secret");
}

/// Passwords below the minimum length are rejected with 400.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_register_short_password(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "email": "shorty@test.com",
        "password": "short",
        "secret": TEST_REGISTRATION_SECRET,
    });
    let response = post_json(app, "/api/admin/register", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    let message = json["error"].as_str().unwrap_or("");
    assert!(
        message.contains("at least 8 characters"),
        "error should state the minimum length, got: {message}"
    );
}

// ---------------------------------------------------------------------------
// Session cookie round trip
// ---------------------------------------------------------------------------

/// The cookie issued by login authenticates subsequent dashboard requests.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_session_cookie_round_trip(pool: PgPool) {
    create_test_admin(&pool, "session@test.com").await;

    let app = common::build_test_app(pool.clone());
    let cookie = login_admin(app, "session@test.com", TEST_PASSWORD).await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({
        "projectId": "round-trip-site",
        "name": "Round Trip",
        "description": "Created through a logged-in session",
    });
    let response = post_json_auth(app, "/api/create-project", body, &cookie).await;

    assert_eq!(response.status(), StatusCode::CREATED);
}

/// Protected endpoints reject requests without a session cookie.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_protected_route_requires_cookie(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "projectId": "sneaky-site",
        "name": "Sneaky",
        "description": "No cookie attached",
    });
    let response = post_json(app, "/api/create-project", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
    assert_eq!(json["error"], "Not authenticated");
}

/// A cookie carrying a garbage token is rejected with 401.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_garbage_token_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "projectId": "forged-site",
        "name": "Forged",
        "description": "Token is not a JWT",
    });
    let response =
        post_json_auth(app, "/api/create-project", body, "token=not.a.real.jwt").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid or expired token");
}

// ---------------------------------------------------------------------------
// Logout
// ---------------------------------------------------------------------------

/// Logout returns 200 and a Set-Cookie that expires the session immediately.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_logout_clears_cookie(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(app, "/api/admin/logout", serde_json::json!({})).await;

    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response
        .headers()
        .get(SET_COOKIE)
        .expect("logout must overwrite the session cookie")
        .to_str()
        .unwrap()
        .to_string();
    assert!(set_cookie.starts_with("token=;"), "cookie value must be emptied");
    assert!(set_cookie.contains("Max-Age=0"), "cookie must expire immediately");

    let json = body_json(response).await;
    assert_eq!(json["data"]["success"], true);
}
