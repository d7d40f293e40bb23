//! Integration tests for package management and the public package list.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_test_admin, create_test_project, delete_json_auth, get, post_json,
    post_json_auth, put_json_auth, session_cookie_for,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Seed an admin and an empty project; return the project id and a valid
/// session cookie.
async fn seed(pool: &PgPool, slug: &str) -> (i64, String) {
    let admin = create_test_admin(pool, &format!("{slug}@test.com")).await;
    let project = create_test_project(pool, slug).await;
    (project.id, session_cookie_for(&admin))
}

/// Create a package and return its id.
async fn create_package(pool: &PgPool, project_id: i64, cookie: &str, title: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "projectId": project_id,
        "title": title,
        "image": "https://cdn.example.com/package.jpg",
        "features": ["50 cups", "One barista"],
    });
    let response = post_json_auth(app, "/api/package", body, cookie).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Creation
// ---------------------------------------------------------------------------

/// Creating a package stores the trimmed feature list and returns 201.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_package(pool: PgPool) {
    let (project_id, cookie) = seed(&pool, "pkg-create").await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "projectId": project_id,
        "title": "Wedding package",
        "image": "https://cdn.example.com/wedding.jpg",
        "features": [" 200 cups ", "Two baristas", "Setup included "],
    });
    let response = post_json_auth(app, "/api/package", body, &cookie).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Wedding package");
    assert_eq!(
        json["data"]["features"],
        serde_json::json!(["200 cups", "Two baristas", "Setup included"])
    );
}

/// A package without features is valid and stores an empty list.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_package_without_features(pool: PgPool) {
    let (project_id, cookie) = seed(&pool, "pkg-bare").await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "projectId": project_id,
        "title": "Bare package",
        "image": "https://cdn.example.com/bare.jpg",
    });
    let response = post_json_auth(app, "/api/package", body, &cookie).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["features"], serde_json::json!([]));
}

/// Title and image are required; a blank feature rejects the write.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_package_validation(pool: PgPool) {
    let (project_id, cookie) = seed(&pool, "pkg-invalid").await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "projectId": project_id, "image": "https://x.example/i.jpg" });
    let response = post_json_auth(app, "/api/package", body, &cookie).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let body = serde_json::json!({
        "projectId": project_id,
        "title": "Has a blank feature",
        "image": "https://x.example/i.jpg",
        "features": ["fine", "  "],
    });
    let response = post_json_auth(app, "/api/package", body, &cookie).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

/// Creating a package for an unknown project returns 404.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_package_unknown_project(pool: PgPool) {
    let admin = create_test_admin(&pool, "pkg-ghost@test.com").await;
    let cookie = session_cookie_for(&admin);
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "projectId": 999999,
        "title": "Orphan package",
        "image": "https://x.example/i.jpg",
    });
    let response = post_json_auth(app, "/api/package", body, &cookie).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Updates
// ---------------------------------------------------------------------------

/// A partial update rewrites only the supplied fields.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_package_partial(pool: PgPool) {
    let (project_id, cookie) = seed(&pool, "pkg-partial").await;
    let package_id = create_package(&pool, project_id, &cookie, "Original title").await;

    let app = common::build_test_app(pool);
    let uri = format!("/api/package/{package_id}");
    let body = serde_json::json!({ "title": "Renamed package" });
    let response = put_json_auth(app, &uri, body, &cookie).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Renamed package");
    // Omitted fields keep their stored values.
    assert_eq!(json["data"]["image"], "https://cdn.example.com/package.jpg");
    assert_eq!(
        json["data"]["features"],
        serde_json::json!(["50 cups", "One barista"])
    );
}

/// Supplying a blank title or image is rejected; omitting them is fine.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_package_rejects_blank_fields(pool: PgPool) {
    let (project_id, cookie) = seed(&pool, "pkg-blank").await;
    let package_id = create_package(&pool, project_id, &cookie, "Stable").await;

    let app = common::build_test_app(pool.clone());
    let uri = format!("/api/package/{package_id}");
    let body = serde_json::json!({ "title": "   " });
    let response = put_json_auth(app, &uri, body, &cookie).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "image": "" });
    let response = put_json_auth(app, &uri, body, &cookie).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Updating a package that does not exist returns 404.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_package_missing(pool: PgPool) {
    let admin = create_test_admin(&pool, "pkg-upd-ghost@test.com").await;
    let cookie = session_cookie_for(&admin);
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "title": "New title" });
    let response = put_json_auth(app, "/api/package/999999", body, &cookie).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Deletes
// ---------------------------------------------------------------------------

/// Deleting a package returns 204 and removes it from the public list.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_package(pool: PgPool) {
    let (project_id, cookie) = seed(&pool, "pkg-delete").await;
    let package_id = create_package(&pool, project_id, &cookie, "Short-lived").await;

    let app = common::build_test_app(pool.clone());
    let uri = format!("/api/package/{package_id}");
    let response = delete_json_auth(app, &uri, serde_json::json!({}), &cookie).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/project/{project_id}/packages")).await;
    let json = body_json(response).await;
    assert!(json["data"].as_array().unwrap().is_empty());

    // Deleting again is a 404.
    let app = common::build_test_app(pool);
    let response = delete_json_auth(app, &uri, serde_json::json!({}), &cookie).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Public list
// ---------------------------------------------------------------------------

/// The public package list needs no cookie and returns packages in creation
/// order.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_public_package_list(pool: PgPool) {
    let (project_id, cookie) = seed(&pool, "pkg-public").await;
    let first = create_package(&pool, project_id, &cookie, "Starter").await;
    let second = create_package(&pool, project_id, &cookie, "Deluxe").await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/project/{project_id}/packages")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let packages = json["data"].as_array().unwrap();
    assert_eq!(packages.len(), 2);
    assert_eq!(packages[0]["id"], first);
    assert_eq!(packages[1]["id"], second);
}

/// The public list 404s for an unknown project instead of returning an
/// empty list.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_public_package_list_unknown_project(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/project/999999/packages").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Package writes require a session cookie.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_package_writes_require_auth(pool: PgPool) {
    let project = create_test_project(&pool, "pkg-noauth").await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "projectId": project.id,
        "title": "No cookie",
        "image": "https://x.example/i.jpg",
    });
    let response = post_json(app, "/api/package", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
