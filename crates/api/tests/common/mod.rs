//! Shared helpers for HTTP-level integration tests.
//!
//! [`build_test_app`] mirrors the router construction in `main.rs` (same
//! middleware stack via `build_app_router`) but swaps the media host for an
//! in-memory stub so no test touches the network.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::util::ServiceExt;

use vitrine_api::auth::jwt::{generate_token, JwtConfig};
use vitrine_api::auth::password::hash_password;
use vitrine_api::cache::ContentCache;
use vitrine_api::config::ServerConfig;
use vitrine_api::invalidation::Invalidator;
use vitrine_api::router::build_app_router;
use vitrine_api::state::AppState;
use vitrine_db::models::admin::{Admin, CreateAdmin};
use vitrine_db::models::project::{CreateProject, Project};
use vitrine_db::repositories::{AdminRepo, ProjectRepo};
use vitrine_media::{CloudinaryConfig, MediaError, MediaStore, UploadedImage};

/// Registration secret used by [`test_config`] and the register tests.
pub const TEST_REGISTRATION_SECRET: &str = "test-registration-secret";

/// Plaintext password every seeded test admin uses.
pub const TEST_PASSWORD: &str = "test_password_123!";

/// Build a test `ServerConfig` with safe defaults.
///
/// No revalidation hook base is set, so invalidation never attempts an
/// outbound request; the media config is inert because tests substitute
/// [`StubMediaStore`] for the real client.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            expiry_days: 7,
            cookie_secure: false,
        },
        registration_secret: TEST_REGISTRATION_SECRET.to_string(),
        public_app_url: None,
        media: CloudinaryConfig {
            cloud_name: "test-cloud".to_string(),
            api_key: "test-key".to_string(),
            api_secret: "test-secret".to_string(),
            api_base: "http://media.invalid".to_string(),
            upload_folder: "uploads".to_string(),
        },
    }
}

/// In-memory stand-in for the media host.
///
/// Uploads are acknowledged with a deterministic URL shaped like a real
/// delivery URL (version segment included) so `public_id_from_url` works on
/// it; destroys succeed unless `fail_destroy` is set.
#[derive(Default)]
pub struct StubMediaStore {
    pub fail_destroy: bool,
}

#[async_trait]
impl MediaStore for StubMediaStore {
    async fn upload(
        &self,
        _bytes: Vec<u8>,
        _content_type: &str,
        file_name: &str,
        folder: &str,
    ) -> Result<UploadedImage, MediaError> {
        let stem = match file_name.rfind('.') {
            Some(dot) => &file_name[..dot],
            None => file_name,
        };
        let public_id = format!("{folder}/{stem}");
        Ok(UploadedImage {
            url: format!("https://res.cloudinary.com/test-cloud/image/upload/v1727000000/{public_id}.jpg"),
            public_id,
            width: Some(800),
            height: Some(600),
            format: Some("jpg".to_string()),
        })
    }

    async fn destroy(&self, public_id: &str) -> Result<(), MediaError> {
        if self.fail_destroy {
            return Err(MediaError::Refused(format!(
                "stub refused to destroy {public_id}"
            )));
        }
        Ok(())
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool and a well-behaved media stub.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_media(pool, Arc::new(StubMediaStore::default()))
}

/// Like [`build_test_app`] but with a caller-supplied media store, for
/// tests that need the host to misbehave.
pub fn build_test_app_with_media(pool: PgPool, media: Arc<dyn MediaStore>) -> Router {
    let config = test_config();
    let cache = Arc::new(ContentCache::new());
    let invalidator = Arc::new(Invalidator::new(
        Arc::clone(&cache),
        config.public_app_url.clone(),
    ));

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        media,
        cache,
        invalidator,
    };

    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Database seeding
// ---------------------------------------------------------------------------

/// Create an admin directly in the database. Logs in with [`TEST_PASSWORD`].
pub async fn create_test_admin(pool: &PgPool, email: &str) -> Admin {
    let password_hash = hash_password(TEST_PASSWORD).expect("hashing should succeed");
    AdminRepo::create(
        pool,
        &CreateAdmin {
            email: email.to_string(),
            password_hash,
        },
    )
    .await
    .expect("admin creation should succeed")
}

/// Create an empty project (no sections) directly in the database.
pub async fn create_test_project(pool: &PgPool, slug: &str) -> Project {
    ProjectRepo::create_full(
        pool,
        slug,
        "Test Project",
        "A project seeded for tests",
        &CreateProject::default(),
    )
    .await
    .expect("project creation should succeed")
}

/// Mint a session cookie for an admin without going through the login
/// endpoint. Signed with the same secret [`test_config`] gives the app.
pub fn session_cookie_for(admin: &Admin) -> String {
    let token = generate_token(admin.id, &admin.email, &test_config().jwt)
        .expect("token generation should succeed");
    format!("token={token}")
}

/// Log in through the API and return the `name=value` session cookie pair
/// from the `Set-Cookie` response header.
pub async fn login_admin(app: Router, email: &str, password: &str) -> String {
    let body = serde_json::json!({ "email": email, "password": password });
    let response = post_json(app, "/api/admin/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response
        .headers()
        .get(SET_COOKIE)
        .expect("login must set the session cookie")
        .to_str()
        .expect("cookie header should be valid UTF-8");
    set_cookie
        .split(';')
        .next()
        .expect("cookie must have a name=value pair")
        .to_string()
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
    cookie: Option<&str>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }

    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request should build");

    app.oneshot(request).await.expect("request should complete")
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, cookie: &str) -> Response {
    send(app, Method::GET, uri, None, Some(cookie)).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Some(body), None).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    cookie: &str,
) -> Response {
    send(app, Method::POST, uri, Some(body), Some(cookie)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, Some(body), None).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    cookie: &str,
) -> Response {
    send(app, Method::PUT, uri, Some(body), Some(cookie)).await
}

pub async fn delete_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    cookie: &str,
) -> Response {
    send(app, Method::DELETE, uri, Some(body), Some(cookie)).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}
