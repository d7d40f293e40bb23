use vitrine_media::CloudinaryConfig;

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// Network and timeout fields have defaults suitable for local development;
/// secrets (JWT, registration, media host) must be provided explicitly.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `4000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Graceful shutdown timeout in seconds (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// JWT session-token configuration (secret, expiry, cookie flags).
    pub jwt: JwtConfig,
    /// Shared secret gating `POST /api/admin/register`.
    pub registration_secret: String,
    /// Base URL of the deployed frontend; when set, successful writes ping
    /// its revalidation hooks. `None` disables the pings.
    pub public_app_url: Option<String>,
    /// Media host account used for image uploads.
    pub media: CloudinaryConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                     | Required | Default                     |
    /// |-----------------------------|----------|-----------------------------|
    /// | `HOST`                      | no       | `0.0.0.0`                   |
    /// | `PORT`                      | no       | `4000`                      |
    /// | `CORS_ORIGINS`              | no       | `http://localhost:3000`     |
    /// | `REQUEST_TIMEOUT_SECS`      | no       | `30`                        |
    /// | `SHUTDOWN_TIMEOUT_SECS`     | no       | `30`                        |
    /// | `JWT_SECRET`                | **yes**  | --                          |
    /// | `JWT_EXPIRY_DAYS`           | no       | `7`                         |
    /// | `COOKIE_SECURE`             | no       | `false`                     |
    /// | `ADMIN_REGISTRATION_SECRET` | **yes**  | --                          |
    /// | `PUBLIC_APP_URL`            | no       | unset (pings disabled)      |
    /// | `MEDIA_CLOUD_NAME`          | **yes**  | --                          |
    /// | `MEDIA_API_KEY`             | **yes**  | --                          |
    /// | `MEDIA_API_SECRET`          | **yes**  | --                          |
    /// | `MEDIA_API_BASE`            | no       | `https://api.cloudinary.com`|
    /// | `MEDIA_UPLOAD_FOLDER`       | no       | `uploads`                   |
    ///
    /// # Panics
    ///
    /// Panics when a required variable is missing or a numeric one fails to
    /// parse. Misconfiguration should stop the server at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "4000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = std::env::var("SHUTDOWN_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        let jwt = JwtConfig::from_env();

        let registration_secret = std::env::var("ADMIN_REGISTRATION_SECRET")
            .expect("ADMIN_REGISTRATION_SECRET must be set in the environment");

        let public_app_url = std::env::var("PUBLIC_APP_URL")
            .ok()
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());

        let media = media_config_from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            jwt,
            registration_secret,
            public_app_url,
            media,
        }
    }
}

fn media_config_from_env() -> CloudinaryConfig {
    CloudinaryConfig {
        cloud_name: std::env::var("MEDIA_CLOUD_NAME")
            .expect("MEDIA_CLOUD_NAME must be set in the environment"),
        api_key: std::env::var("MEDIA_API_KEY")
            .expect("MEDIA_API_KEY must be set in the environment"),
        api_secret: std::env::var("MEDIA_API_SECRET")
            .expect("MEDIA_API_SECRET must be set in the environment"),
        api_base: std::env::var("MEDIA_API_BASE")
            .unwrap_or_else(|_| "https://api.cloudinary.com".into()),
        upload_folder: std::env::var("MEDIA_UPLOAD_FOLDER").unwrap_or_else(|_| "uploads".into()),
    }
}
