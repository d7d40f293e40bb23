//! Cloudinary-compatible upload API client.
//!
//! Uploads go to `POST {api_base}/v1_1/{cloud_name}/image/upload` as
//! multipart form data, deletions to `.../image/destroy` as a form post.
//! Both carry an SHA-256 signature over the sorted request parameters
//! concatenated with the account secret.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::{MediaError, MediaStore, UploadedImage};

/// HTTP request timeout for a single upload or destroy call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Account credentials and endpoints for the media host.
#[derive(Debug, Clone)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    /// Base URL of the upload API, e.g. `https://api.cloudinary.com`.
    pub api_base: String,
    /// Folder used by the generic upload proxy when none is given.
    pub upload_folder: String,
}

/// HTTP client for one media-host account.
pub struct CloudinaryClient {
    client: reqwest::Client,
    config: CloudinaryConfig,
}

/// Upload endpoint response. Only the fields the API serves are kept.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    public_id: String,
    secure_url: String,
    width: Option<u32>,
    height: Option<u32>,
    format: Option<String>,
}

/// Destroy endpoint response: `{"result": "ok"}` or a refusal string.
#[derive(Debug, Deserialize)]
struct DestroyResponse {
    result: String,
}

impl CloudinaryClient {
    pub fn new(config: CloudinaryConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self { client, config }
    }

    /// Sign request parameters: sort by key, join as `k=v&k=v`, append the
    /// account secret, SHA-256, hex-encode.
    fn sign(&self, params: &[(&str, &str)]) -> String {
        let mut sorted = params.to_vec();
        sorted.sort_by_key(|(key, _)| *key);
        let joined = sorted
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&");

        let mut hasher = Sha256::new();
        hasher.update(joined.as_bytes());
        hasher.update(self.config.api_secret.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    fn endpoint(&self, action: &str) -> String {
        format!(
            "{}/v1_1/{}/image/{}",
            self.config.api_base, self.config.cloud_name, action
        )
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code, or surface the status
    /// and body text for debugging.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, MediaError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(MediaError::Host {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl MediaStore for CloudinaryClient {
    async fn upload(
        &self,
        bytes: Vec<u8>,
        content_type: &str,
        file_name: &str,
        folder: &str,
    ) -> Result<UploadedImage, MediaError> {
        let timestamp = chrono::Utc::now().timestamp().to_string();
        let signature = self.sign(&[("folder", folder), ("timestamp", &timestamp)]);

        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(content_type)?;
        let form = reqwest::multipart::Form::new()
            .text("api_key", self.config.api_key.clone())
            .text("timestamp", timestamp)
            .text("signature", signature)
            .text("folder", folder.to_string())
            .part("file", part);

        let response = self
            .client
            .post(self.endpoint("upload"))
            .multipart(form)
            .send()
            .await?;
        let response = Self::ensure_success(response).await?;
        let uploaded: UploadResponse = response.json().await?;

        Ok(UploadedImage {
            url: uploaded.secure_url,
            public_id: uploaded.public_id,
            width: uploaded.width,
            height: uploaded.height,
            format: uploaded.format,
        })
    }

    async fn destroy(&self, public_id: &str) -> Result<(), MediaError> {
        let timestamp = chrono::Utc::now().timestamp().to_string();
        let signature = self.sign(&[("public_id", public_id), ("timestamp", &timestamp)]);

        let response = self
            .client
            .post(self.endpoint("destroy"))
            .form(&[
                ("public_id", public_id),
                ("api_key", self.config.api_key.as_str()),
                ("timestamp", timestamp.as_str()),
                ("signature", signature.as_str()),
            ])
            .send()
            .await?;
        let response = Self::ensure_success(response).await?;
        let destroyed: DestroyResponse = response.json().await?;

        // "not found" counts as done: the asset is gone either way.
        match destroyed.result.as_str() {
            "ok" | "not found" => Ok(()),
            other => Err(MediaError::Refused(other.to_string())),
        }
    }
}

/// Derive an asset's public id from its delivery URL.
///
/// Delivery URLs look like
/// `https://res.example.com/demo/image/upload/v1712345678/projects/7/gallery/abc.jpg`;
/// the public id is everything after the version segment with the file
/// extension dropped (`projects/7/gallery/abc`). Returns `None` when the
/// URL has no `upload` segment to anchor on.
pub fn public_id_from_url(url: &str) -> Option<String> {
    let mut segments = url.split('/');
    segments.by_ref().find(|segment| *segment == "upload")?;

    // The segment right after `upload` is the version marker.
    let mut parts: Vec<&str> = segments.skip(1).collect();
    let last = parts.pop()?;
    let stem = match last.rfind('.') {
        Some(dot) => &last[..dot],
        None => last,
    };
    parts.push(stem);

    let public_id = parts.join("/");
    (!public_id.is_empty()).then_some(public_id)
}
