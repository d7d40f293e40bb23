//! HTTP client for the remote image host.
//!
//! The API layer depends on the [`MediaStore`] trait, not on a concrete
//! host; [`CloudinaryClient`] is the production implementation and tests
//! substitute in-memory fakes. Upload rules (allowed types, size cap) live
//! in `vitrine-core` and are enforced by handlers before bytes get here.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod cloudinary;

pub use cloudinary::{public_id_from_url, CloudinaryClient, CloudinaryConfig};

/// Errors from the media-host client.
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The media host returned a non-2xx status code.
    #[error("Media host error ({status}): {body}")]
    Host {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The media host answered 2xx but refused the operation.
    #[error("Media host refused the operation: {0}")]
    Refused(String),
}

/// A stored asset as reported by the media host after an upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedImage {
    /// HTTPS delivery URL, the value persisted in gallery rows.
    pub url: String,
    /// Host-side identifier needed to destroy the asset later.
    pub public_id: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub format: Option<String>,
}

/// Store-and-remove interface for hosted images.
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Upload image bytes into a folder on the host.
    async fn upload(
        &self,
        bytes: Vec<u8>,
        content_type: &str,
        file_name: &str,
        folder: &str,
    ) -> Result<UploadedImage, MediaError>;

    /// Remove an asset by its public id.
    async fn destroy(&self, public_id: &str) -> Result<(), MediaError>;
}
