use std::sync::Arc;

use vitrine_media::MediaStore;

use crate::cache::ContentCache;
use crate::config::ServerConfig;
use crate::invalidation::Invalidator;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: vitrine_db::DbPool,
    /// Server configuration (accessed by middleware and handlers).
    pub config: Arc<ServerConfig>,
    /// Image host client used by the upload and gallery endpoints.
    pub media: Arc<dyn MediaStore>,
    /// In-process read cache for public content and metadata.
    pub cache: Arc<ContentCache>,
    /// Invalidation signal fired after content writes.
    pub invalidator: Arc<Invalidator>,
}
