//! In-process cache for the public read endpoints.
//!
//! Two independent scopes, each a map from project id to the serialized
//! response payload: `content` holds the whole-page projection served by
//! `/project/{id}/main-data`, `metadata` the SEO document served by
//! `/project/{id}/metadata`. Writes evict through [`crate::invalidation`];
//! the public revalidation triggers flush a scope wholesale.

use std::collections::HashMap;

use serde_json::Value;
use tokio::sync::RwLock;
use vitrine_core::types::DbId;

/// Cached read payloads, one map per scope.
///
/// Thread-safe via interior `RwLock`; designed to be wrapped in `Arc` and
/// shared between the handlers and the invalidator.
pub struct ContentCache {
    content: RwLock<HashMap<DbId, Value>>,
    metadata: RwLock<HashMap<DbId, Value>>,
}

impl ContentCache {
    /// Create a new, empty cache.
    pub fn new() -> Self {
        Self {
            content: RwLock::new(HashMap::new()),
            metadata: RwLock::new(HashMap::new()),
        }
    }

    pub async fn content(&self, project_id: DbId) -> Option<Value> {
        self.content.read().await.get(&project_id).cloned()
    }

    pub async fn store_content(&self, project_id: DbId, payload: Value) {
        self.content.write().await.insert(project_id, payload);
    }

    pub async fn metadata(&self, project_id: DbId) -> Option<Value> {
        self.metadata.read().await.get(&project_id).cloned()
    }

    pub async fn store_metadata(&self, project_id: DbId, payload: Value) {
        self.metadata.write().await.insert(project_id, payload);
    }

    /// Drop one project's entry from the content scope.
    pub async fn evict_content(&self, project_id: DbId) {
        self.content.write().await.remove(&project_id);
    }

    /// Drop one project's entry from the metadata scope.
    pub async fn evict_metadata(&self, project_id: DbId) {
        self.metadata.write().await.remove(&project_id);
    }

    /// Empty the content scope. Backs `GET /api/revalidate-main-data`.
    pub async fn flush_content(&self) {
        self.content.write().await.clear();
    }

    /// Empty the metadata scope. Backs `GET /api/revalidate-metatags`.
    pub async fn flush_metadata(&self) {
        self.metadata.write().await.clear();
    }
}

impl Default for ContentCache {
    fn default() -> Self {
        Self::new()
    }
}
