//! Cache invalidation signal, fired after every successful content write.
//!
//! Invalidation does two things: evict the project's entry from the
//! in-process [`ContentCache`], and (when `PUBLIC_APP_URL` is configured)
//! ping the deployed frontend's revalidation hook so its static pages
//! rebuild. The ping is fire-and-forget on a background task; a failed or
//! slow hook never delays or fails the write that triggered it.

use std::sync::Arc;
use std::time::Duration;

use vitrine_core::types::DbId;

use crate::cache::ContentCache;

/// HTTP timeout for a revalidation hook ping.
const HOOK_TIMEOUT: Duration = Duration::from_secs(10);

/// Frontend hook path for the content scope.
const CONTENT_HOOK_PATH: &str = "/api/revalidate-main-data";

/// Frontend hook path for the metadata scope.
const METADATA_HOOK_PATH: &str = "/api/revalidate-metatags";

/// Owns the two invalidation scopes. Cheap to share behind an `Arc`.
pub struct Invalidator {
    cache: Arc<ContentCache>,
    client: reqwest::Client,
    hook_base: Option<String>,
}

impl Invalidator {
    pub fn new(cache: Arc<ContentCache>, hook_base: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(HOOK_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self {
            cache,
            client,
            hook_base,
        }
    }

    /// Signal that a project's page content changed.
    pub async fn content_changed(&self, project_id: DbId) {
        self.cache.evict_content(project_id).await;
        self.ping_hook(CONTENT_HOOK_PATH);
    }

    /// Signal that a project's SEO metadata changed.
    pub async fn metadata_changed(&self, project_id: DbId) {
        self.cache.evict_metadata(project_id).await;
        self.ping_hook(METADATA_HOOK_PATH);
    }

    /// Fire the frontend revalidation hook without waiting for it.
    fn ping_hook(&self, path: &'static str) {
        let Some(base) = &self.hook_base else {
            return;
        };
        let url = format!("{base}{path}");
        let client = self.client.clone();

        tokio::spawn(async move {
            match client.get(&url).send().await {
                Ok(response) if response.status().is_success() => {
                    tracing::debug!(%url, "Revalidation hook pinged");
                }
                Ok(response) => {
                    tracing::warn!(%url, status = %response.status(), "Revalidation hook rejected the ping");
                }
                Err(err) => {
                    tracing::warn!(%url, error = %err, "Revalidation hook unreachable");
                }
            }
        });
    }
}
