//! Request handlers, grouped by resource.
//!
//! Each submodule provides async handler functions for one slice of the API
//! surface. Handlers validate input, delegate to the repositories in
//! `vitrine_db`, map errors via [`AppError`], and fire the invalidation
//! signal after successful writes.
//!
//! [`AppError`]: crate::error::AppError

use vitrine_core::error::CoreError;
use vitrine_core::types::DbId;
use vitrine_db::repositories::ProjectRepo;
use vitrine_db::DbPool;

use crate::error::AppError;

pub mod auth;
pub mod dashboard;
pub mod gallery;
pub mod package;
pub mod project;
pub mod rating;
pub mod services;
pub mod why_us;

/// Fail with 404 unless the project exists. Section and collection
/// mutations run this before touching any child row.
pub(crate) async fn ensure_project(pool: &DbPool, project_id: DbId) -> Result<(), AppError> {
    ProjectRepo::find_by_id(pool, project_id)
        .await?
        .map(|_| ())
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }))
}
