//! Repository for the `ratings` table. Rows are append-only; the public
//! page only ever sees the aggregate.

use sqlx::PgPool;
use vitrine_core::types::DbId;

use crate::models::rating::RatingSummary;

/// Provides data access for visitor star ratings.
pub struct RatingRepo;

impl RatingRepo {
    /// Record one rating. Bounds are validated upstream and enforced by the
    /// table's CHECK constraint.
    pub async fn insert(pool: &PgPool, project_id: DbId, stars: i32) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO ratings (project_id, stars) VALUES ($1, $2)")
            .bind(project_id)
            .bind(stars)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Aggregate a project's ratings. `average_rating` is 0 when no ratings
    /// exist; callers decide whether that means "hide the widget".
    pub async fn summary(pool: &PgPool, project_id: DbId) -> Result<RatingSummary, sqlx::Error> {
        sqlx::query_as::<_, RatingSummary>(
            "SELECT
                COALESCE(AVG(stars), 0)::DOUBLE PRECISION AS average_rating,
                COUNT(*) AS total_ratings
             FROM ratings WHERE project_id = $1",
        )
        .bind(project_id)
        .fetch_one(pool)
        .await
    }
}
