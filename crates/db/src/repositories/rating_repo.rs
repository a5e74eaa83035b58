//! Repository for the `ratings` table.

use sqlx::PgPool;
use watchlog_core::types::DbId;

use crate::models::rating::Rating;

/// Provides upsert/clear/read operations for user ratings.
pub struct RatingRepo;

impl RatingRepo {
    /// Set a user's rating for an entry.
    ///
    /// A single conditional statement against the `uq_ratings_user_entry`
    /// constraint: two concurrent first-time ratings for the same pair
    /// cannot produce duplicate rows. The value domain is enforced by the
    /// handler before this is called.
    pub async fn set(
        pool: &PgPool,
        user_id: DbId,
        entry_id: DbId,
        value: i32,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO ratings (user_id, entry_id, value)
             VALUES ($1, $2, $3)
             ON CONFLICT (user_id, entry_id)
             DO UPDATE SET value = EXCLUDED.value",
        )
        .bind(user_id)
        .bind(entry_id)
        .bind(value)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Remove a user's rating for an entry.
    ///
    /// Idempotent: clearing an absent row is not an error.
    pub async fn clear(pool: &PgPool, user_id: DbId, entry_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM ratings WHERE user_id = $1 AND entry_id = $2")
            .bind(user_id)
            .bind(entry_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Find a user's rating for an entry, if any.
    pub async fn find(
        pool: &PgPool,
        user_id: DbId,
        entry_id: DbId,
    ) -> Result<Option<Rating>, sqlx::Error> {
        sqlx::query_as::<_, Rating>(
            "SELECT id, user_id, entry_id, value FROM ratings
             WHERE user_id = $1 AND entry_id = $2",
        )
        .bind(user_id)
        .bind(entry_id)
        .fetch_optional(pool)
        .await
    }

    /// Compute the live average rating for an entry, 0 when unrated.
    pub async fn average_for_entry(pool: &PgPool, entry_id: DbId) -> Result<f64, sqlx::Error> {
        sqlx::query_scalar::<_, f64>(
            "SELECT COALESCE(AVG(value), 0)::float8 FROM ratings WHERE entry_id = $1",
        )
        .bind(entry_id)
        .fetch_one(pool)
        .await
    }
}
