//! Repository for the `user_entry_status` table.

use sqlx::PgPool;
use watchlog_core::types::DbId;

use crate::models::status::{UserEntryStatus, WatchStatus, WatchlistItem};

/// Provides upsert/clear/list operations for per-user watch status.
pub struct StatusRepo;

impl StatusRepo {
    /// Set the watch status for `(user_id, entry_id)`.
    ///
    /// A single conditional statement keyed on the composite primary key:
    /// inserts when absent, otherwise updates `status` and `updated_at`.
    /// Safe under concurrent requests for the same pair.
    pub async fn set(
        pool: &PgPool,
        user_id: DbId,
        entry_id: DbId,
        status: WatchStatus,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO user_entry_status (user_id, entry_id, status)
             VALUES ($1, $2, $3)
             ON CONFLICT (user_id, entry_id)
             DO UPDATE SET status = EXCLUDED.status, updated_at = NOW()",
        )
        .bind(user_id)
        .bind(entry_id)
        .bind(status.as_str())
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Remove the status row for `(user_id, entry_id)`.
    ///
    /// Idempotent: clearing an absent row is not an error. Returns whether
    /// a row was actually removed.
    pub async fn clear(pool: &PgPool, user_id: DbId, entry_id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM user_entry_status WHERE user_id = $1 AND entry_id = $2")
                .bind(user_id)
                .bind(entry_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Find the status row for `(user_id, entry_id)`, if any.
    pub async fn find(
        pool: &PgPool,
        user_id: DbId,
        entry_id: DbId,
    ) -> Result<Option<UserEntryStatus>, sqlx::Error> {
        sqlx::query_as::<_, UserEntryStatus>(
            "SELECT user_id, entry_id, status, created_at, updated_at
             FROM user_entry_status WHERE user_id = $1 AND entry_id = $2",
        )
        .bind(user_id)
        .bind(entry_id)
        .fetch_optional(pool)
        .await
    }

    /// List a user's entries joined with entry details, poster, and the
    /// user's own rating, optionally filtered by status, most recently
    /// updated first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        status: Option<WatchStatus>,
    ) -> Result<Vec<WatchlistItem>, sqlx::Error> {
        sqlx::query_as::<_, WatchlistItem>(
            "SELECT s.entry_id, s.status, s.updated_at,
                    e.title, e.release_year, e.description,
                    p.image_url AS poster_url,
                    r.value AS user_rating
             FROM user_entry_status s
             JOIN entries e ON e.id = s.entry_id
             LEFT JOIN entry_images p ON p.entry_id = e.id AND p.is_poster = TRUE
             LEFT JOIN ratings r ON r.entry_id = e.id AND r.user_id = s.user_id
             WHERE s.user_id = $1 AND ($2::varchar IS NULL OR s.status = $2)
             ORDER BY s.updated_at DESC",
        )
        .bind(user_id)
        .bind(status.map(|s| s.as_str()))
        .fetch_all(pool)
        .await
    }
}
