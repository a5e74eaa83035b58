//! Repository for the `genres` and `entry_genres` tables.

use sqlx::PgPool;
use watchlog_core::types::DbId;

use crate::models::genre::{CreateGenre, Genre};

/// Provides genre CRUD and entry-link replacement.
pub struct GenreRepo;

impl GenreRepo {
    /// List all genres, ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Genre>, sqlx::Error> {
        sqlx::query_as::<_, Genre>("SELECT id, name FROM genres ORDER BY name ASC")
            .fetch_all(pool)
            .await
    }

    /// Insert a new genre, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateGenre) -> Result<Genre, sqlx::Error> {
        sqlx::query_as::<_, Genre>("INSERT INTO genres (name) VALUES ($1) RETURNING id, name")
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Delete a genre and its entry links. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;
        sqlx::query("DELETE FROM entry_genres WHERE genre_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        let result = sqlx::query("DELETE FROM genres WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    /// Replace the genre links for an entry in one transaction.
    pub async fn set_for_entry(
        pool: &PgPool,
        entry_id: DbId,
        genre_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;
        sqlx::query("DELETE FROM entry_genres WHERE entry_id = $1")
            .bind(entry_id)
            .execute(&mut *tx)
            .await?;
        for genre_id in genre_ids {
            sqlx::query("INSERT INTO entry_genres (entry_id, genre_id) VALUES ($1, $2)")
                .bind(entry_id)
                .bind(genre_id)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;
        Ok(())
    }

    /// List the genres linked to an entry.
    pub async fn list_for_entry(pool: &PgPool, entry_id: DbId) -> Result<Vec<Genre>, sqlx::Error> {
        sqlx::query_as::<_, Genre>(
            "SELECT g.id, g.name FROM genres g
             JOIN entry_genres eg ON eg.genre_id = g.id
             WHERE eg.entry_id = $1
             ORDER BY g.name ASC",
        )
        .bind(entry_id)
        .fetch_all(pool)
        .await
    }
}
