//! Repository for the `entries` table and its dependent rows.

use sqlx::PgPool;
use watchlog_core::types::DbId;

use crate::models::entry::{CreateEntry, Entry, EntryWithDetails, UpdateEntry};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, release_year, status, external_url, created_at";

/// Detail projection: entry joined with its poster and the live average
/// rating, defaulting to 0 when no ratings exist.
const DETAIL_SELECT: &str = "SELECT e.id, e.title, e.description, e.release_year, e.status, \
     e.external_url, e.created_at, \
     p.image_url AS poster_url, \
     COALESCE(r.avg_rating, 0)::float8 AS avg_rating \
     FROM entries e \
     LEFT JOIN entry_images p ON p.entry_id = e.id AND p.is_poster = TRUE \
     LEFT JOIN (SELECT entry_id, AVG(value) AS avg_rating FROM ratings GROUP BY entry_id) r \
            ON r.entry_id = e.id";

/// Provides transactional mutations and read projections for catalog entries.
pub struct EntryRepo;

impl EntryRepo {
    /// Insert a new entry, plus its poster image when `poster_url` is set.
    ///
    /// Both inserts run in one transaction; on any failure neither is
    /// visible. Expects pre-sanitized input (trimmed, validated by the
    /// handler); `poster_url` must be `None` rather than an empty string.
    pub async fn create(pool: &PgPool, input: &CreateEntry) -> Result<Entry, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO entries (title, description, release_year, status, external_url)
             VALUES ($1, $2, $3, COALESCE($4, 'ongoing'), $5)
             RETURNING {COLUMNS}"
        );
        let entry = sqlx::query_as::<_, Entry>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.release_year)
            .bind(&input.status)
            .bind(&input.external_url)
            .fetch_one(&mut *tx)
            .await?;

        if let Some(poster_url) = &input.poster_url {
            sqlx::query(
                "INSERT INTO entry_images (entry_id, image_url, is_poster)
                 VALUES ($1, $2, TRUE)",
            )
            .bind(entry.id)
            .bind(poster_url)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(entry)
    }

    /// Apply a sparse update to an entry, including poster handling, in one
    /// transaction. Returns `false` when no entry with `id` exists.
    ///
    /// Field semantics: absent leaves the column untouched; an explicit
    /// `null` clears `description`/`release_year`. Poster: empty (or null)
    /// deletes the poster row; a non-empty URL updates the existing poster
    /// row or inserts one. The find-then-branch runs inside the transaction,
    /// which keeps a racing duplicate invisible mid-flight.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateEntry) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let description_present = input.description.is_some();
        let description: Option<&str> = input.description.as_ref().and_then(|d| d.as_deref());
        let release_year_present = input.release_year.is_some();
        let release_year: Option<i32> = input.release_year.flatten();
        let status: Option<&str> = input.status.as_ref().and_then(|s| s.as_deref());

        let result = sqlx::query(
            "UPDATE entries SET
                title = COALESCE($2, title),
                external_url = COALESCE($3, external_url),
                description = CASE WHEN $4 THEN $5 ELSE description END,
                release_year = CASE WHEN $6 THEN $7 ELSE release_year END,
                status = COALESCE($8, status)
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.external_url)
        .bind(description_present)
        .bind(description)
        .bind(release_year_present)
        .bind(release_year)
        .bind(status)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(false);
        }

        if let Some(poster) = &input.poster_url {
            let poster_url = poster.as_deref().map(str::trim).unwrap_or("");
            if poster_url.is_empty() {
                sqlx::query(
                    "DELETE FROM entry_images WHERE entry_id = $1 AND is_poster = TRUE",
                )
                .bind(id)
                .execute(&mut *tx)
                .await?;
            } else {
                let existing: Option<DbId> = sqlx::query_scalar(
                    "SELECT id FROM entry_images WHERE entry_id = $1 AND is_poster = TRUE",
                )
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

                match existing {
                    Some(image_id) => {
                        sqlx::query("UPDATE entry_images SET image_url = $2 WHERE id = $1")
                            .bind(image_id)
                            .bind(poster_url)
                            .execute(&mut *tx)
                            .await?;
                    }
                    None => {
                        sqlx::query(
                            "INSERT INTO entry_images (entry_id, image_url, is_poster)
                             VALUES ($1, $2, TRUE)",
                        )
                        .bind(id)
                        .bind(poster_url)
                        .execute(&mut *tx)
                        .await?;
                    }
                }
            }
        }

        tx.commit().await?;
        Ok(true)
    }

    /// Delete an entry and every row referencing it, in dependency order,
    /// inside one transaction. Returns `false` when no entry with `id`
    /// exists (nothing is deleted in that case either).
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM ratings WHERE entry_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM favorites WHERE entry_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM user_entry_status WHERE entry_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM entry_genres WHERE entry_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM entry_images WHERE entry_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        let result = sqlx::query("DELETE FROM entries WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    /// Find an entry by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Entry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM entries WHERE id = $1");
        sqlx::query_as::<_, Entry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all entries with poster and average rating, newest first.
    pub async fn list_with_details(pool: &PgPool) -> Result<Vec<EntryWithDetails>, sqlx::Error> {
        let query = format!("{DETAIL_SELECT} ORDER BY e.created_at DESC");
        sqlx::query_as::<_, EntryWithDetails>(&query)
            .fetch_all(pool)
            .await
    }

    /// Fetch a single entry with poster and average rating.
    pub async fn find_with_details(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<EntryWithDetails>, sqlx::Error> {
        let query = format!("{DETAIL_SELECT} WHERE e.id = $1");
        sqlx::query_as::<_, EntryWithDetails>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
