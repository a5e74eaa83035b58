//! Catalog image model.

use serde::Serialize;
use sqlx::FromRow;
use watchlog_core::types::DbId;

/// An image row from the `entry_images` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EntryImage {
    pub id: DbId,
    pub entry_id: DbId,
    pub image_url: String,
    pub is_poster: bool,
}
