//! Genre model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use watchlog_core::types::DbId;

/// A genre row from the `genres` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Genre {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a new genre.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGenre {
    pub name: String,
}
