//! User rating model.

use serde::Serialize;
use sqlx::FromRow;
use watchlog_core::types::DbId;

/// Inclusive rating domain.
pub const RATING_MIN: i32 = 0;
pub const RATING_MAX: i32 = 10;

/// A rating row from the `ratings` table, unique per `(user_id, entry_id)`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Rating {
    pub id: DbId,
    pub user_id: DbId,
    pub entry_id: DbId,
    pub value: i32,
}
