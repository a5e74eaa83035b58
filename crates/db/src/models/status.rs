//! Per-user watch status model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use watchlog_core::types::{DbId, Timestamp};

/// Watch status of an entry on a user's list. Stored as its lowercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WatchStatus {
    Watching,
    Planned,
    Dropped,
    Completed,
}

impl WatchStatus {
    pub fn parse(s: &str) -> Option<WatchStatus> {
        match s {
            "watching" => Some(WatchStatus::Watching),
            "planned" => Some(WatchStatus::Planned),
            "dropped" => Some(WatchStatus::Dropped),
            "completed" => Some(WatchStatus::Completed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WatchStatus::Watching => "watching",
            WatchStatus::Planned => "planned",
            WatchStatus::Dropped => "dropped",
            WatchStatus::Completed => "completed",
        }
    }
}

/// A status row from the `user_entry_status` table, keyed on
/// `(user_id, entry_id)`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserEntryStatus {
    pub user_id: DbId,
    pub entry_id: DbId,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// One row of a user's list: their status joined with entry details,
/// the entry's poster, and the user's own rating.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WatchlistItem {
    pub entry_id: DbId,
    pub status: String,
    pub updated_at: Timestamp,
    pub title: String,
    pub release_year: Option<i32>,
    pub description: Option<String>,
    pub poster_url: Option<String>,
    pub user_rating: Option<i32>,
}
