//! Catalog entry model and DTOs.

use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use watchlog_core::types::{DbId, Timestamp};

/// Airing status of a catalog entry. Stored as its lowercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    Ongoing,
    Completed,
    Hiatus,
}

impl EntryStatus {
    pub fn parse(s: &str) -> Option<EntryStatus> {
        match s {
            "ongoing" => Some(EntryStatus::Ongoing),
            "completed" => Some(EntryStatus::Completed),
            "hiatus" => Some(EntryStatus::Hiatus),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntryStatus::Ongoing => "ongoing",
            EntryStatus::Completed => "completed",
            EntryStatus::Hiatus => "hiatus",
        }
    }
}

/// An entry row from the `entries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Entry {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub release_year: Option<i32>,
    pub status: String,
    pub external_url: String,
    pub created_at: Timestamp,
}

/// An entry joined with its poster image and live average rating.
///
/// `avg_rating` is computed per query from the `ratings` table and is
/// `0.0` when the entry has no ratings. It is never stored on the entry.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EntryWithDetails {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub release_year: Option<i32>,
    pub status: String,
    pub external_url: String,
    pub created_at: Timestamp,
    pub poster_url: Option<String>,
    pub avg_rating: f64,
}

/// DTO for creating a new entry.
///
/// `status` is validated against [`EntryStatus`] in the handler so an
/// unknown value surfaces as a 400, not a deserialization rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEntry {
    pub title: String,
    pub description: Option<String>,
    pub release_year: Option<i32>,
    pub status: Option<String>,
    pub external_url: String,
    pub poster_url: Option<String>,
}

/// DTO for a sparse entry update.
///
/// Fields wrapped in `Option<Option<T>>` distinguish three states:
/// absent (leave untouched), explicit `null` (clear), and a value.
/// `title` and `external_url` may not be cleared, so a `null` there is
/// treated the same as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEntry {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub release_year: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    pub status: Option<Option<String>>,
    pub external_url: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub poster_url: Option<Option<String>>,
}

/// Deserialize a field so that a present-but-`null` value becomes
/// `Some(None)` while an absent field stays `None` (via `#[serde(default)]`).
fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}
