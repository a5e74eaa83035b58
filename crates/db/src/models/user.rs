//! User account model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use watchlog_core::types::{DbId, Timestamp};

/// A user row from the `users` table.
///
/// `role` is stored as its lowercase name; the authorization layer
/// re-validates it against the closed `Role` enum on every request.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new user.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}
