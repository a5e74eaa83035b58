//! The closed set of roles a principal may hold.
//!
//! Role strings arrive from untrusted places (JWT claims, database rows).
//! Parsing is fail-closed: anything outside the known set yields `None`,
//! never a privileged default.

use serde::{Deserialize, Serialize};

/// A user's role. Stored in the database and JWT claims as its lowercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// Parse a role from its wire/storage name.
    ///
    /// Returns `None` for anything outside the closed set.
    pub fn parse(s: &str) -> Option<Role> {
        match s {
            "user" => Some(Role::User),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    /// The lowercase name used in the database and in JWT claims.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}
