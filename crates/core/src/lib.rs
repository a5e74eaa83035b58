//! Domain-level building blocks shared by the db and api crates.
//!
//! Contains the error taxonomy, common id/timestamp aliases, and the
//! closed role enum used by the authorization layer.

pub mod error;
pub mod roles;
pub mod types;
