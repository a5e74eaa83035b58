//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO for patches, where needed

pub mod entry;
pub mod genre;
pub mod image;
pub mod rating;
pub mod status;
pub mod user;
