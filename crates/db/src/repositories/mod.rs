//! Repositories: stateless structs with associated async fns over `&PgPool`.
//!
//! Multi-row mutations (entry create/update/delete, genre link replacement)
//! run inside a single transaction so partial effects are never observable.
//! Single-row upserts (status, rating) are expressed as one conditional
//! `INSERT ... ON CONFLICT` statement to close the check-then-act window.

mod entry_repo;
mod genre_repo;
mod rating_repo;
mod status_repo;
mod user_repo;

pub use entry_repo::EntryRepo;
pub use genre_repo::GenreRepo;
pub use rating_repo::RatingRepo;
pub use status_repo::StatusRepo;
pub use user_repo::UserRepo;
