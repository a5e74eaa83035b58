//! HTTP handlers, grouped by resource.

pub mod auth;
pub mod catalog;
pub mod entries;
pub mod genres;
pub mod rating;
pub mod status;
