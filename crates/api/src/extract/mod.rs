//! Request-context construction and access-guard extractors.
//!
//! - [`context::RequestContext`] -- always-succeeding per-request context
//!   carrying the resolved principal, if any.
//! - [`guards::Authenticated`] -- requires any authenticated principal (401).
//! - [`guards::AdminOnly`] -- requires the `admin` role (403).
//!
//! Every protected handler takes one of the guard extractors as a
//! parameter; that is the single chokepoint between the router and the
//! repositories.

pub mod context;
pub mod guards;
