//! Route definitions.

pub mod admin;
pub mod auth;
pub mod catalog;
pub mod health;
pub mod user;

use axum::routing::get;
use axum::Router;

use crate::handlers::genres;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                register (public)
/// /auth/login                   login (public)
///
/// /catalog                      list entries (public)
/// /catalog/{id}                 entry detail (public)
/// /genres                       list genres (public)
///
/// /user/status                  list, set/clear (authenticated)
/// /user/rating                  get, set/clear (authenticated)
///
/// /admin/entries                list, create (admin only)
/// /admin/entries/{id}           patch, delete
/// /admin/entries/{id}/genres    replace genre links (PUT)
/// /admin/genres                 create
/// /admin/genres/{id}            delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/catalog", catalog::router())
        .route("/genres", get(genres::list))
        .nest("/user", user::router())
        .nest("/admin", admin::router())
}
