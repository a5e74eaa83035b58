//! Route definitions for the `/admin` resource.
//!
//! All routes require the `admin` role (enforced by handler extractors).

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{entries, genres};
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET    /entries              -> list
/// POST   /entries              -> create
/// PATCH  /entries/{id}         -> update
/// DELETE /entries/{id}         -> delete
/// PUT    /entries/{id}/genres  -> set_for_entry
/// POST   /genres               -> create genre
/// DELETE /genres/{id}          -> delete genre
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/entries", get(entries::list).post(entries::create))
        .route(
            "/entries/{id}",
            axum::routing::patch(entries::update).delete(entries::delete),
        )
        .route("/entries/{id}/genres", put(genres::set_for_entry))
        .route("/genres", post(genres::create))
        .route("/genres/{id}", axum::routing::delete(genres::delete))
}
