//! Route definitions for the authenticated `/user` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{rating, status};
use crate::state::AppState;

/// Routes mounted at `/user`.
///
/// ```text
/// GET  /status  -> list (optionally ?status=watching)
/// POST /status  -> set or clear
/// GET  /rating  -> get (?entry_id=)
/// POST /rating  -> set or clear
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/status", get(status::list).post(status::set))
        .route("/rating", get(rating::get).post(rating::set))
}
