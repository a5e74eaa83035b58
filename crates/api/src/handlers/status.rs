//! Handlers for the authenticated `/user/status` resource.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use watchlog_core::error::CoreError;
use watchlog_core::types::DbId;
use watchlog_db::models::status::{WatchStatus, WatchlistItem};
use watchlog_db::repositories::StatusRepo;

use crate::error::AppResult;
use crate::extract::guards::Authenticated;
use crate::state::AppState;

/// Query parameters for the list endpoint (`?status=watching`).
#[derive(Debug, Deserialize)]
pub struct StatusListParams {
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StatusListResponse {
    pub items: Vec<WatchlistItem>,
}

/// Request body for `POST /user/status`.
///
/// `status` of `null` or `"none"` removes the row; any other value must
/// be a known watch status.
#[derive(Debug, Deserialize)]
pub struct SetStatusRequest {
    pub entry_id: DbId,
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// GET /api/v1/user/status
///
/// Lists the caller's entries joined with entry details, optionally
/// filtered by watch status.
pub async fn list(
    State(state): State<AppState>,
    Authenticated(ctx): Authenticated,
    Query(params): Query<StatusListParams>,
) -> AppResult<Json<StatusListResponse>> {
    let filter = match params.status.as_deref() {
        Some(raw) => Some(
            WatchStatus::parse(raw)
                .ok_or_else(|| CoreError::Validation(format!("invalid status: {raw}")))?,
        ),
        None => None,
    };

    let items = StatusRepo::list_for_user(&state.pool, ctx.user_id, filter).await?;
    Ok(Json(StatusListResponse { items }))
}

/// POST /api/v1/user/status
///
/// Sets or clears the caller's watch status for an entry. Clearing is
/// idempotent; setting is a single upsert keyed on `(user_id, entry_id)`.
pub async fn set(
    State(state): State<AppState>,
    Authenticated(ctx): Authenticated,
    Json(input): Json<SetStatusRequest>,
) -> AppResult<Json<SuccessResponse>> {
    match input.status.as_deref() {
        None | Some("none") => {
            StatusRepo::clear(&state.pool, ctx.user_id, input.entry_id).await?;
        }
        Some(raw) => {
            let status = WatchStatus::parse(raw)
                .ok_or_else(|| CoreError::Validation(format!("invalid status: {raw}")))?;
            StatusRepo::set(&state.pool, ctx.user_id, input.entry_id, status).await?;
        }
    }
    Ok(Json(SuccessResponse { success: true }))
}
