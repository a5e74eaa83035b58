//! Handlers for the authenticated `/user/rating` resource.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use watchlog_core::error::CoreError;
use watchlog_core::types::DbId;
use watchlog_db::models::rating::{RATING_MAX, RATING_MIN};
use watchlog_db::repositories::RatingRepo;

use crate::error::AppResult;
use crate::extract::guards::Authenticated;
use crate::handlers::status::SuccessResponse;
use crate::state::AppState;

/// Query parameters for the read endpoint (`?entry_id=7`).
#[derive(Debug, Deserialize)]
pub struct RatingQuery {
    pub entry_id: DbId,
}

/// The caller's rating for one entry; `null` when unrated.
#[derive(Debug, Serialize)]
pub struct RatingResponse {
    pub value: Option<i32>,
}

/// Request body for `POST /user/rating`.
///
/// A `null` (or absent) value removes the rating.
#[derive(Debug, Deserialize)]
pub struct SetRatingRequest {
    pub entry_id: DbId,
    pub value: Option<i32>,
}

/// GET /api/v1/user/rating
pub async fn get(
    State(state): State<AppState>,
    Authenticated(ctx): Authenticated,
    Query(params): Query<RatingQuery>,
) -> AppResult<Json<RatingResponse>> {
    let row = RatingRepo::find(&state.pool, ctx.user_id, params.entry_id).await?;
    Ok(Json(RatingResponse {
        value: row.map(|r| r.value),
    }))
}

/// POST /api/v1/user/rating
///
/// Sets or clears the caller's rating for an entry. An out-of-range value
/// is rejected before anything is written; setting is a single upsert
/// against the `(user_id, entry_id)` uniqueness constraint.
pub async fn set(
    State(state): State<AppState>,
    Authenticated(ctx): Authenticated,
    Json(input): Json<SetRatingRequest>,
) -> AppResult<Json<SuccessResponse>> {
    match input.value {
        None => {
            RatingRepo::clear(&state.pool, ctx.user_id, input.entry_id).await?;
        }
        Some(value) => {
            if !(RATING_MIN..=RATING_MAX).contains(&value) {
                return Err(CoreError::Validation(format!(
                    "Rating must be {RATING_MIN}..{RATING_MAX}"
                ))
                .into());
            }
            RatingRepo::set(&state.pool, ctx.user_id, input.entry_id, value).await?;
        }
    }
    Ok(Json(SuccessResponse { success: true }))
}
