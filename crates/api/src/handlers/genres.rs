//! Handlers for genres: public listing, admin management, and the
//! per-entry genre link replacement.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use watchlog_core::error::CoreError;
use watchlog_core::types::DbId;
use watchlog_db::models::genre::{CreateGenre, Genre};
use watchlog_db::repositories::{EntryRepo, GenreRepo};

use crate::error::{AppError, AppResult};
use crate::extract::guards::AdminOnly;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct GenreListResponse {
    pub items: Vec<Genre>,
}

/// Request body for `PUT /admin/entries/{id}/genres`.
#[derive(Debug, Deserialize)]
pub struct SetGenresRequest {
    pub genre_ids: Vec<DbId>,
}

/// GET /api/v1/genres (public)
pub async fn list(State(state): State<AppState>) -> AppResult<Json<GenreListResponse>> {
    let items = GenreRepo::list(&state.pool).await?;
    Ok(Json(GenreListResponse { items }))
}

/// POST /api/v1/admin/genres
pub async fn create(
    State(state): State<AppState>,
    AdminOnly(_ctx): AdminOnly,
    Json(input): Json<CreateGenre>,
) -> AppResult<(StatusCode, Json<Genre>)> {
    let name = input.name.trim().to_string();
    if name.is_empty() {
        return Err(CoreError::Validation("name is required".into()).into());
    }
    let genre = GenreRepo::create(&state.pool, &CreateGenre { name }).await?;
    Ok((StatusCode::CREATED, Json(genre)))
}

/// DELETE /api/v1/admin/genres/{id}
pub async fn delete(
    State(state): State<AppState>,
    AdminOnly(_ctx): AdminOnly,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = GenreRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Genre", id }));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/admin/entries/{id}/genres
///
/// Replaces the entry's genre links in one transaction.
pub async fn set_for_entry(
    State(state): State<AppState>,
    AdminOnly(_ctx): AdminOnly,
    Path(id): Path<DbId>,
    Json(input): Json<SetGenresRequest>,
) -> AppResult<StatusCode> {
    EntryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Entry", id }))?;
    GenreRepo::set_for_entry(&state.pool, id, &input.genre_ids).await?;
    Ok(StatusCode::NO_CONTENT)
}
