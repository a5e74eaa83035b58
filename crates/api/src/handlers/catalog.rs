//! Handlers for the public `/catalog` resource.
//!
//! Anonymous read path: no guard extractor, so the request context is
//! never consulted.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use watchlog_core::error::CoreError;
use watchlog_core::types::DbId;
use watchlog_db::models::entry::EntryWithDetails;
use watchlog_db::models::genre::Genre;
use watchlog_db::repositories::{EntryRepo, GenreRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CatalogListResponse {
    pub items: Vec<EntryWithDetails>,
}

/// A single catalog entry with its linked genres.
#[derive(Debug, Serialize)]
pub struct CatalogEntryResponse {
    #[serde(flatten)]
    pub entry: EntryWithDetails,
    pub genres: Vec<Genre>,
}

/// GET /api/v1/catalog
pub async fn list(State(state): State<AppState>) -> AppResult<Json<CatalogListResponse>> {
    let items = EntryRepo::list_with_details(&state.pool).await?;
    Ok(Json(CatalogListResponse { items }))
}

/// GET /api/v1/catalog/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<CatalogEntryResponse>> {
    let entry = EntryRepo::find_with_details(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Entry", id }))?;
    let genres = GenreRepo::list_for_entry(&state.pool, id).await?;
    Ok(Json(CatalogEntryResponse { entry, genres }))
}
