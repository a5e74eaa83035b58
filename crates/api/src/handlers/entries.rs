//! Handlers for the admin `/admin/entries` resource.
//!
//! Every handler takes [`AdminOnly`], so no mutation of the catalog can
//! happen without passing the role guard.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use watchlog_core::error::CoreError;
use watchlog_core::types::DbId;
use watchlog_db::models::entry::{CreateEntry, EntryStatus, EntryWithDetails, UpdateEntry};
use watchlog_db::repositories::EntryRepo;

use crate::error::{AppError, AppResult};
use crate::extract::guards::AdminOnly;
use crate::state::AppState;

/// Response for the admin listing: entries with poster and live average
/// rating.
#[derive(Debug, Serialize)]
pub struct EntryListResponse {
    pub items: Vec<EntryWithDetails>,
}

/// Response for a successful create.
#[derive(Debug, Serialize)]
pub struct CreateEntryResponse {
    pub id: DbId,
}

/// GET /api/v1/admin/entries
pub async fn list(
    State(state): State<AppState>,
    AdminOnly(_ctx): AdminOnly,
) -> AppResult<Json<EntryListResponse>> {
    let items = EntryRepo::list_with_details(&state.pool).await?;
    Ok(Json(EntryListResponse { items }))
}

/// POST /api/v1/admin/entries
///
/// Validates that `title` and `external_url` are non-empty after trimming
/// and that `status`, when supplied, is a known value. The entry row and
/// the optional poster row are inserted in one transaction.
pub async fn create(
    State(state): State<AppState>,
    AdminOnly(_ctx): AdminOnly,
    Json(input): Json<CreateEntry>,
) -> AppResult<(StatusCode, Json<CreateEntryResponse>)> {
    let title = input.title.trim().to_string();
    if title.is_empty() {
        return Err(CoreError::Validation("title is required".into()).into());
    }

    let external_url = input.external_url.trim().to_string();
    if external_url.is_empty() {
        return Err(CoreError::Validation("externalUrl is required".into()).into());
    }

    if let Some(status) = &input.status {
        if EntryStatus::parse(status).is_none() {
            return Err(CoreError::Validation(format!("unknown status: {status}")).into());
        }
    }

    // An empty poster URL means "no poster", not an empty image row.
    let poster_url = input
        .poster_url
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from);

    let sanitized = CreateEntry {
        title,
        description: input.description,
        release_year: input.release_year,
        status: input.status,
        external_url,
        poster_url,
    };

    let entry = EntryRepo::create(&state.pool, &sanitized).await?;
    tracing::info!(entry_id = entry.id, "catalog entry created");
    Ok((StatusCode::CREATED, Json(CreateEntryResponse { id: entry.id })))
}

/// PATCH /api/v1/admin/entries/{id}
///
/// Sparse update: absent fields are untouched, explicit `null` clears
/// `description`/`release_year`, and the poster field drives the poster
/// row lifecycle (empty removes, non-empty upserts). `title` and
/// `external_url` may not be set to an empty string.
pub async fn update(
    State(state): State<AppState>,
    AdminOnly(_ctx): AdminOnly,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEntry>,
) -> AppResult<StatusCode> {
    let title = match input.title {
        Some(title) => {
            let title = title.trim().to_string();
            if title.is_empty() {
                return Err(CoreError::Validation("title cannot be empty".into()).into());
            }
            Some(title)
        }
        None => None,
    };

    let external_url = match input.external_url {
        Some(url) => {
            let url = url.trim().to_string();
            if url.is_empty() {
                return Err(CoreError::Validation("externalUrl cannot be empty".into()).into());
            }
            Some(url)
        }
        None => None,
    };

    // A present-but-null status resets to the column default.
    let status = match input.status {
        Some(Some(status)) => {
            if EntryStatus::parse(&status).is_none() {
                return Err(CoreError::Validation(format!("unknown status: {status}")).into());
            }
            Some(Some(status))
        }
        Some(None) => Some(Some(EntryStatus::Ongoing.as_str().to_string())),
        None => None,
    };

    let sanitized = UpdateEntry {
        title,
        description: input.description,
        release_year: input.release_year,
        status,
        external_url,
        poster_url: input.poster_url,
    };

    let updated = EntryRepo::update(&state.pool, id, &sanitized).await?;
    if !updated {
        return Err(AppError::Core(CoreError::NotFound { entity: "Entry", id }));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/admin/entries/{id}
///
/// Cascades through all dependent rows in one transaction.
pub async fn delete(
    State(state): State<AppState>,
    AdminOnly(_ctx): AdminOnly,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = EntryRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Entry", id }));
    }
    tracing::info!(entry_id = id, "catalog entry deleted");
    Ok(StatusCode::NO_CONTENT)
}
