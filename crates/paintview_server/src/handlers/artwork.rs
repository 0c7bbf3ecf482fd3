//! Catalog listing and engagement HTTP handlers.

use crate::{error::HttpError, AppState};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use paintview_core::models::{ArtworkPage, ArtworkQuery, CatalogSummary};
use paintview_core::query;

/// List artworks: filtered, sorted, paginated, with effective counts.
///
/// # Arguments
/// - `state`: Application state.
/// - `req`: Listing query parameters.
///
/// # Returns
/// One page of results as JSON.
///
/// # Errors
/// Returns an error if a store cannot be read.
pub async fn list_artworks(
    State(state): State<AppState>,
    Query(req): Query<ArtworkQuery>,
) -> Result<Json<ArtworkPage>, HttpError> {
    let page = query::run(&state.catalog, &req, &state.config)?;
    Ok(Json(page))
}

/// Ranked preview lists (top trending, top popular).
///
/// Served from the same scoring code as the `trending` sort, so preview
/// order always matches served order.
///
/// # Errors
/// Returns an error if a store cannot be read.
pub async fn catalog_summary(
    State(state): State<AppState>,
) -> Result<Json<CatalogSummary>, HttpError> {
    let summary = state.catalog.summary(Utc::now())?;
    Ok(Json(summary))
}

/// Record one view for an artwork. Fire-and-forget: responds 204 with no
/// payload.
///
/// # Errors
/// `NotFound` when the id does not exist in the catalog.
pub async fn record_view(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, HttpError> {
    state.catalog.record_view(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Record one like for an artwork.
///
/// # Returns
/// The new effective like count, so the caller can update its own view
/// without re-querying.
///
/// # Errors
/// `NotFound` when the id does not exist in the catalog.
pub async fn record_like(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, HttpError> {
    let likes = state.catalog.record_like(&id)?;
    Ok(Json(serde_json::json!({ "likes": likes })))
}
