//! Simulated-ingestion HTTP handler.

use crate::{error::HttpError, AppState};
use axum::{extract::State, Json};
use paintview_core::constants::SYNC_BATCH_SIZE;
use paintview_core::seed;

/// Simulate a bulk-ingestion run by inserting a batch of synthetic
/// artworks.
///
/// A production deployment would enqueue a job for a scraper worker and
/// return 202; the demo ingests inline so new items are visible to the very
/// next query.
///
/// # Returns
/// A short message and the number of artworks added.
///
/// # Errors
/// Returns an error if the artwork store cannot be written.
pub async fn sync_catalog(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, HttpError> {
    let added = seed::ingest_synthetic(&state.catalog, SYNC_BATCH_SIZE)?;
    tracing::info!("Simulated ingestion added {} artworks", added);
    Ok(Json(serde_json::json!({
        "message": format!("Simulated ingestion of {} artworks (demo).", added),
        "added": added,
    })))
}
