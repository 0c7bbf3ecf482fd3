//! Health HTTP handler.

use axum::Json;
use chrono::Utc;

/// Liveness probe.
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "ts": Utc::now().timestamp_millis(),
    }))
}
