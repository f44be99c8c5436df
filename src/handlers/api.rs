//! Health check endpoint.

use axum::Json;
use serde_json::{Value, json};

/// Liveness probe. No auth, no state.
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "podgen-gateway",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
