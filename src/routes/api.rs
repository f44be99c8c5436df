use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers::{api, panel, podcast};
use crate::state::AppState;
use std::sync::Arc;

/// Create the API router.
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(api::health_check))
        .route("/podcast/generate", post(podcast::generate))
        .route("/podcast/upload", post(podcast::upload))
        .route("/podcast/panel", get(panel::get_panel))
        .route("/podcast/panel/mode", post(panel::set_mode))
        .route("/podcast/panel/prompt", post(panel::set_prompt))
        .route("/podcast/panel/metadata", post(panel::media_metadata))
        .layer(TraceLayer::new_for_http())
}
