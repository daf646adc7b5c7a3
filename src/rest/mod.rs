pub mod handlers;
pub mod models;

use crate::server::AppState;
use axum::{Router, routing::get};
use std::sync::Arc;

/// Public HTTP surface.
///
/// `/get_streams` runs one resolution and answers with the first stream;
/// `/sources` lists the embed-page source names that can be requested.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/get_streams", get(handlers::get_streams))
        .route("/sources", get(handlers::get_sources))
}
