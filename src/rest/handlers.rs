use crate::pipeline::ResolutionRequest;
use crate::rest::models::*;
use crate::server::AppState;
use axum::{
    extract::{Query, State},
    response::Json,
};
use std::sync::Arc;

/// GET /get_streams?source_name=...&media_id=...&season=...&episode=...
pub async fn get_streams(
    Query(params): Query<ResolutionRequest>,
    State(state): State<Arc<AppState>>,
) -> Json<StreamsResponse> {
    tracing::debug!(
        "Get streams: '{}' for {} (season {:?}, episode {:?})",
        params.source_name,
        params.media_id,
        params.season,
        params.episode
    );

    let stream_url = state
        .resolver
        .get_streams(&params)
        .await
        .and_then(|result| result.first_stream().map(str::to_string));

    Json(match stream_url {
        Some(stream_url) => StreamsResponse::Found { stream_url },
        None => StreamsResponse::failed(),
    })
}

/// GET /sources
pub async fn get_sources(State(state): State<Arc<AppState>>) -> Json<SourcesResponse> {
    Json(SourcesResponse {
        sources: state.resolver.extractors().source_names(),
    })
}
