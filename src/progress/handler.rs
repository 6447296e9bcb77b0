//! HTTP handler for session progress
//!
//! - GET /api/v1/feed/progress — a session's completion record

use crate::api::ApiError;
use crate::progress::types::SessionProgress;
use crate::storage::FeedStore;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::warn;

/// Shared state for progress handlers
#[derive(Clone)]
pub struct ProgressState {
    /// `None` when persistence is not configured; the endpoint answers 503
    pub store: Option<Arc<dyn FeedStore>>,
}

/// Create the progress router
pub fn progress_router(state: ProgressState) -> Router {
    Router::new()
        .route("/api/v1/feed/progress", get(get_progress))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProgressQuery {
    session_id: Option<String>,
}

/// GET /api/v1/feed/progress
async fn get_progress(
    State(state): State<ProgressState>,
    Query(params): Query<ProgressQuery>,
) -> Response {
    let Some(session_id) = params.session_id else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiError::bad_request("sessionId required")),
        )
            .into_response();
    };

    let Some(store) = state.store.as_ref() else {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiError::unavailable("Persistence store not configured")),
        )
            .into_response();
    };

    match store.get_progress(&session_id).await {
        // A session with no history gets the all-zero record, not a 404
        Ok(progress) => {
            Json(progress.unwrap_or_else(|| SessionProgress::empty(session_id.as_str())))
                .into_response()
        }
        Err(e) => {
            warn!(session_id = %session_id, "Progress read failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::internal("Failed to fetch progress")),
            )
                .into_response()
        }
    }
}
