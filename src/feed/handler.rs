//! HTTP handler for feed queue construction
//!
//! - POST /api/v1/feed/queue — build (or extend) a challenge queue

use crate::catalog::store::ChallengeCatalog;
use crate::catalog::types::Challenge;
use crate::feed::builder::{build_queue, DEFAULT_BATCH_SIZE};
use axum::{
    extract::State,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use std::collections::HashSet;
use std::sync::Arc;

/// Largest batch a single request may ask for
const MAX_BATCH_SIZE: usize = 20;

/// Shared state for feed handlers
#[derive(Clone)]
pub struct FeedState {
    pub catalog: Arc<ChallengeCatalog>,
}

/// Create the feed router
pub fn feed_router(state: FeedState) -> Router {
    Router::new()
        .route("/api/v1/feed/queue", post(build_feed_queue))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QueueRequest {
    /// Challenge ids this session already completed
    #[serde(default)]
    excluded_ids: Vec<String>,
    batch_size: Option<usize>,
    /// Ids already displayed in the current queue (infinite-scroll
    /// continuation); excluded like completions, and only the new batch is
    /// returned
    #[serde(default)]
    append: Vec<String>,
}

/// POST /api/v1/feed/queue
async fn build_feed_queue(
    State(state): State<FeedState>,
    Json(request): Json<QueueRequest>,
) -> impl IntoResponse {
    let batch_size = request
        .batch_size
        .unwrap_or(DEFAULT_BATCH_SIZE)
        .clamp(1, MAX_BATCH_SIZE);

    let mut excluded: HashSet<String> = request.excluded_ids.into_iter().collect();
    excluded.extend(request.append);

    let queue: Vec<Challenge> = {
        let mut rng = rand::thread_rng();
        build_queue(&state.catalog, &excluded, batch_size, &mut rng)
    };

    Json(queue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn make_app() -> Router {
        let state = FeedState {
            catalog: Arc::new(ChallengeCatalog::builtin()),
        };
        feed_router(state)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), 1024 * 64)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    async fn post_queue(app: Router, body: serde_json::Value) -> axum::response::Response {
        app.oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/feed/queue")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_default_batch() {
        let resp = post_queue(make_app(), serde_json::json!({})).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let json = body_json(resp).await;
        let queue = json.as_array().unwrap();
        assert_eq!(queue.len(), 5);

        // Every entry is a full challenge definition
        assert!(queue[0]["id"].is_string());
        assert!(queue[0]["type"].is_string());
        assert!(queue[0]["conceptArea"].is_string());
        assert!(queue[0]["payload"].is_object());
    }

    #[tokio::test]
    async fn test_excluded_ids_are_not_offered() {
        let resp = post_queue(
            make_app(),
            serde_json::json!({"excludedIds": ["pf-01", "re-01"], "batchSize": 10}),
        )
        .await;

        let json = body_json(resp).await;
        let ids: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["id"].as_str().unwrap())
            .collect();
        assert!(!ids.contains(&"pf-01"));
        assert!(!ids.contains(&"re-01"));
    }

    #[tokio::test]
    async fn test_append_excludes_displayed_queue() {
        let resp = post_queue(
            make_app(),
            serde_json::json!({"append": ["pf-01", "tc-01"], "batchSize": 10}),
        )
        .await;

        let json = body_json(resp).await;
        let ids: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["id"].as_str().unwrap())
            .collect();
        assert!(!ids.contains(&"pf-01"));
        assert!(!ids.contains(&"tc-01"));
    }

    #[tokio::test]
    async fn test_batch_size_clamped() {
        let resp = post_queue(make_app(), serde_json::json!({"batchSize": 500})).await;
        let json = body_json(resp).await;
        // Builtin catalog is smaller than the clamp, so the whole catalog
        // comes back at most once
        assert!(json.as_array().unwrap().len() <= 20);
    }

    #[tokio::test]
    async fn test_exhausted_catalog_still_serves() {
        let catalog = ChallengeCatalog::builtin();
        let all_ids: Vec<String> = catalog.all().iter().map(|c| c.id.clone()).collect();

        let resp = post_queue(make_app(), serde_json::json!({"excludedIds": all_ids})).await;
        let json = body_json(resp).await;
        assert!(!json.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_json_is_rejected() {
        let app = make_app();
        let resp = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/feed/queue")
                    .header("content-type", "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
