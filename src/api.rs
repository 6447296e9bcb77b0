//! Unified API router
//!
//! Merges all module routers into a single axum `Router` with CORS, request
//! tracing, and a shared error body shape.
//!
//! ## Endpoint Map
//!
//! | Method | Path                    | Module     | Description                   |
//! |--------|-------------------------|------------|-------------------------------|
//! | GET    | `/health`               | api        | Liveness probe                |
//! | POST   | `/api/v1/feed/queue`    | feed       | Build / extend a queue        |
//! | POST   | `/api/v1/feed/submit`   | comparison | Record + rank a submission    |
//! | GET    | `/api/v1/feed/compare`  | comparison | Peer comparison for a challenge |
//! | GET    | `/api/v1/feed/progress` | progress   | Session completion record     |

use crate::catalog::store::ChallengeCatalog;
use crate::comparison::handler::{comparison_router, ComparisonState};
use crate::feed::handler::{feed_router, FeedState};
use crate::progress::handler::{progress_router, ProgressState};
use crate::storage::FeedStore;
use axum::{
    http::{header, Method},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// API error response body
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ApiErrorDetail,
}

/// API error detail
#[derive(Debug, Serialize)]
pub struct ApiErrorDetail {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: ApiErrorDetail {
                code: "BAD_REQUEST".to_string(),
                message: message.into(),
            },
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            error: ApiErrorDetail {
                code: "SERVICE_UNAVAILABLE".to_string(),
                message: message.into(),
            },
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            error: ApiErrorDetail {
                code: "INTERNAL_ERROR".to_string(),
                message: message.into(),
            },
        }
    }
}

/// Build the complete skillfeed HTTP application
///
/// Merges all module routers, adds CORS and request tracing, and returns a
/// single `Router` ready to be served by `axum::serve`.
pub fn build_app(
    catalog: Arc<ChallengeCatalog>,
    store: Option<Arc<dyn FeedStore>>,
    cors_origins: &[String],
) -> Router {
    let cors = build_cors(cors_origins);

    let health_state = HealthState {
        catalog: catalog.clone(),
    };

    Router::new()
        .route("/health", get(health_check).with_state(health_state))
        .merge(feed_router(FeedState { catalog: catalog.clone() }))
        .merge(comparison_router(ComparisonState {
            catalog,
            store: store.clone(),
        }))
        .merge(progress_router(ProgressState { store }))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

// =============================================================================
// Health
// =============================================================================

#[derive(Clone)]
struct HealthState {
    catalog: Arc<ChallengeCatalog>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
    challenges: usize,
}

async fn health_check(
    axum::extract::State(state): axum::extract::State<HealthState>,
) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        challenges: state.catalog.len(),
    })
}

// =============================================================================
// CORS
// =============================================================================

fn build_cors(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    if origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        let parsed: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();
        cors.allow_origin(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::JsonFeedStore;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tempfile::TempDir;
    use tower::ServiceExt;

    async fn make_app() -> (Router, TempDir) {
        let dir = TempDir::new().unwrap();
        let store: Arc<dyn FeedStore> =
            Arc::new(JsonFeedStore::new(dir.path().to_path_buf()).await.unwrap());
        let app = build_app(
            Arc::new(ChallengeCatalog::builtin()),
            Some(store),
            &[],
        );
        (app, dir)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), 1024 * 64)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let (app, _dir) = make_app().await;
        let resp = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert_eq!(json["status"], "ok");
        assert!(json["challenges"].as_u64().unwrap() > 0);
    }

    #[tokio::test]
    async fn test_full_submit_then_compare_then_progress_flow() {
        let (app, _dir) = make_app().await;

        // Build a queue
        let resp = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/feed/queue")
                    .header("content-type", "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        // Submit an answer
        let submit = serde_json::json!({
            "sessionId": "sess-flow",
            "challengeId": "re-01",
            "challengeType": "reverse-engineer",
            "conceptArea": "prompt-craft",
            "submission": {"isCorrect": true},
            "timeMs": 12000
        });
        let resp = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/feed/submit")
                    .header("content-type", "application/json")
                    .body(Body::from(submit.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert_eq!(json["totalSubmissions"], 1);

        // Compare reflects the stored aggregate
        let resp = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/feed/compare?challengeId=re-01&sessionId=sess-flow")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let json = body_json(resp).await;
        assert_eq!(json["totalSubmissions"], 1);
        assert_eq!(json["distribution"]["10000"], 1);

        // Progress shows the completion
        let resp = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/feed/progress?sessionId=sess-flow")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let json = body_json(resp).await;
        assert_eq!(json["completedChallengeIds"], serde_json::json!(["re-01"]));
        assert_eq!(json["perConceptAreaCounts"]["prompt-craft"], 1);
    }

    #[test]
    fn test_build_cors_empty_origins() {
        let _cors = build_cors(&[]);
    }

    #[test]
    fn test_build_cors_with_origins() {
        let _cors = build_cors(&[
            "http://localhost:4321".to_string(),
            "https://app.example.com".to_string(),
        ]);
    }

    #[test]
    fn test_api_error_shapes() {
        let err = ApiError::bad_request("Missing required fields");
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("\"code\":\"BAD_REQUEST\""));

        let err = ApiError::unavailable("Persistence store not configured");
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("\"code\":\"SERVICE_UNAVAILABLE\""));

        let err = ApiError::internal("boom");
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("\"code\":\"INTERNAL_ERROR\""));
    }
}
