//! HTTP handlers for submission and peer comparison
//!
//! - POST /api/v1/feed/submit  — record a submission, return its comparison
//! - GET  /api/v1/feed/compare — comparison for a challenge (optionally
//!   ranked against a session's own latest submission)
//!
//! Submit performs three independent best-effort writes (raw insert,
//! aggregate apply, progress record). A failure in any one is logged and the
//! others still run; the response is always computed from the best available
//! aggregate state. The user is never blocked on a writer failure.

use crate::api::ApiError;
use crate::catalog::store::ChallengeCatalog;
use crate::catalog::types::{ChallengeType, ConceptArea};
use crate::comparison::aggregate::update_aggregate;
use crate::comparison::insight::{generate_insight, FIRST_SUBMISSION_INSIGHT};
use crate::comparison::percentile::{
    estimate_percentile, score_percentile, NEUTRAL_PERCENTILE,
};
use crate::comparison::score::quality_score;
use crate::comparison::types::{AggregateSample, ChallengeAggregate, ComparisonData};
use crate::storage::{FeedStore, SubmissionRecord};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::warn;

/// Shared state for comparison handlers
#[derive(Clone)]
pub struct ComparisonState {
    pub catalog: Arc<ChallengeCatalog>,
    /// `None` when persistence is not configured; data paths answer 503
    pub store: Option<Arc<dyn FeedStore>>,
}

/// Create the comparison router
pub fn comparison_router(state: ComparisonState) -> Router {
    Router::new()
        .route("/api/v1/feed/submit", post(submit))
        .route("/api/v1/feed/compare", get(compare))
        .with_state(state)
}

// =============================================================================
// Request types
// =============================================================================

/// Submit body. Required fields are `Option` so their absence maps to a 400
/// with a JSON error body instead of an extractor rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubmitRequest {
    session_id: Option<String>,
    challenge_id: Option<String>,
    challenge_type: Option<String>,
    concept_area: Option<String>,
    submission: Option<serde_json::Value>,
    time_ms: Option<u64>,
    used_ai: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CompareQuery {
    challenge_id: Option<String>,
    session_id: Option<String>,
}

fn bad_request(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiError::bad_request(message)),
    )
        .into_response()
}

fn store_unavailable() -> Response {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(ApiError::unavailable("Persistence store not configured")),
    )
        .into_response()
}

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/v1/feed/submit
async fn submit(
    State(state): State<ComparisonState>,
    Json(request): Json<SubmitRequest>,
) -> Response {
    // Client input validation happens before any side effect
    let (session_id, challenge_id, challenge_type, concept_area, submission) = match (
        request.session_id,
        request.challenge_id,
        request.challenge_type,
        request.concept_area,
        request.submission,
    ) {
        (Some(s), Some(c), Some(t), Some(a), Some(p)) => (s, c, t, a, p),
        _ => return bad_request("Missing required fields"),
    };

    let challenge_type: ChallengeType = match challenge_type.parse() {
        Ok(ty) => ty,
        Err(e) => return bad_request(e),
    };
    let concept_area: ConceptArea = match concept_area.parse() {
        Ok(area) => area,
        Err(e) => return bad_request(e),
    };

    let Some(store) = state.store.as_ref() else {
        return store_unavailable();
    };

    let score = quality_score(challenge_type, &submission);
    let sample = AggregateSample {
        quality_score: score,
        elapsed_ms: request.time_ms,
    };

    // Write 1: append the raw submission
    let record = SubmissionRecord::new(
        session_id.clone(),
        challenge_id.clone(),
        challenge_type,
        concept_area,
        submission,
        request.time_ms,
        request.used_ai.unwrap_or(false),
        score,
    );
    if let Err(e) = store.insert_submission(record).await {
        warn!(challenge_id = %challenge_id, "Submission insert failed: {}", e);
    }

    // Write 2: fold the sample into the aggregate. On failure, recompute in
    // memory from whatever state is readable so the response still ranks.
    let aggregate = match store.apply_submission(&challenge_id, sample).await {
        Ok(aggregate) => aggregate,
        Err(e) => {
            warn!(challenge_id = %challenge_id, "Aggregate update failed: {}", e);
            let current = store.get_aggregate(&challenge_id).await.ok().flatten();
            update_aggregate(current.as_ref(), &sample)
        }
    };

    // Write 3: record the completion
    if let Err(e) = store
        .record_completion(&session_id, &challenge_id, concept_area)
        .await
    {
        warn!(session_id = %session_id, "Progress update failed: {}", e);
    }

    let percentile = submission_percentile(request.time_ms, score, &aggregate);
    let insight = generate_insight(Some(challenge_type), percentile);

    Json(ComparisonData {
        percentile,
        total_submissions: aggregate.total_submissions,
        distribution: aggregate.time_histogram,
        insight: insight.to_string(),
    })
    .into_response()
}

/// GET /api/v1/feed/compare
async fn compare(
    State(state): State<ComparisonState>,
    Query(params): Query<CompareQuery>,
) -> Response {
    let Some(challenge_id) = params.challenge_id else {
        return bad_request("challengeId required");
    };

    let Some(store) = state.store.as_ref() else {
        return store_unavailable();
    };

    let aggregate = match store.get_aggregate(&challenge_id).await {
        Ok(aggregate) => aggregate,
        Err(e) => {
            warn!(challenge_id = %challenge_id, "Aggregate read failed: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::internal("Failed to fetch comparison data")),
            )
                .into_response();
        }
    };

    // An empty aggregate is a valid, expected state, not a failure
    let Some(aggregate) = aggregate else {
        return Json(ComparisonData {
            percentile: NEUTRAL_PERCENTILE,
            total_submissions: 0,
            distribution: BTreeMap::new(),
            insight: FIRST_SUBMISSION_INSIGHT.to_string(),
        })
        .into_response();
    };

    // With a session id, rank that session's own latest submission;
    // otherwise the percentile stays neutral
    let mut percentile = NEUTRAL_PERCENTILE;
    if let Some(session_id) = params.session_id.as_deref() {
        match store.latest_submission(session_id, &challenge_id).await {
            Ok(Some(submission)) => {
                percentile = submission_percentile(
                    submission.elapsed_ms,
                    submission.quality_score,
                    &aggregate,
                );
            }
            Ok(None) => {}
            Err(e) => {
                warn!(session_id = %session_id, "Submission lookup failed: {}", e);
            }
        }
    }

    // The catalog is authoritative for the challenge type; unknown ids get
    // generic insight copy
    let challenge_type = state
        .catalog
        .get(&challenge_id)
        .map(|c| c.challenge_type);
    let insight = generate_insight(challenge_type, percentile);

    Json(ComparisonData {
        percentile,
        total_submissions: aggregate.total_submissions,
        distribution: aggregate.time_histogram,
        insight: insight.to_string(),
    })
    .into_response()
}

/// Percentile for one submission against an aggregate
///
/// Timed submissions rank against the histogram; score-only submissions map
/// the quality score straight to a percentile (the two paths are knowingly
/// inconsistent, see comparison::percentile); with neither, the result is
/// neutral.
fn submission_percentile(
    elapsed_ms: Option<u64>,
    quality_score: Option<f64>,
    aggregate: &ChallengeAggregate,
) -> u8 {
    match (elapsed_ms, quality_score) {
        (Some(elapsed), _) => estimate_percentile(
            elapsed as f64,
            &aggregate.time_histogram,
            aggregate.total_submissions,
        ),
        (None, Some(score)) => score_percentile(score),
        (None, None) => NEUTRAL_PERCENTILE,
    }
}
