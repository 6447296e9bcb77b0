//! Persistence collaborator for submissions, aggregates, and progress
//!
//! The engine owns no durable state of its own: everything lives behind the
//! [`FeedStore`] trait and is held in-process only for the duration of one
//! update-and-respond cycle. The shipped implementation is the file-backed
//! [`JsonFeedStore`]; deployments with a real database implement the trait
//! against it.

pub mod json;

use crate::catalog::types::{ChallengeType, ConceptArea};
use crate::comparison::types::{AggregateSample, ChallengeAggregate};
use crate::error::Result;
use crate::progress::types::SessionProgress;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use json::JsonFeedStore;

/// One submitted answer, persisted append-only
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub id: String,
    pub session_id: String,
    pub challenge_id: String,
    pub challenge_type: ChallengeType,
    pub concept_area: ConceptArea,
    pub payload: serde_json::Value,
    pub elapsed_ms: Option<u64>,
    pub used_assist: bool,
    pub quality_score: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl SubmissionRecord {
    /// Build a record with a fresh id and the current timestamp
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        session_id: impl Into<String>,
        challenge_id: impl Into<String>,
        challenge_type: ChallengeType,
        concept_area: ConceptArea,
        payload: serde_json::Value,
        elapsed_ms: Option<u64>,
        used_assist: bool,
        quality_score: Option<f64>,
    ) -> Self {
        Self {
            id: format!("sub-{}", uuid::Uuid::new_v4()),
            session_id: session_id.into(),
            challenge_id: challenge_id.into(),
            challenge_type,
            concept_area,
            payload,
            elapsed_ms,
            used_assist,
            quality_score,
            created_at: Utc::now(),
        }
    }
}

/// Persistence operations the engine needs
///
/// Implementations MUST serialize `apply_submission` calls per challenge id
/// (and `record_completion` per session id): two concurrent read-modify-write
/// cycles on the same key losing an update is a correctness bug, not an
/// acceptable eventual-consistency artifact.
#[async_trait]
pub trait FeedStore: Send + Sync {
    /// Append a raw submission record
    async fn insert_submission(&self, record: SubmissionRecord) -> Result<()>;

    /// The most recent submission a session made for a challenge
    async fn latest_submission(
        &self,
        session_id: &str,
        challenge_id: &str,
    ) -> Result<Option<SubmissionRecord>>;

    /// Current aggregate for a challenge, if any submissions exist
    async fn get_aggregate(&self, challenge_id: &str) -> Result<Option<ChallengeAggregate>>;

    /// Fold one sample into a challenge's aggregate and return the result
    ///
    /// The read-modify-write is serialized per challenge id.
    async fn apply_submission(
        &self,
        challenge_id: &str,
        sample: AggregateSample,
    ) -> Result<ChallengeAggregate>;

    /// Current progress record for a session, if it has any history
    async fn get_progress(&self, session_id: &str) -> Result<Option<SessionProgress>>;

    /// Record a completion idempotently and return the updated progress
    async fn record_completion(
        &self,
        session_id: &str,
        challenge_id: &str,
        concept_area: ConceptArea,
    ) -> Result<SessionProgress>;
}
