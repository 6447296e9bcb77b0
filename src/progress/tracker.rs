//! Idempotent completion tracking
//!
//! A challenge within a session moves `NotStarted → Completed` exactly once;
//! there is no persisted in-progress state and abandoned attempts are never
//! recorded.

use crate::catalog::types::ConceptArea;
use crate::progress::types::SessionProgress;

/// Record a completion, returning the updated progress record
///
/// Idempotent: recording an already-completed challenge id returns the
/// existing record unchanged, so re-submissions never double-count.
pub fn record_completion(
    existing: Option<&SessionProgress>,
    session_id: &str,
    challenge_id: &str,
    concept_area: ConceptArea,
) -> SessionProgress {
    let mut progress = match existing {
        Some(p) => {
            if p.completed_challenge_ids.contains(challenge_id) {
                return p.clone();
            }
            p.clone()
        }
        None => SessionProgress::empty(session_id),
    };

    progress
        .completed_challenge_ids
        .insert(challenge_id.to_string());
    *progress.per_concept_area_counts.entry(concept_area).or_insert(0) += 1;
    progress
}
