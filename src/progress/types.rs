//! Session progress types

use crate::catalog::types::ConceptArea;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Per-session completion state
///
/// Tracks which challenge ids a session has completed and a per-concept-area
/// counter used for the skill-coverage summary. The wire form always carries
/// all eight areas, zeros included, so clients can render a full grid.
/// Invariant: the id set's size equals the sum of the area counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionProgress {
    pub session_id: String,
    pub completed_challenge_ids: BTreeSet<String>,
    pub per_concept_area_counts: BTreeMap<ConceptArea, u64>,
}

impl SessionProgress {
    /// A fresh all-zero record for a session with no history
    pub fn empty(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            completed_challenge_ids: BTreeSet::new(),
            per_concept_area_counts: ConceptArea::all().into_iter().map(|a| (a, 0)).collect(),
        }
    }

    /// Total completions across all areas
    pub fn total_completed(&self) -> u64 {
        self.completed_challenge_ids.len() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record_has_all_areas_zeroed() {
        let progress = SessionProgress::empty("sess-1");

        assert_eq!(progress.session_id, "sess-1");
        assert_eq!(progress.total_completed(), 0);
        assert_eq!(progress.per_concept_area_counts.len(), 8);
        assert!(progress.per_concept_area_counts.values().all(|&n| n == 0));
    }

    #[test]
    fn test_wire_format_carries_every_area() {
        let progress = SessionProgress::empty("sess-1");
        let json = serde_json::to_string(&progress).unwrap();

        assert!(json.contains("\"sessionId\":\"sess-1\""));
        assert!(json.contains("\"completedChallengeIds\":[]"));
        for area in ConceptArea::all() {
            assert!(
                json.contains(&format!("\"{}\":0", area)),
                "missing area {} in {}",
                area,
                json
            );
        }
    }

    #[test]
    fn test_round_trip() {
        let mut progress = SessionProgress::empty("sess-2");
        progress.completed_challenge_ids.insert("ch-1".to_string());
        *progress
            .per_concept_area_counts
            .get_mut(&ConceptArea::PromptCraft)
            .unwrap() += 1;

        let json = serde_json::to_string(&progress).unwrap();
        let parsed: SessionProgress = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, progress);
        assert_eq!(parsed.total_completed(), 1);
    }
}
