//! Quality-score derivation
//!
//! Maps a challenge type's opaque submission payload to a score in [0, 1],
//! or `None` when no meaningful score exists for that type. The score feeds
//! both the aggregate mean and the score-only percentile path.

use crate::catalog::types::ChallengeType;
use serde_json::Value;

/// Derive a quality score from a submission payload
///
/// Scoring rules per type:
/// - binary-correct types (`reverse-engineer`, `first-principles`,
///   `trust-call`): `isCorrect` → 1.0, anything else → 0.0
/// - `taste-curator`: `matchesExpert` → 1.0, otherwise 0.5 (a non-expert
///   pick is still a considered pick)
/// - self-scored types (`debug-detective`, `tool-chain`, `agent-architect`):
///   the numeric `score` field, clamped to [0, 1]
/// - criteria types (`prompt-forge`, `context-surgeon`):
///   `criteriaMatched / totalCriteria` when both are present and the
///   denominator is positive
pub fn quality_score(challenge_type: ChallengeType, submission: &Value) -> Option<f64> {
    match challenge_type {
        ChallengeType::ReverseEngineer
        | ChallengeType::FirstPrinciples
        | ChallengeType::TrustCall => {
            let correct = submission
                .get("isCorrect")
                .and_then(Value::as_bool)
                .unwrap_or(false);
            Some(if correct { 1.0 } else { 0.0 })
        }

        ChallengeType::TasteCurator => {
            let matches = submission
                .get("matchesExpert")
                .and_then(Value::as_bool)
                .unwrap_or(false);
            Some(if matches { 1.0 } else { 0.5 })
        }

        ChallengeType::DebugDetective
        | ChallengeType::ToolChain
        | ChallengeType::AgentArchitect => submission
            .get("score")
            .and_then(Value::as_f64)
            .map(|s| s.clamp(0.0, 1.0)),

        ChallengeType::PromptForge | ChallengeType::ContextSurgeon => {
            let matched = submission.get("criteriaMatched").and_then(Value::as_f64)?;
            let total = submission.get("totalCriteria").and_then(Value::as_f64)?;
            if total > 0.0 {
                Some((matched / total).clamp(0.0, 1.0))
            } else {
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_binary_correct_types() {
        for ty in [
            ChallengeType::ReverseEngineer,
            ChallengeType::FirstPrinciples,
            ChallengeType::TrustCall,
        ] {
            assert_eq!(quality_score(ty, &json!({"isCorrect": true})), Some(1.0));
            assert_eq!(quality_score(ty, &json!({"isCorrect": false})), Some(0.0));
            // Missing field reads as incorrect
            assert_eq!(quality_score(ty, &json!({})), Some(0.0));
        }
    }

    #[test]
    fn test_taste_curator() {
        let ty = ChallengeType::TasteCurator;
        assert_eq!(quality_score(ty, &json!({"matchesExpert": true})), Some(1.0));
        assert_eq!(quality_score(ty, &json!({"matchesExpert": false})), Some(0.5));
        assert_eq!(quality_score(ty, &json!({})), Some(0.5));
    }

    #[test]
    fn test_self_scored_types() {
        for ty in [
            ChallengeType::DebugDetective,
            ChallengeType::ToolChain,
            ChallengeType::AgentArchitect,
        ] {
            assert_eq!(quality_score(ty, &json!({"score": 0.6})), Some(0.6));
            assert_eq!(quality_score(ty, &json!({"score": 1.4})), Some(1.0));
            assert_eq!(quality_score(ty, &json!({"score": "high"})), None);
            assert_eq!(quality_score(ty, &json!({})), None);
        }
    }

    #[test]
    fn test_criteria_types() {
        for ty in [ChallengeType::PromptForge, ChallengeType::ContextSurgeon] {
            assert_eq!(
                quality_score(ty, &json!({"criteriaMatched": 3, "totalCriteria": 4})),
                Some(0.75)
            );
            assert_eq!(
                quality_score(ty, &json!({"criteriaMatched": 0, "totalCriteria": 4})),
                Some(0.0)
            );
            // Zero or missing denominator yields no score
            assert_eq!(
                quality_score(ty, &json!({"criteriaMatched": 3, "totalCriteria": 0})),
                None
            );
            assert_eq!(quality_score(ty, &json!({"criteriaMatched": 3})), None);
            assert_eq!(quality_score(ty, &json!({})), None);
        }
    }
}
