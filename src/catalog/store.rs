//! Challenge catalog
//!
//! Immutable, read-only set of challenge definitions shared across all
//! sessions. Content comes from a JSON file when one is configured,
//! otherwise from the builtin demo set.

use crate::catalog::builtin::builtin_challenges;
use crate::catalog::types::{Challenge, ChallengeType, ConceptArea};
use crate::error::{Error, Result};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// Read-only challenge catalog, built once at startup
pub struct ChallengeCatalog {
    challenges: Vec<Challenge>,
    by_id: HashMap<String, usize>,
}

impl ChallengeCatalog {
    /// Build a catalog from a list of definitions, rejecting duplicate ids
    pub fn from_challenges(challenges: Vec<Challenge>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(challenges.len());
        for (idx, challenge) in challenges.iter().enumerate() {
            if by_id.insert(challenge.id.clone(), idx).is_some() {
                return Err(Error::Catalog(format!(
                    "duplicate challenge id: {}",
                    challenge.id
                )));
            }
        }
        Ok(Self { challenges, by_id })
    }

    /// Load a catalog from a JSON file containing an array of definitions
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|e| {
            Error::Catalog(format!("failed to read {}: {}", path.display(), e))
        })?;
        let challenges: Vec<Challenge> = serde_json::from_str(&data).map_err(|e| {
            Error::Catalog(format!("failed to parse {}: {}", path.display(), e))
        })?;
        Self::from_challenges(challenges)
    }

    /// The builtin demo catalog
    pub fn builtin() -> Self {
        // Builtin content has unique ids (checked in tests), so this cannot fail.
        Self::from_challenges(builtin_challenges())
            .expect("builtin catalog has duplicate ids")
    }

    /// Get a challenge by id
    pub fn get(&self, id: &str) -> Option<&Challenge> {
        self.by_id.get(id).map(|&idx| &self.challenges[idx])
    }

    /// All challenges, in catalog order
    pub fn all(&self) -> &[Challenge] {
        &self.challenges
    }

    /// Number of challenges
    pub fn len(&self) -> usize {
        self.challenges.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.challenges.is_empty()
    }

    /// Challenge counts per type, for the catalog summary command
    pub fn counts_by_type(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for ty in ChallengeType::all() {
            counts.insert(ty.to_string(), 0);
        }
        for challenge in &self.challenges {
            *counts.entry(challenge.challenge_type.to_string()).or_default() += 1;
        }
        counts
    }

    /// Challenge counts per concept area, for the catalog summary command
    pub fn counts_by_area(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for area in ConceptArea::all() {
            counts.insert(area.to_string(), 0);
        }
        for challenge in &self.challenges {
            *counts.entry(challenge.concept_area.to_string()).or_default() += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn make_challenge(id: &str) -> Challenge {
        Challenge {
            id: id.to_string(),
            challenge_type: ChallengeType::TrustCall,
            concept_area: ConceptArea::CriticalThinking,
            title: format!("Challenge {}", id),
            brief: "test".to_string(),
            difficulty: 1,
            payload: json!({}),
        }
    }

    #[test]
    fn test_from_challenges_and_get() {
        let catalog =
            ChallengeCatalog::from_challenges(vec![make_challenge("a"), make_challenge("b")])
                .unwrap();

        assert_eq!(catalog.len(), 2);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.get("a").unwrap().id, "a");
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result =
            ChallengeCatalog::from_challenges(vec![make_challenge("a"), make_challenge("a")]);
        assert!(matches!(result, Err(Error::Catalog(_))));
    }

    #[test]
    fn test_builtin_loads() {
        let catalog = ChallengeCatalog::builtin();
        assert!(!catalog.is_empty());
        assert!(catalog.get("pf-01").is_some());
    }

    #[test]
    fn test_counts_cover_every_type_and_area() {
        let catalog = ChallengeCatalog::builtin();

        let by_type = catalog.counts_by_type();
        assert_eq!(by_type.len(), 9);
        assert!(by_type.values().all(|&n| n > 0));

        let by_area = catalog.counts_by_area();
        assert_eq!(by_area.len(), 8);
        assert!(by_area.values().all(|&n| n > 0));
    }

    #[test]
    fn test_from_file_round_trip() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        let challenges = vec![make_challenge("x"), make_challenge("y")];
        std::fs::write(&path, serde_json::to_string_pretty(&challenges).unwrap()).unwrap();

        let catalog = ChallengeCatalog::from_file(&path).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.get("x").is_some());
    }

    #[test]
    fn test_from_file_missing_or_corrupt() {
        assert!(ChallengeCatalog::from_file("/nonexistent/catalog.json").is_err());

        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "not valid json").unwrap();
        assert!(ChallengeCatalog::from_file(&path).is_err());
    }
}
