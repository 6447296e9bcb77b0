//! Feed queue construction
//!
//! Builds an ordered, non-repeating batch of challenges for a session under
//! diversity constraints. Purely a function of catalog + exclusions + the
//! injected randomness source; no hidden state, so seeded tests are exactly
//! reproducible.

use crate::catalog::store::ChallengeCatalog;
use crate::catalog::types::{Challenge, ChallengeType, ConceptArea};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Default number of challenges per batch
pub const DEFAULT_BATCH_SIZE: usize = 5;

/// Low-barrier types eligible to open a fresh queue
pub const STARTER_TYPES: [ChallengeType; 3] = [
    ChallengeType::PromptForge,
    ChallengeType::TasteCurator,
    ChallengeType::ReverseEngineer,
];

/// How many recently added items the concept-area diversity check looks at
const DIVERSITY_WINDOW: usize = 3;

/// Queue under construction: tracks what the constraint checks need
struct QueueState {
    queue: Vec<Challenge>,
    used: HashSet<String>,
    recent_areas: Vec<ConceptArea>,
    last_used_assist: bool,
}

impl QueueState {
    fn new() -> Self {
        Self {
            queue: Vec::new(),
            used: HashSet::new(),
            recent_areas: Vec::new(),
            last_used_assist: false,
        }
    }

    fn add(&mut self, challenge: &Challenge) {
        self.used.insert(challenge.id.clone());
        self.recent_areas.push(challenge.concept_area);
        if self.recent_areas.len() > DIVERSITY_WINDOW {
            self.recent_areas.remove(0);
        }
        self.last_used_assist = challenge.challenge_type.uses_assist();
        self.queue.push(challenge.clone());
    }

    /// Candidate's concept area already occurs twice in the recent window
    fn violates_diversity(&self, candidate: &Challenge) -> bool {
        self.recent_areas
            .iter()
            .filter(|&&a| a == candidate.concept_area)
            .count()
            >= 2
    }

    /// Two externally-assisted items in a row
    fn violates_assist_spacing(&self, candidate: &Challenge) -> bool {
        candidate.challenge_type.uses_assist() && self.last_used_assist
    }
}

/// Build an ordered batch of challenges for a session
///
/// Constraint priority: excluded ids are never selected; the first item
/// comes from the low-barrier starter types when one is available; no
/// concept area appears twice in the trailing window of three; assisted
/// types never run back to back; and when the constrained scan cannot fill
/// the batch, a final unconstrained pass does, so no slot stays empty while
/// eligible candidates remain.
///
/// If every catalog id is excluded, the exclusion set resets and the batch
/// is drawn from the full catalog (second pass through all content) — the
/// feed never dead-ends while the catalog has challenges.
pub fn build_queue<R: Rng + ?Sized>(
    catalog: &ChallengeCatalog,
    excluded_ids: &HashSet<String>,
    batch_size: usize,
    rng: &mut R,
) -> Vec<Challenge> {
    let mut eligible: Vec<&Challenge> = catalog
        .all()
        .iter()
        .filter(|c| !excluded_ids.contains(&c.id))
        .collect();

    // Full exhaustion: start a second pass over everything
    if eligible.is_empty() {
        eligible = catalog.all().iter().collect();
    }

    let mut starters: Vec<&Challenge> = eligible
        .iter()
        .copied()
        .filter(|c| STARTER_TYPES.contains(&c.challenge_type))
        .collect();
    let non_starters: Vec<&Challenge> = eligible
        .iter()
        .copied()
        .filter(|c| !STARTER_TYPES.contains(&c.challenge_type))
        .collect();

    let mut state = QueueState::new();

    starters.shuffle(rng);
    if let Some(first) = starters.first() {
        state.add(first);
    }

    let mut remaining: Vec<&Challenge> = starters
        .iter()
        .skip(1)
        .copied()
        .chain(non_starters)
        .collect();
    remaining.shuffle(rng);

    // Constrained pass: skip-and-continue on any violation
    for candidate in &remaining {
        if state.queue.len() >= batch_size {
            break;
        }
        if state.used.contains(&candidate.id) {
            continue;
        }
        if state.violates_diversity(candidate) {
            continue;
        }
        if state.violates_assist_spacing(candidate) {
            continue;
        }
        state.add(candidate);
    }

    // Fill pass: constraints 3-4 waived so slots never go empty while
    // eligible candidates exist
    if state.queue.len() < batch_size {
        for candidate in &remaining {
            if state.queue.len() >= batch_size {
                break;
            }
            if state.used.contains(&candidate.id) {
                continue;
            }
            state.add(candidate);
        }
    }

    state.queue
}

/// Extend an existing queue for infinite-scroll continuation
///
/// The new batch excludes everything already queued on top of the caller's
/// exclusions; the returned list is the existing queue followed by the new
/// batch.
pub fn append_queue<R: Rng + ?Sized>(
    catalog: &ChallengeCatalog,
    existing: &[Challenge],
    excluded_ids: &HashSet<String>,
    batch_size: usize,
    rng: &mut R,
) -> Vec<Challenge> {
    let mut combined: HashSet<String> = excluded_ids.clone();
    combined.extend(existing.iter().map(|c| c.id.clone()));

    let mut extended = existing.to_vec();
    extended.extend(build_queue(catalog, &combined, batch_size, rng));
    extended
}
