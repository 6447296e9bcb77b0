//! File-backed feed store
//!
//! In-memory maps hydrated from per-record JSON files at startup, with
//! fire-and-forget persistence on every mutation. A failed disk write logs a
//! warning and never fails the request; corrupt files are skipped at load.
//!
//! Directory layout:
//! ```text
//! <data_dir>/
//! ├── submissions/
//! │   ├── sub-<uuid>.json
//! │   └── ...
//! ├── aggregates/
//! │   ├── <challenge-id>.json
//! │   └── ...
//! └── progress/
//!     ├── <session-id>.json
//!     └── ...
//! ```

use crate::catalog::types::ConceptArea;
use crate::comparison::aggregate::update_aggregate;
use crate::comparison::types::{AggregateSample, ChallengeAggregate};
use crate::error::Result;
use crate::progress::tracker::record_completion;
use crate::progress::types::SessionProgress;
use crate::storage::{FeedStore, SubmissionRecord};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Disk form of a challenge aggregate; the id travels inside the file so
/// filenames never have to round-trip arbitrary challenge ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredAggregate {
    challenge_id: String,
    aggregate: ChallengeAggregate,
}

/// JSON-file-backed implementation of [`FeedStore`]
pub struct JsonFeedStore {
    submissions_dir: PathBuf,
    aggregates_dir: PathBuf,
    progress_dir: PathBuf,
    submissions: Arc<RwLock<Vec<SubmissionRecord>>>,
    aggregates: Arc<RwLock<HashMap<String, ChallengeAggregate>>>,
    progress: Arc<RwLock<HashMap<String, SessionProgress>>>,
}

impl JsonFeedStore {
    /// Create a store at the given base directory, hydrating from disk
    pub async fn new(base_dir: PathBuf) -> std::io::Result<Self> {
        let submissions_dir = base_dir.join("submissions");
        let aggregates_dir = base_dir.join("aggregates");
        let progress_dir = base_dir.join("progress");

        tokio::fs::create_dir_all(&submissions_dir).await?;
        tokio::fs::create_dir_all(&aggregates_dir).await?;
        tokio::fs::create_dir_all(&progress_dir).await?;

        let store = Self {
            submissions_dir,
            aggregates_dir,
            progress_dir,
            submissions: Arc::new(RwLock::new(Vec::new())),
            aggregates: Arc::new(RwLock::new(HashMap::new())),
            progress: Arc::new(RwLock::new(HashMap::new())),
        };

        store.load_from_disk().await;
        Ok(store)
    }

    /// Default base directory (~/.skillfeed/data/)
    pub fn default_dir() -> PathBuf {
        dirs_next::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".skillfeed")
            .join("data")
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    async fn load_from_disk(&self) {
        let mut submissions = Self::load_json_files::<SubmissionRecord>(&self.submissions_dir);
        submissions.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        *self.submissions.write().await = submissions;

        let aggregates = Self::load_json_files::<StoredAggregate>(&self.aggregates_dir)
            .into_iter()
            .map(|s| (s.challenge_id, s.aggregate))
            .collect();
        *self.aggregates.write().await = aggregates;

        let progress = Self::load_json_files::<SessionProgress>(&self.progress_dir)
            .into_iter()
            .map(|p| (p.session_id.clone(), p))
            .collect();
        *self.progress.write().await = progress;
    }

    /// Load all JSON files from a directory into a Vec, skipping bad ones
    fn load_json_files<T: serde::de::DeserializeOwned>(dir: &Path) -> Vec<T> {
        let mut items = Vec::new();
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!("Failed to read directory {}: {}", dir.display(), e);
                }
                return items;
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            match std::fs::read_to_string(&path) {
                Ok(data) => match serde_json::from_str(&data) {
                    Ok(item) => items.push(item),
                    Err(e) => {
                        tracing::warn!("Failed to parse {}: {}", path.display(), e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read {}: {}", path.display(), e);
                }
            }
        }

        items
    }

    /// Write one record to disk off the request path (fire-and-forget)
    fn persist<T: Serialize + Send + 'static>(dir: &Path, stem: &str, value: T) {
        let path = dir.join(format!("{}.json", file_stem(stem)));
        tokio::spawn(async move {
            match serde_json::to_string_pretty(&value) {
                Ok(json) => {
                    if let Err(e) = tokio::fs::write(&path, json).await {
                        tracing::warn!("Failed to persist {}: {}", path.display(), e);
                    }
                }
                Err(e) => {
                    tracing::warn!("Failed to serialize {}: {}", path.display(), e);
                }
            }
        });
    }
}

/// Filesystem-safe stem for a client-supplied id
fn file_stem(id: &str) -> String {
    id.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[async_trait]
impl FeedStore for JsonFeedStore {
    async fn insert_submission(&self, record: SubmissionRecord) -> Result<()> {
        {
            let mut submissions = self.submissions.write().await;
            submissions.push(record.clone());
        }
        let stem = record.id.clone();
        Self::persist(&self.submissions_dir, &stem, record);
        Ok(())
    }

    async fn latest_submission(
        &self,
        session_id: &str,
        challenge_id: &str,
    ) -> Result<Option<SubmissionRecord>> {
        let submissions = self.submissions.read().await;
        // Insertion order is creation order, so the last match is the latest.
        Ok(submissions
            .iter()
            .rev()
            .find(|s| s.session_id == session_id && s.challenge_id == challenge_id)
            .cloned())
    }

    async fn get_aggregate(&self, challenge_id: &str) -> Result<Option<ChallengeAggregate>> {
        let aggregates = self.aggregates.read().await;
        Ok(aggregates.get(challenge_id).cloned())
    }

    async fn apply_submission(
        &self,
        challenge_id: &str,
        sample: AggregateSample,
    ) -> Result<ChallengeAggregate> {
        // The write lock is held across the whole read-modify-write so
        // concurrent submissions to one challenge serialize and no update
        // is lost.
        let updated = {
            let mut aggregates = self.aggregates.write().await;
            let updated = update_aggregate(aggregates.get(challenge_id), &sample);
            aggregates.insert(challenge_id.to_string(), updated.clone());
            updated
        };

        Self::persist(
            &self.aggregates_dir,
            challenge_id,
            StoredAggregate {
                challenge_id: challenge_id.to_string(),
                aggregate: updated.clone(),
            },
        );
        Ok(updated)
    }

    async fn get_progress(&self, session_id: &str) -> Result<Option<SessionProgress>> {
        let progress = self.progress.read().await;
        Ok(progress.get(session_id).cloned())
    }

    async fn record_completion(
        &self,
        session_id: &str,
        challenge_id: &str,
        concept_area: ConceptArea,
    ) -> Result<SessionProgress> {
        let updated = {
            let mut progress = self.progress.write().await;
            let updated =
                record_completion(progress.get(session_id), session_id, challenge_id, concept_area);
            progress.insert(session_id.to_string(), updated.clone());
            updated
        };

        Self::persist(&self.progress_dir, session_id, updated.clone());
        Ok(updated)
    }
}
