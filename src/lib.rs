//! Skillfeed - Feed selection and peer comparison engine
//!
//! Skillfeed powers an interactive practice feed: users complete short
//! challenges and learn how they compare to everyone else who completed the
//! same challenge.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        HTTP API (axum)                       │
//! │   /feed/queue      /feed/submit      /feed/compare  /progress│
//! └───────┬──────────────────┬──────────────────┬────────────────┘
//!         │                  │                  │
//! ┌───────▼────────┐ ┌───────▼────────┐ ┌───────▼────────┐
//! │ FeedQueue      │ │ Submission     │ │ SessionProgress│
//! │ Builder        │ │ Aggregator +   │ │ Tracker        │
//! │ (diversity-    │ │ Percentile     │ │ (idempotent    │
//! │  constrained   │ │ Estimator      │ │  completions)  │
//! │  selection)    │ │ (histogram)    │ │                │
//! └───────┬────────┘ └───────┬────────┘ └───────┬────────┘
//!         │                  │                  │
//! ┌───────▼────────┐ ┌───────▼──────────────────▼────────┐
//! │ Challenge      │ │ FeedStore (persistence seam)      │
//! │ Catalog        │ │ submissions / aggregates / progress│
//! │ (immutable)    │ │ serialized read-modify-write      │
//! └────────────────┘ └───────────────────────────────────┘
//! ```
//!
//! ## Key behaviors
//!
//! - Queues never repeat completed challenges, open with a low-barrier item,
//!   keep concept areas diverse within a rolling window of three, and never
//!   dead-end: full exhaustion starts a second pass through the catalog.
//! - Aggregation is online: a bounded 5-second-bucket histogram, an
//!   incremental quality-score mean, and an EMA standing in for the median
//!   elapsed time. Raw history is never replayed on the request path.
//! - Percentiles come from a left-continuous walk over the histogram (or
//!   straight from the quality score for score-only challenge types).
//! - All writes on the submit path are independent and best-effort; the
//!   submitter always receives a percentile and an insight string.
//!
//! ## Modules
//!
//! - [`catalog`]: immutable challenge definitions
//! - [`feed`]: queue construction under diversity constraints
//! - [`comparison`]: aggregation, percentile estimation, insight copy
//! - [`progress`]: idempotent per-session completion tracking
//! - [`storage`]: the persistence collaborator seam
//! - [`api`]: the merged HTTP router
//! - [`config`]: configuration management

pub mod api;
pub mod catalog;
pub mod comparison;
pub mod config;
pub mod error;
pub mod feed;
pub mod progress;
pub mod storage;

pub use config::SkillfeedConfig;
pub use error::{Error, Result};
