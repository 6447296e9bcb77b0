//! Submission aggregation, percentile estimation, and peer comparison

pub mod aggregate;
pub mod handler;
pub mod insight;
pub mod percentile;
pub mod score;
pub mod types;

pub use aggregate::{bucket_key, update_aggregate, TIME_BUCKET_MS};
pub use handler::{comparison_router, ComparisonState};
pub use insight::{generate_insight, FIRST_SUBMISSION_INSIGHT};
pub use percentile::{estimate_percentile, score_percentile, NEUTRAL_PERCENTILE};
pub use score::quality_score;
pub use types::{AggregateSample, ChallengeAggregate, ComparisonData};
