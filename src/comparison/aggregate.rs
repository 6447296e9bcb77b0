//! Online submission aggregation
//!
//! Folds one submission at a time into a [`ChallengeAggregate`] without ever
//! replaying history: an incremental mean for quality scores, a fixed-width
//! time histogram, and an exponential moving average standing in for the
//! median elapsed time.

use crate::comparison::types::{AggregateSample, ChallengeAggregate};

/// Width of one elapsed-time histogram bucket, in milliseconds
pub const TIME_BUCKET_MS: u64 = 5_000;

/// EMA smoothing factor for the median-time proxy
const SMOOTHING_ALPHA: f64 = 0.1;

/// Histogram bucket key for an elapsed time: floored to the bucket width
pub fn bucket_key(elapsed_ms: u64) -> u64 {
    (elapsed_ms / TIME_BUCKET_MS) * TIME_BUCKET_MS
}

/// Fold one submission into an aggregate, returning the updated aggregate
///
/// `None` means no submissions have been recorded yet for the challenge.
/// The count always increments by exactly one; score and time fields update
/// only when the sample carries them.
pub fn update_aggregate(
    current: Option<&ChallengeAggregate>,
    sample: &AggregateSample,
) -> ChallengeAggregate {
    let mut updated = current.cloned().unwrap_or_default();
    updated.total_submissions += 1;

    if let Some(score) = sample.quality_score {
        let old = updated.mean_quality_score.unwrap_or(0.0);
        let new_total = updated.total_submissions as f64;
        updated.mean_quality_score = Some(old + (score - old) / new_total);
    }

    if let Some(elapsed) = sample.elapsed_ms {
        *updated.time_histogram.entry(bucket_key(elapsed)).or_insert(0) += 1;

        updated.smoothed_median_time_ms = Some(match updated.smoothed_median_time_ms {
            Some(old) => old * (1.0 - SMOOTHING_ALPHA) + elapsed as f64 * SMOOTHING_ALPHA,
            None => elapsed as f64,
        });
    }

    updated
}
