//! Percentile estimation over bucketed distributions
//!
//! Two estimation paths exist on purpose. Timed submissions rank against the
//! challenge's time histogram; score-only challenge types map the quality
//! score straight to a percentile. Unifying them would change observed
//! percentiles for score-only types, so the split is kept (see DESIGN.md).

use std::collections::BTreeMap;

/// Neutral percentile used when there is no data to rank against
pub const NEUTRAL_PERCENTILE: u8 = 50;

/// Estimate the percentile of `value` within a bucketed distribution
///
/// Left-continuous step estimator: buckets whose key is strictly below
/// `value` count as outperformed; the first bucket at or above `value` and
/// everything after it do not. A value landing exactly on a bucket boundary
/// is therefore NOT counted as beating that bucket, which keeps results
/// conservative at boundaries.
pub fn estimate_percentile(value: f64, histogram: &BTreeMap<u64, u64>, total: u64) -> u8 {
    if total == 0 {
        return NEUTRAL_PERCENTILE;
    }

    let mut below: u64 = 0;
    for (&threshold, &count) in histogram {
        if value > threshold as f64 {
            below += count;
        } else {
            break;
        }
    }

    ((below as f64 / total as f64) * 100.0).round() as u8
}

/// Direct percentile for score-only challenge types: `round(score * 100)`
///
/// Bypasses the histogram entirely; see the module docs for why this path
/// stays separate from [`estimate_percentile`].
pub fn score_percentile(quality_score: f64) -> u8 {
    (quality_score.clamp(0.0, 1.0) * 100.0).round() as u8
}
