//! Aggregate and comparison wire types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Running statistical summary for one challenge across all submitters
///
/// Created lazily on the first submission, updated on every one after, never
/// deleted. `total_submissions` is monotonically non-decreasing and equals
/// the sum of histogram bucket counts when every submission carried a time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeAggregate {
    pub total_submissions: u64,
    pub mean_quality_score: Option<f64>,
    /// 5-second bucket key (ms, floored) → submission count
    pub time_histogram: BTreeMap<u64, u64>,
    /// Exponential moving average of elapsed time. A biased-but-cheap proxy
    /// for the median; callers must not treat it as exact.
    pub smoothed_median_time_ms: Option<f64>,
}

/// The per-submission values folded into an aggregate
#[derive(Debug, Clone, Copy, Default)]
pub struct AggregateSample {
    pub quality_score: Option<f64>,
    pub elapsed_ms: Option<u64>,
}

/// Peer-comparison result returned from submit and compare
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonData {
    pub percentile: u8,
    pub total_submissions: u64,
    pub distribution: BTreeMap<u64, u64>,
    pub insight: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate_default_is_zero() {
        let agg = ChallengeAggregate::default();
        assert_eq!(agg.total_submissions, 0);
        assert!(agg.mean_quality_score.is_none());
        assert!(agg.time_histogram.is_empty());
        assert!(agg.smoothed_median_time_ms.is_none());
    }

    #[test]
    fn test_aggregate_wire_format() {
        let mut agg = ChallengeAggregate::default();
        agg.total_submissions = 2;
        agg.mean_quality_score = Some(0.75);
        agg.time_histogram.insert(10000, 1);
        agg.time_histogram.insert(20000, 1);
        agg.smoothed_median_time_ms = Some(13000.0);

        let json = serde_json::to_string(&agg).unwrap();
        assert!(json.contains("\"totalSubmissions\":2"));
        assert!(json.contains("\"meanQualityScore\":0.75"));
        // Integer map keys travel as JSON object string keys
        assert!(json.contains("\"10000\":1"));
        assert!(json.contains("\"smoothedMedianTimeMs\":13000.0"));

        let parsed: ChallengeAggregate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.total_submissions, 2);
        assert_eq!(parsed.time_histogram.get(&20000), Some(&1));
    }

    #[test]
    fn test_comparison_data_wire_format() {
        let data = ComparisonData {
            percentile: 100,
            total_submissions: 2,
            distribution: BTreeMap::from([(10000, 1), (20000, 1)]),
            insight: "Sharp work.".to_string(),
        };

        let json = serde_json::to_string(&data).unwrap();
        assert!(json.contains("\"percentile\":100"));
        assert!(json.contains("\"totalSubmissions\":2"));
        assert!(json.contains("\"insight\":\"Sharp work.\""));
    }
}
