// LogMetrics - GPL-3.0-or-later
// This file is part of LogMetrics.
//
// Copyright (C) 2026 Daniel Freiermuth
//
// LogMetrics is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// LogMetrics is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with LogMetrics.  If not, see <https://www.gnu.org/licenses/>.

use super::{Category, MetricReducer};
use crate::error::MalformedMetricError;
use crate::parser::kv;
use crate::parser::line::RecordView;
use indexmap::IndexMap;
use serde::Serialize;

const LATENCY_FIELD: &str = "latency";

/// Quantile used for the tail-latency figure
pub const P95: f64 = 0.95;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatencyStats {
    pub avg_latency_ms: f64,
    pub p95_latency_ms: f64,
}

/// Per-model latency statistics, in first-seen model order
pub type LatencySummary = IndexMap<String, LatencyStats>;

/// Collects `latency=` samples grouped by record source
#[derive(Debug, Default)]
pub struct LatencyReducer {
    samples: IndexMap<String, Vec<f64>>,
}

impl MetricReducer for LatencyReducer {
    type Summary = LatencySummary;

    const CATEGORY: Category = Category::Latencies;

    fn observe(&mut self, record: &dyn RecordView) -> Result<(), MalformedMetricError> {
        let marker = Self::CATEGORY.marker();
        let Some(latency) = kv::extract_parsed::<f64>(record.message(), marker, LATENCY_FIELD)?
        else {
            return Ok(());
        };

        if !latency.is_finite() {
            return Err(MalformedMetricError::NotNumeric {
                marker: marker.to_string(),
                field: LATENCY_FIELD.to_string(),
                value: latency.to_string(),
            });
        }

        self.samples
            .entry(record.source().to_string())
            .or_default()
            .push(latency);
        Ok(())
    }

    fn finish(self) -> LatencySummary {
        self.samples
            .into_iter()
            .filter_map(|(model, mut values)| {
                let stats = latency_stats(&mut values)?;
                Some((model, stats))
            })
            .collect()
    }
}

/// Mean and p95 of a sample group; `None` for an empty group.
/// Sorts `values` in place.
pub fn latency_stats(values: &mut [f64]) -> Option<LatencyStats> {
    if values.is_empty() {
        return None;
    }
    let avg = values.iter().sum::<f64>() / values.len() as f64;
    values.sort_by(f64::total_cmp);
    Some(LatencyStats {
        avg_latency_ms: avg,
        p95_latency_ms: values[quantile_index(values.len(), P95)?],
    })
}

/// Zero-based index `floor(len * q)` into an ascending sample, clamped to the
/// last element. No interpolation.
pub fn quantile_index(len: usize, q: f64) -> Option<usize> {
    let last = len.checked_sub(1)?;
    Some(((len as f64 * q) as usize).min(last))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::line::RawRecord;

    fn record(source: &str, message: &str) -> RawRecord {
        RawRecord {
            timestamp: "2025-01-10 10:00:00".to_string(),
            level: "INFO".to_string(),
            source: source.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_four_samples() {
        let records: Vec<RawRecord> = [40, 10, 30, 20]
            .iter()
            .map(|v| record("model_a", &format!("ai_model_latency,latency={v}")))
            .collect();
        let (summary, skipped) = LatencyReducer::reduce(&records);
        assert_eq!(skipped, 0);
        assert_eq!(summary["model_a"].avg_latency_ms, 25.0);
        assert_eq!(summary["model_a"].p95_latency_ms, 40.0);
    }

    #[test]
    fn test_quantile_index_small_and_boundary_sizes() {
        assert_eq!(quantile_index(0, P95), None);
        assert_eq!(quantile_index(1, P95), Some(0));
        assert_eq!(quantile_index(4, P95), Some(3));
        assert_eq!(quantile_index(19, P95), Some(18));
        assert_eq!(quantile_index(20, P95), Some(19));
        assert_eq!(quantile_index(100, P95), Some(95));
        assert_eq!(quantile_index(3, 1.0), Some(2));
    }

    #[test]
    fn test_single_sample() {
        let mut values = vec![12.5];
        let stats = latency_stats(&mut values).expect("one sample");
        assert_eq!(stats.avg_latency_ms, 12.5);
        assert_eq!(stats.p95_latency_ms, 12.5);
    }

    #[test]
    fn test_grouped_by_source_in_first_seen_order() {
        let records = vec![
            record("model_b", "ai_model_latency,latency=5"),
            record("model_a", "ai_model_latency,latency=1"),
            record("model_b", "ai_model_latency,latency=15,unit=ms"),
        ];
        let (summary, _) = LatencyReducer::reduce(&records);
        let models: Vec<&str> = summary.keys().map(String::as_str).collect();
        assert_eq!(models, vec!["model_b", "model_a"]);
        assert_eq!(summary["model_b"].avg_latency_ms, 10.0);
    }

    #[test]
    fn test_malformed_samples_are_skipped() {
        let records = vec![
            record("model_a", "ai_model_latency,model=a"),
            record("model_a", "ai_model_latency,latency=slow"),
            record("model_a", "ai_model_latency,latency=inf"),
            record("model_a", "ai_model_latency,latency=8"),
            record("model_a", "unrelated,latency=999"),
        ];
        let (summary, skipped) = LatencyReducer::reduce(&records);
        assert_eq!(skipped, 3);
        assert_eq!(summary["model_a"].avg_latency_ms, 8.0);
    }
}
