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

/// Event types reported as named counters, with their column labels
pub const TRACKED_EVENTS: [&str; 4] = ["wifi_disconnected", "tcp_reset", "http_504", "http_503"];

/// Named network-event counters; absent event types count as 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NetworkSummary {
    pub wifi_disconnected_count: u64,
    pub tcp_reset_count: u64,
    pub http_504_count: u64,
    pub http_503_count: u64,
    #[serde(skip)]
    pub frequencies: IndexMap<String, u64>,
}

impl NetworkSummary {
    pub fn from_frequencies(frequencies: IndexMap<String, u64>) -> Self {
        let count = |event: &str| frequencies.get(event).copied().unwrap_or(0);
        Self {
            wifi_disconnected_count: count("wifi_disconnected"),
            tcp_reset_count: count("tcp_reset"),
            http_504_count: count("http_504"),
            http_503_count: count("http_503"),
            frequencies,
        }
    }

    /// `(event_type, count)` for each tracked event, in report order
    pub const fn tracked(&self) -> [(&'static str, u64); 4] {
        [
            (TRACKED_EVENTS[0], self.wifi_disconnected_count),
            (TRACKED_EVENTS[1], self.tcp_reset_count),
            (TRACKED_EVENTS[2], self.http_504_count),
            (TRACKED_EVENTS[3], self.http_503_count),
        ]
    }
}

#[derive(Debug, Default)]
pub struct NetworkEventReducer {
    frequencies: IndexMap<String, u64>,
}

impl MetricReducer for NetworkEventReducer {
    type Summary = NetworkSummary;

    const CATEGORY: Category = Category::NetworkEvents;

    fn observe(&mut self, record: &dyn RecordView) -> Result<(), MalformedMetricError> {
        if let Some(event) = kv::extract(record.message(), Self::CATEGORY.marker(), "event")? {
            *self.frequencies.entry(event.to_string()).or_insert(0) += 1;
        }
        Ok(())
    }

    fn finish(self) -> NetworkSummary {
        NetworkSummary::from_frequencies(self.frequencies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_line_naive;

    fn summarize(lines: &[&str]) -> (NetworkSummary, usize) {
        let records: Vec<_> = lines.iter().filter_map(|l| parse_line_naive(l)).collect();
        NetworkEventReducer::reduce(&records)
    }

    #[test]
    fn test_named_counters_default_to_zero() {
        let (summary, skipped) = summarize(&[
            "d t WARN net network_event,event=wifi_disconnected",
            "d t WARN net network_event,event=wifi_disconnected,ssid=lab",
            "d t WARN net network_event,event=http_503",
        ]);
        assert_eq!(skipped, 0);
        assert_eq!(summary.wifi_disconnected_count, 2);
        assert_eq!(summary.http_503_count, 1);
        assert_eq!(summary.tcp_reset_count, 0);
        assert_eq!(summary.http_504_count, 0);
    }

    #[test]
    fn test_untracked_events_only_in_frequencies() {
        let (summary, _) = summarize(&["d t WARN net network_event,event=dns_timeout"]);
        assert_eq!(summary.frequencies.get("dns_timeout"), Some(&1));
        assert!(summary.tracked().iter().all(|(_, count)| *count == 0));
    }

    #[test]
    fn test_missing_event_field_skipped() {
        let (summary, skipped) = summarize(&[
            "d t WARN net network_event,kind=tcp_reset",
            "d t WARN net network_event,event=tcp_reset",
        ]);
        assert_eq!(skipped, 1);
        assert_eq!(summary.tcp_reset_count, 1);
    }
}
