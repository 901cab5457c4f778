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

//! Reducers that turn a record sequence into a [`MetricsSnapshot`].

pub mod http;
pub mod latency;
pub mod logins;
pub mod network;

use crate::core::{ParseStats, RecordStore};
use crate::error::MalformedMetricError;
use crate::parser::line::RecordView;
use serde::Serialize;
use std::time::Instant;

pub use http::{HttpStatusReducer, HttpSummary};
pub use latency::{LatencyReducer, LatencyStats, LatencySummary};
pub use logins::{LoginCounts, LoginReducer, LoginSummary};
pub use network::{NetworkEventReducer, NetworkSummary};

/// The four metric categories, in output order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Latencies,
    UserLogins,
    HttpStatuses,
    NetworkEvents,
}

impl Category {
    pub const ALL: [Self; 4] = [
        Self::Latencies,
        Self::UserLogins,
        Self::HttpStatuses,
        Self::NetworkEvents,
    ];

    /// Top-level JSON key
    pub const fn key(self) -> &'static str {
        match self {
            Self::Latencies => "latencies",
            Self::UserLogins => "user_logins",
            Self::HttpStatuses => "http_statuses",
            Self::NetworkEvents => "network_events",
        }
    }

    /// Substring that selects a record for this category
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Latencies => "ai_model_latency",
            Self::UserLogins => "user_login",
            Self::HttpStatuses => "http_status",
            Self::NetworkEvents => "network_event",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Accumulator for one metric category
pub trait MetricReducer: Default {
    type Summary;

    const CATEGORY: Category;

    /// Fold one record in. Records without the category marker are ignored;
    /// a marked record with an unusable sub-field is rejected and leaves the
    /// accumulator untouched.
    fn observe(&mut self, record: &dyn RecordView) -> Result<(), MalformedMetricError>;

    fn finish(self) -> Self::Summary;

    /// Run this reducer alone over `records`, returning the summary and the
    /// number of malformed records skipped
    fn reduce<'a, I, R>(records: I) -> (Self::Summary, usize)
    where
        I: IntoIterator<Item = &'a R>,
        R: RecordView + 'a,
    {
        let mut reducer = Self::default();
        let mut skipped = 0;
        for record in records {
            feed(&mut reducer, record, &mut skipped);
        }
        (reducer.finish(), skipped)
    }
}

fn feed<T: MetricReducer>(reducer: &mut T, record: &dyn RecordView, skipped: &mut usize) {
    if let Err(err) = reducer.observe(record) {
        *skipped += 1;
        let category = T::CATEGORY;
        tracing::debug!(
            category = %category,
            source = record.source(),
            "Skipping malformed record: {err}"
        );
    }
}

/// Records rejected by each reducer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SkippedCounts {
    pub latencies: usize,
    pub user_logins: usize,
    pub http_statuses: usize,
    pub network_events: usize,
}

impl SkippedCounts {
    pub const fn get(&self, category: Category) -> usize {
        match category {
            Category::Latencies => self.latencies,
            Category::UserLogins => self.user_logins,
            Category::HttpStatuses => self.http_statuses,
            Category::NetworkEvents => self.network_events,
        }
    }

    pub const fn total(&self) -> usize {
        self.latencies + self.user_logins + self.http_statuses + self.network_events
    }
}

/// What a run dropped or skipped on the way to the snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Diagnostics {
    pub unparseable_lines: usize,
    pub skipped: SkippedCounts,
}

/// Result of one aggregation run. Serializes to the four-key metrics object.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    pub latencies: LatencySummary,
    pub user_logins: LoginSummary,
    pub http_statuses: HttpSummary,
    pub network_events: NetworkSummary,
    #[serde(skip)]
    pub diagnostics: Diagnostics,
}

/// Aggregate a parsed store in a single pass over its records
pub fn aggregate<R: RecordView>(store: &RecordStore<R>) -> MetricsSnapshot {
    aggregate_records(store.iter(), store.stats())
}

/// Aggregate any record sequence; `stats` feeds the diagnostics
pub fn aggregate_records<'a, I, R>(records: I, stats: ParseStats) -> MetricsSnapshot
where
    I: IntoIterator<Item = &'a R>,
    R: RecordView + 'a,
{
    let start = Instant::now();
    let mut latencies = LatencyReducer::default();
    let mut logins = LoginReducer::default();
    let mut http = HttpStatusReducer::default();
    let mut network = NetworkEventReducer::default();
    let mut skipped = SkippedCounts::default();
    let mut total = 0usize;

    for record in records {
        total += 1;
        feed(&mut latencies, record, &mut skipped.latencies);
        feed(&mut logins, record, &mut skipped.user_logins);
        feed(&mut http, record, &mut skipped.http_statuses);
        feed(&mut network, record, &mut skipped.network_events);
    }

    if skipped.total() > 0 {
        tracing::warn!(
            "Skipped {} malformed metric records (latencies={}, user_logins={}, http_statuses={}, network_events={})",
            skipped.total(),
            skipped.latencies,
            skipped.user_logins,
            skipped.http_statuses,
            skipped.network_events
        );
    }
    tracing::info!("Aggregated {total} records in {:?}", start.elapsed());

    MetricsSnapshot {
        latencies: latencies.finish(),
        user_logins: logins.finish(),
        http_statuses: http.finish(),
        network_events: network.finish(),
        diagnostics: Diagnostics {
            unparseable_lines: stats.unparseable_lines,
            skipped,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::line::{LogRecord, RawRecord};

    const LOG: &str = "\
2025-01-10 10:00:00 INFO model_a ai_model_latency,latency=10
2025-01-10 10:00:01 INFO model_a ai_model_latency,latency=20
2025-01-10 10:00:02 INFO model_b ai_model_latency,latency=7.5
2025-01-10 10:00:03 INFO model_a ai_model_latency,model=a
2025-01-10 10:00:04 INFO auth user_login,user=alice,result=success
2025-01-10 10:00:05 INFO auth user_login,user=alice,result=failure
2025-01-10 10:00:06 INFO gw http_status,status=200
2025-01-10 10:00:07 WARN gw http_status,status=404
2025-01-10 10:00:08 WARN net network_event,event=wifi_disconnected
short line
";

    #[test]
    fn test_single_pass_snapshot() {
        let store = RecordStore::<LogRecord>::from_text(LOG);
        let snapshot = aggregate(&store);

        assert_eq!(snapshot.latencies.len(), 2);
        assert_eq!(snapshot.latencies["model_a"].avg_latency_ms, 15.0);
        assert_eq!(snapshot.latencies["model_a"].p95_latency_ms, 20.0);
        assert_eq!(snapshot.latencies["model_b"].p95_latency_ms, 7.5);
        assert_eq!(snapshot.user_logins["alice"].login_success_count, 1);
        assert_eq!(snapshot.user_logins["alice"].login_failure_count, 1);
        assert_eq!(snapshot.http_statuses.http_2xx_count, 1);
        assert_eq!(snapshot.http_statuses.http_4xx_count, 1);
        assert_eq!(snapshot.network_events.wifi_disconnected_count, 1);

        assert_eq!(snapshot.diagnostics.unparseable_lines, 1);
        assert_eq!(snapshot.diagnostics.skipped.latencies, 1);
        assert_eq!(snapshot.diagnostics.skipped.total(), 1);
    }

    #[test]
    fn test_both_record_shapes_agree() {
        let fields = aggregate(&RecordStore::<LogRecord>::from_text(LOG));
        let raw = aggregate(&RecordStore::<RawRecord>::from_text(LOG));
        assert_eq!(fields, raw);
        assert_eq!(fields.diagnostics, raw.diagnostics);
    }

    #[test]
    fn test_no_valid_lines_gives_zeroed_snapshot() {
        let store = RecordStore::<LogRecord>::from_text("nothing here\n\n");
        let snapshot = aggregate(&store);
        assert!(snapshot.latencies.is_empty());
        assert!(snapshot.user_logins.is_empty());
        assert_eq!(snapshot.http_statuses.http_5xx_count, 0);
        assert_eq!(snapshot.network_events.http_503_count, 0);
        assert_eq!(snapshot.diagnostics.unparseable_lines, 1);
    }

    #[test]
    fn test_category_keys_and_markers() {
        let keys: Vec<&str> = Category::ALL.iter().map(|c| c.key()).collect();
        assert_eq!(
            keys,
            vec!["latencies", "user_logins", "http_statuses", "network_events"]
        );
        assert_eq!(Category::HttpStatuses.marker(), "http_status");
    }
}
