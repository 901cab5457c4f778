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

//! One CSV table per metric category.

use crate::error::Result;
use crate::metrics::MetricsSnapshot;
use serde::Serialize;

pub const LATENCY_FILE: &str = "metrics.csv";
pub const LOGIN_FILE: &str = "user_logins.csv";
pub const HTTP_FILE: &str = "http_statuses.csv";
pub const NETWORK_FILE: &str = "network_events.csv";

/// Rendered CSV text, header row first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTables {
    pub latencies: String,
    pub user_logins: String,
    pub http_statuses: String,
    pub network_events: String,
}

impl CsvTables {
    /// `(file name, contents)` pairs in category order
    pub fn files(&self) -> [(&'static str, &str); 4] {
        [
            (LATENCY_FILE, self.latencies.as_str()),
            (LOGIN_FILE, self.user_logins.as_str()),
            (HTTP_FILE, self.http_statuses.as_str()),
            (NETWORK_FILE, self.network_events.as_str()),
        ]
    }
}

#[derive(Serialize)]
struct LatencyRow<'a> {
    model: &'a str,
    avg_latency_ms: f64,
    p95_latency_ms: f64,
}

#[derive(Serialize)]
struct LoginRow<'a> {
    user: &'a str,
    login_success_count: u64,
    login_failure_count: u64,
}

#[derive(Serialize)]
struct StatusRow {
    status_code: u16,
    count: u64,
}

#[derive(Serialize)]
struct EventRow<'a> {
    event_type: &'a str,
    count: u64,
}

/// Write `header`, then one serialized row per item.
/// An empty table still gets its header.
fn table<R: Serialize>(header: &[&str], rows: impl IntoIterator<Item = R>) -> Result<String> {
    let mut buf = Vec::new();
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(&mut buf);
    wtr.write_record(header)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    drop(wtr);
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub fn render(snapshot: &MetricsSnapshot) -> Result<CsvTables> {
    let latencies = table(
        &["model", "avg_latency_ms", "p95_latency_ms"],
        snapshot.latencies.iter().map(|(model, stats)| LatencyRow {
            model,
            avg_latency_ms: stats.avg_latency_ms,
            p95_latency_ms: stats.p95_latency_ms,
        }),
    )?;

    let user_logins = table(
        &["user", "login_success_count", "login_failure_count"],
        snapshot.user_logins.iter().map(|(user, counts)| LoginRow {
            user,
            login_success_count: counts.login_success_count,
            login_failure_count: counts.login_failure_count,
        }),
    )?;

    // Rows carry bucket sums, labelled by the bucket's base code
    let http = &snapshot.http_statuses;
    let http_statuses = table(
        &["status_code", "count"],
        [
            (200, http.http_2xx_count),
            (400, http.http_4xx_count),
            (500, http.http_5xx_count),
        ]
        .into_iter()
        .map(|(status_code, count)| StatusRow { status_code, count }),
    )?;

    let network_events = table(
        &["event_type", "count"],
        snapshot
            .network_events
            .tracked()
            .into_iter()
            .map(|(event_type, count)| EventRow { event_type, count }),
    )?;

    Ok(CsvTables {
        latencies,
        user_logins,
        http_statuses,
        network_events,
    })
}
