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

use crate::metrics::{Category, MetricsSnapshot};
use std::fmt::Write;

/// Human-readable summary, one block per category plus a skipped-records block
pub fn render(snapshot: &MetricsSnapshot) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = write_report(&mut out, snapshot);
    out
}

fn write_report(out: &mut String, snapshot: &MetricsSnapshot) -> std::fmt::Result {
    writeln!(out, "Latencies:")?;
    for (model, stats) in &snapshot.latencies {
        writeln!(
            out,
            "  {model}: avg_latency_ms={:.2}, p95_latency_ms={:.2}",
            stats.avg_latency_ms, stats.p95_latency_ms
        )?;
    }

    writeln!(out, "\nUser Logins:")?;
    for (user, counts) in &snapshot.user_logins {
        writeln!(
            out,
            "  {user}: login_success_count={}, login_failure_count={}",
            counts.login_success_count, counts.login_failure_count
        )?;
    }

    let http = &snapshot.http_statuses;
    writeln!(out, "\nHTTP Statuses:")?;
    writeln!(out, "  http_2xx_count: {}", http.http_2xx_count)?;
    writeln!(out, "  http_4xx_count: {}", http.http_4xx_count)?;
    writeln!(out, "  http_5xx_count: {}", http.http_5xx_count)?;

    writeln!(out, "\nNetwork Events:")?;
    for (event, count) in snapshot.network_events.tracked() {
        writeln!(out, "  {event}_count: {count}")?;
    }

    let diagnostics = &snapshot.diagnostics;
    writeln!(out, "\nSkipped:")?;
    writeln!(out, "  unparseable_lines: {}", diagnostics.unparseable_lines)?;
    for category in Category::ALL {
        writeln!(
            out,
            "  malformed_{category}: {}",
            diagnostics.skipped.get(category)
        )?;
    }
    Ok(())
}
