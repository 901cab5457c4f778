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

use crate::metrics::{Diagnostics, MetricsSnapshot};
use crate::parser::line::LogRecord;
use serde::Serialize;

#[derive(Serialize)]
struct WithDiagnostics<'a> {
    #[serde(flatten)]
    snapshot: &'a MetricsSnapshot,
    diagnostics: &'a Diagnostics,
}

/// Pretty-printed metrics object.
///
/// Holds exactly the four category keys unless `include_diagnostics` asks for
/// a trailing `diagnostics` key as well.
pub fn render(snapshot: &MetricsSnapshot, include_diagnostics: bool) -> serde_json::Result<String> {
    if include_diagnostics {
        serde_json::to_string_pretty(&WithDiagnostics {
            snapshot,
            diagnostics: &snapshot.diagnostics,
        })
    } else {
        serde_json::to_string_pretty(snapshot)
    }
}

/// One compact JSON object per parsed record, newline-terminated
pub fn render_json_lines<'a, I>(records: I) -> serde_json::Result<String>
where
    I: IntoIterator<Item = &'a LogRecord>,
{
    let mut out = String::new();
    for record in records {
        out.push_str(&serde_json::to_string(record)?);
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::LatencyStats;
    use crate::parser::parse_line;
    use serde_json::{json, Value};

    #[test]
    fn test_empty_snapshot_has_four_keys() {
        let text = render(&MetricsSnapshot::default(), false).expect("serializable");
        let value: Value = serde_json::from_str(&text).expect("well-formed");
        assert_eq!(
            value,
            json!({
                "latencies": {},
                "user_logins": {},
                "http_statuses": {
                    "http_2xx_count": 0,
                    "http_4xx_count": 0,
                    "http_5xx_count": 0
                },
                "network_events": {
                    "wifi_disconnected_count": 0,
                    "tcp_reset_count": 0,
                    "http_504_count": 0,
                    "http_503_count": 0
                }
            })
        );
    }

    #[test]
    fn test_key_order_and_raw_floats() {
        let mut snapshot = MetricsSnapshot::default();
        snapshot.latencies.insert(
            "model_a".to_string(),
            LatencyStats {
                avg_latency_ms: 25.0,
                p95_latency_ms: 40.0,
            },
        );
        let text = render(&snapshot, false).expect("serializable");
        let positions: Vec<usize> = ["latencies", "user_logins", "http_statuses", "network_events"]
            .iter()
            .filter_map(|k| text.find(&format!("\"{k}\"")))
            .collect();
        assert_eq!(positions.len(), 4);
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(text.contains("\"avg_latency_ms\": 25.0"));
        assert!(!text.contains("diagnostics"));
    }

    #[test]
    fn test_optional_diagnostics_key() {
        let mut snapshot = MetricsSnapshot::default();
        snapshot.diagnostics.unparseable_lines = 4;
        snapshot.diagnostics.skipped.http_statuses = 2;
        let value: Value =
            serde_json::from_str(&render(&snapshot, true).expect("serializable")).expect("json");
        assert_eq!(value["diagnostics"]["unparseable_lines"], 4);
        assert_eq!(value["diagnostics"]["skipped"]["http_statuses"], 2);
        assert_eq!(value["http_statuses"]["http_2xx_count"], 0);
    }

    #[test]
    fn test_json_lines_field_order() {
        let record = parse_line("2025-01-10 10:00:01 INFO auth user_login,user=alice,result=success")
            .expect("should parse");
        let out = render_json_lines([&record]).expect("serializable");
        assert_eq!(
            out,
            "{\"timestamp\":\"2025-01-10 10:00:01\",\"level\":\"INFO\",\"source\":\"auth\",\
             \"fields\":{\"user_login,user\":\"alice,result=success\"},\
             \"raw_message\":\"user_login,user=alice,result=success\"}\n"
        );
    }
}
