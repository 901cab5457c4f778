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

//! Marker-selected `key=value` extraction shared by the metric reducers.
//!
//! A sub-field value runs from just after the first `field=` in the message up
//! to the next `,` (or the end of the message).

use crate::error::MalformedMetricError;
use std::str::FromStr;

/// Extract the value of `field` from a message selected by `marker`.
///
/// - `Ok(None)`: `marker` does not occur in `message`, so the record is not
///   relevant to the caller.
/// - `Err(_)`: the marker is present but `field=` is not.
/// - `Ok(Some(value))`: text after the first `field=`, up to the next comma.
pub fn extract<'a>(
    message: &'a str,
    marker: &str,
    field: &str,
) -> Result<Option<&'a str>, MalformedMetricError> {
    if !message.contains(marker) {
        return Ok(None);
    }
    field_value(message, field)
        .map(Some)
        .ok_or_else(|| MalformedMetricError::MissingField {
            marker: marker.to_string(),
            field: field.to_string(),
        })
}

/// Like [`extract`], then parse the value after trimming surrounding whitespace.
pub fn extract_parsed<T: FromStr>(
    message: &str,
    marker: &str,
    field: &str,
) -> Result<Option<T>, MalformedMetricError> {
    let Some(raw) = extract(message, marker, field)? else {
        return Ok(None);
    };
    raw.trim()
        .parse::<T>()
        .map(Some)
        .map_err(|_| MalformedMetricError::NotNumeric {
            marker: marker.to_string(),
            field: field.to_string(),
            value: raw.to_string(),
        })
}

/// Value following the first `field=` in `message`, without any marker check
pub fn field_value<'a>(message: &'a str, field: &str) -> Option<&'a str> {
    let needle = format!("{field}=");
    let start = message.find(&needle)? + needle.len();
    let tail = &message[start..];
    Some(tail.split_once(',').map_or(tail, |(value, _)| value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_stops_at_comma() {
        let msg = "user_login,user=alice,result=success";
        assert_eq!(extract(msg, "user_login", "user"), Ok(Some("alice")));
        assert_eq!(extract(msg, "user_login", "result"), Ok(Some("success")));
    }

    #[test]
    fn test_marker_absent() {
        assert_eq!(extract("http_status,status=200", "user_login", "user"), Ok(None));
    }

    #[test]
    fn test_missing_field_is_malformed() {
        let err = extract("ai_model_latency,model=x", "ai_model_latency", "latency")
            .expect_err("latency= is missing");
        assert!(matches!(err, MalformedMetricError::MissingField { .. }));
    }

    #[test]
    fn test_first_occurrence_wins() {
        assert_eq!(field_value("a=1,a=2", "a"), Some("1"));
        assert_eq!(field_value("a=", "a"), Some(""));
    }

    #[test]
    fn test_parsed_values() {
        let ok: Option<u16> = extract_parsed("http_status,status= 404 ,path=/", "http_status", "status")
            .expect("numeric");
        assert_eq!(ok, Some(404));

        let err = extract_parsed::<f64>("ai_model_latency,latency=fast", "ai_model_latency", "latency")
            .expect_err("not a number");
        assert!(matches!(err, MalformedMetricError::NotNumeric { ref value, .. } if value == "fast"));
    }
}
