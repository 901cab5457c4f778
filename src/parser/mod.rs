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

pub mod kv;
pub mod line;

use indexmap::IndexMap;
use line::{LogRecord, RawRecord};

/// A record shape that can be built from one raw log line
pub trait ParseLine: Sized {
    /// `None` when the line cannot supply timestamp, level and source
    fn parse(line: &str) -> Option<Self>;
}

impl ParseLine for LogRecord {
    fn parse(line: &str) -> Option<Self> {
        parse_line(line)
    }
}

impl ParseLine for RawRecord {
    fn parse(line: &str) -> Option<Self> {
        parse_line_naive(line)
    }
}

/// Tokens needed before a line can supply timestamp, level and source
pub const HEADER_TOKENS: usize = 4;

/// Header tokens of a line, borrowed from the trimmed input
struct Header<'a> {
    timestamp: String,
    level: &'a str,
    source: &'a str,
    rest: Vec<&'a str>,
}

fn split_header(line: &str) -> Option<Header<'_>> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    if tokens.len() < HEADER_TOKENS {
        return None;
    }

    Some(Header {
        timestamp: format!("{} {}", tokens[0], tokens[1]),
        level: tokens[2],
        source: tokens[3],
        rest: tokens[HEADER_TOKENS..].to_vec(),
    })
}

/// Parse a line into a [`LogRecord`].
///
/// Returns `None` for blank lines and for lines with fewer than four
/// whitespace-separated tokens. Every token after the header that contains
/// `=` is split on its first `=` into a field; other tokens are dropped and do
/// not appear in `raw_message` either.
pub fn parse_line(line: &str) -> Option<LogRecord> {
    let header = split_header(line)?;

    let mut fields = IndexMap::new();
    let mut kv_tokens = Vec::new();
    for token in &header.rest {
        let Some((key, value)) = token.split_once('=') else {
            continue;
        };
        fields.insert(key.trim().to_string(), value.trim().to_string());
        kv_tokens.push(*token);
    }

    Some(LogRecord {
        timestamp: header.timestamp,
        level: header.level.to_string(),
        source: header.source.to_string(),
        fields,
        raw_message: kv_tokens.join(" "),
    })
}

/// Parse a line into a [`RawRecord`], keeping every message token.
///
/// Same acceptance rule as [`parse_line`].
pub fn parse_line_naive(line: &str) -> Option<RawRecord> {
    let header = split_header(line)?;

    Some(RawRecord {
        timestamp: header.timestamp,
        level: header.level.to_string(),
        source: header.source.to_string(),
        message: header.rest.join(" "),
    })
}
