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

//! In-memory, ordered store of the records parsed during one run.

use crate::parser::ParseLine;
use std::time::Instant;

/// Line accounting for one parse pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Every line handed to the parser, blank ones included
    pub total_lines: usize,
    /// Lines that were empty after trimming
    pub blank_lines: usize,
    /// Non-blank lines with fewer than four tokens
    pub unparseable_lines: usize,
}

impl ParseStats {
    pub const fn parsed_lines(&self) -> usize {
        self.total_lines - self.blank_lines - self.unparseable_lines
    }
}

/// Records in input order. Built once, then only read.
#[derive(Debug, Clone)]
pub struct RecordStore<R> {
    records: Vec<R>,
    stats: ParseStats,
}

impl<R: ParseLine> RecordStore<R> {
    /// Parse every line, keeping the ones that yield a record
    pub fn from_lines<I>(lines: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let parse_start = Instant::now();
        let mut records = Vec::new();
        let mut stats = ParseStats::default();

        for line in lines {
            let line = line.as_ref();
            stats.total_lines += 1;

            if line.trim().is_empty() {
                stats.blank_lines += 1;
                continue;
            }

            match R::parse(line) {
                Some(record) => records.push(record),
                None => {
                    stats.unparseable_lines += 1;
                    tracing::debug!(line = stats.total_lines, "Dropping line with fewer than 4 tokens");
                }
            }
        }

        tracing::info!(
            "Parsing took {:?}: {} records from {} lines ({} unparseable, {} blank)",
            parse_start.elapsed(),
            records.len(),
            stats.total_lines,
            stats.unparseable_lines,
            stats.blank_lines
        );

        Self { records, stats }
    }

    /// Parse a whole text buffer line by line
    pub fn from_text(content: &str) -> Self {
        Self::from_lines(content.lines())
    }
}

impl<R> RecordStore<R> {
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub const fn stats(&self) -> ParseStats {
        self.stats
    }
}

impl<'a, R> IntoIterator for &'a RecordStore<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::line::{LogRecord, RawRecord};

    const SAMPLE: &str = "\
2025-01-10 10:00:01 INFO model_a event=ai_model_latency,latency=120

garbage line
2025-01-10 10:00:02 INFO auth event=user_login,user=bob,result=success
   \t
2025-01-10 10:00:03 ERROR gateway http_status,status=503
";

    #[test]
    fn test_store_keeps_order_and_counts() {
        let store = RecordStore::<LogRecord>::from_text(SAMPLE);
        assert_eq!(store.len(), 3);
        let sources: Vec<&str> = store.iter().map(|r| r.source.as_str()).collect();
        assert_eq!(sources, vec!["model_a", "auth", "gateway"]);

        let stats = store.stats();
        assert_eq!(stats.total_lines, 6);
        assert_eq!(stats.blank_lines, 2);
        assert_eq!(stats.unparseable_lines, 1);
        assert_eq!(stats.parsed_lines(), 3);
    }

    #[test]
    fn test_raw_shape_uses_same_acceptance() {
        let store = RecordStore::<RawRecord>::from_text(SAMPLE);
        assert_eq!(store.len(), 3);
        assert_eq!(store.records()[2].message, "http_status,status=503");
    }

    #[test]
    fn test_empty_input() {
        let store = RecordStore::<LogRecord>::from_lines(Vec::<String>::new());
        assert!(store.is_empty());
        assert_eq!(store.stats(), ParseStats::default());
    }
}
