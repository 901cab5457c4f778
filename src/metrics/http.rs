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
use serde::Serialize;
use std::collections::BTreeMap;
use std::ops::Range;

const CLIENT_ERRORS: Range<i64> = 400..500;
const SERVER_ERRORS: Range<i64> = 500..600;

/// Status bucket counts.
///
/// `http_2xx_count` counts only code 200; other 2xx codes land in no bucket.
/// The full per-code table is kept in `frequencies`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HttpSummary {
    pub http_2xx_count: u64,
    pub http_4xx_count: u64,
    pub http_5xx_count: u64,
    #[serde(skip)]
    pub frequencies: BTreeMap<i64, u64>,
}

impl HttpSummary {
    pub fn from_frequencies(frequencies: BTreeMap<i64, u64>) -> Self {
        let sum_range = |range: &Range<i64>| -> u64 {
            frequencies
                .iter()
                .filter(|(code, _)| range.contains(*code))
                .map(|(_, count)| count)
                .sum()
        };

        Self {
            http_2xx_count: frequencies.get(&200).copied().unwrap_or(0),
            http_4xx_count: sum_range(&CLIENT_ERRORS),
            http_5xx_count: sum_range(&SERVER_ERRORS),
            frequencies,
        }
    }
}

#[derive(Debug, Default)]
pub struct HttpStatusReducer {
    frequencies: BTreeMap<i64, u64>,
}

impl MetricReducer for HttpStatusReducer {
    type Summary = HttpSummary;

    const CATEGORY: Category = Category::HttpStatuses;

    fn observe(&mut self, record: &dyn RecordView) -> Result<(), MalformedMetricError> {
        if let Some(code) =
            kv::extract_parsed::<i64>(record.message(), Self::CATEGORY.marker(), "status")?
        {
            *self.frequencies.entry(code).or_insert(0) += 1;
        }
        Ok(())
    }

    fn finish(self) -> HttpSummary {
        HttpSummary::from_frequencies(self.frequencies)
    }
}
