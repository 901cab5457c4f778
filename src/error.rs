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

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a run.
///
/// Unparseable lines and malformed metric records never surface here; they
/// are counted and skipped.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("Input unavailable: {}: {source}", path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// A record carried a metric marker but its sub-field was unusable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedMetricError {
    #[error("`{marker}` record has no `{field}=` field")]
    MissingField { marker: String, field: String },

    #[error("`{marker}` record has unusable `{field}` value {value:?}")]
    NotNumeric {
        marker: String,
        field: String,
        value: String,
    },
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;
