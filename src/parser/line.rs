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

use indexmap::IndexMap;
use serde::Serialize;

/// Read-only view the metric reducers work against.
///
/// Both record shapes produced by the parser implement this, so the same
/// reducers run over either of them.
pub trait RecordView {
    /// Emitting component (the fourth token of the line)
    fn source(&self) -> &str;

    /// Text searched for markers and `key=value` sub-fields
    fn message(&self) -> &str;
}

/// A log line split into its header tokens and `key=value` fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    /// Date and time tokens joined by a single space, kept verbatim
    pub timestamp: String,
    pub level: String,
    pub source: String,
    /// Fields in first-seen order; a repeated key overwrites the value
    pub fields: IndexMap<String, String>,
    /// Only the `key=value` tokens of the message, joined by a space.
    /// Free-text tokens are not part of it.
    pub raw_message: String,
}

impl LogRecord {
    /// Look up a field value by key
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }
}

impl RecordView for LogRecord {
    fn source(&self) -> &str {
        &self.source
    }

    fn message(&self) -> &str {
        &self.raw_message
    }
}

/// A log line with the whole message tail kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawRecord {
    pub timestamp: String,
    pub level: String,
    pub source: String,
    pub message: String,
}

impl RecordView for RawRecord {
    fn source(&self) -> &str {
        &self.source
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Which record shape a run parses lines into
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordShape {
    /// [`LogRecord`]: message rebuilt from `key=value` tokens
    #[default]
    Fields,
    /// [`RawRecord`]: message is the untouched token tail
    Raw,
}

impl std::fmt::Display for RecordShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fields => f.write_str("fields"),
            Self::Raw => f.write_str("raw"),
        }
    }
}
