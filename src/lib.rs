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

//! Structured records and operational metrics from line-oriented device logs.
//!
//! Lines are parsed into records ([`parser`]), held in a [`core::RecordStore`],
//! reduced into a [`metrics::MetricsSnapshot`] and rendered by [`output`].

pub mod config;
pub mod core;
pub mod error;
pub mod export;
pub mod metrics;
pub mod output;
pub mod parser;

pub use error::{AnalyzerError, MalformedMetricError};
pub use metrics::{aggregate, MetricsSnapshot};
pub use parser::line::{LogRecord, RawRecord, RecordShape, RecordView};
pub use parser::{parse_line, parse_line_naive};
