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

//! Renders a [`MetricsSnapshot`] as console text, JSON and CSV.
//!
//! Nothing here touches the filesystem; writing the results out is left to
//! the caller.

pub mod console;
pub mod json;
pub mod tables;

use crate::error::Result;
use crate::metrics::MetricsSnapshot;
pub use tables::CsvTables;

/// All three renderings of one snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub console_text: String,
    pub json_text: String,
    pub csv_tables: CsvTables,
}

/// Rendering switches
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    /// Append a `diagnostics` key to the JSON object
    pub include_diagnostics: bool,
}

pub fn format(snapshot: &MetricsSnapshot, options: FormatOptions) -> Result<Rendered> {
    Ok(Rendered {
        console_text: console::render(snapshot),
        json_text: json::render(snapshot, options.include_diagnostics)?,
        csv_tables: tables::render(snapshot)?,
    })
}
