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

//! Writes rendered output to disk. The only part of the library that creates files.

use crate::error::{AnalyzerError, Result};
use crate::output::{json, CsvTables};
use crate::parser::line::LogRecord;
use std::path::{Path, PathBuf};

fn write_file(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).map_err(|source| AnalyzerError::Output {
        path: path.to_path_buf(),
        source,
    })
}

/// Write the four CSV tables into `dir`, creating it if needed.
/// Returns the written paths in category order.
pub fn write_csv_tables(tables: &CsvTables, dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir).map_err(|source| AnalyzerError::Output {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(4);
    for (name, contents) in tables.files() {
        let path = dir.join(name);
        write_file(&path, contents)?;
        tracing::info!("CSV written: {}", path.display());
        written.push(path);
    }
    Ok(written)
}

/// Write records as JSON Lines
pub fn write_json_lines(records: &[LogRecord], path: &Path) -> Result<()> {
    let body = json::render_json_lines(records)?;
    write_file(path, &body)?;
    tracing::info!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}

pub fn write_json(json_text: &str, path: &Path) -> Result<()> {
    write_file(path, json_text)
}

/// `<dir>/<stem>.jsonl` beside the input log
pub fn default_jsonl_path(input: &Path) -> PathBuf {
    input.with_extension("jsonl")
}
