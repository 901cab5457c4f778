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

use crate::core::RecordStore;
use crate::error::{AnalyzerError, Result};
use crate::parser::ParseLine;
use std::path::Path;
use std::time::Instant;

/// Read a whole log file, replacing invalid UTF-8 sequences.
///
/// A missing or unreadable file is [`AnalyzerError::InputUnavailable`].
pub fn read_log_file(path: &Path) -> Result<String> {
    let read_start = Instant::now();
    let buffer = std::fs::read(path).map_err(|source| AnalyzerError::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(
        "File I/O took {:?} to read {} bytes from {}",
        read_start.elapsed(),
        buffer.len(),
        path.display()
    );

    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Read and parse a log file into a [`RecordStore`]
pub fn load_records<R: ParseLine>(path: &Path) -> Result<RecordStore<R>> {
    tracing::info!("Reading log file: {}", path.display());
    let content = read_log_file(path)?;
    Ok(RecordStore::from_text(&content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::line::LogRecord;
    use std::io::Write;

    #[test]
    fn test_missing_file_is_input_unavailable() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = load_records::<LogRecord>(&dir.path().join("nope.log"))
            .expect_err("file does not exist");
        assert!(matches!(err, AnalyzerError::InputUnavailable { .. }));
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"2025-01-10 10:00:01 INFO src note=caf\xff\n")
            .expect("write");

        let store = load_records::<LogRecord>(file.path()).expect("readable");
        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].field("note"), Some("caf\u{fffd}"));
    }
}
