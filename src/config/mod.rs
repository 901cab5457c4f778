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

use crate::parser::line::RecordShape;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// User defaults for a metrics run, stored in the config directory.
/// Command-line flags take precedence over every field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Directory the CSV tables are written to (current directory when unset)
    pub output_dir: Option<PathBuf>,
    pub write_csv: bool,
    /// Print the JSON object after the console summary
    pub print_json: bool,
    pub include_diagnostics: bool,
    pub record_shape: RecordShape,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            write_csv: true,
            print_json: true,
            include_diagnostics: false,
            record_shape: RecordShape::Fields,
        }
    }
}

impl AnalyzerConfig {
    /// Get the path to the user config file
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("logmetrics").join("config.json"))
    }

    /// Load the user config, returning defaults if not found
    pub fn load() -> Self {
        Self::config_path().map_or_else(Self::default, |path| Self::load_from(&path))
    }

    /// Load config from `path`; a missing or invalid file yields defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }

        let parsed = std::fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|contents| serde_json::from_str::<Self>(&contents).map_err(|e| e.to_string()));

        match parsed {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Ignoring config {}: {e}", path.display());
                Self::default()
            }
        }
    }
}
