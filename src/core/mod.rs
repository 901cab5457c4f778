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

pub mod log_file;
pub mod record_store;

pub use log_file::{load_records, read_log_file};
pub use record_store::{ParseStats, RecordStore};
