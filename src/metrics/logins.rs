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
use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoginCounts {
    pub login_success_count: u64,
    pub login_failure_count: u64,
}

/// Per-user login outcomes, in first-seen user order
pub type LoginSummary = IndexMap<String, LoginCounts>;

#[derive(Debug, Default)]
pub struct LoginReducer {
    users: LoginSummary,
}

impl MetricReducer for LoginReducer {
    type Summary = LoginSummary;

    const CATEGORY: Category = Category::UserLogins;

    fn observe(&mut self, record: &dyn RecordView) -> Result<(), MalformedMetricError> {
        let marker = Self::CATEGORY.marker();
        let message = record.message();
        let Some(user) = kv::extract(message, marker, "user")? else {
            return Ok(());
        };
        // Both fields must be present before the user entry is touched
        let result = kv::extract(message, marker, "result")?.unwrap_or_default();

        let counts = self.users.entry(user.to_string()).or_default();
        match result {
            "success" => counts.login_success_count += 1,
            "failure" => counts.login_failure_count += 1,
            other => tracing::trace!(user, result = other, "Ignoring login result"),
        }
        Ok(())
    }

    fn finish(self) -> LoginSummary {
        self.users
    }
}
