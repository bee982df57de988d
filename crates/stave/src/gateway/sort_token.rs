// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2024 Jonathan Lee
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License version 3
// as published by the Free Software Foundation.
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.
// See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see https://www.gnu.org/licenses/.

use crate::error::GatewayError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

static SUBQUERY_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)select\s*\*+\s*from").expect("valid subquery marker"));

/// Caller-supplied text placed after `ORDER BY id`.
///
/// Only tokens carrying a `select * from` marker are refused. Everything else
/// is interpolated verbatim, so this is not an injection defense.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortToken(String);

impl SortToken {
    pub fn parse(raw: &str) -> Result<Self, GatewayError> {
        if SUBQUERY_MARKER.is_match(raw) {
            warn!(token = raw, "Rejected sort token");
            return Err(GatewayError::Rejected);
        }
        Ok(Self(raw.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for SortToken {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SortToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
