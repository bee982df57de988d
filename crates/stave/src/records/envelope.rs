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

use super::Record;
use serde::Deserialize;
use tracing::debug;

/// Body of a `FORMAT JSON` response. Only `data` matters for decoding; the
/// rest is kept for diagnostics.
#[derive(Debug, Default, Deserialize)]
pub struct StoreResponseEnvelope {
    #[serde(default)]
    pub data: Option<Vec<Record>>,
    #[serde(default)]
    pub meta: Option<Vec<ColumnMeta>>,
    #[serde(default)]
    pub rows: Option<u64>,
    #[serde(default)]
    pub statistics: Option<QueryStatistics>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ColumnMeta {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub column_type: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryStatistics {
    #[serde(default)]
    pub elapsed: f64,
    #[serde(default)]
    pub rows_read: u64,
    #[serde(default)]
    pub bytes_read: u64,
}

impl StoreResponseEnvelope {
    pub fn parse(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    pub fn log_summary(&self) {
        let columns = self
            .meta
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|c| format!("{}:{}", c.name, c.column_type))
            .collect::<Vec<_>>()
            .join(",");
        let stats = self.statistics.clone().unwrap_or_default();
        debug!(
            rows = self.rows.unwrap_or_default(),
            decoded = self.data.as_ref().map_or(0, Vec::len),
            columns = %columns,
            elapsed = stats.elapsed,
            rows_read = stats.rows_read,
            bytes_read = stats.bytes_read,
            "store response decoded"
        );
    }

    /// Rows in the order the store returned them; a missing `data` key is
    /// an empty result.
    pub fn into_records(self) -> Vec<Record> {
        self.data.unwrap_or_default()
    }
}
