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

pub mod coercion;
pub mod envelope;

pub use coercion::FieldValue;
pub use envelope::{ColumnMeta, QueryStatistics, StoreResponseEnvelope};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Column names as they appear on the wire and in the table DDL.
pub mod columns {
    /// Primary key, also the leading `ORDER BY` column.
    pub const ID: &str = "id";
    pub const NAME: &str = "name";
    pub const ID_CARD: &str = "id_card";
    pub const PHONE: &str = "phone";
    pub const AFFILIATION: &str = "affiliation";
    pub const ADDITIONAL_INFO: &str = "additional_info";

    /// Insertion order used by the seed statement.
    pub const ALL: [&str; 6] = [ID, NAME, ID_CARD, PHONE, AFFILIATION, ADDITIONAL_INFO];
}

/// A store row normalised into a fixed schema.
///
/// Decoding never fails: a field that cannot be coerced takes its zero value
/// and the rest of the row is kept. Serialization writes the wire column
/// names, so a serialized record decodes back to itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct Record {
    #[serde(rename = "id")]
    pub identifier: i64,
    #[serde(rename = "name")]
    pub username: String,
    #[serde(rename = "id_card")]
    pub score: i32,
    #[serde(rename = "phone")]
    pub telephone: String,
    #[serde(rename = "affiliation")]
    pub affiliation_code: String,
    #[serde(rename = "additional_info")]
    pub extra_code: String,
}

impl Record {
    pub fn from_row(row: &Value) -> Self {
        let Some(fields) = row.as_object() else {
            return Self::default();
        };
        let field = |key: &str| FieldValue::lookup(fields, key);
        Self {
            identifier: field(columns::ID).to_i64().unwrap_or_default(),
            username: field(columns::NAME)
                .to_text()
                .map(str::to_string)
                .unwrap_or_default(),
            score: field(columns::ID_CARD).to_i32().unwrap_or_default(),
            telephone: field(columns::PHONE)
                .to_text()
                .map(str::to_string)
                .unwrap_or_default(),
            affiliation_code: field(columns::AFFILIATION).render(),
            extra_code: field(columns::ADDITIONAL_INFO).render(),
        }
    }
}

impl From<Value> for Record {
    fn from(row: Value) -> Self {
        Self::from_row(&row)
    }
}
