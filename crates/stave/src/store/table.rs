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

use crate::records::columns;
use std::fmt;

pub const DEFAULT_DATABASE: &str = "default";
pub const DEFAULT_TABLE: &str = "clickhouse_sec";

/// One row of the fixture inserted into a freshly created table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedRow {
    pub id: i64,
    pub name: &'static str,
    pub id_card: &'static str,
    pub phone: &'static str,
    pub affiliation: &'static str,
    pub additional_info: &'static str,
}

pub const SEED_ROWS: [SeedRow; 2] = [
    SeedRow {
        id: 2,
        name: "hacker",
        id_card: "3333",
        phone: "15534212521",
        affiliation: "15534212521",
        additional_info: "15534212521",
    },
    SeedRow {
        id: 1,
        name: "gacj",
        id_card: "33333333",
        phone: "15534212521",
        affiliation: "1223321",
        additional_info: "hacker",
    },
];

/// Fully qualified `database.table` target. Both parts are reduced to
/// identifier characters on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    database: String,
    name: String,
}

impl Default for TableRef {
    fn default() -> Self {
        Self::new(DEFAULT_DATABASE, DEFAULT_TABLE)
    }
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.database, self.name)
    }
}

impl TableRef {
    pub fn new(database: &str, name: &str) -> Self {
        Self {
            database: sanitize_identifier(database),
            name: sanitize_identifier(name),
        }
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn describe_statement(&self) -> String {
        format!("DESC {}", self)
    }

    pub fn create_statement(&self) -> String {
        format!(
            "CREATE TABLE {} (\n    {} Int64,\n    {} String,\n    {} String,\n    {} String,\n    {} String,\n    {} String\n) ENGINE = MergeTree() ORDER BY {}",
            self,
            columns::ID,
            columns::NAME,
            columns::ID_CARD,
            columns::PHONE,
            columns::AFFILIATION,
            columns::ADDITIONAL_INFO,
            columns::ID,
        )
    }

    pub fn seed_statement(&self) -> String {
        let values = SEED_ROWS
            .iter()
            .map(|row| {
                format!(
                    "({},{},{},{},{},{})",
                    row.id,
                    quote(row.name),
                    quote(row.id_card),
                    quote(row.phone),
                    quote(row.affiliation),
                    quote(row.additional_info),
                )
            })
            .collect::<Vec<_>>()
            .join(",\n");
        format!(
            "INSERT INTO {} ({}) VALUES\n{values}",
            self,
            columns::ALL.join(",")
        )
    }
}

fn sanitize_identifier(s: &str) -> String {
    let mut out = String::new();
    for (i, c) in s.chars().enumerate() {
        if (c.is_ascii_alphanumeric() || c == '_') && (i > 0 || c.is_ascii_alphabetic() || c == '_')
        {
            out.push(c);
        }
    }
    if out.is_empty() {
        "_".to_string()
    } else {
        out
    }
}

fn quote(s: &str) -> String {
    format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'"))
}
