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

use super::sort_token::SortToken;
use crate::records::columns;
use crate::store::TableRef;
use std::fmt;

pub const ENVELOPE_FORMAT: &str = "JSON";

#[derive(Debug, Clone, Copy)]
pub struct SelectCommand<'a> {
    table: &'a TableRef,
    sort: &'a SortToken,
}

impl<'a> SelectCommand<'a> {
    pub fn new(table: &'a TableRef, sort: &'a SortToken) -> Self {
        Self { table, sort }
    }
}

impl fmt::Display for SelectCommand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SELECT * FROM {} ORDER BY {} {} FORMAT {ENVELOPE_FORMAT}",
            self.table,
            columns::ID,
            self.sort
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_order_clause_and_format() {
        let table = TableRef::default();
        let sort = SortToken::parse("DESC").unwrap();
        assert_eq!(
            SelectCommand::new(&table, &sort).to_string(),
            "SELECT * FROM default.clickhouse_sec ORDER BY id DESC FORMAT JSON"
        );
    }

    #[test]
    fn token_is_interpolated_verbatim() {
        let table = TableRef::new("analytics", "events");
        let sort = SortToken::parse("ASC, name DESC").unwrap();
        assert_eq!(
            SelectCommand::new(&table, &sort).to_string(),
            "SELECT * FROM analytics.events ORDER BY id ASC, name DESC FORMAT JSON"
        );
    }
}
