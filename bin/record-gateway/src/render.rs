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

use askama_escape::{escape, Html};
use stave::Record;

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Records</title>
</head>
<body>
<h1>Records</h1>
<p>Sort: <a href="/?sort=ASC">ascending</a> | <a href="/?sort=DESC">descending</a></p>
<table border="1">
<thead>
<tr><th>ID</th><th>Name</th><th>ID Card</th><th>Phone</th><th>Affiliation</th><th>Additional Info</th></tr>
</thead>
<tbody>
"#;

const PAGE_TAIL: &str = "</tbody>\n</table>\n</body>\n</html>\n";

pub fn render_records_page(records: &[Record]) -> String {
    let rows: String = records.iter().map(render_row).collect();
    format!("{PAGE_HEAD}{rows}{PAGE_TAIL}")
}

fn render_row(record: &Record) -> String {
    format!(
        "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
        record.identifier,
        escape(&record.username, Html),
        record.score,
        escape(&record.telephone, Html),
        escape(&record.affiliation_code, Html),
        escape(&record.extra_code, Html),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_are_escaped() {
        let record = Record {
            identifier: 1,
            username: "<script>alert(1)</script>".into(),
            score: 7,
            telephone: "a&b".into(),
            affiliation_code: "\"q\"".into(),
            extra_code: String::new(),
        };
        let page = render_records_page(&[record]);
        assert!(page.contains("&lt;script&gt;"));
        assert!(!page.contains("<script>"));
        assert!(page.contains("a&amp;b"));
        assert!(page.contains("<td>1</td>"));
        assert!(page.contains("<td>7</td>"));
    }

    #[test]
    fn empty_result_still_renders_table() {
        let page = render_records_page(&[]);
        assert!(page.contains("<tbody>\n</tbody>"));
    }
}
