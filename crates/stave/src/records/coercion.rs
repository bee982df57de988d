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

use serde_json::{Map, Number, Value};
use std::num::{IntErrorKind, ParseIntError};

/// Wire shape of a single row field, classified before any typed conversion.
///
/// The store is free to emit numeric columns either quoted or bare, so every
/// target type gets its own coercion that accepts whichever shapes make sense
/// and falls back to `None` otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Absent,
    Null,
    Text(&'a str),
    Number(&'a Number),
    Bool(bool),
    Nested(&'a Value),
}

impl<'a> FieldValue<'a> {
    pub fn classify(value: Option<&'a Value>) -> Self {
        match value {
            None => FieldValue::Absent,
            Some(Value::Null) => FieldValue::Null,
            Some(Value::String(s)) => FieldValue::Text(s.as_str()),
            Some(Value::Number(n)) => FieldValue::Number(n),
            Some(Value::Bool(b)) => FieldValue::Bool(*b),
            Some(nested @ (Value::Array(_) | Value::Object(_))) => FieldValue::Nested(nested),
        }
    }

    pub fn lookup(row: &'a Map<String, Value>, key: &str) -> Self {
        Self::classify(row.get(key))
    }

    /// Base-10 text or a JSON number; floats truncate toward zero and
    /// out-of-range values saturate at the `i64` bounds.
    pub fn to_i64(self) -> Option<i64> {
        match self {
            FieldValue::Text(s) => saturate(s.parse::<i64>(), i64::MIN, i64::MAX),
            FieldValue::Number(n) => number_to_i64(n),
            _ => None,
        }
    }

    /// Same shapes as [`FieldValue::to_i64`], clamped to the `i32` range.
    pub fn to_i32(self) -> Option<i32> {
        match self {
            FieldValue::Text(s) => saturate(s.parse::<i32>(), i32::MIN, i32::MAX),
            FieldValue::Number(n) => number_to_i64(n).map(clamp_i32),
            _ => None,
        }
    }

    pub fn to_text(self) -> Option<&'a str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Renders any shape as text. Null and absent render empty.
    pub fn render(self) -> String {
        match self {
            FieldValue::Absent | FieldValue::Null => String::new(),
            FieldValue::Text(s) => s.to_string(),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::Nested(v) => v.to_string(),
        }
    }
}

fn number_to_i64(n: &Number) -> Option<i64> {
    // `as` saturates at the i64 bounds
    n.as_i64().or_else(|| n.as_f64().map(|f| f as i64))
}

/// Overflow keeps the nearest bound; malformed text is still `None`.
fn saturate<T>(parsed: Result<T, ParseIntError>, min: T, max: T) -> Option<T> {
    match parsed {
        Ok(v) => Some(v),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(max),
            IntErrorKind::NegOverflow => Some(min),
            _ => None,
        },
    }
}

fn clamp_i32(v: i64) -> i32 {
    i32::try_from(v).unwrap_or(if v < 0 { i32::MIN } else { i32::MAX })
}
