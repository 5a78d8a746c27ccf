//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Formex.
//! The Formex project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! # Cell Escaping
//!
//! Turns a raw field value into a cell that is safe to place between
//! delimiters on a single line.

const QUOTE: char = '"';

/// Returns true when the text contains a CR or LF.
fn contains_line_break(value: &str) -> bool {
    value.contains(['\r', '\n'])
}

/// Replaces every `\r\n`, `\n` and `\r` with a single space.
fn flatten_line_breaks(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push(' ');
            }
            '\n' => out.push(' '),
            other => out.push(other),
        }
    }
    out
}

/// Escapes a field value for a delimited export.
///
/// Empty and absent values become an empty cell. Otherwise quotes are
/// doubled, the value is wrapped in quotes when it contains a line break,
/// the delimiter or a quote, and line breaks are flattened to spaces after
/// the quoting decision.
pub fn escape_csv_value(value: Option<&str>, delimiter: &str) -> String {
    let raw = match value {
        Some(raw) if !raw.is_empty() => raw,
        _ => return String::new(),
    };

    let doubled = raw.replace(QUOTE, "\"\"");
    let needs_quotes = contains_line_break(&doubled)
        || (!delimiter.is_empty() && doubled.contains(delimiter))
        || doubled.contains(QUOTE);

    let cell = if needs_quotes {
        format!("{QUOTE}{doubled}{QUOTE}")
    } else {
        doubled
    };

    if contains_line_break(&cell) {
        flatten_line_breaks(&cell)
    } else {
        cell
    }
}
