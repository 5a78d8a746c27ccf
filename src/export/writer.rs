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

//! # CSV Content Writer
//!
//! This module serializes form entries into a delimited document: a header
//! row followed by one row per entry, most recent entry first.

use std::collections::HashMap;

use uuid::Uuid;

use crate::config::FxExportConfig;
use crate::export::escape::escape_csv_value;
use crate::export::schema::FxColumnSchema;
use crate::record::FxFormEntry;

/// Invariant format of the timestamp column.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Orders entries by creation time, most recent first.
///
/// The sort is stable, so entries sharing a timestamp keep their fetch order.
pub fn order_entries(entries: &[FxFormEntry]) -> Vec<&FxFormEntry> {
    let mut ordered: Vec<&FxFormEntry> = entries.iter().collect();
    ordered.sort_by(|a, b| b.created.cmp(&a.created));
    ordered
}

/// Writes entries as delimited text using an export configuration.
#[derive(Clone, Debug, Default)]
pub struct FxCsvContentWriter {
    config: FxExportConfig,
}

impl FxCsvContentWriter {
    /// Creates a writer with the default configuration.
    #[allow(non_snake_case)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a writer with a custom configuration.
    #[allow(non_snake_case)]
    pub fn with_config(mut self, config: FxExportConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &FxExportConfig {
        &self.config
    }

    /// Builds the full document for `entries`.
    ///
    /// Returns the empty string when no entry carries any field; no header is
    /// written in that case.
    #[allow(non_snake_case)]
    pub fn generate_file_content(&self, entries: &[FxFormEntry]) -> String {
        let ordered = order_entries(entries);
        let schema = FxColumnSchema::resolve(ordered.iter().copied());
        if schema.is_empty() {
            return String::new();
        }

        let mut content = String::new();
        self.push_line(&mut content, &self.header_row(&schema));
        for entry in &ordered {
            self.push_line(&mut content, &self.entry_row(entry, &schema));
        }
        content
    }

    /// Header line without terminator: timestamp label then display names.
    pub fn header_row(&self, schema: &FxColumnSchema) -> String {
        let mut cells = Vec::with_capacity(schema.len() + 1);
        cells.push(self.config.timestamp_label.as_str());
        cells.extend(schema.display_names());
        cells.join(self.config.delimiter.as_str())
    }

    /// Row line without terminator, aligned to `schema`.
    pub fn entry_row(&self, entry: &FxFormEntry, schema: &FxColumnSchema) -> String {
        let mut values: HashMap<Uuid, Option<&str>> = HashMap::with_capacity(entry.fields.len());
        for field in &entry.fields {
            values
                .entry(field.field_item_id)
                .or_insert(field.value.as_deref());
        }

        let mut cells = Vec::with_capacity(schema.len() + 1);
        cells.push(entry.created.format(TIMESTAMP_FORMAT).to_string());
        for column in schema {
            let value = values.get(&column.field_item_id).copied().flatten();
            cells.push(escape_csv_value(value, &self.config.delimiter));
        }
        cells.join(self.config.delimiter.as_str())
    }

    fn push_line(&self, content: &mut String, line: &str) {
        content.push_str(line);
        content.push_str(&self.config.line_ending);
    }
}
