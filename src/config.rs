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

//! # Export Configuration
//!
//! The delimiter, timestamp label and line ending used by an export are held
//! in an explicit [`FxExportConfig`] value that is handed to the exporter.
//! Hosts typically resolve it once at start-up from a settings map
//! ([`FxExportConfig::from_settings`]) or a JSON document
//! ([`FxExportConfigBuilder::from_json`]).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{FxError, Result};

/// Settings key holding the column delimiter.
pub const DELIMITER_SETTING: &str = "Forms.ExportDataDelimiter";

/// Delimiter used when no setting is present.
pub const DEFAULT_DELIMITER: &str = ",";

/// Label of the leading timestamp column.
pub const DEFAULT_TIMESTAMP_LABEL: &str = "Created";

/// Line terminator of the host platform.
#[cfg(windows)]
pub const PLATFORM_LINE_ENDING: &str = "\r\n";
/// Line terminator of the host platform.
#[cfg(not(windows))]
pub const PLATFORM_LINE_ENDING: &str = "\n";

/// Configuration for a CSV export.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FxExportConfig {
    /// Separates columns. May be longer than one character.
    pub delimiter: String,
    /// Header text of the timestamp column.
    pub timestamp_label: String,
    /// Terminates every emitted line.
    pub line_ending: String,
}

impl Default for FxExportConfig {
    fn default() -> Self {
        FxExportConfig {
            delimiter: DEFAULT_DELIMITER.to_string(),
            timestamp_label: DEFAULT_TIMESTAMP_LABEL.to_string(),
            line_ending: PLATFORM_LINE_ENDING.to_string(),
        }
    }
}

impl FxExportConfig {
    #[allow(non_snake_case)]
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(non_snake_case)]
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    #[allow(non_snake_case)]
    pub fn with_timestamp_label(mut self, label: impl Into<String>) -> Self {
        self.timestamp_label = label.into();
        self
    }

    #[allow(non_snake_case)]
    pub fn with_line_ending(mut self, line_ending: impl Into<String>) -> Self {
        self.line_ending = line_ending.into();
        self
    }

    /// Reads the delimiter from a flat settings map, falling back to `,`.
    #[allow(non_snake_case)]
    pub fn from_settings(settings: &HashMap<String, String>) -> Self {
        let delimiter = settings
            .get(DELIMITER_SETTING)
            .filter(|value| !value.is_empty())
            .cloned()
            .unwrap_or_else(|| DEFAULT_DELIMITER.to_string());
        Self::default().with_delimiter(delimiter)
    }

    /// Rejects configurations that would make row boundaries or cells ambiguous.
    pub fn validate(&self) -> Result<()> {
        if self.delimiter.is_empty() {
            return Err(FxError::validation("delimiter cannot be empty"));
        }
        if self.line_ending.is_empty() {
            return Err(FxError::validation("line ending cannot be empty"));
        }
        Ok(())
    }
}

/// Partial configuration where every unset field takes its default.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FxExportConfigBuilder {
    pub delimiter: Option<String>,
    pub timestamp_label: Option<String>,
    pub line_ending: Option<String>,
}

impl FxExportConfigBuilder {
    #[allow(non_snake_case)]
    pub fn build(self) -> FxExportConfig {
        let base = FxExportConfig::default();
        FxExportConfig {
            delimiter: self.delimiter.unwrap_or(base.delimiter),
            timestamp_label: self.timestamp_label.unwrap_or(base.timestamp_label),
            line_ending: self.line_ending.unwrap_or(base.line_ending),
        }
    }

    /// Builds and validates a configuration from a JSON object.
    #[allow(non_snake_case)]
    pub fn from_json(value: &Value) -> Result<FxExportConfig> {
        let builder: FxExportConfigBuilder = serde_json::from_value(value.clone())
            .map_err(|err| FxError::Config(format!("invalid export config: {err}")))?;
        let config = builder.build();
        config.validate()?;
        Ok(config)
    }
}
