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

//! # Formex Exporter Module
//!
//! This module wires a [`FxFormDataProvider`] to the CSV writer and the file
//! name synthesizer. Hosts call [`FxExportDataProvider::export`] and deliver
//! the returned [`FxExportDataResult`] themselves.
//!
//! ## Overriding Export Steps
//!
//! File naming and content generation are provided methods of
//! [`FxExportDataProvider`]. An implementor can override either one and keep
//! the default `export` flow.
//!
//! ```rust
//! use std::sync::Arc;
//! use formex::{FxCsvExportProvider, FxExportConfig, FxExportDataProvider, FxMemoryFormDataProvider};
//!
//! let exporter = FxCsvExportProvider::builder()
//!     .data_provider(Arc::new(FxMemoryFormDataProvider::new()))
//!     .config(FxExportConfig::default().with_delimiter(";"))
//!     .build()?;
//! let result = exporter.export(form_id, None, None)?;
//! ```

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::FxExportConfig;
use crate::errors::{FxError, Result};
use crate::export::naming;
use crate::export::writer::FxCsvContentWriter;
use crate::provider::FxFormDataProvider;
use crate::record::FxFormEntry;

/// Output of one export: the document and the name it should be saved under.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FxExportDataResult {
    pub content: String,
    pub file_name: String,
}

/// Host-facing export contract.
pub trait FxExportDataProvider {
    /// Fetches the entries of a form and renders them.
    fn export(
        &self,
        form_id: Uuid,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<FxExportDataResult>;

    /// Names the export file. The form id is accepted for overrides; the
    /// default name only depends on the date range.
    fn generate_file_name(
        &self,
        _form_id: Uuid,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> String {
        naming::generate_file_name(start, end)
    }

    /// Renders entries with the default configuration.
    fn generate_file_content(&self, entries: &[FxFormEntry]) -> String {
        FxCsvContentWriter::new().generate_file_content(entries)
    }
}

/// CSV exporter backed by a form data provider.
#[derive(Clone)]
pub struct FxCsvExportProvider {
    data_provider: Arc<dyn FxFormDataProvider>,
    writer: FxCsvContentWriter,
}

impl fmt::Debug for FxCsvExportProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FxCsvExportProvider")
            .field("data_provider", &self.data_provider.name())
            .field("config", self.writer.config())
            .finish()
    }
}

impl FxCsvExportProvider {
    /// Creates an exporter from a provider and an already validated config.
    #[allow(non_snake_case)]
    pub fn new(data_provider: Arc<dyn FxFormDataProvider>, config: FxExportConfig) -> Self {
        Self {
            data_provider,
            writer: FxCsvContentWriter::new().with_config(config),
        }
    }

    #[allow(non_snake_case)]
    pub fn builder() -> FxCsvExportProviderBuilder {
        FxCsvExportProviderBuilder::default()
    }

    pub fn config(&self) -> &FxExportConfig {
        self.writer.config()
    }
}

impl FxExportDataProvider for FxCsvExportProvider {
    fn export(
        &self,
        form_id: Uuid,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<FxExportDataResult> {
        log::debug!(
            "exporting form {} (from: {:?}, until: {:?}) via {}",
            form_id,
            start,
            end,
            self.data_provider.name()
        );

        let entries = self
            .data_provider
            .get_entries(form_id, start, end)
            .map_err(|err| FxError::provider(self.data_provider.name(), err.to_string()))?;

        let (content, rows) = match entries {
            Some(entries) => (self.generate_file_content(&entries), entries.len()),
            None => {
                log::warn!("provider {} returned no entry collection for form {}", self.data_provider.name(), form_id);
                (String::new(), 0)
            }
        };
        let file_name = self.generate_file_name(form_id, start, end);

        log::info!("exported {} entries of form {} as {}", rows, form_id, file_name);
        Ok(FxExportDataResult { content, file_name })
    }

    fn generate_file_content(&self, entries: &[FxFormEntry]) -> String {
        self.writer.generate_file_content(entries)
    }
}

/// Builder that validates its inputs before creating an exporter.
#[derive(Default)]
pub struct FxCsvExportProviderBuilder {
    data_provider: Option<Arc<dyn FxFormDataProvider>>,
    config: Option<FxExportConfig>,
}

impl FxCsvExportProviderBuilder {
    #[allow(non_snake_case)]
    pub fn data_provider(mut self, data_provider: Arc<dyn FxFormDataProvider>) -> Self {
        self.data_provider = Some(data_provider);
        self
    }

    #[allow(non_snake_case)]
    pub fn config(mut self, config: FxExportConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Fails when no data provider was supplied or the config is invalid.
    #[allow(non_snake_case)]
    pub fn build(self) -> Result<FxCsvExportProvider> {
        let data_provider = self
            .data_provider
            .ok_or_else(|| FxError::validation("data_provider is required"))?;
        let config = self.config.unwrap_or_default();
        config.validate()?;
        Ok(FxCsvExportProvider::new(data_provider, config))
    }
}
