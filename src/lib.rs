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

//! # Formex Core Library
//!
//! Formex exports the submissions of a form as a single delimited-text
//! document. The columns are discovered from the submissions themselves, so
//! forms whose entries answer different subsets of fields export cleanly.
//!
//! ## Module Overview
//!
//! - **record**: FxFormEntry and FxFieldData, the submission data model
//! - **provider**: The FxFormDataProvider seam and an in-memory implementation
//! - **config**: Delimiter, timestamp label and line ending of an export
//! - **export**: Column resolution, row serialization, escaping and file naming
//! - **exporter**: FxCsvExportProvider, which ties the pieces together
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use formex::{FxCsvExportProvider, FxExportDataProvider, FxFieldData, FxFormEntry, FxMemoryFormDataProvider};
//!
//! let form_id = uuid::Uuid::new_v4();
//! let provider = FxMemoryFormDataProvider::with_entries(vec![
//!     FxFormEntry::new(form_id, chrono::Utc::now())
//!         .with_field(FxFieldData::new(uuid::Uuid::new_v4(), "Name", "Ann")),
//! ])?;
//!
//! let exporter = FxCsvExportProvider::builder()
//!     .data_provider(Arc::new(provider))
//!     .build()?;
//! let result = exporter.export(form_id, None, None)?;
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return `Result<T, FxError>`. Missing or empty
//! entry collections are not errors; they produce an empty document.

#![allow(non_snake_case)]

pub mod config;
pub mod errors;
pub mod export;
pub mod exporter;
pub mod provider;
pub mod record;

pub use config::{FxExportConfig, FxExportConfigBuilder};
pub use errors::{FxError, Result};
pub use export::{escape_csv_value, generate_file_name, generate_file_name_at, FxColumn, FxColumnSchema, FxCsvContentWriter};
pub use exporter::{FxCsvExportProvider, FxCsvExportProviderBuilder, FxExportDataProvider, FxExportDataResult};
pub use provider::{FxFormDataProvider, FxMemoryFormDataProvider};
pub use record::{FxFieldData, FxFormEntry, FxFormEntryBatch};
