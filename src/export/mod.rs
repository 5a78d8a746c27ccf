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

//! # Data Export Module
//!
//! This module turns a batch of form entries into a delimited document and
//! names the resulting file.
//!
//! ## Module Components
//!
//! - **Schema** ([schema.rs](schema/index.html)): Column discovery across heterogeneous entries
//! - **Writer** ([writer.rs](writer/index.html)): Header and row serialization
//! - **Escape** ([escape.rs](escape/index.html)): Quoting and line break flattening of cells
//! - **Naming** ([naming.rs](naming/index.html)): File names from an optional date range
//!
//! ## Usage Patterns
//!
//! ```rust
//! use formex::export::{FxCsvContentWriter, generate_file_name};
//! use formex::config::FxExportConfig;
//!
//! let writer = FxCsvContentWriter::new()
//!     .with_config(FxExportConfig::default().with_delimiter(";"));
//! let content = writer.generate_file_content(&entries);
//! let file_name = generate_file_name(Some(start), None);
//! ```

pub mod escape;
pub mod naming;
pub mod schema;
pub mod writer;

pub use escape::escape_csv_value;
pub use naming::{generate_file_name, generate_file_name_at};
pub use schema::{FxColumn, FxColumnSchema};
pub use writer::{order_entries, FxCsvContentWriter, TIMESTAMP_FORMAT};
