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

//! # Formex Record Module
//!
//! This module provides the data structures for form submissions. An
//! [`FxFormEntry`] is one submission of a form; it carries the answered
//! fields as a loosely-typed list of [`FxFieldData`]. Different submissions
//! of the same form may answer different subsets of fields.
//!
//! ## Usage Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use formex::record::{FxFieldData, FxFormEntry};
//! use uuid::Uuid;
//!
//! let form_id = Uuid::new_v4();
//! let name_field = Uuid::new_v4();
//!
//! let entry = FxFormEntry::new(form_id, Utc.with_ymd_and_hms(2023, 1, 2, 10, 0, 0).unwrap())
//!     .with_field(FxFieldData::new(name_field, "Name", "Ann"));
//!
//! assert_eq!(entry.field(&name_field).and_then(|f| f.value.as_deref()), Some("Ann"));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One answered field within a submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FxFieldData {
    /// Stable key of the field across submissions of the same form.
    pub field_item_id: Uuid,

    /// Human-readable label. Different fields may share the same text.
    pub field_name: String,

    /// Raw answer. `None` when the field was present but left unanswered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl FxFieldData {
    /// Constructs an answered field.
    #[allow(non_snake_case)]
    pub fn new(field_item_id: Uuid, field_name: impl Into<String>, value: impl Into<String>) -> Self {
        FxFieldData {
            field_item_id,
            field_name: field_name.into(),
            value: Some(value.into()),
        }
    }

    /// Constructs a field that carries no value.
    #[allow(non_snake_case)]
    pub fn unanswered(field_item_id: Uuid, field_name: impl Into<String>) -> Self {
        FxFieldData {
            field_item_id,
            field_name: field_name.into(),
            value: None,
        }
    }
}

/// A single form submission.
///
/// Entries are immutable once fetched from a data provider; the exporter only
/// borrows them for the duration of one export.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FxFormEntry {
    /// Unique identifier of the submission.
    pub id: Uuid,

    /// Identifier of the form this submission belongs to.
    pub form_item_id: Uuid,

    /// Submission time in UTC.
    pub created: DateTime<Utc>,

    /// Answered fields, in the order the form reported them.
    #[serde(default)]
    pub fields: Vec<FxFieldData>,
}

impl FxFormEntry {
    /// Constructs an entry with a fresh identifier and no fields.
    #[allow(non_snake_case)]
    pub fn new(form_item_id: Uuid, created: DateTime<Utc>) -> Self {
        FxFormEntry {
            id: Uuid::new_v4(),
            form_item_id,
            created,
            fields: Vec::new(),
        }
    }

    /// Appends a field to the entry.
    #[allow(non_snake_case)]
    pub fn with_field(mut self, field: FxFieldData) -> Self {
        self.fields.push(field);
        self
    }

    /// Replaces all fields of the entry.
    #[allow(non_snake_case)]
    pub fn with_fields(mut self, fields: impl IntoIterator<Item = FxFieldData>) -> Self {
        self.fields = fields.into_iter().collect();
        self
    }

    /// Returns the first field carrying the given identifier.
    pub fn field(&self, field_item_id: &Uuid) -> Option<&FxFieldData> {
        self.fields
            .iter()
            .find(|field| &field.field_item_id == field_item_id)
    }
}

/// Convenience alias for working on batches of entries.
pub type FxFormEntryBatch = Vec<FxFormEntry>;
