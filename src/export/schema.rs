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

//! # Column Schema
//!
//! Submissions of one form rarely answer the same set of fields, so the
//! export columns are discovered from the data on every export.
//!
//! ## Resolution Order
//!
//! Entries are scanned in export order (most recent first) and fields in the
//! order each entry lists them. A field becomes a column the first time its
//! identifier is seen. Later entries can only append columns they introduce;
//! they never move an existing one. The result is therefore driven by the
//! most recent submission and is not alphabetical.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::record::FxFormEntry;

/// One export column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FxColumn {
    pub field_item_id: Uuid,
    pub field_name: String,
}

/// Ordered, identifier-unique set of export columns.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FxColumnSchema {
    columns: Vec<FxColumn>,
}

impl FxColumnSchema {
    /// Resolves the columns of `entries`, which must already be in export order.
    #[allow(non_snake_case)]
    pub fn resolve<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a FxFormEntry>,
    {
        let mut seen = HashSet::new();
        let mut columns = Vec::new();

        for entry in entries {
            for field in &entry.fields {
                if seen.insert(field.field_item_id) {
                    columns.push(FxColumn {
                        field_item_id: field.field_item_id,
                        field_name: field.field_name.clone(),
                    });
                }
            }
        }

        log::debug!("resolved {} export columns", columns.len());
        FxColumnSchema { columns }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FxColumn> {
        self.columns.iter()
    }

    /// Position of the column for `field_item_id`, if any.
    pub fn position_of(&self, field_item_id: &Uuid) -> Option<usize> {
        self.columns
            .iter()
            .position(|column| &column.field_item_id == field_item_id)
    }

    /// Display names in column order.
    pub fn display_names(&self) -> Vec<&str> {
        self.columns
            .iter()
            .map(|column| column.field_name.as_str())
            .collect()
    }
}

impl<'a> IntoIterator for &'a FxColumnSchema {
    type Item = &'a FxColumn;
    type IntoIter = std::slice::Iter<'a, FxColumn>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}
