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

//! # Form Data Provider Module
//!
//! Exports never read submissions themselves; they ask a
//! [`FxFormDataProvider`] for the entries of one form, optionally limited to
//! a date window. Hosts plug their own store in by implementing the trait.
//!
//! ## Implementing Custom Providers
//!
//! ```rust
//! use chrono::{DateTime, Utc};
//! use formex::errors::Result;
//! use formex::provider::FxFormDataProvider;
//! use formex::record::FxFormEntryBatch;
//! use uuid::Uuid;
//!
//! #[derive(Debug)]
//! struct NoEntries;
//!
//! impl FxFormDataProvider for NoEntries {
//!     fn name(&self) -> &'static str {
//!         "provider.none"
//!     }
//!
//!     fn get_entries(
//!         &self,
//!         _form_id: Uuid,
//!         _start: Option<DateTime<Utc>>,
//!         _end: Option<DateTime<Utc>>,
//!     ) -> Result<Option<FxFormEntryBatch>> {
//!         Ok(None)
//!     }
//! }
//! ```
//!
//! [`FxMemoryFormDataProvider`] keeps entries in memory and is used by hosts
//! without a backing store and by tests.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::errors::{FxError, Result};
use crate::record::{FxFormEntry, FxFormEntryBatch};

/// Source of form submissions.
///
/// The returned batch is unordered. `Ok(None)` means the source has nothing
/// for the form at all; exporters treat it like an empty batch.
pub trait FxFormDataProvider: std::fmt::Debug + Send + Sync {
    /// Identifier used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Fetches the entries of `form_id` created within `[start, end]`.
    fn get_entries(
        &self,
        form_id: Uuid,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<Option<FxFormEntryBatch>>;
}

/// In-memory provider keyed by form identifier.
#[derive(Debug, Default)]
pub struct FxMemoryFormDataProvider {
    entries: RwLock<HashMap<Uuid, FxFormEntryBatch>>,
}

impl FxMemoryFormDataProvider {
    #[allow(non_snake_case)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the provider with `entries`, grouped by their form.
    #[allow(non_snake_case)]
    pub fn with_entries(entries: impl IntoIterator<Item = FxFormEntry>) -> Result<Self> {
        let provider = Self::new();
        for entry in entries {
            provider.insert(entry)?;
        }
        Ok(provider)
    }

    /// Stores an entry under its form.
    pub fn insert(&self, entry: FxFormEntry) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| FxError::internal("form entry store lock poisoned"))?;
        entries.entry(entry.form_item_id).or_default().push(entry);
        Ok(())
    }

    /// Number of entries stored for `form_id`.
    pub fn len(&self, form_id: &Uuid) -> Result<usize> {
        let entries = self
            .entries
            .read()
            .map_err(|_| FxError::internal("form entry store lock poisoned"))?;
        Ok(entries.get(form_id).map(Vec::len).unwrap_or(0))
    }
}

fn in_window(entry: &FxFormEntry, start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> bool {
    start.map_or(true, |start| entry.created >= start) && end.map_or(true, |end| entry.created <= end)
}

impl FxFormDataProvider for FxMemoryFormDataProvider {
    fn name(&self) -> &'static str {
        "provider.memory"
    }

    fn get_entries(
        &self,
        form_id: Uuid,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<Option<FxFormEntryBatch>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| FxError::internal("form entry store lock poisoned"))?;

        Ok(entries.get(&form_id).map(|batch| {
            batch
                .iter()
                .filter(|entry| in_window(entry, start, end))
                .cloned()
                .collect()
        }))
    }
}
