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

use chrono::{DateTime, TimeZone, Utc};
use formex::{FxFieldData, FxFormDataProvider, FxFormEntry, FxMemoryFormDataProvider};
use uuid::Uuid;

fn day(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 3, day, 12, 0, 0).unwrap()
}

fn seeded(form: Uuid) -> FxMemoryFormDataProvider {
    let field = Uuid::new_v4();
    FxMemoryFormDataProvider::with_entries((1..=5).map(|d| {
        FxFormEntry::new(form, day(d)).with_field(FxFieldData::new(field, "Day", d.to_string()))
    }))
    .expect("seed provider")
}

fn days(entries: &[FxFormEntry]) -> Vec<u32> {
    use chrono::Datelike;
    entries.iter().map(|entry| entry.created.day()).collect()
}

#[test]
fn unknown_form_returns_absent_collection() {
    let provider = seeded(Uuid::new_v4());
    assert!(provider.get_entries(Uuid::new_v4(), None, None).unwrap().is_none());
}

#[test]
fn open_window_returns_all_entries_in_insertion_order() {
    let form = Uuid::new_v4();
    let provider = seeded(form);

    let entries = provider.get_entries(form, None, None).unwrap().unwrap();
    assert_eq!(days(&entries), vec![1, 2, 3, 4, 5]);
    assert_eq!(provider.len(&form).unwrap(), 5);
}

#[test]
fn window_bounds_are_inclusive() {
    let form = Uuid::new_v4();
    let provider = seeded(form);

    let entries = provider.get_entries(form, Some(day(2)), Some(day(4))).unwrap().unwrap();
    assert_eq!(days(&entries), vec![2, 3, 4]);

    let entries = provider.get_entries(form, Some(day(4)), None).unwrap().unwrap();
    assert_eq!(days(&entries), vec![4, 5]);

    let entries = provider.get_entries(form, None, Some(day(1))).unwrap().unwrap();
    assert_eq!(days(&entries), vec![1]);
}

#[test]
fn known_form_outside_window_returns_empty_collection() {
    let form = Uuid::new_v4();
    let provider = seeded(form);

    let entries = provider.get_entries(form, Some(day(10)), None).unwrap();
    assert_eq!(entries, Some(Vec::new()));
}

#[test]
fn entries_of_other_forms_are_not_returned() {
    let form = Uuid::new_v4();
    let other = Uuid::new_v4();
    let provider = seeded(form);
    provider.insert(FxFormEntry::new(other, day(3))).unwrap();

    assert_eq!(provider.get_entries(other, None, None).unwrap().unwrap().len(), 1);
    assert_eq!(provider.get_entries(form, None, None).unwrap().unwrap().len(), 5);
}
