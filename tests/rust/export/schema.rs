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
use formex::export::order_entries;
use formex::{FxColumnSchema, FxCsvContentWriter, FxExportConfig, FxFieldData, FxFormEntry};
use proptest::prelude::*;
use uuid::Uuid;

fn at(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 1, day, hour, minute, 0).unwrap()
}

fn unix_writer() -> FxCsvContentWriter {
    FxCsvContentWriter::new().with_config(FxExportConfig::default().with_line_ending("\n"))
}

#[test]
fn later_fields_are_appended_after_most_recent_entry_columns() {
    let form = Uuid::new_v4();
    let name = Uuid::new_v4();
    let age = Uuid::new_v4();

    let older = FxFormEntry::new(form, at(1, 9, 0))
        .with_field(FxFieldData::new(name, "Name", "Bo,b"))
        .with_field(FxFieldData::new(age, "Age", "30"));
    let newer = FxFormEntry::new(form, at(2, 10, 0)).with_field(FxFieldData::new(name, "Name", "Ann"));

    let content = unix_writer().generate_file_content(&[older, newer]);
    assert_eq!(
        content,
        "Created,Name,Age\n2023-01-02 10:00,Ann,\n2023-01-01 09:00,\"Bo,b\",30\n"
    );
}

#[test]
fn column_order_follows_field_order_of_most_recent_entry() {
    let form = Uuid::new_v4();
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();
    let c = Uuid::new_v4();

    let first = FxFormEntry::new(form, at(1, 8, 0))
        .with_field(FxFieldData::new(a, "Alpha", "1"))
        .with_field(FxFieldData::new(b, "Beta", "2"));
    let latest = FxFormEntry::new(form, at(3, 8, 0))
        .with_field(FxFieldData::new(c, "Gamma", "3"))
        .with_field(FxFieldData::new(b, "Beta", "4"));

    let entries = vec![first, latest];
    let schema = FxColumnSchema::resolve(order_entries(&entries));
    assert_eq!(schema.display_names(), vec!["Gamma", "Beta", "Alpha"]);
}

#[test]
fn tied_timestamps_keep_fetch_order_for_columns_and_rows() {
    let form = Uuid::new_v4();
    let x = Uuid::new_v4();
    let y = Uuid::new_v4();

    let fetched_first = FxFormEntry::new(form, at(5, 12, 0)).with_field(FxFieldData::new(y, "Y", "y1"));
    let fetched_second = FxFormEntry::new(form, at(5, 12, 0)).with_field(FxFieldData::new(x, "X", "x1"));

    let writer = unix_writer();
    let entries = vec![fetched_first, fetched_second];
    let content = writer.generate_file_content(&entries);
    assert_eq!(content, "Created,Y,X\n2023-01-05 12:00,y1,\n2023-01-05 12:00,,x1\n");
    assert_eq!(writer.generate_file_content(&entries), content);
}

#[test]
fn duplicate_display_names_stay_separate_columns() {
    let form = Uuid::new_v4();
    let first = Uuid::new_v4();
    let second = Uuid::new_v4();

    let entry = FxFormEntry::new(form, at(2, 0, 0))
        .with_field(FxFieldData::new(first, "Email", "a@example.com"))
        .with_field(FxFieldData::new(second, "Email", "b@example.com"));

    let content = unix_writer().generate_file_content(&[entry]);
    assert_eq!(content, "Created,Email,Email\n2023-01-02 00:00,a@example.com,b@example.com\n");
}

#[test]
fn unanswered_fields_render_empty_cells() {
    let form = Uuid::new_v4();
    let field = Uuid::new_v4();
    let entry = FxFormEntry::new(form, at(2, 0, 0)).with_field(FxFieldData::unanswered(field, "Comment"));

    assert_eq!(unix_writer().generate_file_content(&[entry]), "Created,Comment\n2023-01-02 00:00,\n");
}

#[test]
fn entries_without_fields_produce_empty_document() {
    let form = Uuid::new_v4();
    let entries = vec![FxFormEntry::new(form, at(1, 0, 0)), FxFormEntry::new(form, at(2, 0, 0))];

    assert_eq!(unix_writer().generate_file_content(&entries), "");
    assert_eq!(unix_writer().generate_file_content(&[]), "");
}

#[test]
fn custom_delimiter_and_label_apply_to_header_and_rows() {
    let form = Uuid::new_v4();
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();
    let entry = FxFormEntry::new(form, at(2, 7, 30))
        .with_field(FxFieldData::new(a, "A", "1"))
        .with_field(FxFieldData::new(b, "B", "x;y"));

    let writer = FxCsvContentWriter::new().with_config(
        FxExportConfig::default()
            .with_delimiter(";")
            .with_timestamp_label("Submitted")
            .with_line_ending("\r\n"),
    );
    assert_eq!(
        writer.generate_file_content(&[entry]),
        "Submitted;A;B\r\n2023-01-02 07:30;1;\"x;y\"\r\n"
    );
}

#[test]
fn default_writer_terminates_lines_with_platform_line_ending() {
    let form = Uuid::new_v4();
    let entry = FxFormEntry::new(form, at(2, 0, 0)).with_field(FxFieldData::new(Uuid::new_v4(), "N", "v"));

    let content = FxCsvContentWriter::new().generate_file_content(&[entry]);
    let expected = format!(
        "Created,N{eol}2023-01-02 00:00,v{eol}",
        eol = formex::config::PLATFORM_LINE_ENDING
    );
    assert_eq!(content, expected);
}

proptest! {
    #[test]
    fn every_row_has_one_cell_per_column_plus_timestamp(
        shape in prop::collection::vec((0u32..48, prop::collection::vec(any::<bool>(), 5)), 1..12)
    ) {
        let form = Uuid::new_v4();
        let pool: Vec<Uuid> = (0..5).map(|_| Uuid::new_v4()).collect();

        let entries: Vec<FxFormEntry> = shape
            .iter()
            .map(|(hours, mask)| {
                let created = at(1, 0, 0) + chrono::Duration::hours(i64::from(*hours));
                let fields = pool
                    .iter()
                    .zip(mask)
                    .enumerate()
                    .filter(|(_, (_, used))| **used)
                    .map(|(idx, (id, _))| FxFieldData::new(*id, format!("F{idx}"), "v"));
                FxFormEntry::new(form, created).with_fields(fields)
            })
            .collect();

        let columns = (0..5).filter(|idx| shape.iter().any(|(_, mask)| mask[*idx])).count();
        let content = unix_writer().generate_file_content(&entries);

        if columns == 0 {
            prop_assert_eq!(content, "");
        } else {
            let lines: Vec<&str> = content.lines().collect();
            prop_assert_eq!(lines.len(), entries.len() + 1);
            for line in lines {
                prop_assert_eq!(line.split(',').count(), columns + 1);
            }
        }
    }
}
