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

//! # Export File Names
//!
//! `Form-Data[_from_<date>][_until_<date>].csv`, or `Form-Data-<now>.csv`
//! when no range was requested.

use chrono::{DateTime, Utc};

pub const FILE_NAME_PREFIX: &str = "Form-Data";
pub const FILE_EXTENSION: &str = "csv";

/// Calendar date used for range qualifiers.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Compact ISO-8601 instant used for the fallback suffix.
pub const ISO_INSTANT_FORMAT: &str = "%Y%m%dT%H%M%S";

/// Builds the export file name using the current time as fallback.
pub fn generate_file_name(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> String {
    generate_file_name_at(start, end, Utc::now())
}

/// Builds the export file name with an explicit fallback instant.
pub fn generate_file_name_at(
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> String {
    let mut suffix = String::new();
    if let Some(start) = start {
        suffix.push_str("_from_");
        suffix.push_str(&start.format(ISO_DATE_FORMAT).to_string());
    }
    if let Some(end) = end {
        suffix.push_str("_until_");
        suffix.push_str(&end.format(ISO_DATE_FORMAT).to_string());
    }
    if suffix.is_empty() {
        suffix = format!("-{}", now.format(ISO_INSTANT_FORMAT));
    }
    format!("{FILE_NAME_PREFIX}{suffix}.{FILE_EXTENSION}")
}
