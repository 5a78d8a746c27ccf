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

//! # Formex Error Module
//!
//! This module defines the error types used throughout Formex.
//!
//! ## Error Categories
//!
//! - **Validation**: Invalid constructor arguments or configuration values
//! - **Config**: Malformed configuration documents
//! - **Provider**: Failures reported by a form data provider
//! - **Serde**: Serialization/deserialization errors
//! - **Internal**: Unexpected internal failures
//!
//! Malformed field values are never an error: every value is accepted as-is
//! and escaped on export.
//!
//! ## Usage
//!
//! ```rust
//! use formex::errors::{Result, FxError};
//!
//! fn check(delimiter: &str) -> Result<()> {
//!     if delimiter.is_empty() {
//!         return Err(FxError::validation("delimiter cannot be empty"));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convience result type used throughout Formex.
pub type Result<T> = std::result::Result<T, FxError>;

/// Canonical error enumeration for Formex.
#[derive(Debug, Error, Serialize, Deserialize)]
pub enum FxError {
    /// Validation errors triggered by invalid parameters or inputs.
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Configuration documents that cannot be interpreted.
    #[error("config error: {0}")]
    Config(String),

    /// Any failure raised by a form data provider.
    #[error("provider '{provider}' failed: {message}")]
    Provider { provider: String, message: String },

    /// Wrapper for serde-style serialization issues.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Catch-all variant for unexpected situations.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for FxError {
    fn from(err: serde_json::Error) -> Self {
        FxError::Serde(err.to_string())
    }
}

impl FxError {
    /// Helper to construct simple validation errors.
    pub fn validation<T: Into<String>>(message: T) -> Self {
        FxError::Validation {
            message: message.into(),
        }
    }

    /// Helper to construct provider errors.
    pub fn provider(name: impl Into<String>, message: impl Into<String>) -> Self {
        FxError::Provider {
            provider: name.into(),
            message: message.into(),
        }
    }

    /// Helper to construct internal errors.
    pub fn internal<T: Into<String>>(message: T) -> Self {
        FxError::Internal(message.into())
    }
}
