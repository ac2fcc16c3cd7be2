//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Error types for the ansislice crate.
//!
//! Slicing is pure and deterministic, so every error is final for its input.
//! Retrying without changing the input or the style table yields the same error.

use thiserror::Error;

/// Result type alias for operations that may fail with a [`SliceError`].
pub type SliceResult<T> = Result<T, SliceError>;

/// Errors that can occur while slicing a styled string.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SliceError {
    /// An opened style has no known closing code.
    ///
    /// Raised when the active style set has to be closed (or searched for a
    /// matching close) and the style table has no close mapping for one of the
    /// opened styles. The slice is aborted and no partial result is returned.
    #[error("Can not find SGR code to close style code {code} (parameter '{parameter}')")]
    StyleLookup {
        /// The leading code of the opened style
        code: u16,
        /// The full SGR parameter as it appeared in the input
        parameter: String,
    },

    /// The leading code of an SGR parameter could not be parsed.
    ///
    /// This occurs when the digits of the leading code do not fit the range of
    /// SGR codes, e.g. `ESC [ 99999999m`, and the code has to be looked up.
    #[error("Invalid SGR parameter '{parameter}': {reason}")]
    InvalidParameter {
        /// The full SGR parameter as it appeared in the input
        parameter: String,
        /// Description of why it's invalid
        reason: String,
    },
}

impl SliceError {
    /// Check if the error was caused by an incomplete style table
    ///
    /// Lookup errors are recoverable by the caller supplying a table that
    /// covers the failing code.
    pub fn is_lookup_error(&self) -> bool {
        matches!(self, SliceError::StyleLookup { .. })
    }

    /// The SGR parameter that caused the error.
    pub fn parameter(&self) -> &str {
        match self {
            SliceError::StyleLookup { parameter, .. }
            | SliceError::InvalidParameter { parameter, .. } => parameter,
        }
    }
}
