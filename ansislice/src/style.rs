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

//! SGR parameters and the open/close style code lookup.
//!
//! The slicer never interprets what a style *means*. It only needs to know, for
//! an opening code, which code closes it again, and whether a code it sees is a
//! closing one. That knowledge lives behind the [`StyleTable`] trait so callers
//! can inject their own table.

use crate::consts::{
    DEFAULT_BACKGROUND, DEFAULT_FOREGROUND, EXTENDED_BACKGROUND, EXTENDED_FOREGROUND,
    RESET_PARAMETER,
};
use crate::{SliceError, SliceResult};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

/// The textual payload of an SGR escape, e.g. `31`, `4` or `38;5;196`.
///
/// Two parameters are equal when their text is equal. The [`code`](StyleParameter::code)
/// is the leading numeric field and identifies the style for close lookups.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct StyleParameter<'a>(&'a str);

impl<'a> StyleParameter<'a> {
    /// Extracts the parameter from the body of an escape.
    ///
    /// `body` is everything between the introducer character and the `m`
    /// terminator. The parameter starts at the first ASCII digit, which skips the
    /// `[` of the 7-bit introducer. A body without digits (`ESC [ m`) is the
    /// reset parameter `0`.
    pub fn from_escape_body(body: &'a str) -> StyleParameter<'a> {
        match body.find(|ch: char| ch.is_ascii_digit()) {
            Some(start) => StyleParameter(&body[start..]),
            None => StyleParameter(RESET_PARAMETER),
        }
    }

    /// The parameter text.
    pub fn as_str(&self) -> &'a str {
        self.0
    }

    /// The leading numeric code, `None` if it does not fit a `u16`.
    ///
    /// # Examples
    ///
    /// ```
    /// use termionix_ansislice::StyleParameter;
    ///
    /// assert_eq!(StyleParameter::from_escape_body("[38;5;196").code(), Some(38));
    /// assert_eq!(StyleParameter::from_escape_body("[4").code(), Some(4));
    /// ```
    pub fn code(&self) -> Option<u16> {
        let end = self
            .0
            .find(|ch: char| !ch.is_ascii_digit())
            .unwrap_or(self.0.len());
        self.0[..end].parse().ok()
    }

    /// Resolves the code that closes this parameter.
    ///
    /// Extended foreground (`38`) and background (`48`) colors close with `39`
    /// and `49` whatever the table says. Every other code must be known to
    /// `table`.
    ///
    /// # Errors
    ///
    /// [`SliceError::InvalidParameter`] if the leading code can not be parsed,
    /// [`SliceError::StyleLookup`] if `table` has no close code for it.
    pub fn close_code<T: StyleTable + ?Sized>(&self, table: &T) -> SliceResult<u16> {
        let Some(code) = self.code() else {
            return Err(SliceError::InvalidParameter {
                parameter: self.0.to_string(),
                reason: "leading code is not a valid SGR code".to_string(),
            });
        };
        match code {
            EXTENDED_FOREGROUND => Ok(DEFAULT_FOREGROUND),
            EXTENDED_BACKGROUND => Ok(DEFAULT_BACKGROUND),
            code => table.close_code(code).ok_or_else(|| {
                tracing::debug!(code, parameter = self.0, "no close code for style");
                SliceError::StyleLookup {
                    code,
                    parameter: self.0.to_string(),
                }
            }),
        }
    }
}

impl std::fmt::Display for StyleParameter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// Open/close SGR code lookup.
///
/// Implementations must be pure: the same code always yields the same answer.
pub trait StyleTable {
    /// The code that closes the style opened by `open`, if known.
    fn close_code(&self, open: u16) -> Option<u16>;

    /// Returns `true` if `code` closes some style.
    fn is_close_code(&self, code: u16) -> bool;
}

impl<T: StyleTable + ?Sized> StyleTable for &T {
    fn close_code(&self, open: u16) -> Option<u16> {
        (**self).close_code(open)
    }

    fn is_close_code(&self, code: u16) -> bool {
        (**self).is_close_code(code)
    }
}

impl<T: StyleTable + ?Sized> StyleTable for Box<T> {
    fn close_code(&self, open: u16) -> Option<u16> {
        (**self).close_code(open)
    }

    fn is_close_code(&self, code: u16) -> bool {
        (**self).is_close_code(code)
    }
}

impl<T: StyleTable + ?Sized> StyleTable for Arc<T> {
    fn close_code(&self, open: u16) -> Option<u16> {
        (**self).close_code(open)
    }

    fn is_close_code(&self, code: u16) -> bool {
        (**self).is_close_code(code)
    }
}

/// The conventional terminal style table.
///
/// | Open            | Style             | Close |
/// |-----------------|-------------------|-------|
/// | `0`             | Reset             | `0`   |
/// | `1`             | Bold              | `22`  |
/// | `2`             | Dim               | `22`  |
/// | `3`             | Italic            | `23`  |
/// | `4`             | Underline         | `24`  |
/// | `7`             | Inverse           | `27`  |
/// | `8`             | Hidden            | `28`  |
/// | `9`             | Strikethrough     | `29`  |
/// | `53`            | Overline          | `55`  |
/// | `30`-`37`       | Foreground        | `39`  |
/// | `90`-`97`       | Bright foreground | `39`  |
/// | `40`-`47`       | Background        | `49`  |
/// | `100`-`107`     | Bright background | `49`  |
///
/// Blink (`5`, `6`), fonts and the other rarely supported codes are not part of
/// the table; slicing text that opens them fails with
/// [`SliceError::StyleLookup`] unless a wider table is supplied.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct AnsiStyleTable;

impl StyleTable for AnsiStyleTable {
    fn close_code(&self, open: u16) -> Option<u16> {
        match open {
            0 => Some(0),
            1 | 2 => Some(22),
            3 => Some(23),
            4 => Some(24),
            7 => Some(27),
            8 => Some(28),
            9 => Some(29),
            53 => Some(55),
            30..=37 | 90..=97 => Some(DEFAULT_FOREGROUND),
            40..=47 | 100..=107 => Some(DEFAULT_BACKGROUND),
            _ => None,
        }
    }

    fn is_close_code(&self, code: u16) -> bool {
        matches!(code, 0 | 22 | 23 | 24 | 27 | 28 | 29 | 39 | 49 | 55)
    }
}

/// A style table built from explicit open/close pairs.
///
/// # Examples
///
/// ```
/// use termionix_ansislice::{MapStyleTable, StyleTable};
///
/// let table = MapStyleTable::from_pairs([(31, 39), (5, 25)]);
/// assert_eq!(table.close_code(5), Some(25));
/// assert!(table.is_close_code(39));
/// assert!(!table.is_close_code(31));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MapStyleTable {
    pairs: BTreeMap<u16, u16>,
    closers: BTreeSet<u16>,
}

impl MapStyleTable {
    /// Creates an empty table.
    pub fn new() -> MapStyleTable {
        MapStyleTable::default()
    }

    /// Creates a table from `(open, close)` pairs.
    pub fn from_pairs<I: IntoIterator<Item = (u16, u16)>>(pairs: I) -> MapStyleTable {
        let mut table = MapStyleTable::new();
        for (open, close) in pairs {
            table.insert(open, close);
        }
        table
    }

    /// Registers `close` as the code closing `open`.
    ///
    /// Re-registering an open code replaces its close code. A code stays a
    /// recognized closer as long as any pair names it.
    pub fn insert(&mut self, open: u16, close: u16) {
        if let Some(previous) = self.pairs.insert(open, close) {
            if previous != close && !self.pairs.values().any(|&c| c == previous) {
                self.closers.remove(&previous);
            }
        }
        self.closers.insert(close);
    }

    /// Number of registered open codes.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if no pair is registered.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl StyleTable for MapStyleTable {
    fn close_code(&self, open: u16) -> Option<u16> {
        self.pairs.get(&open).copied()
    }

    fn is_close_code(&self, code: u16) -> bool {
        self.closers.contains(&code)
    }
}

impl FromIterator<(u16, u16)> for MapStyleTable {
    fn from_iter<I: IntoIterator<Item = (u16, u16)>>(iter: I) -> Self {
        MapStyleTable::from_pairs(iter)
    }
}
