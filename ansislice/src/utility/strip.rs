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

use crate::config::SliceConfig;
use crate::scan::{ScanEvent, Scanner};
use std::borrow::Cow;

/// Removes SGR escape sequences from a string, leaving the visible text.
///
/// Uses the same rules as the slicer, so for any range
/// `strip_styles(&slice(text, range))` equals the same range of
/// `strip_styles(text)`. In particular an escape that is never terminated hides
/// everything after its introducer.
///
/// # Performance
///
/// If the input contains no introducer it is returned borrowed (zero-copy).
/// Otherwise a new `String` is allocated.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// use termionix_ansislice::{SliceConfig, strip_styles};
///
/// let config = SliceConfig::default();
///
/// let colored = "\x1b[1;31mRed Text\x1b[0m";
/// assert_eq!(strip_styles(colored, &config), "Red Text");
///
/// let plain = "Plain Text";
/// assert!(matches!(strip_styles(plain, &config), Cow::Borrowed(_)));
/// ```
pub fn strip_styles<'a>(text: &'a str, config: &SliceConfig) -> Cow<'a, str> {
    if !text.chars().any(|ch| config.is_introducer(ch)) {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len());
    for event in Scanner::new(text, *config) {
        if let ScanEvent::Visible(unit) = event {
            result.push_str(unit.as_str());
        }
    }
    Cow::Owned(result)
}

/// Counts the visible units of a styled string.
///
/// This is the exclusive upper bound of meaningful slice indices: slicing from
/// `visible_len(text, config)` onwards always yields an empty string.
pub fn visible_len(text: &str, config: &SliceConfig) -> usize {
    Scanner::new(text, *config)
        .filter(|event| matches!(event, ScanEvent::Visible(_)))
        .count()
}
