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
use crate::stack::ActiveStyles;
use crate::style::{AnsiStyleTable, StyleTable};
use crate::unit::decode_utf16_units;
use crate::SliceResult;
use std::ops::{Bound, RangeBounds};
use tracing::instrument;

/// Slices styled strings by visible unit while keeping SGR styling balanced.
///
/// The result of a slice renders exactly like the same range of the rendered
/// input, and is self-contained: every style active at the start of the range
/// is reopened in front of the first visible unit, style changes inside the
/// range are reproduced in place, and every style still open at the end is
/// closed, newest first.
///
/// The slicer holds no per-call state. A single instance can be shared freely,
/// including across threads when the table is `Sync`.
///
/// # Examples
///
/// ```
/// use termionix_ansislice::{AnsiSlicer, AnsiStyleTable, SliceConfig};
///
/// let slicer = AnsiSlicer::new(SliceConfig::default(), AnsiStyleTable);
/// let text = "A\x1b[31mBC\x1b[39mD";
///
/// assert_eq!(slicer.slice(text, 0, Some(1)).unwrap(), "A");
/// assert_eq!(slicer.slice(text, 0, Some(2)).unwrap(), "A\x1b[31mB\x1b[39m");
/// assert_eq!(slicer.slice(text, 2, Some(3)).unwrap(), "\x1b[31mC\x1b[39m");
/// ```
#[derive(Clone, Debug, Default)]
pub struct AnsiSlicer<T = AnsiStyleTable> {
    config: SliceConfig,
    table: T,
}

impl AnsiSlicer {
    /// Creates a slicer with the standard configuration and [`AnsiStyleTable`].
    pub fn standard() -> Self {
        Self::new(SliceConfig::standard(), AnsiStyleTable)
    }
}

impl<T: StyleTable> AnsiSlicer<T> {
    /// Creates a slicer with the given configuration and style table.
    pub fn new(config: SliceConfig, table: T) -> Self {
        Self { config, table }
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &SliceConfig {
        &self.config
    }

    /// Get a reference to the style table
    pub fn table(&self) -> &T {
        &self.table
    }

    /// Slices the visible units `[begin, end)` out of `text`.
    ///
    /// `end` of `None` slices through the end of the text. Indices past the end
    /// are clamped, and an empty range yields an empty string without any escape.
    ///
    /// # Errors
    ///
    /// [`SliceError::StyleLookup`](crate::SliceError::StyleLookup) when a style
    /// that has to be closed is unknown to the table. No partial result is
    /// returned.
    #[instrument(level = "debug", skip(self, text))]
    pub fn slice(&self, text: &str, begin: usize, end: Option<usize>) -> SliceResult<String> {
        let end = end.unwrap_or(usize::MAX);
        if begin >= end {
            return Ok(String::new());
        }

        let introducer = self.config.introducer;
        let mut scanner = Scanner::new(text, self.config);
        let mut styles = ActiveStyles::new();
        let mut visible = 0;
        let mut output = String::new();

        while visible < end {
            let Some(event) = scanner.next() else {
                if scanner.in_escape() {
                    tracing::trace!("unterminated escape consumed the rest of the input");
                }
                break;
            };
            match event {
                ScanEvent::Visible(unit) => {
                    let index = visible;
                    visible += 1;
                    if index >= begin {
                        if output.is_empty() {
                            styles.write_opening(&mut output, introducer);
                        }
                        output.push_str(unit.as_str());
                    }
                }
                ScanEvent::Sgr(parameter) => {
                    match parameter
                        .code()
                        .filter(|&code| self.table.is_close_code(code))
                    {
                        Some(close_code) => {
                            styles.close(close_code, &self.table)?;
                        }
                        None => styles.push(parameter),
                    }
                    // Output only starts at the first unit in range, so a
                    // change seen after that lies inside the window.
                    if !output.is_empty() {
                        introducer.write_sgr(&mut output, parameter.as_str());
                    }
                }
            }
        }

        if !output.is_empty() {
            styles.write_closing(&mut output, introducer, &self.table)?;
        }
        Ok(output)
    }

    /// Slices a range of visible units out of `text`.
    ///
    /// # Examples
    ///
    /// ```
    /// use termionix_ansislice::AnsiSlicer;
    ///
    /// let slicer = AnsiSlicer::standard();
    /// let text = "\x1b[31mab\x1b[39m\x1b[32mcd\x1b[39m";
    ///
    /// assert_eq!(
    ///     slicer.slice_range(text, 1..).unwrap(),
    ///     "\x1b[31mb\x1b[39m\x1b[32mcd\x1b[39m"
    /// );
    /// assert_eq!(slicer.slice_range(text, ..=0).unwrap(), "\x1b[31ma\x1b[39m");
    /// ```
    ///
    /// # Errors
    ///
    /// See [`slice`](AnsiSlicer::slice).
    pub fn slice_range<R: RangeBounds<usize>>(&self, text: &str, range: R) -> SliceResult<String> {
        let (begin, end) = bounds(&range);
        self.slice(text, begin, end)
    }

    /// Slices UTF-16 encoded text.
    ///
    /// Surrogate pairs count as a single visible unit. Unpaired surrogates are
    /// not units and do not appear in the result.
    ///
    /// # Errors
    ///
    /// See [`slice`](AnsiSlicer::slice).
    pub fn slice_utf16(
        &self,
        units: &[u16],
        begin: usize,
        end: Option<usize>,
    ) -> SliceResult<Vec<u16>> {
        let text = decode_utf16_units(units);
        Ok(self.slice(&text, begin, end)?.encode_utf16().collect())
    }
}

/// Converts any range into a `begin` index and an optional exclusive `end`.
fn bounds<R: RangeBounds<usize>>(range: &R) -> (usize, Option<usize>) {
    let begin = match range.start_bound() {
        Bound::Included(&begin) => begin,
        Bound::Excluded(&begin) => begin.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&end) => Some(end.saturating_add(1)),
        Bound::Excluded(&end) => Some(end),
        Bound::Unbounded => None,
    };
    (begin, end)
}

/// Slices the visible units `[begin, end)` out of `text` with the default
/// configuration and [`AnsiStyleTable`].
///
/// # Examples
///
/// ```
/// use termionix_ansislice::slice;
///
/// // "A<red>B<underline>CD</underline></red>E"
/// let text = "A\x1b[31mB\x1b[4mCD\x1b[24m\x1b[39mE";
/// assert_eq!(
///     slice(text, 1, Some(3)).unwrap(),
///     "\x1b[31mB\x1b[4mC\x1b[24m\x1b[39m"
/// );
/// ```
///
/// # Errors
///
/// See [`AnsiSlicer::slice`].
pub fn slice(text: &str, begin: usize, end: Option<usize>) -> SliceResult<String> {
    AnsiSlicer::standard().slice(text, begin, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Introducer, MapStyleTable, SliceError};
    use tracing_test::traced_test;

    const RED_OPEN: &str = "\x1b[31m";
    const RED_CLOSE: &str = "\x1b[39m";
    const UNDER_OPEN: &str = "\x1b[4m";
    const UNDER_CLOSE: &str = "\x1b[24m";

    fn red(s: &str) -> String {
        format!("{RED_OPEN}{s}{RED_CLOSE}")
    }

    fn green(s: &str) -> String {
        format!("\x1b[32m{s}\x1b[39m")
    }

    #[test]
    fn test_plain_slice() {
        assert_eq!(slice("abcde", 1, Some(3)).unwrap(), "bc");
        assert_eq!(slice("abcde", 3, None).unwrap(), "de");
        assert_eq!(slice("abcde", 3, Some(100)).unwrap(), "de");
        assert_eq!(slice("abcde", 5, None).unwrap(), "");
        assert_eq!(slice("abcde", 4, Some(2)).unwrap(), "");
    }

    #[test]
    fn test_round_trip_styling() {
        let text = red("abc");
        assert_eq!(slice(&text, 0, Some(3)).unwrap(), text);
        assert_eq!(slice(&text, 0, None).unwrap(), text);
        assert_eq!(slice(&text, 1, Some(2)).unwrap(), red("b"));
    }

    #[test]
    fn test_adjacent_styles() {
        let text = red("ab") + &green("cd");
        assert_eq!(slice(&text, 1, Some(4)).unwrap(), red("b") + &green("cd"));
        assert_eq!(slice(&text, 1, Some(3)).unwrap(), red("b") + &green("c"));
    }

    #[test]
    fn test_nested_styles() {
        let text = format!("{RED_OPEN}a{UNDER_OPEN}bc{UNDER_CLOSE}d{RED_CLOSE}");
        assert_eq!(
            slice(&text, 1, Some(3)).unwrap(),
            format!("{RED_OPEN}{UNDER_OPEN}bc{UNDER_CLOSE}{RED_CLOSE}")
        );
        assert_eq!(
            slice(&text, 2, Some(4)).unwrap(),
            format!("{RED_OPEN}{UNDER_OPEN}c{UNDER_CLOSE}d{RED_CLOSE}")
        );
    }

    #[test]
    fn test_interleaved_closes_are_renested() {
        // <red>a<under>b</red>c</under>
        let text = format!("{RED_OPEN}a{UNDER_OPEN}b{RED_CLOSE}c{UNDER_CLOSE}");
        assert_eq!(
            slice(&text, 1, Some(2)).unwrap(),
            format!("{RED_OPEN}{UNDER_OPEN}b{UNDER_CLOSE}{RED_CLOSE}")
        );
        assert_eq!(
            slice(&text, 2, Some(3)).unwrap(),
            format!("{UNDER_OPEN}c{UNDER_CLOSE}")
        );
    }

    #[test]
    fn test_empty_range_never_emits_escapes() {
        let text = red("abc");
        for k in 0..5 {
            assert_eq!(slice(&text, k, Some(k)).unwrap(), "");
        }
    }

    #[test]
    fn test_unmatched_close_is_noop() {
        let text = format!("a{UNDER_CLOSE}b");
        assert_eq!(slice(&text, 0, Some(1)).unwrap(), "a");
        assert_eq!(slice(&text, 1, Some(2)).unwrap(), "b");
        // Inside the window the close is still reproduced as seen
        assert_eq!(slice(&text, 0, Some(2)).unwrap(), format!("a{UNDER_CLOSE}b"));
    }

    #[test]
    fn test_extended_colors_close_with_defaults() {
        let text = "\x1b[38;5;196ma\x1b[39m\x1b[48;2;1;2;3mb\x1b[49m";
        assert_eq!(slice(text, 0, Some(1)).unwrap(), "\x1b[38;5;196ma\x1b[39m");
        assert_eq!(slice(text, 1, Some(2)).unwrap(), "\x1b[48;2;1;2;3mb\x1b[49m");
    }

    #[test]
    fn test_unterminated_escape() {
        let text = "ab\x1b[31cd";
        assert_eq!(slice(text, 0, None).unwrap(), "ab");
        assert_eq!(slice(text, 2, None).unwrap(), "");
    }

    #[test]
    fn test_lookup_failure_aborts() {
        let text = "\x1b[5mblink\x1b[25m";
        let err = slice(text, 0, Some(2)).unwrap_err();
        assert_eq!(
            err,
            SliceError::StyleLookup {
                code: 5,
                parameter: "5".to_string(),
            }
        );
    }

    #[test]
    fn test_lookup_not_needed_for_empty_output() {
        let text = "\x1b[5mblink";
        assert_eq!(slice(text, 10, None).unwrap(), "");
    }

    #[test]
    fn test_fake_table() {
        let table = MapStyleTable::from_pairs([(5, 25)]);
        let slicer = AnsiSlicer::new(SliceConfig::default(), table);
        let text = "\x1b[5mblink\x1b[25m!";
        assert_eq!(slicer.slice(text, 1, Some(3)).unwrap(), "\x1b[5mli\x1b[25m");
        assert_eq!(slicer.slice(text, 5, None).unwrap(), "!");
    }

    #[test]
    fn test_c1_input_and_output() {
        let text = "\u{9b}31mab\u{9b}39m";
        assert_eq!(slice(text, 1, None).unwrap(), red("b"));

        let slicer = AnsiSlicer::new(SliceConfig::eight_bit(), AnsiStyleTable);
        assert_eq!(
            slicer.slice(&red("ab"), 0, Some(1)).unwrap(),
            "\u{9b}31ma\u{9b}39m"
        );
        assert_eq!(slicer.config().introducer, Introducer::C1);
    }

    #[test]
    fn test_slice_range() {
        let slicer = AnsiSlicer::standard();
        let text = red("abcd");
        assert_eq!(slicer.slice_range(&text, 1..3).unwrap(), red("bc"));
        assert_eq!(slicer.slice_range(&text, 1..=2).unwrap(), red("bc"));
        assert_eq!(slicer.slice_range(&text, ..2).unwrap(), red("ab"));
        assert_eq!(slicer.slice_range(&text, 2..).unwrap(), red("cd"));
        assert_eq!(slicer.slice_range(&text, ..).unwrap(), text);
        assert_eq!(
            slicer
                .slice_range(&text, (Bound::Excluded(0), Bound::Unbounded))
                .unwrap(),
            red("bcd")
        );
    }

    #[test]
    fn test_slice_utf16() {
        let slicer = AnsiSlicer::standard();
        let text: Vec<u16> = "\u{29E3D}\u{29E3D}\u{29E3D}".encode_utf16().collect();
        let sliced = slicer.slice_utf16(&text, 1, Some(2)).unwrap();
        assert_eq!(sliced, vec![0xD867, 0xDE3D]);
    }

    #[test]
    #[traced_test]
    fn test_unterminated_escape_is_traced() {
        assert_eq!(slice("a\x1b[1", 0, None).unwrap(), "a");
        assert!(logs_contain("unterminated escape"));
    }

    #[test]
    #[traced_test]
    fn test_lookup_failure_is_logged() {
        assert!(slice("\x1b[5mx", 0, None).is_err());
        assert!(logs_contain("no close code for style"));
    }
}
