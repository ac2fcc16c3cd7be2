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

//! Visible unit tokenizer.
//!
//! The slicer counts positions in *visible units*: a single code point, where a
//! UTF-16 surrogate pair counts as one. In a `&str` every `char` is already a
//! full code point, so one unit is one `char` and its UTF-8 span.

use std::iter::FusedIterator;
use std::str::CharIndices;

/// A single scanning unit of the input together with its byte offset.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct VisibleUnit<'a> {
    offset: usize,
    text: &'a str,
}

impl<'a> VisibleUnit<'a> {
    /// Byte offset of the unit in the source string.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The source text of the unit.
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Byte range of the unit in the source string.
    pub fn range(&self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.text.len()
    }

    /// The code point of the unit.
    pub fn char(&self) -> char {
        // A unit always holds exactly one char, see VisibleUnits::next
        self.text.chars().next().unwrap_or_default()
    }

    /// Returns `true` if the unit is `ch`.
    pub fn is(&self, ch: char) -> bool {
        self.char() == ch
    }
}

impl std::fmt::Display for VisibleUnit<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text)
    }
}

/// Iterator over the [`VisibleUnit`]s of a string.
///
/// Units cover the whole input in order with no gaps or overlaps. The iterator is
/// `Clone`, so a scan can be restarted from any point.
#[derive(Clone, Debug)]
pub struct VisibleUnits<'a> {
    source: &'a str,
    chars: CharIndices<'a>,
}

impl<'a> VisibleUnits<'a> {
    /// The remaining, not yet produced part of the input.
    pub fn as_str(&self) -> &'a str {
        self.chars.as_str()
    }

    /// The full input this iterator was created from.
    pub fn source(&self) -> &'a str {
        self.source
    }
}

impl<'a> Iterator for VisibleUnits<'a> {
    type Item = VisibleUnit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (offset, ch) = self.chars.next()?;
        Some(VisibleUnit {
            offset,
            text: &self.source[offset..offset + ch.len_utf8()],
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chars.size_hint()
    }
}

impl DoubleEndedIterator for VisibleUnits<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let (offset, ch) = self.chars.next_back()?;
        Some(VisibleUnit {
            offset,
            text: &self.source[offset..offset + ch.len_utf8()],
        })
    }
}

impl FusedIterator for VisibleUnits<'_> {}

/// Splits `text` into visible units.
///
/// # Examples
///
/// ```
/// use termionix_ansislice::visible_units;
///
/// let units: Vec<&str> = visible_units("a\u{29E3D}b").map(|u| u.as_str()).collect();
/// assert_eq!(units, vec!["a", "\u{29E3D}", "b"]);
/// ```
pub fn visible_units(text: &str) -> VisibleUnits<'_> {
    VisibleUnits {
        source: text,
        chars: text.char_indices(),
    }
}

/// Decodes UTF-16 code units into a string of visible units.
///
/// High/low surrogate pairs are merged into their supplementary plane code
/// point. Unpaired surrogates do not form a unit and are dropped.
pub fn decode_utf16_units(units: &[u16]) -> String {
    char::decode_utf16(units.iter().copied())
        .filter_map(Result::ok)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SURROGATE_PAIR_CHARACTER: char = '\u{29E3D}';

    #[test]
    fn test_ascii_units() {
        let units: Vec<VisibleUnit> = visible_units("abc").collect();
        assert_eq!(units.len(), 3);
        assert_eq!(units[0].as_str(), "a");
        assert_eq!(units[2].offset(), 2);
        assert_eq!(units[2].range(), 2..3);
    }

    #[test]
    fn test_multibyte_units_cover_input() {
        let input = "aあ\u{29E3D}b";
        let units: Vec<VisibleUnit> = visible_units(input).collect();
        assert_eq!(units.len(), 4);

        let mut expected = 0;
        for unit in &units {
            assert_eq!(unit.offset(), expected);
            assert_eq!(&input[unit.range()], unit.as_str());
            expected = unit.range().end;
        }
        assert_eq!(expected, input.len());
        assert!(units[2].is(SURROGATE_PAIR_CHARACTER));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(visible_units("").count(), 0);
    }

    #[test]
    fn test_restartable() {
        let mut units = visible_units("xyz");
        units.next();
        let restart = units.clone();
        assert_eq!(units.as_str(), "yz");
        assert_eq!(units.count(), 2);
        assert_eq!(restart.map(|u| u.char()).collect::<String>(), "yz");
    }

    #[test]
    fn test_reverse() {
        let back: String = visible_units("a\u{29E3D}b").rev().map(|u| u.char()).collect();
        assert_eq!(back, "b\u{29E3D}a");
    }

    #[test]
    fn test_decode_utf16_merges_pairs() {
        let units = [0xD867, 0xDE3D, 0x0061];
        assert_eq!(decode_utf16_units(&units), "\u{29E3D}a");
    }

    #[test]
    fn test_decode_utf16_drops_unpaired_surrogates() {
        let units = [0x0061, 0xD867, 0x0062, 0xDE3D, 0x0063];
        assert_eq!(decode_utf16_units(&units), "abc");
    }
}
