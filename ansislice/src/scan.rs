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
use crate::consts::SGR_TERMINATOR;
use crate::style::StyleParameter;
use crate::unit::{VisibleUnit, VisibleUnits, visible_units};

/// Internal state of the [`Scanner`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum State {
    /// Outside of any escape. Units are visible text.
    Normal,

    /// An introducer has been consumed, waiting for the `m` terminator.
    ///
    /// Every unit up to the terminator belongs to the escape and is not visible.
    /// A new introducer restarts the escape.
    Escape {
        /// Byte offset right after the introducer
        body_start: usize,
    },
}

/// Something the [`Scanner`] found in the input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScanEvent<'a> {
    /// A unit outside of any escape sequence.
    Visible(VisibleUnit<'a>),
    /// A complete SGR escape sequence and its parameter.
    Sgr(StyleParameter<'a>),
}

/// Splits a styled string into visible units and SGR sequences.
///
/// An introducer (`ESC`, or `U+009B` when
/// [`recognize_c1`](SliceConfig::recognize_c1) is set) starts an escape that
/// lasts until the next `m`. Only SGR sequences are modeled: any other escape is
/// consumed up to the next `m` as well. An escape that is never terminated
/// swallows the rest of the input, and none of those units are visible.
#[derive(Clone, Debug)]
pub struct Scanner<'a> {
    config: SliceConfig,
    units: VisibleUnits<'a>,
    state: State,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner over `text`.
    pub fn new(text: &'a str, config: SliceConfig) -> Scanner<'a> {
        Scanner {
            config,
            units: visible_units(text),
            state: State::Normal,
        }
    }

    /// Returns `true` while an escape has been started but not terminated.
    ///
    /// After the scanner is exhausted this reports an unterminated trailing escape.
    pub fn in_escape(&self) -> bool {
        matches!(self.state, State::Escape { .. })
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = ScanEvent<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let unit = self.units.next()?;
            if self.config.is_introducer(unit.char()) {
                self.state = State::Escape {
                    body_start: unit.range().end,
                };
                continue;
            }
            match self.state {
                State::Normal => return Some(ScanEvent::Visible(unit)),
                State::Escape { body_start } if unit.is(SGR_TERMINATOR) => {
                    self.state = State::Normal;
                    let body = &self.units.source()[body_start..unit.offset()];
                    return Some(ScanEvent::Sgr(StyleParameter::from_escape_body(body)));
                }
                State::Escape { .. } => {}
            }
        }
    }
}

impl std::iter::FusedIterator for Scanner<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn describe(text: &str, config: SliceConfig) -> Vec<String> {
        Scanner::new(text, config)
            .map(|event| match event {
                ScanEvent::Visible(unit) => unit.as_str().to_string(),
                ScanEvent::Sgr(parameter) => format!("<{parameter}>"),
            })
            .collect()
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(describe("ab", SliceConfig::default()), vec!["a", "b"]);
    }

    #[test]
    fn test_sgr_sequences() {
        let events = describe("a\x1b[31mb\x1b[39m", SliceConfig::default());
        assert_eq!(events, vec!["a", "<31>", "b", "<39>"]);
    }

    #[test]
    fn test_extended_parameter() {
        let events = describe("\x1b[38;5;255mx", SliceConfig::default());
        assert_eq!(events, vec!["<38;5;255>", "x"]);
    }

    #[test]
    fn test_c1_introducer() {
        let events = describe("\u{9b}4mx\u{9b}24m", SliceConfig::default());
        assert_eq!(events, vec!["<4>", "x", "<24>"]);
    }

    #[test]
    fn test_c1_introducer_ignored_in_seven_bit() {
        let events = describe("\u{9b}4mx", SliceConfig::seven_bit());
        assert_eq!(events, vec!["\u{9b}", "4", "m", "x"]);
    }

    #[test]
    fn test_empty_parameter_is_reset() {
        assert_eq!(describe("\x1b[mx", SliceConfig::default()), vec!["<0>", "x"]);
    }

    #[test]
    fn test_unterminated_escape_swallows_rest() {
        let mut scanner = Scanner::new("ab\x1b[31cd", SliceConfig::default());
        let events: Vec<ScanEvent> = scanner.by_ref().collect();
        assert_eq!(events.len(), 2);
        assert!(scanner.in_escape());
    }

    #[test]
    fn test_introducer_restarts_escape() {
        let events = describe("\x1b\x1b[1mx", SliceConfig::default());
        assert_eq!(events, vec!["<1>", "x"]);
    }
}
