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

use crate::consts::{C1_CSI, ESC};

/// Scanner and emitter settings for [`AnsiSlicer`](crate::AnsiSlicer).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SliceConfig {
    /// Treat the single unit C1 introducer (`U+009B`) as the start of an escape
    pub recognize_c1: bool,
    /// Introducer written in front of every escape the slicer emits
    pub introducer: Introducer,
}

impl SliceConfig {
    /// Recognize both introducers, emit `ESC [`
    pub fn standard() -> SliceConfig {
        SliceConfig {
            recognize_c1: true,
            introducer: Introducer::Escape,
        }
    }
    /// Recognize and emit only `ESC [`
    pub fn seven_bit() -> SliceConfig {
        SliceConfig {
            recognize_c1: false,
            introducer: Introducer::Escape,
        }
    }
    /// Recognize both introducers, emit the C1 form
    pub fn eight_bit() -> SliceConfig {
        SliceConfig {
            recognize_c1: true,
            introducer: Introducer::C1,
        }
    }

    /// Returns `true` if `ch` starts an escape sequence under this configuration.
    pub fn is_introducer(&self, ch: char) -> bool {
        ch == ESC || (self.recognize_c1 && ch == C1_CSI)
    }
}

impl Default for SliceConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// Control Sequence Introducer form.
///
/// Both forms start an SGR sequence. The 7-bit form is two characters, `ESC`
/// followed by `[`, and is what virtually every terminal and styling library
/// produces. The 8-bit form is the single C1 control `U+009B`.
///
/// # Examples
///
/// ```
/// use termionix_ansislice::Introducer;
///
/// assert_eq!(Introducer::Escape.as_str(), "\x1b[");
/// assert_eq!(Introducer::C1.as_str(), "\u{9b}");
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Introducer {
    /// `ESC [`
    #[default]
    Escape,
    /// `U+009B`
    C1,
}

impl Introducer {
    /// The introducer text.
    pub fn as_str(&self) -> &'static str {
        match self {
            Introducer::Escape => "\u{1b}[",
            Introducer::C1 => "\u{9b}",
        }
    }

    /// Writes a complete SGR escape, introducer, `parameter` and terminator, to `out`.
    pub fn write_sgr(&self, out: &mut String, parameter: &str) {
        out.push_str(self.as_str());
        out.push_str(parameter);
        out.push('m');
    }
}

impl std::fmt::Display for Introducer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
