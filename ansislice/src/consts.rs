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

/// Escape (`ESC`, `0x1B`). Followed by `[` it forms the 7-bit Control Sequence Introducer.
pub const ESC: char = '\u{1b}';

/// Single unit 8-bit Control Sequence Introducer (C1 `CSI`, `0x9B`).
pub const C1_CSI: char = '\u{9b}';

/// Final byte of a Select Graphic Rendition (SGR) sequence.
pub const SGR_TERMINATOR: char = 'm';

/// Extended (256 color or RGB) foreground color, `38;5;n` or `38;2;r;g;b`.
pub const EXTENDED_FOREGROUND: u16 = 38;

/// Default foreground color, closes every foreground color.
pub const DEFAULT_FOREGROUND: u16 = 39;

/// Extended (256 color or RGB) background color, `48;5;n` or `48;2;r;g;b`.
pub const EXTENDED_BACKGROUND: u16 = 48;

/// Default background color, closes every background color.
pub const DEFAULT_BACKGROUND: u16 = 49;

/// Parameter substituted for an SGR sequence without digits (`ESC [ m`), which
/// terminals treat as a reset.
pub const RESET_PARAMETER: &str = "0";
