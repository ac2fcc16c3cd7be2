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

//! Slicing of strings that carry ANSI SGR (Select Graphic Rendition) styling.
//!
//! Indices count *visible units*, the code points a terminal would render,
//! never the bytes of escape sequences. A slice is self-contained: styles active
//! at the start of the range are reopened, and styles still active at its end
//! are closed, so the fragment prints the same alone as it did in place.
//!
//! ```
//! use termionix_ansislice::slice;
//!
//! let text = "A\x1b[31mBC\x1b[39mD"; // "A<red>BC</red>D"
//! assert_eq!(slice(text, 2, Some(3)).unwrap(), "\x1b[31mC\x1b[39m");
//! ```

mod config;
mod consts;
mod result;
mod scan;
mod slicer;
mod stack;
mod style;
mod unit;
pub mod utility;

pub use self::config::{Introducer, SliceConfig};
pub use self::result::{SliceError, SliceResult};
pub use self::scan::{ScanEvent, Scanner};
pub use self::slicer::{AnsiSlicer, slice};
pub use self::stack::ActiveStyles;
pub use self::style::{AnsiStyleTable, MapStyleTable, StyleParameter, StyleTable};
pub use self::unit::{VisibleUnit, VisibleUnits, decode_utf16_units, visible_units};
pub use self::utility::{AnsiSliceExt, strip_styles, visible_len};
