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
use crate::slicer::AnsiSlicer;
use super::strip::{strip_styles, visible_len};
use crate::SliceResult;
use std::borrow::Cow;
use std::ops::RangeBounds;

/// ANSI aware string operations with the default configuration and style table.
///
/// # Examples
///
/// ```
/// use termionix_ansislice::AnsiSliceExt;
///
/// let text = "a\x1b[31mb\x1b[39mc";
/// assert_eq!(text.ansi_slice(1..2).unwrap(), "\x1b[31mb\x1b[39m");
/// assert_eq!(text.ansi_strip(), "abc");
/// assert_eq!(text.ansi_visible_len(), 3);
/// ```
pub trait AnsiSliceExt {
    /// Slices a range of visible units, see [`AnsiSlicer::slice_range`].
    ///
    /// # Errors
    ///
    /// Fails when a style that has to be closed is unknown to the default table.
    fn ansi_slice<R: RangeBounds<usize>>(&self, range: R) -> SliceResult<String>;

    /// Removes SGR escapes, see [`strip_styles`].
    fn ansi_strip(&self) -> Cow<'_, str>;

    /// Counts visible units, see [`visible_len`].
    fn ansi_visible_len(&self) -> usize;
}

impl AnsiSliceExt for str {
    fn ansi_slice<R: RangeBounds<usize>>(&self, range: R) -> SliceResult<String> {
        AnsiSlicer::standard().slice_range(self, range)
    }

    fn ansi_strip(&self) -> Cow<'_, str> {
        strip_styles(self, &SliceConfig::default())
    }

    fn ansi_visible_len(&self) -> usize {
        visible_len(self, &SliceConfig::default())
    }
}

impl AnsiSliceExt for String {
    fn ansi_slice<R: RangeBounds<usize>>(&self, range: R) -> SliceResult<String> {
        self.as_str().ansi_slice(range)
    }

    fn ansi_strip(&self) -> Cow<'_, str> {
        self.as_str().ansi_strip()
    }

    fn ansi_visible_len(&self) -> usize {
        self.as_str().ansi_visible_len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_str_and_string_agree() {
        let borrowed = "\x1b[4mab\x1b[24m";
        let owned = borrowed.to_string();
        assert_eq!(borrowed.ansi_slice(1..).unwrap(), owned.ansi_slice(1..).unwrap());
        assert_eq!(borrowed.ansi_strip(), owned.ansi_strip());
        assert_eq!(owned.ansi_visible_len(), 2);
    }

    #[test]
    fn test_ansi_slice_out_of_range() {
        assert_eq!("\x1b[4mab\x1b[24m".ansi_slice(5..).unwrap(), "");
    }
}
