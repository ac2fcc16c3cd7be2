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

use crate::config::Introducer;
use crate::style::{StyleParameter, StyleTable};
use crate::SliceResult;

/// The styles open at the scanner's current position, in the order they were opened.
///
/// Pushes append to the end. A close removes the most recently opened matching
/// entry, which need not be the last one when the input closes styles out of
/// nesting order, so this is an ordered set with a stack-like default rather
/// than a strict stack.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActiveStyles<'a> {
    entries: Vec<StyleParameter<'a>>,
}

impl<'a> ActiveStyles<'a> {
    /// Creates an empty set.
    pub fn new() -> ActiveStyles<'a> {
        ActiveStyles::default()
    }

    /// Opens `parameter`.
    pub fn push(&mut self, parameter: StyleParameter<'a>) {
        tracing::trace!(parameter = parameter.as_str(), "open style");
        self.entries.push(parameter);
    }

    /// Removes the most recently opened entry that `close_code` closes.
    ///
    /// Entries are checked newest first and only until the first match. Returns
    /// the removed entry, or `None` when no open entry matches.
    ///
    /// # Errors
    ///
    /// Propagates a failed close lookup for any entry checked before the match.
    pub fn close<T: StyleTable + ?Sized>(
        &mut self,
        close_code: u16,
        table: &T,
    ) -> SliceResult<Option<StyleParameter<'a>>> {
        for index in (0..self.entries.len()).rev() {
            if self.entries[index].close_code(table)? == close_code {
                let removed = self.entries.remove(index);
                tracing::trace!(parameter = removed.as_str(), close_code, "close style");
                return Ok(Some(removed));
            }
        }
        tracing::trace!(close_code, "close without matching open style");
        Ok(None)
    }

    /// Writes an opening escape for every entry, oldest first.
    pub fn write_opening(&self, out: &mut String, introducer: Introducer) {
        for parameter in &self.entries {
            introducer.write_sgr(out, parameter.as_str());
        }
    }

    /// Writes a closing escape for every entry, newest first.
    ///
    /// # Errors
    ///
    /// Fails on the first entry `table` can not close. `out` may then hold part
    /// of the closing escapes and should be discarded.
    pub fn write_closing<T: StyleTable + ?Sized>(
        &self,
        out: &mut String,
        introducer: Introducer,
        table: &T,
    ) -> SliceResult<()> {
        for parameter in self.entries.iter().rev() {
            let close = parameter.close_code(table)?;
            introducer.write_sgr(out, &close.to_string());
        }
        Ok(())
    }

    /// The open entries, oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, StyleParameter<'a>> {
        self.entries.iter()
    }

    /// Number of open entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no style is open.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'s, 'a> IntoIterator for &'s ActiveStyles<'a> {
    type Item = &'s StyleParameter<'a>;
    type IntoIter = std::slice::Iter<'s, StyleParameter<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
