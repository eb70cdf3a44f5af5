// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cursor/offset window over the ranked view.
//!
//! The viewport only knows the length of the current ranked view and its own
//! height. It tracks a rank slot, not a candidate: after a re-rank the cursor
//! stays at the same position even though a different candidate now sits
//! there.
//!
//! Invariant (with `h = max(height, 1)`), whenever `len > 0`:
//! `offset <= cursor < offset + h` and `cursor < len`.
//! With `len == 0`, `cursor == offset == 0`.

use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    cursor: usize,
    offset: usize,
    height: usize,
    len: usize,
}

impl Viewport {
    pub fn new(height: usize, len: usize) -> Self {
        Self {
            cursor: 0,
            offset: 0,
            height,
            len,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Length of the ranked view this viewport was last clamped against.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn effective_height(&self) -> usize {
        self.height.max(1)
    }

    /// Move the cursor toward later (lower-ranked) entries.
    pub fn scroll_up(&mut self) {
        if self.cursor + 1 < self.len {
            self.cursor += 1;
            if self.cursor >= self.offset + self.effective_height() {
                self.offset += 1;
            }
        }
    }

    /// Move the cursor toward earlier (better-ranked) entries.
    pub fn scroll_down(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            if self.cursor < self.offset {
                self.offset -= 1;
            }
        }
    }

    pub fn resize(&mut self, height: usize) {
        self.height = height;
        self.clamp();
    }

    /// Re-clamp after the ranked view was replaced by one of `len` entries.
    pub fn on_ranked_view_replaced(&mut self, len: usize) {
        self.len = len;
        self.clamp();
    }

    /// Ranks currently visible, `offset..min(offset + height, len)`.
    pub fn visible_range(&self) -> Range<usize> {
        let end = (self.offset + self.height).min(self.len);
        self.offset.min(end)..end
    }

    fn clamp(&mut self) {
        if self.len == 0 {
            self.cursor = 0;
            self.offset = 0;
            return;
        }

        let height = self.effective_height();
        self.cursor = self.cursor.min(self.len - 1);

        // Use spare rows when the window grew or the list shrank.
        self.offset = self.offset.min(self.len.saturating_sub(height));
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + height {
            self.offset = self.cursor + 1 - height;
        }
    }

    /// True when the documented invariant holds.
    pub fn is_consistent(&self) -> bool {
        if self.len == 0 {
            return self.cursor == 0 && self.offset == 0;
        }
        self.offset <= self.cursor
            && self.cursor < self.offset + self.effective_height()
            && self.cursor < self.len
    }
}
