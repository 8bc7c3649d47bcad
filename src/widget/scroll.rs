//! Vertical scroll state for list-like widgets.
//!
//! The offset is always clamped to `[0, max_scroll]` where
//! `max_scroll = content_height - viewport_height` (floored at zero).

/// Scroll position of a vertically scrolling widget, in rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    /// First visible content row.
    pub offset: i32,
    pub content_height: i32,
    pub viewport_height: i32,
}

impl ScrollState {
    pub fn new(content_height: i32, viewport_height: i32) -> Self {
        Self { offset: 0, content_height, viewport_height }
    }

    /// Largest valid offset.
    pub fn max_scroll(&self) -> i32 {
        (self.content_height - self.viewport_height).max(0)
    }

    /// Scroll to an absolute row, clamping.
    pub fn scroll_to(&mut self, offset: i32) {
        self.offset = offset.clamp(0, self.max_scroll());
    }

    /// Scroll by a relative number of rows, clamping.
    pub fn scroll_by(&mut self, delta: i32) {
        self.scroll_to(self.offset + delta);
    }

    /// Scroll the minimum amount that makes content row `row` visible.
    pub fn scroll_to_visible(&mut self, row: i32) {
        if row < self.offset {
            self.scroll_to(row);
        } else if self.viewport_height > 0 && row >= self.offset + self.viewport_height {
            self.scroll_to(row - self.viewport_height + 1);
        }
    }

    /// Map a viewport row to a content row, if it lands on content.
    pub fn content_row(&self, viewport_row: i32) -> Option<usize> {
        if viewport_row < 0 || viewport_row >= self.viewport_height {
            return None;
        }
        let row = self.offset + viewport_row;
        (row < self.content_height).then_some(row as usize)
    }

    /// Update the content height and re-clamp.
    pub fn set_content_height(&mut self, height: i32) {
        self.content_height = height;
        self.scroll_to(self.offset);
    }

    /// Update the viewport height and re-clamp.
    pub fn set_viewport_height(&mut self, height: i32) {
        self.viewport_height = height;
        self.scroll_to(self.offset);
    }
}

// ===========================================================================
// Tests
// ===========================================================================
