//! Horizontal scroll offset shared by the canvas and the label row.

use super::PAGE_FRACTION;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollController {
    offset: f32,
    viewport_width: f32,
    content_width: f32,
}

impl ScrollController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn max_offset(&self) -> f32 {
        (self.content_width - self.viewport_width).max(0.0)
    }

    /// Update the scrollable extent and re-clamp the current offset
    pub fn set_extent(&mut self, viewport_width: f32, content_width: f32) {
        self.viewport_width = viewport_width.max(0.0);
        self.content_width = content_width.max(0.0);
        self.offset = self.offset.clamp(0.0, self.max_offset());
    }

    pub fn reset(&mut self) {
        self.offset = 0.0;
    }

    /// Clamp `x` into range and apply it; returns the applied offset
    pub fn scroll_to_offset(&mut self, x: f32) -> f32 {
        if x.is_finite() {
            self.offset = x.clamp(0.0, self.max_offset());
        }
        self.offset
    }

    pub fn scroll_by(&mut self, dx: f32) -> f32 {
        self.scroll_to_offset(self.offset + dx)
    }

    pub fn page_step(&self) -> f32 {
        self.viewport_width * PAGE_FRACTION
    }

    pub fn next(&mut self) -> f32 {
        self.scroll_by(self.page_step())
    }

    pub fn prev(&mut self) -> f32 {
        self.scroll_by(-self.page_step())
    }

    pub fn can_prev(&self) -> bool {
        self.offset > 0.0
    }

    pub fn can_next(&self) -> bool {
        self.offset < self.max_offset()
    }

    /// Translation applied to the label row so it lines up with the canvas
    pub fn label_translation(&self) -> f32 {
        -self.offset
    }
}
