//! Scroll state along a single axis.

/// Content, viewport and position of the scrolled view, along one axis.
///
/// `content_length` and `viewport_length` are never negative. `current_position`
/// is stored as given and only clamped when read through
/// [`ScrollState::clamped_position`], so callers may overshoot between updates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState {
    content_length: f32,
    viewport_length: f32,
    current_position: f32,
}

impl ScrollState {
    pub fn new(content_length: f32, viewport_length: f32, current_position: f32) -> Self {
        Self {
            content_length: content_length.max(0.0),
            viewport_length: viewport_length.max(0.0),
            current_position,
        }
    }

    pub fn content_length(&self) -> f32 {
        self.content_length
    }

    pub fn viewport_length(&self) -> f32 {
        self.viewport_length
    }

    /// Raw position, possibly out of range.
    pub fn current_position(&self) -> f32 {
        self.current_position
    }

    pub fn set_content_length(&mut self, length: f32) {
        self.content_length = length.max(0.0);
    }

    pub fn set_viewport_length(&mut self, length: f32) {
        self.viewport_length = length.max(0.0);
    }

    pub fn set_current_position(&mut self, position: f32) {
        self.current_position = position;
    }

    pub fn is_scrollable(&self) -> bool {
        self.content_length > self.viewport_length
    }

    /// Largest reachable position, never below zero.
    pub fn max_position(&self) -> f32 {
        (self.content_length - self.viewport_length).max(0.0)
    }

    /// Clamp an arbitrary position into `0..=max_position()`.
    pub fn clamp_position(&self, position: f32) -> f32 {
        if position.is_nan() {
            return 0.0;
        }
        position.clamp(0.0, self.max_position())
    }

    pub fn clamped_position(&self) -> f32 {
        self.clamp_position(self.current_position)
    }

    /// Visible fraction of the content, `None` when nothing scrolls.
    pub fn visible_ratio(&self) -> Option<f32> {
        self.has_ratio()
            .then(|| (self.viewport_length / self.content_length).max(0.0))
    }

    /// Fraction of the content scrolled past, `0.0` when nothing scrolls.
    pub fn offset_ratio(&self) -> f32 {
        if self.has_ratio() {
            self.clamped_position() / self.content_length
        } else {
            0.0
        }
    }

    fn has_ratio(&self) -> bool {
        self.is_scrollable() && self.content_length > 0.0
    }
}
