/// Track padding, relative to the container edges.
///
/// Values are floored to zero by the constructors.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Padding {
    pub start: f32,
    pub end: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Padding {
    pub fn new(start: f32, end: f32, top: f32, bottom: f32) -> Self {
        Self {
            start: start.max(0.0),
            end: end.max(0.0),
            top: top.max(0.0),
            bottom: bottom.max(0.0),
        }
    }

    pub fn all(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Padding on the top and bottom edges only.
    pub fn vertical(value: f32) -> Self {
        Self::new(0.0, 0.0, value, value)
    }

    pub fn horizontal_total(&self) -> f32 {
        self.start + self.end
    }

    pub fn vertical_total(&self) -> f32 {
        self.top + self.bottom
    }
}
