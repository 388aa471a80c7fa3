/// Axis along which the scroll position varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    Horizontal,
    #[default]
    Vertical,
}

/// Corner or edge a view is attached to, used as both parent origin and pivot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnchorPoint {
    #[default]
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    Center,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl AnchorPoint {
    /// Normalized `(x, y)` factors, `(0, 0)` being the top-left corner.
    pub const fn factors(self) -> (f32, f32) {
        match self {
            AnchorPoint::TopLeft => (0.0, 0.0),
            AnchorPoint::TopCenter => (0.5, 0.0),
            AnchorPoint::TopRight => (1.0, 0.0),
            AnchorPoint::CenterLeft => (0.0, 0.5),
            AnchorPoint::Center => (0.5, 0.5),
            AnchorPoint::CenterRight => (1.0, 0.5),
            AnchorPoint::BottomLeft => (0.0, 1.0),
            AnchorPoint::BottomCenter => (0.5, 1.0),
            AnchorPoint::BottomRight => (1.0, 1.0),
        }
    }
}

/// The views a scrollbar drives on its host surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    Track,
    Thumb,
}
