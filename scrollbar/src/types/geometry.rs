/// Width and height of a view, in host units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Extent {
    pub width: f32,
    pub height: f32,
}

impl Extent {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Anchor-relative offset of a view.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub size: Extent,
    pub position: Point,
}

impl Rect {
    pub const fn new(size: Extent, position: Point) -> Self {
        Self { size, position }
    }
}

/// Committed track and thumb rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Geometry {
    pub track: Rect,
    pub thumb: Rect,
}
