mod color;
mod enums;
mod geometry;
mod padding;

pub use color::{Color, Rgb};
pub use enums::{AnchorPoint, Orientation, Part};
pub use geometry::{Extent, Geometry, Point, Rect};
pub use padding::Padding;
