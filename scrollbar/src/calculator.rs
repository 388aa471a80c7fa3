//! Track and thumb geometry for horizontal and vertical scrollbars.
//!
//! Positions are offsets from the anchor returned by
//! [`ScrollGeometryCalculator::track_anchor`]. A horizontal bar hangs off the
//! bottom-left corner of its container, so its cross-axis offsets grow
//! upwards (negative `y`). A vertical bar hangs off the top-right corner and
//! its cross-axis offsets grow leftwards (negative `x`).

use crate::state::ScrollState;
use crate::types::{AnchorPoint, Extent, Orientation, Padding, Point};

/// Maps scroll state plus styling to track and thumb rectangles.
///
/// The orientation is chosen once, when the owning scrollbar is initialized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollGeometryCalculator {
    orientation: Orientation,
    state: ScrollState,
}

impl ScrollGeometryCalculator {
    pub fn new(orientation: Orientation, state: ScrollState) -> Self {
        Self { orientation, state }
    }

    pub fn horizontal(state: ScrollState) -> Self {
        Self::new(Orientation::Horizontal, state)
    }

    pub fn vertical(state: ScrollState) -> Self {
        Self::new(Orientation::Vertical, state)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ScrollState {
        &mut self.state
    }

    pub fn is_scrollable(&self) -> bool {
        self.state.is_scrollable()
    }

    pub fn track_anchor(&self) -> AnchorPoint {
        match self.orientation {
            Orientation::Horizontal => AnchorPoint::BottomLeft,
            Orientation::Vertical => AnchorPoint::TopRight,
        }
    }

    /// Track and thumb share one anchor.
    pub fn thumb_anchor(&self) -> AnchorPoint {
        self.track_anchor()
    }

    /// Extent along the length axis.
    pub fn length_of(&self, extent: Extent) -> f32 {
        match self.orientation {
            Orientation::Horizontal => extent.width,
            Orientation::Vertical => extent.height,
        }
    }

    pub fn compute_track_size(
        &self,
        thickness: f32,
        container: Extent,
        padding: Padding,
    ) -> Extent {
        match self.orientation {
            Orientation::Horizontal => {
                Extent::new(container.width - padding.horizontal_total(), thickness)
            }
            Orientation::Vertical => {
                Extent::new(thickness, container.height - padding.vertical_total())
            }
        }
    }

    pub fn compute_track_position(&self, padding: Padding) -> Point {
        match self.orientation {
            Orientation::Horizontal => Point::new(padding.start, -padding.bottom),
            Orientation::Vertical => Point::new(-padding.end, padding.top),
        }
    }

    /// Thumb length is proportional to the visible fraction of the content.
    /// When nothing scrolls it spans the whole track.
    pub fn compute_thumb_size(&self, thickness: f32, track: Extent) -> Extent {
        let ratio = self.state.visible_ratio().unwrap_or(1.0);
        match self.orientation {
            Orientation::Horizontal => Extent::new(track.width * ratio, thickness),
            Orientation::Vertical => Extent::new(thickness, track.height * ratio),
        }
    }

    pub fn compute_thumb_position(&self, track: Extent, thumb: Extent, padding: Padding) -> Point {
        let cross = self.cross_offset(track, thumb, padding);
        let length = self.length_offset(track, padding);
        self.compose(length, cross)
    }

    /// Re-centers the thumb on the cross axis, keeping its length-axis
    /// coordinate from `current`.
    pub fn compute_thumb_padding_position(
        &self,
        track: Extent,
        thumb: Extent,
        current: Point,
        padding: Padding,
    ) -> Point {
        let cross = self.cross_offset(track, thumb, padding);
        self.compose(self.length_coordinate(current), cross)
    }

    /// Moves the thumb along the length axis to the current scroll position,
    /// keeping its cross-axis coordinate from `current`.
    pub fn compute_thumb_scroll_position(
        &self,
        track: Extent,
        current: Point,
        padding: Padding,
    ) -> Point {
        let length = self.length_offset(track, padding);
        self.compose(length, self.cross_coordinate(current))
    }

    fn length_offset(&self, track: Extent, padding: Padding) -> f32 {
        let travel = self.length_of(track) * self.state.offset_ratio();
        match self.orientation {
            Orientation::Horizontal => padding.start + travel,
            Orientation::Vertical => padding.top + travel,
        }
    }

    fn cross_offset(&self, track: Extent, thumb: Extent, padding: Padding) -> f32 {
        match self.orientation {
            Orientation::Horizontal => -((track.height - thumb.height) / 2.0 + padding.bottom),
            Orientation::Vertical => -((track.width - thumb.width) / 2.0 + padding.end),
        }
    }

    fn length_coordinate(&self, point: Point) -> f32 {
        match self.orientation {
            Orientation::Horizontal => point.x,
            Orientation::Vertical => point.y,
        }
    }

    fn cross_coordinate(&self, point: Point) -> f32 {
        match self.orientation {
            Orientation::Horizontal => point.y,
            Orientation::Vertical => point.x,
        }
    }

    fn compose(&self, length: f32, cross: f32) -> Point {
        match self.orientation {
            Orientation::Horizontal => Point::new(length, cross),
            Orientation::Vertical => Point::new(cross, length),
        }
    }
}
