use crate::surface::Animation;
use crate::types::{Color, Extent, Point};

/// Which view property an animation drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Size,
    Position,
    Opacity,
    Background,
}

/// A property value that can be interpolated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyValue {
    Extent(Extent),
    Point(Point),
    Scalar(f32),
    Color(Color),
}

impl PropertyValue {
    /// The property this kind of value belongs to.
    pub fn property(&self) -> Property {
        match self {
            PropertyValue::Extent(_) => Property::Size,
            PropertyValue::Point(_) => Property::Position,
            PropertyValue::Scalar(_) => Property::Opacity,
            PropertyValue::Color(_) => Property::Background,
        }
    }

    /// Interpolate towards `to`. Mismatched kinds jump straight to `to`.
    pub fn lerp(&self, to: &PropertyValue, t: f32) -> PropertyValue {
        match (self, to) {
            (PropertyValue::Extent(from), PropertyValue::Extent(to)) => PropertyValue::Extent(
                Extent::new(lerp(from.width, to.width, t), lerp(from.height, to.height, t)),
            ),
            (PropertyValue::Point(from), PropertyValue::Point(to)) => {
                PropertyValue::Point(Point::new(lerp(from.x, to.x, t), lerp(from.y, to.y, t)))
            }
            (PropertyValue::Scalar(from), PropertyValue::Scalar(to)) => {
                PropertyValue::Scalar(lerp(*from, *to, t))
            }
            (PropertyValue::Color(from), PropertyValue::Color(to)) => {
                PropertyValue::Color(from.lerp(to, t))
            }
            _ => *to,
        }
    }
}

impl From<Extent> for PropertyValue {
    fn from(value: Extent) -> Self {
        PropertyValue::Extent(value)
    }
}

impl From<Point> for PropertyValue {
    fn from(value: Point) -> Self {
        PropertyValue::Point(value)
    }
}

impl From<f32> for PropertyValue {
    fn from(value: f32) -> Self {
        PropertyValue::Scalar(value)
    }
}

impl From<Color> for PropertyValue {
    fn from(value: Color) -> Self {
        PropertyValue::Color(value)
    }
}

/// Linear interpolation for f32 values.
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// At most one live animation handle for one kind of change.
///
/// Handles are created on first use. Starting again while running stops and
/// clears the previous handle and reuses it.
#[derive(Debug)]
pub enum AnimationSlot<A> {
    Idle,
    Running(A),
}

impl<A> Default for AnimationSlot<A> {
    fn default() -> Self {
        AnimationSlot::Idle
    }
}

impl<A: Animation> AnimationSlot<A> {
    pub fn is_running(&self) -> bool {
        matches!(self, AnimationSlot::Running(_))
    }

    /// Progress of the live handle, `None` when idle.
    pub fn progress(&self) -> Option<f32> {
        match self {
            AnimationSlot::Idle => None,
            AnimationSlot::Running(animation) => Some(animation.current_progress().clamp(0.0, 1.0)),
        }
    }

    pub fn start(&mut self, create: impl FnOnce() -> A, configure: impl FnOnce(&mut A)) {
        let mut animation = match std::mem::take(self) {
            AnimationSlot::Running(mut previous) => {
                previous.stop();
                previous.clear();
                previous
            }
            AnimationSlot::Idle => create(),
        };
        configure(&mut animation);
        animation.play();
        *self = AnimationSlot::Running(animation);
    }

    /// Stop and clear the live handle, if any, and drop it.
    pub fn reset(&mut self) {
        if let AnimationSlot::Running(mut animation) = std::mem::take(self) {
            animation.stop();
            animation.clear();
        }
    }
}
