//! Contracts the host UI framework implements for a scrollbar.

use std::time::Duration;

use crate::animation::{Property, PropertyValue};
use crate::transitions::Easing;
use crate::types::{AnchorPoint, Color, Extent, Part, Point};

/// A host-owned animation handle.
///
/// The host executes the animation; the scrollbar only configures, starts,
/// stops and queries it.
pub trait Animation {
    /// Queue a property change from its value at play time to `to`.
    fn animate_property(
        &mut self,
        part: Part,
        property: Property,
        to: PropertyValue,
        delay: Duration,
        duration: Duration,
        easing: Easing,
    );

    fn play(&mut self);

    /// Halt in place. Properties keep whatever value they reached.
    fn stop(&mut self);

    /// Drop every queued property change.
    fn clear(&mut self);

    /// Linear time progress in `0.0..=1.0`.
    fn current_progress(&self) -> f32;
}

/// The host view tree a scrollbar renders into, addressed by [`Part`].
pub trait Surface {
    type Animation: Animation;

    fn set_size(&mut self, part: Part, size: Extent);

    fn set_position(&mut self, part: Part, position: Point);

    fn set_background(&mut self, part: Part, color: Color);

    /// Parent origin and pivot of the part.
    fn set_anchor(&mut self, part: Part, anchor: AnchorPoint);

    fn set_opacity(&mut self, part: Part, opacity: f32);

    /// Add the part as a child of the root view.
    fn attach(&mut self, part: Part);

    fn detach(&mut self, part: Part);

    fn create_animation(&mut self) -> Self::Animation;

    /// Route a property value to the matching setter.
    fn set_property(&mut self, part: Part, value: PropertyValue) {
        match value {
            PropertyValue::Extent(size) => self.set_size(part, size),
            PropertyValue::Point(position) => self.set_position(part, position),
            PropertyValue::Scalar(opacity) => self.set_opacity(part, opacity),
            PropertyValue::Color(color) => self.set_background(part, color),
        }
    }
}
