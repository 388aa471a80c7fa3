//! Scrollbar controller: picks the calculator, keeps the committed geometry
//! and decides between instant and animated commits.

use std::fmt;
use std::time::Duration;

use log::{debug, trace};

use crate::animation::{AnimationSlot, Property, PropertyValue};
use crate::calculator::ScrollGeometryCalculator;
use crate::error::{Result, ScrollbarError};
use crate::state::ScrollState;
use crate::style::ScrollbarStyle;
use crate::surface::{Animation, Surface};
use crate::transitions::TransitionConfig;
use crate::types::{Color, Extent, Geometry, Orientation, Padding, Part, Rect};

/// A scrollbar bound to a host [`Surface`].
///
/// Nothing is drawn until [`Scrollbar::initialize`] selects an orientation.
/// [`Scrollbar::update`] refuses to run before that, while
/// [`Scrollbar::scroll_to`], [`Scrollbar::on_container_resize`] and the style
/// setters quietly do nothing.
pub struct Scrollbar<S: Surface> {
    surface: S,
    style: ScrollbarStyle,
    calculator: Option<ScrollGeometryCalculator>,
    geometry: Geometry,
    thumb_opacity: f32,
    container: Extent,
    /// Raw position before the latest `update` or `scroll_to`.
    previous_position: f32,
    scroll_enabled: bool,

    thumb_position_animation: AnimationSlot<S::Animation>,
    thumb_size_animation: AnimationSlot<S::Animation>,
    opacity_animation: AnimationSlot<S::Animation>,
}

impl<S: Surface> Scrollbar<S> {
    pub fn new(mut surface: S, style: ScrollbarStyle) -> Self {
        surface.attach(Part::Track);
        surface.attach(Part::Thumb);
        surface.set_background(Part::Track, style.track_color);
        surface.set_background(Part::Thumb, style.thumb_color);

        Self {
            surface,
            style,
            calculator: None,
            geometry: Geometry::default(),
            thumb_opacity: 0.0,
            container: Extent::ZERO,
            previous_position: 0.0,
            scroll_enabled: true,
            thumb_position_animation: AnimationSlot::Idle,
            thumb_size_animation: AnimationSlot::Idle,
            opacity_animation: AnimationSlot::Idle,
        }
    }

    /// Select the calculator and commit fresh geometry.
    ///
    /// Any animation in flight is stopped and dropped. Calling this again
    /// may switch orientation.
    pub fn initialize(
        &mut self,
        content_length: f32,
        viewport_length: f32,
        current_position: f32,
        orientation: Orientation,
    ) {
        debug!(
            "initialize {:?}: content={} viewport={} position={}",
            orientation, content_length, viewport_length, current_position
        );

        self.thumb_position_animation.reset();
        self.thumb_size_animation.reset();
        self.opacity_animation.reset();

        let calculator = ScrollGeometryCalculator::new(
            orientation,
            ScrollState::new(content_length, viewport_length, current_position),
        );
        let padding = self.style.track_padding;

        let track_size =
            calculator.compute_track_size(self.style.track_thickness, self.container, padding);
        let track_position = calculator.compute_track_position(padding);
        let thumb_size = calculator.compute_thumb_size(self.style.thumb_thickness, track_size);
        let thumb_position = calculator.compute_thumb_position(track_size, thumb_size, padding);

        self.geometry = Geometry {
            track: Rect::new(track_size, track_position),
            thumb: Rect::new(thumb_size, thumb_position),
        };
        self.thumb_opacity = visibility(&calculator);
        self.previous_position = current_position;

        self.surface.set_anchor(Part::Track, calculator.track_anchor());
        self.surface.set_anchor(Part::Thumb, calculator.thumb_anchor());
        self.calculator = Some(calculator);

        self.commit_track();
        self.commit_thumb();
        self.surface.set_opacity(Part::Thumb, self.thumb_opacity);
    }

    /// Replace content length, viewport length and position.
    ///
    /// A zero-duration transition commits immediately; otherwise the thumb
    /// size and position animate, and so does the thumb opacity when the
    /// content switches between scrollable and not.
    pub fn update(
        &mut self,
        content_length: f32,
        viewport_length: f32,
        position: f32,
        transition: TransitionConfig,
    ) -> Result<()> {
        let Some(calculator) = self.calculator.as_mut() else {
            return Err(ScrollbarError::NotInitialized { operation: "update" });
        };
        trace!(
            "update: content={} viewport={} position={} over {:?}",
            content_length,
            viewport_length,
            position,
            transition.duration
        );

        self.previous_position = calculator.state().current_position();
        let state = calculator.state_mut();
        state.set_content_length(content_length);
        state.set_viewport_length(viewport_length);
        state.set_current_position(position);

        let padding = self.style.track_padding;
        let track_size = self.geometry.track.size;
        let thumb_size = calculator.compute_thumb_size(self.style.thumb_thickness, track_size);
        let thumb_position = calculator.compute_thumb_position(track_size, thumb_size, padding);
        let opacity = visibility(calculator);

        let previous_opacity = self.thumb_opacity;
        self.geometry.thumb = Rect::new(thumb_size, thumb_position);
        self.thumb_opacity = opacity;

        if transition.is_instant() {
            self.thumb_size_animation.reset();
            self.thumb_position_animation.reset();
            self.opacity_animation.reset();
            self.commit_thumb();
            self.surface.set_opacity(Part::Thumb, opacity);
            return Ok(());
        }

        animate(
            &mut self.surface,
            &mut self.thumb_size_animation,
            Part::Thumb,
            PropertyValue::Extent(thumb_size),
            transition,
        );
        animate(
            &mut self.surface,
            &mut self.thumb_position_animation,
            Part::Thumb,
            PropertyValue::Point(thumb_position),
            transition,
        );
        if opacity != previous_opacity {
            animate(
                &mut self.surface,
                &mut self.opacity_animation,
                Part::Thumb,
                PropertyValue::Scalar(opacity),
                transition,
            );
        }
        Ok(())
    }

    /// Move the thumb to a new scroll position, leaving lengths untouched.
    ///
    /// Does nothing before `initialize` or while scrolling is disabled.
    pub fn scroll_to(&mut self, position: f32, transition: TransitionConfig) {
        if !self.scroll_enabled {
            trace!("scroll_to ignored: scrolling disabled");
            return;
        }
        let Some(calculator) = self.calculator.as_mut() else {
            trace!("scroll_to ignored: not initialized");
            return;
        };

        self.previous_position = calculator.state().current_position();
        calculator.state_mut().set_current_position(position);

        let thumb_position = calculator.compute_thumb_scroll_position(
            self.geometry.track.size,
            self.geometry.thumb.position,
            self.style.track_padding,
        );
        self.geometry.thumb.position = thumb_position;

        if transition.is_instant() {
            self.thumb_position_animation.reset();
            self.surface.set_position(Part::Thumb, thumb_position);
            return;
        }

        animate(
            &mut self.surface,
            &mut self.thumb_position_animation,
            Part::Thumb,
            PropertyValue::Point(thumb_position),
            transition,
        );
    }

    /// Relayout for a new container size. Animations in flight are left alone.
    pub fn on_container_resize(&mut self, size: Extent) {
        if size == self.container {
            return;
        }
        self.container = size;

        let Some(calculator) = self.calculator.as_ref() else {
            return;
        };
        debug!("container resized to {}x{}", size.width, size.height);

        let padding = self.style.track_padding;
        let track_size = calculator.compute_track_size(self.style.track_thickness, size, padding);
        let thumb_size = calculator.compute_thumb_size(self.style.thumb_thickness, track_size);
        let thumb_position = calculator.compute_thumb_position(track_size, thumb_size, padding);

        self.geometry.track.size = track_size;
        self.geometry.thumb = Rect::new(thumb_size, thumb_position);

        self.surface.set_size(Part::Track, track_size);
        self.commit_thumb();
    }

    /// Change the track padding, keeping the thumb's scroll offset.
    pub fn set_track_padding(&mut self, padding: Padding) {
        if padding == self.style.track_padding {
            return;
        }
        self.style.track_padding = padding;

        let Some(calculator) = self.calculator.as_ref() else {
            return;
        };

        let track_size =
            calculator.compute_track_size(self.style.track_thickness, self.container, padding);
        let track_position = calculator.compute_track_position(padding);
        let thumb_size = calculator.compute_thumb_size(self.style.thumb_thickness, track_size);
        let thumb_position = calculator.compute_thumb_padding_position(
            track_size,
            thumb_size,
            self.geometry.thumb.position,
            padding,
        );

        self.geometry = Geometry {
            track: Rect::new(track_size, track_position),
            thumb: Rect::new(thumb_size, thumb_position),
        };
        self.commit_track();
        self.commit_thumb();
    }

    pub fn set_track_thickness(&mut self, thickness: f32) {
        let thickness = thickness.max(0.0);
        if thickness == self.style.track_thickness {
            return;
        }
        self.style.track_thickness = thickness;

        let Some(calculator) = self.calculator.as_ref() else {
            return;
        };

        let padding = self.style.track_padding;
        let track_size = calculator.compute_track_size(thickness, self.container, padding);
        let thumb_position = calculator.compute_thumb_padding_position(
            track_size,
            self.geometry.thumb.size,
            self.geometry.thumb.position,
            padding,
        );

        self.geometry.track.size = track_size;
        self.geometry.thumb.position = thumb_position;
        self.surface.set_size(Part::Track, track_size);
        self.surface.set_position(Part::Thumb, thumb_position);
    }

    pub fn set_thumb_thickness(&mut self, thickness: f32) {
        let thickness = thickness.max(0.0);
        if thickness == self.style.thumb_thickness {
            return;
        }
        self.style.thumb_thickness = thickness;

        let Some(calculator) = self.calculator.as_ref() else {
            return;
        };

        let track_size = self.geometry.track.size;
        let thumb_size = calculator.compute_thumb_size(thickness, track_size);
        let thumb_position = calculator.compute_thumb_padding_position(
            track_size,
            thumb_size,
            self.geometry.thumb.position,
            self.style.track_padding,
        );

        self.geometry.thumb = Rect::new(thumb_size, thumb_position);
        self.commit_thumb();
    }

    pub fn set_track_color(&mut self, color: Color) {
        self.style.track_color = color;
        self.surface.set_background(Part::Track, color);
    }

    pub fn set_thumb_color(&mut self, color: Color) {
        self.style.thumb_color = color;
        self.surface.set_background(Part::Thumb, color);
    }

    /// When disabled, `scroll_to` is ignored. `update` still applies.
    pub fn set_scroll_enabled(&mut self, enabled: bool) {
        self.scroll_enabled = enabled;
    }

    pub fn is_scroll_enabled(&self) -> bool {
        self.scroll_enabled
    }

    pub fn is_initialized(&self) -> bool {
        self.calculator.is_some()
    }

    pub fn orientation(&self) -> Option<Orientation> {
        self.calculator.as_ref().map(ScrollGeometryCalculator::orientation)
    }

    /// Target geometry of the latest operation, regardless of animation.
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Target thumb opacity: 1.0 when the content scrolls, 0.0 otherwise.
    pub fn thumb_opacity(&self) -> f32 {
        self.thumb_opacity
    }

    pub fn container_size(&self) -> Extent {
        self.container
    }

    pub fn style(&self) -> &ScrollbarStyle {
        &self.style
    }

    /// Current scroll position, clamped into the scrollable range.
    pub fn scroll_position(&self) -> f32 {
        self.calculator
            .as_ref()
            .map_or(0.0, |calculator| calculator.state().clamped_position())
    }

    /// Scroll position the thumb is showing right now.
    ///
    /// While a thumb position animation runs this interpolates between the
    /// previous and the target position by the animation's progress.
    pub fn animated_scroll_position(&self) -> f32 {
        let Some(calculator) = self.calculator.as_ref() else {
            return 0.0;
        };
        let state = calculator.state();
        let target = state.clamped_position();

        match self.thumb_position_animation.progress() {
            Some(progress) => {
                let previous = state.clamp_position(self.previous_position);
                (1.0 - progress) * previous + progress * target
            }
            None => target,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Stop animations, detach the track and thumb and hand the surface back.
    pub fn into_surface(mut self) -> S {
        self.thumb_position_animation.reset();
        self.thumb_size_animation.reset();
        self.opacity_animation.reset();
        self.surface.detach(Part::Thumb);
        self.surface.detach(Part::Track);
        self.surface
    }

    fn commit_track(&mut self) {
        self.surface.set_size(Part::Track, self.geometry.track.size);
        self.surface.set_position(Part::Track, self.geometry.track.position);
    }

    fn commit_thumb(&mut self) {
        self.surface.set_size(Part::Thumb, self.geometry.thumb.size);
        self.surface.set_position(Part::Thumb, self.geometry.thumb.position);
    }
}

impl<S: Surface> fmt::Debug for Scrollbar<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scrollbar")
            .field("style", &self.style)
            .field("calculator", &self.calculator)
            .field("geometry", &self.geometry)
            .field("thumb_opacity", &self.thumb_opacity)
            .field("container", &self.container)
            .field("previous_position", &self.previous_position)
            .field("scroll_enabled", &self.scroll_enabled)
            .finish_non_exhaustive()
    }
}

fn visibility(calculator: &ScrollGeometryCalculator) -> f32 {
    if calculator.is_scrollable() {
        1.0
    } else {
        0.0
    }
}

/// Start (or restart) the animation in `slot` towards `to`.
fn animate<S: Surface>(
    surface: &mut S,
    slot: &mut AnimationSlot<S::Animation>,
    part: Part,
    to: PropertyValue,
    transition: TransitionConfig,
) {
    let property: Property = to.property();
    slot.start(
        || surface.create_animation(),
        |animation| {
            animation.animate_property(
                part,
                property,
                to,
                Duration::ZERO,
                transition.duration,
                transition.easing,
            )
        },
    );
}
