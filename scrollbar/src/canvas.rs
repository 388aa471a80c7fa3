//! A retained, clock-driven [`Surface`] implementation.
//!
//! `Canvas` stores the last value of every property per [`Part`] and runs
//! [`Tween`] animations when ticked. Terminal renderers and tests read the
//! values back through the getters.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::{Duration, Instant};

use log::{debug, trace, warn};

use crate::animation::{Property, PropertyValue};
use crate::surface::{Animation, Surface};
use crate::transitions::Easing;
use crate::types::{AnchorPoint, Color, Extent, Part, Point};

/// Property values of a single part.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub size: Extent,
    pub position: Point,
    pub background: Color,
    pub anchor: AnchorPoint,
    pub opacity: f32,
    pub attached: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            size: Extent::ZERO,
            position: Point::ORIGIN,
            background: Color::rgba(0, 0, 0, 0.0),
            anchor: AnchorPoint::default(),
            opacity: 1.0,
            attached: false,
        }
    }
}

impl Node {
    fn get(&self, property: Property) -> PropertyValue {
        match property {
            Property::Size => PropertyValue::Extent(self.size),
            Property::Position => PropertyValue::Point(self.position),
            Property::Opacity => PropertyValue::Scalar(self.opacity),
            Property::Background => PropertyValue::Color(self.background),
        }
    }

    fn set(&mut self, value: PropertyValue) {
        match value {
            PropertyValue::Extent(size) => self.size = size,
            PropertyValue::Point(position) => self.position = position,
            PropertyValue::Scalar(opacity) => self.opacity = opacity.clamp(0.0, 1.0),
            PropertyValue::Color(color) => self.background = color,
        }
    }
}

/// One queued property change of a tween.
#[derive(Debug, Clone)]
struct Track {
    part: Part,
    property: Property,
    from: Option<PropertyValue>,
    to: PropertyValue,
    delay: Duration,
    duration: Duration,
    easing: Easing,
}

impl Track {
    fn end(&self) -> Duration {
        self.delay + self.duration
    }

    /// Eased local progress at `elapsed`, `None` while still delayed.
    fn eased_progress(&self, elapsed: Duration) -> Option<f32> {
        let local = elapsed.checked_sub(self.delay)?;
        let progress = if self.duration.is_zero() {
            1.0
        } else {
            (local.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };
        Some(self.easing.apply(progress))
    }
}

#[derive(Debug, Default)]
struct TweenState {
    tracks: Vec<Track>,
    started: Option<Instant>,
    /// Set when stopped or finished; progress no longer follows the clock.
    frozen: Option<f32>,
}

impl TweenState {
    fn total(&self) -> Duration {
        self.tracks.iter().map(Track::end).max().unwrap_or_default()
    }

    fn is_running(&self) -> bool {
        self.started.is_some() && self.frozen.is_none()
    }

    fn progress_at(&self, now: Instant) -> f32 {
        if let Some(progress) = self.frozen {
            return progress;
        }
        let Some(started) = self.started else {
            return 0.0;
        };
        let total = self.total();
        if total.is_zero() {
            return 1.0;
        }
        (now.saturating_duration_since(started).as_secs_f32() / total.as_secs_f32()).min(1.0)
    }
}

#[derive(Debug, Default)]
struct Scene {
    nodes: HashMap<Part, Node>,
    tweens: HashMap<u64, TweenState>,
    next_tween: u64,
}

impl Scene {
    fn node_mut(&mut self, part: Part) -> &mut Node {
        self.nodes.entry(part).or_default()
    }
}

/// Retained scrollbar surface driven by an explicit clock.
///
/// Clones share the same scene, so a caller can keep a clone for reading
/// while a [`crate::Scrollbar`] owns the other.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    scene: Rc<RefCell<Scene>>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of a part's properties.
    pub fn node(&self, part: Part) -> Node {
        self.scene
            .borrow()
            .nodes
            .get(&part)
            .cloned()
            .unwrap_or_default()
    }

    pub fn size(&self, part: Part) -> Extent {
        self.node(part).size
    }

    pub fn position(&self, part: Part) -> Point {
        self.node(part).position
    }

    pub fn background(&self, part: Part) -> Color {
        self.node(part).background
    }

    pub fn anchor(&self, part: Part) -> AnchorPoint {
        self.node(part).anchor
    }

    pub fn opacity(&self, part: Part) -> f32 {
        self.node(part).opacity
    }

    pub fn is_attached(&self, part: Part) -> bool {
        self.node(part).attached
    }

    /// Returns true if any tween is currently playing.
    pub fn has_running_animations(&self) -> bool {
        self.scene.borrow().tweens.values().any(TweenState::is_running)
    }

    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    /// Write interpolated values for every playing tween at `now`.
    /// Tweens past their end are finished. Returns true while any still runs.
    pub fn tick_at(&mut self, now: Instant) -> bool {
        let mut scene = self.scene.borrow_mut();
        let Scene { nodes, tweens, .. } = &mut *scene;

        for (id, tween) in tweens.iter_mut() {
            let Some(started) = tween.started else { continue };
            if tween.frozen.is_some() {
                continue;
            }
            let elapsed = now.saturating_duration_since(started);

            for track in &tween.tracks {
                let Some(eased) = track.eased_progress(elapsed) else { continue };
                let node = nodes.entry(track.part).or_default();
                let from = track.from.unwrap_or_else(|| node.get(track.property));
                node.set(from.lerp(&track.to, eased));
            }

            if elapsed >= tween.total() {
                trace!("tween {} finished", id);
                tween.frozen = Some(1.0);
            }
        }

        tweens.values().any(TweenState::is_running)
    }
}

impl Surface for Canvas {
    type Animation = Tween;

    fn set_size(&mut self, part: Part, size: Extent) {
        self.scene.borrow_mut().node_mut(part).size = size;
    }

    fn set_position(&mut self, part: Part, position: Point) {
        self.scene.borrow_mut().node_mut(part).position = position;
    }

    fn set_background(&mut self, part: Part, color: Color) {
        self.scene.borrow_mut().node_mut(part).background = color;
    }

    fn set_anchor(&mut self, part: Part, anchor: AnchorPoint) {
        self.scene.borrow_mut().node_mut(part).anchor = anchor;
    }

    fn set_opacity(&mut self, part: Part, opacity: f32) {
        self.scene.borrow_mut().node_mut(part).opacity = opacity.clamp(0.0, 1.0);
    }

    fn attach(&mut self, part: Part) {
        self.scene.borrow_mut().node_mut(part).attached = true;
    }

    fn detach(&mut self, part: Part) {
        self.scene.borrow_mut().node_mut(part).attached = false;
    }

    fn create_animation(&mut self) -> Tween {
        let mut scene = self.scene.borrow_mut();
        let id = scene.next_tween;
        scene.next_tween += 1;
        scene.tweens.insert(id, TweenState::default());
        debug!("created tween {}", id);
        Tween {
            id,
            scene: Rc::clone(&self.scene),
        }
    }
}

/// Animation handle created by [`Canvas`]. Removed from the canvas on drop.
#[derive(Debug)]
pub struct Tween {
    id: u64,
    scene: Rc<RefCell<Scene>>,
}

impl Tween {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Start at `now`, capturing the current value of every queued property.
    pub fn play_at(&mut self, now: Instant) {
        let mut scene = self.scene.borrow_mut();
        let Scene { nodes, tweens, .. } = &mut *scene;
        let Some(tween) = tweens.get_mut(&self.id) else { return };

        for track in &mut tween.tracks {
            let node = nodes.entry(track.part).or_default();
            track.from = Some(node.get(track.property));
        }
        tween.started = Some(now);
        tween.frozen = None;
        debug!("tween {} playing {} tracks", self.id, tween.tracks.len());
    }

    pub fn progress_at(&self, now: Instant) -> f32 {
        self.scene
            .borrow()
            .tweens
            .get(&self.id)
            .map_or(0.0, |tween| tween.progress_at(now))
    }

    pub fn stop_at(&mut self, now: Instant) {
        let mut scene = self.scene.borrow_mut();
        if let Some(tween) = scene.tweens.get_mut(&self.id) {
            if tween.is_running() {
                tween.frozen = Some(tween.progress_at(now));
                debug!("tween {} stopped", self.id);
            }
        }
    }

    pub fn is_playing(&self) -> bool {
        self.scene
            .borrow()
            .tweens
            .get(&self.id)
            .is_some_and(TweenState::is_running)
    }
}

impl Animation for Tween {
    fn animate_property(
        &mut self,
        part: Part,
        property: Property,
        to: PropertyValue,
        delay: Duration,
        duration: Duration,
        easing: Easing,
    ) {
        if to.property() != property {
            warn!(
                "tween {}: {:?} value does not fit property {:?}, ignored",
                self.id, to, property
            );
            return;
        }
        let mut scene = self.scene.borrow_mut();
        if let Some(tween) = scene.tweens.get_mut(&self.id) {
            tween.tracks.push(Track {
                part,
                property,
                from: None,
                to,
                delay,
                duration,
                easing,
            });
        }
    }

    fn play(&mut self) {
        self.play_at(Instant::now());
    }

    fn stop(&mut self) {
        self.stop_at(Instant::now());
    }

    fn clear(&mut self) {
        let mut scene = self.scene.borrow_mut();
        if let Some(tween) = scene.tweens.get_mut(&self.id) {
            *tween = TweenState::default();
        }
    }

    fn current_progress(&self) -> f32 {
        self.progress_at(Instant::now())
    }
}

impl Drop for Tween {
    fn drop(&mut self) {
        if let Ok(mut scene) = self.scene.try_borrow_mut() {
            scene.tweens.remove(&self.id);
        }
    }
}
