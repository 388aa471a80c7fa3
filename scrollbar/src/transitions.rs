use std::f32::consts::PI;
use std::time::Duration;

/// Duration and easing of an animated scrollbar change.
///
/// A zero duration means the change is committed synchronously.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TransitionConfig {
    pub duration: Duration,
    pub easing: Easing,
}

impl TransitionConfig {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    pub fn instant() -> Self {
        Self::default()
    }

    pub fn millis(ms: u64, easing: Easing) -> Self {
        Self::new(Duration::from_millis(ms), easing)
    }

    pub fn is_instant(&self) -> bool {
        self.duration.is_zero()
    }
}

/// Easing function for transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    EaseInSine,
    EaseOutSine,
    EaseInOutSine,
    EaseOutBack,
}

impl Easing {
    /// Apply easing to progress. Input is clamped to 0.0..=1.0.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::EaseInSine => 1.0 - (t * PI / 2.0).cos(),
            Easing::EaseOutSine => (t * PI / 2.0).sin(),
            Easing::EaseInOutSine => -((PI * t).cos() - 1.0) / 2.0,
            Easing::EaseOutBack => {
                // Overshoots slightly past 1.0 before settling.
                if t >= 1.0 {
                    return 1.0;
                }
                const C1: f32 = 1.70158;
                const C3: f32 = C1 + 1.0;
                1.0 + C3 * (t - 1.0).powi(3) + C1 * (t - 1.0).powi(2)
            }
        }
    }
}
