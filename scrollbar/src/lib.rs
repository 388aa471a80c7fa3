pub mod animation;
pub mod calculator;
pub mod canvas;
pub mod controller;
pub mod error;
pub mod state;
pub mod style;
pub mod surface;
pub mod transitions;
pub mod types;

pub use animation::{AnimationSlot, Property, PropertyValue};
pub use calculator::ScrollGeometryCalculator;
pub use canvas::{Canvas, Node, Tween};
pub use controller::Scrollbar;
pub use error::{Result, ScrollbarError};
pub use state::ScrollState;
pub use style::ScrollbarStyle;
pub use surface::{Animation, Surface};
pub use transitions::{Easing, TransitionConfig};
pub use types::*;
