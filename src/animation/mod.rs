mod clock;
mod easing;

pub use clock::{Animation, AnimationState, interpolate};
pub use easing::{Easing, EasingFunction};
