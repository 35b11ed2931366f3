//! Animation helpers shared by canvas primitives

mod easing;
mod transition;

pub use easing::Easing;
pub use transition::{AnimationRun, Sample};
