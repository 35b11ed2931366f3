//! Rounded horizontal progress bar for iced
//!
//! A canvas-drawn progress indicator with pill-shaped caps, eased value
//! transitions, and an optional low-progress mode that keeps tiny values
//! visible as a growing dot.

pub mod features;
pub mod ui;

pub use features::config::{ConfigError, ProgressConfig};
pub use ui::animation::Easing;
pub use ui::primitives::{ProgressIndicator, ProgressValue, SavedState, Style, Surface};
