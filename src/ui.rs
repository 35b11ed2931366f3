//! UI building blocks
//!
//! - **Primitives** (`primitives`): canvas programs such as the progress bar
//! - **Animation** (`animation`): easing curves and time-driven transitions
//! - **Theme** (`theme`): default colors and demo widget styles

pub mod animation;
pub mod primitives;
pub mod theme;
