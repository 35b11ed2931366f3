//! Primitive UI elements - atomic building blocks
//!
//! This module contains the lowest-level UI components that implement
//! iced's `canvas::Program` trait directly.
//!
//! # Design Principles
//!
//! - **No business logic**: Primitives must not import from `crate::app`
//! - **Generic Message types**: Use type parameters for flexibility
//! - **Backend-agnostic drawing**: Layout goes through the [`Surface`] trait
//!
//! # Contents
//!
//! - [`ProgressIndicator`] - Rounded horizontal progress bar using Canvas

pub mod rounded_progress_bar;
pub mod surface;

pub use rounded_progress_bar::{ProgressIndicator, ProgressValue, SavedState, Style};
pub use surface::Surface;
