//! Rounded horizontal progress bar primitive
//!
//! A pill-shaped progress indicator drawn on iced's Canvas with animated
//! value transitions.
//!
//! # Design
//!
//! The indicator owns its value (0-100), an immutable [`Style`] and at most one
//! [`AnimationRun`]. It has no timer of its own: the host forwards frame
//! timestamps to [`ProgressIndicator::tick`] while [`ProgressIndicator::is_animating`]
//! is true. Every value change clears the canvas cache, which is how the
//! indicator requests a redraw.
//!
//! With low-progress compensation enabled, values whose fill would be hidden
//! under the rounded cap are drawn as a dot that grows into the bar.

mod geometry;
mod state;

use std::fmt;
use std::time::{Duration, Instant};

use iced::widget::Canvas;
use iced::widget::canvas::{Cache, Geometry, Program};
use iced::{Color, Element, Length, Rectangle, Renderer, Size, Theme, mouse};
use serde_json::Value;
use tracing::{debug, warn};

pub use geometry::{BarGeometry, Capsule, FillShape};
pub use state::SavedState;

use super::surface::Surface;
use crate::ui::animation::{AnimationRun, Easing};
use crate::ui::theme;

/// Default transition length
pub const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_millis(300);

/// Numeric inputs accepted by [`ProgressIndicator::set_progress`]
///
/// Every primitive integer and float converts; the result is clamped to 0-100
/// afterwards, so precision loss on huge integers is irrelevant.
pub trait ProgressValue: Copy {
    fn to_progress(self) -> f64;
}

macro_rules! impl_progress_value {
    ($($ty:ty),*) => {
        $(
            impl ProgressValue for $ty {
                fn to_progress(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_progress_value!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Visual configuration, fixed once the indicator is built
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    /// Background track color
    pub track_color: Color,
    /// Filled segment color
    pub fill_color: Color,
    /// Length of animated transitions
    pub animation_duration: Duration,
    /// Draw a growing dot instead of a hidden sliver at low values
    pub compensate_low_progress: bool,
    /// Value shown right after construction (clamped to 0-100)
    pub initial_progress: f32,
    /// Curve used by animated transitions
    pub easing: Easing,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            track_color: theme::DEFAULT_TRACK,
            fill_color: theme::DEFAULT_FILL,
            animation_duration: DEFAULT_ANIMATION_DURATION,
            compensate_low_progress: false,
            initial_progress: 0.0,
            easing: Easing::DECELERATE,
        }
    }
}

impl Style {
    pub fn track_color(mut self, color: Color) -> Self {
        self.track_color = color;
        self
    }

    pub fn fill_color(mut self, color: Color) -> Self {
        self.fill_color = color;
        self
    }

    pub fn animation_duration(mut self, duration: Duration) -> Self {
        self.animation_duration = duration;
        self
    }

    pub fn compensate_low_progress(mut self, compensate: bool) -> Self {
        self.compensate_low_progress = compensate;
        self
    }

    pub fn initial_progress(mut self, progress: f32) -> Self {
        self.initial_progress = progress;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

/// Rounded horizontal progress bar
pub struct ProgressIndicator {
    style: Style,
    /// Currently rendered value, lags the target while animating
    progress: f32,
    run: Option<AnimationRun>,
    revision: u64,
    cache: Cache,
}

impl fmt::Debug for ProgressIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressIndicator")
            .field("style", &self.style)
            .field("progress", &self.progress)
            .field("run", &self.run)
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}

impl Default for ProgressIndicator {
    fn default() -> Self {
        Self::new(Style::default())
    }
}

impl ProgressIndicator {
    pub fn new(style: Style) -> Self {
        let progress = clamp_progress(f64::from(style.initial_progress));
        let mut indicator = Self {
            style,
            progress,
            run: None,
            revision: 0,
            cache: Cache::new(),
        };
        indicator.set_progress(progress, false);
        indicator
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Currently rendered value (0-100)
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Value the indicator is heading to
    pub fn target(&self) -> f32 {
        self.run.map_or(self.progress, |run| run.to())
    }

    pub fn is_animating(&self) -> bool {
        self.run.is_some()
    }

    /// Number of redraw requests issued so far
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Set the progress value, clamped to 0-100
    ///
    /// An animated set replaces any transition in flight; a non-animated set
    /// cancels it and jumps straight to `target`.
    pub fn set_progress(&mut self, target: impl ProgressValue, animated: bool) {
        self.set_progress_at(target, animated, Instant::now());
    }

    /// [`set_progress`](Self::set_progress) with an explicit start time
    pub fn set_progress_at(&mut self, target: impl ProgressValue, animated: bool, now: Instant) {
        let target = clamp_progress(target.to_progress());

        if !animated || self.style.animation_duration.is_zero() {
            if let Some(run) = self.run.take() {
                debug!(
                    "Progress jump to {:.2} cancelled transition to {:.2}",
                    target,
                    run.to()
                );
            }
            self.apply(target);
            return;
        }

        let run = AnimationRun::new(
            self.progress,
            target,
            now,
            self.style.animation_duration,
            self.style.easing,
        );
        match self.run.replace(run) {
            Some(previous) => debug!(
                "Progress transition {:.2} -> {:.2} supersedes transition to {:.2}",
                self.progress,
                target,
                previous.to()
            ),
            None => debug!(
                "Progress transition {:.2} -> {:.2} over {:?}",
                self.progress,
                target,
                self.style.animation_duration
            ),
        }
    }

    /// Advance the active transition to `now`
    ///
    /// Does nothing when idle. The final tick lands exactly on the target.
    pub fn tick(&mut self, now: Instant) {
        let Some(run) = self.run else {
            return;
        };

        let sample = run.sample(now);
        self.apply(f64::from(sample.value()));

        if sample.is_finished() {
            self.run = None;
            debug!("Progress transition finished at {:.2}", self.progress);
        }
    }

    fn apply(&mut self, value: impl Into<f64>) {
        self.progress = clamp_progress(value.into());
        self.request_redraw();
    }

    fn request_redraw(&mut self) {
        self.revision = self.revision.wrapping_add(1);
        self.cache.clear();
    }

    /// Layout for the current value on a surface of `size`
    pub fn geometry(&self, size: Size) -> BarGeometry {
        BarGeometry::compute(size, self.progress, self.style.compensate_low_progress)
    }

    /// Draw the track and the fill onto `surface`
    pub fn render<S: Surface>(&self, surface: &mut S, size: Size) {
        let geometry = self.geometry(size);

        if let Some(track) = geometry.track {
            let color = self.style.track_color;
            surface.draw_rounded_line(track.from, track.to, track.thickness, color);
        }
        if let Some(fill) = geometry.fill.capsule() {
            let color = self.style.fill_color;
            surface.draw_rounded_line(fill.from, fill.to, fill.thickness, color);
        }
    }

    /// The bar has no intrinsic size and takes whatever the layout offers
    pub fn measure(&self, proposed: Size) -> Size {
        proposed
    }

    /// Snapshot the rendered value together with the host's own state
    pub fn save_state(&self, host_state: Option<Value>) -> SavedState {
        SavedState {
            progress: f64::from(self.progress),
            host_state,
        }
    }

    /// Restore from a blob written by [`save_state`](Self::save_state)
    ///
    /// The value is applied without animation. Missing or malformed blobs
    /// fall back to the configured initial value. Returns the host state
    /// stored alongside the value.
    pub fn restore_state(&mut self, blob: Option<&Value>) -> Option<Value> {
        let Some(blob) = blob else {
            self.set_progress(self.style.initial_progress, false);
            return None;
        };

        match SavedState::from_value(blob) {
            Some(saved) => {
                self.set_progress(saved.progress, false);
                saved.host_state
            }
            None => {
                warn!("Ignoring malformed progress state: {}", blob);
                self.set_progress(self.style.initial_progress, false);
                None
            }
        }
    }

    /// Build a canvas element for this indicator
    pub fn view<'a, Message: 'a>(
        &'a self,
        width: impl Into<Length>,
        height: impl Into<Length>,
    ) -> Element<'a, Message> {
        Canvas::new(self).width(width).height(height).into()
    }
}

impl<Message> Program<Message> for ProgressIndicator {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let size = self.measure(bounds.size());
        let geometry = self.cache.draw(renderer, size, |frame| {
            self.render(frame, size);
        });

        vec![geometry]
    }
}

/// Clamp any input to 0-100, mapping NaN to 0
fn clamp_progress(value: f64) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0) as f32
    }
}
