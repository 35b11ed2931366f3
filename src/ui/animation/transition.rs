//! Time-driven value transition
//!
//! A single run from one value to another. The run owns no timer: the host
//! feeds it timestamps (usually from `iced::window::frames()`) and reads back
//! the interpolated value.

use std::time::{Duration, Instant};

use super::Easing;

/// Result of sampling a run at a point in time
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sample {
    /// Still running, value is the eased approximation
    Running(f32),
    /// Elapsed time reached the duration, value is exactly the target
    Finished(f32),
}

impl Sample {
    pub fn value(self) -> f32 {
        match self {
            Sample::Running(value) | Sample::Finished(value) => value,
        }
    }

    pub fn is_finished(self) -> bool {
        matches!(self, Sample::Finished(_))
    }
}

/// One in-flight transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationRun {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
    easing: Easing,
}

impl AnimationRun {
    pub fn new(
        from: f32,
        to: f32,
        started_at: Instant,
        duration: Duration,
        easing: Easing,
    ) -> Self {
        Self {
            from,
            to,
            started_at,
            duration,
            easing,
        }
    }

    pub fn from(&self) -> f32 {
        self.from
    }

    pub fn to(&self) -> f32 {
        self.to
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Interpolated value at `now`
    ///
    /// Timestamps before the start count as zero elapsed time.
    pub fn sample(&self, now: Instant) -> Sample {
        let elapsed = now.saturating_duration_since(self.started_at);
        if elapsed >= self.duration {
            return Sample::Finished(self.to);
        }

        let fraction = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let eased = self.easing.apply(fraction);
        Sample::Running(self.from + (self.to - self.from) * eased)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(from: f32, to: f32) -> (AnimationRun, Instant) {
        let start = Instant::now();
        let duration = Duration::from_millis(300);
        let run = AnimationRun::new(from, to, start, duration, Easing::DECELERATE);
        (run, start)
    }

    #[test]
    fn test_finishes_exactly_on_target() {
        let (run, start) = run(12.5, 87.3);
        assert_eq!(run.sample(start + Duration::from_millis(300)), Sample::Finished(87.3));
        assert_eq!(run.sample(start + Duration::from_secs(5)), Sample::Finished(87.3));
    }

    #[test]
    fn test_starts_at_origin() {
        let (run, start) = run(40.0, 10.0);
        assert_eq!(run.sample(start), Sample::Running(40.0));
    }

    #[test]
    fn test_midpoint_uses_easing() {
        let (run, start) = run(0.0, 100.0);
        let sample = run.sample(start + Duration::from_millis(150));
        assert!(!sample.is_finished());
        assert!((sample.value() - 75.0).abs() < 0.01);
    }

    #[test]
    fn test_descending_run_never_rises() {
        let (run, start) = run(90.0, 30.0);
        let mut previous = run.from();
        for ms in (0..=300).step_by(10) {
            let value = run.sample(start + Duration::from_millis(ms)).value();
            assert!(value <= previous);
            assert!(value >= run.to());
            previous = value;
        }
    }
}
