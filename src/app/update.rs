//! Message update handlers

use iced::Task;
use rand::Rng;
use serde_json::json;

use super::{App, Message, build_indicator};

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ConfigLoaded(config) => {
                tracing::info!("Progress config loaded: {:?}", config);
                self.config = config;
                self.progress = build_indicator(&self.config);
            }
            Message::Randomize => {
                let target = rand::rng().random_range(0..100u32);
                self.last_target = Some(target);
                self.progress.set_progress(target, true);
            }
            Message::AnimationTick(now) => self.progress.tick(now),
            Message::Recreate => self.recreate(),
            Message::ToggleCompensation(enabled) => {
                self.config.compensate_when_progress_is_low = enabled;
                self.recreate();
            }
        }

        Task::none()
    }

    /// Tear the indicator down and rebuild it across a save/restore boundary
    fn recreate(&mut self) {
        let host_state = json!({
            "recreations": self.recreations,
            "last_target": self.last_target,
        });
        let blob = self.progress.save_state(Some(host_state)).to_value();

        self.progress = build_indicator(&self.config);
        let restored = self.progress.restore_state(Some(&blob));

        self.recreations = restored
            .as_ref()
            .and_then(|state| state.get("recreations"))
            .and_then(|count| count.as_u64())
            .unwrap_or(0)
            + 1;
        self.last_target = restored
            .as_ref()
            .and_then(|state| state.get("last_target"))
            .and_then(|target| target.as_u64())
            .map(|target| target as u32);

        tracing::info!(
            "Progress indicator rebuilt (#{}) at {:.2}",
            self.recreations,
            self.progress.progress()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::time::{Duration, Instant};
    use rounded_progress::ProgressConfig;

    #[test]
    fn test_randomize_starts_transition() {
        let mut app = App::with_config(ProgressConfig::default());
        let _ = app.update(Message::Randomize);

        let target = app.last_target.unwrap();
        assert!(target < 100);
        assert_eq!(app.progress.target(), target as f32);
        assert!(app.progress.is_animating());
    }

    #[test]
    fn test_recreate_keeps_value_and_host_state() {
        let mut app = App::with_config(ProgressConfig::default());
        app.progress.set_progress(33, false);
        app.last_target = Some(33);

        let _ = app.update(Message::Recreate);
        let _ = app.update(Message::Recreate);

        assert_eq!(app.progress.progress(), 33.0);
        assert_eq!(app.recreations, 2);
        assert_eq!(app.last_target, Some(33));
    }

    #[test]
    fn test_toggle_compensation_rebuilds_style() {
        let mut app = App::with_config(ProgressConfig::default());
        app.progress.set_progress(4, false);

        let _ = app.update(Message::ToggleCompensation(true));

        assert!(app.progress.style().compensate_low_progress);
        assert_eq!(app.progress.progress(), 4.0);
    }

    #[test]
    fn test_ticks_drive_transition_to_completion() {
        let mut app = App::with_config(ProgressConfig::default());
        app.progress.set_progress(70, true);

        let _ = app.update(Message::AnimationTick(Instant::now() + Duration::from_secs(1)));

        assert!(!app.progress.is_animating());
        assert_eq!(app.progress.progress(), 70.0);
    }
}
