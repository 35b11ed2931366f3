//! Demo application hosting the progress bar

mod message;
mod update;
mod view;

use iced::{Subscription, Task, Theme};
use rounded_progress::{ProgressConfig, ProgressIndicator};

pub use message::Message;

/// Demo application state
pub struct App {
    /// Attributes the indicator is built from
    pub config: ProgressConfig,
    pub progress: ProgressIndicator,
    /// Last value requested by the random button
    pub last_target: Option<u32>,
    /// How many times the indicator was torn down and rebuilt
    pub recreations: u64,
}

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        let app = Self::with_config(ProgressConfig::default());
        let load_config = Task::perform(ProgressConfig::load_async(), Message::ConfigLoaded);
        (app, load_config)
    }

    pub fn with_config(config: ProgressConfig) -> Self {
        Self {
            progress: build_indicator(&config),
            config,
            last_target: None,
            recreations: 0,
        }
    }

    pub fn title(&self) -> String {
        format!("Rounded Progress - {:.0}%", self.progress.progress())
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Frame ticks only while a transition is running
    pub fn subscription(&self) -> Subscription<Message> {
        if self.progress.is_animating() {
            iced::window::frames().map(Message::AnimationTick)
        } else {
            Subscription::none()
        }
    }
}

/// Build an indicator from config, falling back to the default style
pub fn build_indicator(config: &ProgressConfig) -> ProgressIndicator {
    match config.style() {
        Ok(style) => ProgressIndicator::new(style),
        Err(e) => {
            tracing::warn!("Falling back to default progress style: {}", e);
            ProgressIndicator::default()
        }
    }
}
