//! Progress bar configuration persistence
//!
//! The attribute set a host supplies once when building the bar. Stored as
//! JSON in the platform config directory; missing keys take defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use iced::Color;
use serde::{Deserialize, Serialize};

use crate::ui::primitives::Style;

const FILE_NAME: &str = "progress.json";

/// Progress bar attributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressConfig {
    /// Track color as `#RRGGBB` or `#RRGGBBAA`
    pub progress_background_color: String,
    /// Fill color as `#RRGGBB` or `#RRGGBBAA`
    pub progress_color: String,
    /// Transition length for animated updates
    pub animation_duration_in_millis: u64,
    /// Draw a growing dot for values hidden under the rounded cap
    pub compensate_when_progress_is_low: bool,
    /// Initial value, clamped to 0-100
    pub progress: i32,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            progress_background_color: "#000000".to_string(),
            progress_color: "#ffffff".to_string(),
            animation_duration_in_millis: 300,
            compensate_when_progress_is_low: false,
            progress: 0,
        }
    }
}

impl ProgressConfig {
    /// Get the config file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "rounded-progress", "RoundedProgress")
            .map(|dirs| dirs.config_dir().join(FILE_NAME))
    }

    /// Load config from file, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            return Self::default();
        };
        let content = std::fs::read_to_string(&path);
        Self::from_read(&path, content)
    }

    /// Async variant of [`load`](Self::load) for use inside `Task::perform`
    pub async fn load_async() -> Self {
        let Some(path) = Self::file_path() else {
            return Self::default();
        };
        let content = tokio::fs::read_to_string(&path).await;
        Self::from_read(&path, content)
    }

    /// Shared fallback for both loaders: unreadable or invalid files yield defaults
    fn from_read(path: &Path, content: std::io::Result<String>) -> Self {
        match content {
            Ok(content) => Self::parse(&content).unwrap_or_else(|e| {
                tracing::warn!("Invalid progress config {:?}: {}", path, e);
                Self::default()
            }),
            Err(e) => {
                tracing::debug!("Using default progress config ({:?}): {}", path, e);
                Self::default()
            }
        }
    }

    /// Load config from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::parse(&content)
    }

    fn parse(content: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Save config to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| ConfigError::Io(e.to_string()))?;
        Ok(())
    }

    /// Resolve into an immutable [`Style`]
    pub fn style(&self) -> Result<Style, ConfigError> {
        Ok(Style::default()
            .track_color(parse_color(&self.progress_background_color)?)
            .fill_color(parse_color(&self.progress_color)?)
            .animation_duration(Duration::from_millis(self.animation_duration_in_millis))
            .compensate_low_progress(self.compensate_when_progress_is_low)
            .initial_progress(self.progress.clamp(0, 100) as f32))
    }
}

fn parse_color(value: &str) -> Result<Color, ConfigError> {
    value
        .trim()
        .parse::<Color>()
        .map_err(|_| ConfigError::InvalidColor(value.to_string()))
}

/// Errors that can occur with the config
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Io(String),
    Parse(String),
    InvalidColor(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::InvalidColor(value) => write!(f, "Invalid color: {:?}", value),
        }
    }
}

impl std::error::Error for ConfigError {}
