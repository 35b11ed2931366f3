//! Application messages

use iced::time::Instant;
use rounded_progress::ProgressConfig;

#[derive(Debug, Clone)]
pub enum Message {
    /// Config finished loading from disk
    ConfigLoaded(ProgressConfig),
    /// Animate to a random value
    Randomize,
    /// Frame timestamp while a transition runs
    AnimationTick(Instant),
    /// Save state, rebuild the indicator and restore it
    Recreate,
    /// Rebuild with low-progress compensation switched on or off
    ToggleCompensation(bool),
}
