//! Viewer configuration

use crate::upload::PolygonMode;
use std::time::Duration;

/// Timing and startup options of a [`crate::ViewerSession`]
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    /// Minimum time between two manual reduce/split steps
    pub manual_cooldown: Duration,
    /// Time between two automatic splits while autoplay restores the mesh
    pub autoplay_split_interval: Duration,
    /// Alternate full reduction and full restoration without input
    pub autoplay: bool,
    /// How often frame timing is reported
    pub stats_interval: Duration,
    pub polygon_mode: PolygonMode,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            manual_cooldown: Duration::from_millis(500),
            autoplay_split_interval: Duration::from_millis(1),
            autoplay: true,
            stats_interval: Duration::from_secs(1),
            polygon_mode: PolygonMode::Fill,
        }
    }
}

impl ViewerConfig {
    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    pub fn with_manual_cooldown(mut self, cooldown: Duration) -> Self {
        self.manual_cooldown = cooldown;
        self
    }

    pub fn with_split_interval(mut self, interval: Duration) -> Self {
        self.autoplay_split_interval = interval;
        self
    }
}
