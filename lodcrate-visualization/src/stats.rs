//! Frame timing

use std::time::Duration;

/// Counts frames and yields the average frame time once per window.
#[derive(Debug, Clone)]
pub struct FrameStats {
    window: Duration,
    window_start: Duration,
    frames: u32,
    total_frames: u64,
}

impl FrameStats {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            window_start: Duration::ZERO,
            frames: 0,
            total_frames: 0,
        }
    }

    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    /// Record a frame at `now`. Returns the average milliseconds per frame
    /// when a full window has elapsed.
    pub fn record_frame(&mut self, now: Duration) -> Option<f64> {
        self.frames += 1;
        self.total_frames += 1;
        if self.window.is_zero() || now.saturating_sub(self.window_start) < self.window {
            return None;
        }

        let ms_per_frame = self.window.as_secs_f64() * 1000.0 / f64::from(self.frames);
        self.frames = 0;
        // Advance by whole windows so a long stall does not shift later reports
        while now.saturating_sub(self.window_start) >= self.window {
            self.window_start += self.window;
        }
        Some(ms_per_frame)
    }
}
