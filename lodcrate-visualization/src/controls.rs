//! Input events and rate limiting

use crate::upload::PolygonMode;
use std::time::Duration;

/// Discrete input delivered to a [`crate::ViewerSession`].
///
/// Platform layers send `ReduceRequested`/`SplitRequested` every frame the
/// corresponding key is held; the session rate-limits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerEvent {
    ReduceRequested,
    SplitRequested,
    SetPolygonMode(PolygonMode),
    ToggleAutoplay,
    /// A frame boundary, `now` measured from session start
    Tick { now: Duration },
}

impl ViewerEvent {
    /// Default key bindings: `r` reduce, `s` split, `l`/`f`/`p` polygon
    /// mode, `a` autoplay.
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'r' => Some(Self::ReduceRequested),
            's' => Some(Self::SplitRequested),
            'l' => Some(Self::SetPolygonMode(PolygonMode::Line)),
            'f' => Some(Self::SetPolygonMode(PolygonMode::Fill)),
            'p' => Some(Self::SetPolygonMode(PolygonMode::Point)),
            'a' => Some(Self::ToggleAutoplay),
            _ => None,
        }
    }
}

/// Fires at most once per `interval`.
#[derive(Debug, Clone)]
pub struct Cooldown {
    interval: Duration,
    last_fired: Option<Duration>,
}

impl Cooldown {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_fired: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether firing at `now` would be allowed
    pub fn is_ready(&self, now: Duration) -> bool {
        match self.last_fired {
            Some(last) => now.saturating_sub(last) >= self.interval,
            None => true,
        }
    }

    /// Fire if ready, recording `now` as the last firing time
    pub fn try_fire(&mut self, now: Duration) -> bool {
        if !self.is_ready(now) {
            return false;
        }
        self.last_fired = Some(now);
        true
    }

    pub fn reset(&mut self) {
        self.last_fired = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(ViewerEvent::from_key('r'), Some(ViewerEvent::ReduceRequested));
        assert_eq!(ViewerEvent::from_key('S'), Some(ViewerEvent::SplitRequested));
        assert_eq!(
            ViewerEvent::from_key('l'),
            Some(ViewerEvent::SetPolygonMode(PolygonMode::Line))
        );
        assert_eq!(ViewerEvent::from_key('x'), None);
    }

    #[test]
    fn test_cooldown_first_fire_is_immediate() {
        let mut cooldown = Cooldown::new(ms(500));
        assert!(cooldown.try_fire(ms(0)));
    }

    #[test]
    fn test_cooldown_blocks_until_interval_passes() {
        let mut cooldown = Cooldown::new(ms(500));
        assert!(cooldown.try_fire(ms(100)));
        assert!(!cooldown.try_fire(ms(116)));
        assert!(!cooldown.try_fire(ms(599)));
        assert!(cooldown.try_fire(ms(600)));
        assert!(!cooldown.is_ready(ms(700)));
    }

    #[test]
    fn test_held_key_fires_once_per_interval() {
        let mut cooldown = Cooldown::new(ms(500));
        let fired = (0..120).filter(|frame| cooldown.try_fire(ms(frame * 16))).count();
        // 120 frames at 16 ms span 1.9 s: fires at 0, 512, 1024, 1536
        assert_eq!(fired, 4);
    }

    #[test]
    fn test_reset() {
        let mut cooldown = Cooldown::new(ms(500));
        assert!(cooldown.try_fire(ms(0)));
        cooldown.reset();
        assert!(cooldown.try_fire(ms(10)));
    }
}
