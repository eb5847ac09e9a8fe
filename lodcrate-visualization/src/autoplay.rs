//! Automatic reduce/restore cycling

use crate::controls::Cooldown;
use lodcrate_core::Result;
use lodcrate_simplification::SimplificationDriver;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoplayPhase {
    /// One collapse per frame until a single triangle is left
    Reducing,
    /// One split per interval until full detail is back
    Splitting,
}

/// What an autoplay frame did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoplayStep {
    Reduced,
    Split,
    /// Boundary reached, phase switched for the next frame
    Turned(AutoplayPhase),
    /// Waiting for the split interval
    Waiting,
}

#[derive(Debug, Clone)]
pub struct Autoplay {
    phase: AutoplayPhase,
    split_timer: Cooldown,
}

impl Autoplay {
    pub fn new(split_interval: Duration) -> Self {
        Self {
            phase: AutoplayPhase::Reducing,
            split_timer: Cooldown::new(split_interval),
        }
    }

    pub fn phase(&self) -> AutoplayPhase {
        self.phase
    }

    /// Advance one frame.
    ///
    /// The frame that hits a boundary changes nothing and only flips the
    /// phase.
    pub fn advance(&mut self, driver: &mut SimplificationDriver, now: Duration) -> Result<AutoplayStep> {
        match self.phase {
            AutoplayPhase::Reducing => {
                if driver.step_reduce()? {
                    return Ok(AutoplayStep::Reduced);
                }
                self.phase = AutoplayPhase::Splitting;
                self.split_timer.reset();
            }
            AutoplayPhase::Splitting => {
                if !self.split_timer.try_fire(now) {
                    return Ok(AutoplayStep::Waiting);
                }
                if driver.step_split() {
                    return Ok(AutoplayStep::Split);
                }
                self.phase = AutoplayPhase::Reducing;
            }
        }
        debug!(phase = ?self.phase, "autoplay turned");
        Ok(AutoplayStep::Turned(self.phase))
    }
}
