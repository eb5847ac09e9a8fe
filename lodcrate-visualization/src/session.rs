//! Frame-driven viewer session
//!
//! A [`ViewerSession`] owns the progressive mesh and reacts to
//! [`ViewerEvent`]s. Every `Tick` applies at most one reduce or split step,
//! then hands the current mesh to the [`MeshSink`].

use crate::autoplay::{Autoplay, AutoplayStep};
use crate::config::ViewerConfig;
use crate::controls::{Cooldown, ViewerEvent};
use crate::stats::FrameStats;
use crate::upload::{MeshBuffers, MeshSink, PolygonMode};
use lodcrate_core::{Mesh, Result};
use lodcrate_simplification::SimplificationDriver;
use std::time::Duration;
use tracing::{debug, info};

/// What the last tick did to the mesh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// No step requested or due
    Idle,
    Reduced,
    Split,
    /// A step was requested but the mesh was already at that end
    AtBoundary,
    /// A manual step was requested during the cooldown
    CoolingDown,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    pub outcome: StepOutcome,
    pub triangles: usize,
    pub history_depth: usize,
    /// Set once per stats window
    pub ms_per_frame: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ManualStep {
    Reduce,
    Split,
}

pub struct ViewerSession<S: MeshSink> {
    driver: SimplificationDriver,
    sink: S,
    polygon_mode: PolygonMode,
    autoplay_enabled: bool,
    autoplay: Autoplay,
    manual_cooldown: Cooldown,
    pending: Option<ManualStep>,
    stats: FrameStats,
}

impl<S: MeshSink> ViewerSession<S> {
    pub fn new(mesh: Mesh, config: ViewerConfig, sink: S) -> Result<Self> {
        let driver = SimplificationDriver::new(mesh)?;
        info!(
            vertices = driver.mesh().vertex_count(),
            triangles = driver.triangle_count(),
            autoplay = config.autoplay,
            "viewer session started"
        );
        Ok(Self {
            driver,
            sink,
            polygon_mode: config.polygon_mode,
            autoplay_enabled: config.autoplay,
            autoplay: Autoplay::new(config.autoplay_split_interval),
            manual_cooldown: Cooldown::new(config.manual_cooldown),
            pending: None,
            stats: FrameStats::new(config.stats_interval),
        })
    }

    pub fn driver(&self) -> &SimplificationDriver {
        &self.driver
    }

    pub fn mesh(&self) -> &Mesh {
        self.driver.mesh()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn polygon_mode(&self) -> PolygonMode {
        self.polygon_mode
    }

    pub fn autoplay_enabled(&self) -> bool {
        self.autoplay_enabled
    }

    pub fn total_frames(&self) -> u64 {
        self.stats.total_frames()
    }

    pub fn into_parts(self) -> (SimplificationDriver, S) {
        (self.driver, self.sink)
    }

    /// Feed one event. Returns a report only for `Tick`.
    pub fn handle_event(&mut self, event: ViewerEvent) -> Result<Option<TickReport>> {
        match event {
            ViewerEvent::ReduceRequested => self.pending = Some(ManualStep::Reduce),
            ViewerEvent::SplitRequested => self.pending = Some(ManualStep::Split),
            ViewerEvent::SetPolygonMode(mode) => {
                if mode != self.polygon_mode {
                    debug!(?mode, "polygon mode changed");
                }
                self.polygon_mode = mode;
            }
            ViewerEvent::ToggleAutoplay => {
                self.autoplay_enabled = !self.autoplay_enabled;
                info!(enabled = self.autoplay_enabled, "autoplay toggled");
            }
            ViewerEvent::Tick { now } => return self.tick(now).map(Some),
        }
        Ok(None)
    }

    /// Run one frame: at most one mesh step, then upload.
    ///
    /// A manual request that passes the cooldown takes the frame. Otherwise
    /// autoplay, when enabled, gets the frame.
    pub fn tick(&mut self, now: Duration) -> Result<TickReport> {
        let manual = match self.pending.take() {
            Some(step) => Some(self.apply_manual(step, now)?),
            None => None,
        };
        let outcome = match manual {
            Some(outcome) if outcome != StepOutcome::CoolingDown => outcome,
            _ if self.autoplay_enabled => match self.autoplay.advance(&mut self.driver, now)? {
                AutoplayStep::Reduced => StepOutcome::Reduced,
                AutoplayStep::Split => StepOutcome::Split,
                AutoplayStep::Turned(_) => StepOutcome::AtBoundary,
                AutoplayStep::Waiting => StepOutcome::Idle,
            },
            rejected => rejected.unwrap_or(StepOutcome::Idle),
        };

        let buffers = MeshBuffers::from_mesh(self.driver.mesh());
        self.sink.upload(&buffers, self.polygon_mode)?;

        let ms_per_frame = self.stats.record_frame(now);
        if let Some(ms) = ms_per_frame {
            info!(ms_per_frame = ms, triangles = self.driver.triangle_count(), "frame time");
        }

        Ok(TickReport {
            outcome,
            triangles: self.driver.triangle_count(),
            history_depth: self.driver.history_depth(),
            ms_per_frame,
        })
    }

    fn apply_manual(&mut self, step: ManualStep, now: Duration) -> Result<StepOutcome> {
        if !self.manual_cooldown.try_fire(now) {
            return Ok(StepOutcome::CoolingDown);
        }
        let changed = match step {
            ManualStep::Reduce => self.driver.step_reduce()?,
            ManualStep::Split => self.driver.step_split(),
        };
        Ok(match (changed, step) {
            (false, _) => StepOutcome::AtBoundary,
            (true, ManualStep::Reduce) => StepOutcome::Reduced,
            (true, ManualStep::Split) => StepOutcome::Split,
        })
    }
}
