//! lodcrate-view: drive a progressive mesh session from the terminal.
//!
//! Without `--interactive` the session runs a fixed number of frames with
//! autoplay. With `--interactive` each line read from stdin is a set of
//! keys applied before one frame: `r` reduce, `s` split, `f`/`l`/`p`
//! polygon mode, `a` toggle autoplay, `q` quit.
//!
//! # Logging
//!
//! `RUST_LOG` takes precedence over `-v`:
//! - `-v` session and loader info (frame time, boundaries)
//! - `-vv` every collapse and split
//!
//! ```bash
//! RUST_LOG=lodcrate_simplification=debug lodcrate-view bunny.obj --frames 200
//! ```

use std::io::BufRead;
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use lodcrate_visualization::{
    open_session, MeshBuffers, MeshSink, PolygonMode, ViewerConfig, ViewerEvent, ViewerSession,
};
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Progressive mesh viewer without a window: steps the mesh and logs what a
/// renderer would receive each frame.
#[derive(Parser)]
#[command(name = "lodcrate-view")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input mesh file (OBJ)
    input: PathBuf,

    /// Number of frames to run when not interactive
    #[arg(long, default_value = "600")]
    frames: u64,

    /// Target frame time in milliseconds
    #[arg(long, default_value = "16")]
    frame_ms: u64,

    /// Start with autoplay disabled
    #[arg(long)]
    no_autoplay: bool,

    /// Minimum time between manual steps in milliseconds
    #[arg(long, default_value = "500")]
    cooldown_ms: u64,

    /// Time between autoplay splits in milliseconds
    #[arg(long, default_value = "1")]
    split_interval_ms: u64,

    /// Read key lines from stdin, one frame per line
    #[arg(long, short)]
    interactive: bool,

    /// Increase output verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Sink that records what would be uploaded and logs changes.
#[derive(Default)]
struct LoggingSink {
    last: Option<(usize, PolygonMode)>,
    uploads: u64,
    bytes: u64,
}

impl MeshSink for LoggingSink {
    fn upload(&mut self, buffers: &MeshBuffers<'_>, mode: PolygonMode) -> lodcrate_core::Result<()> {
        self.uploads += 1;
        self.bytes += (buffers.indices.len()
            + buffers.positions.len()
            + buffers.uvs.len()
            + buffers.normals.len()) as u64;

        let current = (buffers.triangle_count(), mode);
        if self.last != Some(current) {
            debug!(triangles = current.0, mode = ?mode, index_bytes = buffers.indices.len(), "mesh uploaded");
            self.last = Some(current);
        }
        Ok(())
    }
}

fn init_tracing(verbose: u8) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = match verbose {
            0 => "warn",
            1 => "lodcrate_visualization=info,lodcrate_simplification=info,lodcrate_io=info,lodcrate_view=info",
            2 => "lodcrate_visualization=debug,lodcrate_simplification=debug,lodcrate_io=debug,lodcrate_view=debug",
            _ => "trace",
        };
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .with(filter)
        .init();
}

fn run_frames(session: &mut ViewerSession<LoggingSink>, frames: u64, frame_time: Duration) -> Result<()> {
    let start = Instant::now();
    for frame in 0..frames {
        session
            .tick(start.elapsed())
            .with_context(|| format!("frame {frame} failed"))?;
        thread::sleep(frame_time);
    }
    Ok(())
}

fn run_interactive(session: &mut ViewerSession<LoggingSink>) -> Result<()> {
    let start = Instant::now();
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        if line.trim() == "q" {
            break;
        }
        for key in line.chars().filter(|c| !c.is_whitespace()) {
            match ViewerEvent::from_key(key) {
                Some(event) => {
                    session.handle_event(event)?;
                }
                None => warn!(%key, "unbound key ignored"),
            }
        }
        let report = session.tick(start.elapsed())?;
        println!(
            "{:?}: {} triangles, depth {}",
            report.outcome, report.triangles, report.history_depth
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = ViewerConfig::default()
        .with_autoplay(!cli.no_autoplay)
        .with_manual_cooldown(Duration::from_millis(cli.cooldown_ms))
        .with_split_interval(Duration::from_millis(cli.split_interval_ms));

    let mut session = open_session(&cli.input, config, LoggingSink::default())
        .with_context(|| format!("failed to open {}", cli.input.display()))?;

    if cli.interactive {
        run_interactive(&mut session)?;
    } else {
        run_frames(&mut session, cli.frames, Duration::from_millis(cli.frame_ms))?;
    }

    let frames = session.total_frames();
    let (driver, sink) = session.into_parts();
    info!(
        frames,
        uploads = sink.uploads,
        uploaded_bytes = sink.bytes,
        triangles = driver.triangle_count(),
        history_depth = driver.history_depth(),
        "session finished"
    );
    Ok(())
}
