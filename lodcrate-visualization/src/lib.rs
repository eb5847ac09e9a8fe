//! Frame-driven viewing of progressive meshes
//!
//! This crate drives a [`lodcrate_simplification::SimplificationDriver`]
//! from per-frame input without owning a window or a graphics context:
//! - Key bindings and the manual step cooldown
//! - Autoplay that fully reduces and then fully restores the mesh
//! - Frame time statistics
//! - A [`MeshSink`] seam that receives the mesh as byte buffers every frame

pub mod autoplay;
pub mod config;
pub mod controls;
pub mod session;
pub mod stats;
pub mod upload;

pub use autoplay::*;
pub use config::*;
pub use controls::*;
pub use session::*;
pub use stats::*;
pub use upload::*;

use lodcrate_core::Result;
use std::path::Path;

/// Load a mesh file and open a session on it
pub fn open_session<P: AsRef<Path>, S: MeshSink>(
    path: P,
    config: ViewerConfig,
    sink: S,
) -> Result<ViewerSession<S>> {
    let mesh = lodcrate_io::read_mesh(path)?;
    ViewerSession::new(mesh, config, sink)
}
