//! Progressive mesh simplification
//!
//! This crate reduces an indexed triangle mesh one vertex at a time and can
//! undo every step exactly:
//! - Adjacency construction from the index buffer
//! - Fewest-neighbors-first candidate selection
//! - Half-edge collapse with degenerate triangle removal
//! - Snapshot history and vertex split
//!
//! ```rust
//! use lodcrate_core::{Mesh, Point3f};
//! use lodcrate_simplification::SimplificationDriver;
//!
//! let mesh = Mesh::from_positions_and_triangles(
//!     vec![
//!         Point3f::new(0.0, 0.0, 0.0),
//!         Point3f::new(1.0, 0.0, 0.0),
//!         Point3f::new(0.5, 1.0, 0.0),
//!         Point3f::new(0.5, 0.5, 1.0),
//!     ],
//!     &[[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]],
//! )?;
//!
//! let mut driver = SimplificationDriver::new(mesh.clone())?;
//! assert!(driver.step_reduce()?);
//! assert_eq!(driver.triangle_count(), 2);
//! assert!(driver.step_split());
//! assert_eq!(driver.mesh(), &mesh);
//! # Ok::<(), lodcrate_core::Error>(())
//! ```

pub mod adjacency;
pub mod priority;
pub mod collapse;
pub mod history;
pub mod split;
pub mod driver;
pub mod neighbor_count;

pub use adjacency::*;
pub use priority::*;
pub use collapse::*;
pub use history::*;
pub use split::*;
pub use driver::*;
pub use neighbor_count::*;

use lodcrate_core::{Mesh, Result};

/// Simplify a mesh by reducing the number of triangles
pub trait MeshSimplifier {
    /// Simplify mesh with target reduction ratio (0.0 = no reduction, 1.0 = maximum reduction)
    fn simplify(&self, mesh: &Mesh, reduction_ratio: f32) -> Result<Mesh>;
}
