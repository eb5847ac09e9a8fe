//! Core data structures for lodcrate
//!
//! This crate provides the indexed triangle mesh shared by the simplification
//! engine, the loaders and the viewer, together with the common error type.

pub mod point;
pub mod mesh;
pub mod error;

pub use point::*;
pub use mesh::*;
pub use error::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point2, Point3, Vector3};
