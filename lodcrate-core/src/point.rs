//! Point and vector type aliases

use nalgebra::{Point2, Point3, Vector3};

/// A 3D point with floating point coordinates
pub type Point3f = Point3<f32>;

/// A 2D point, used for texture coordinates
pub type Point2f = Point2<f32>;

/// A 3D vector with floating point components
pub type Vector3f = Vector3<f32>;

/// Identifier of a vertex in an indexed mesh.
///
/// Index buffers are 16 bit, matching `GL_UNSIGNED_SHORT` style element
/// buffers, so a mesh can address at most [`MAX_VERTICES`] vertices.
pub type VertexIndex = u16;

/// Largest number of vertices a [`crate::Mesh`] can address
pub const MAX_VERTICES: usize = VertexIndex::MAX as usize + 1;
