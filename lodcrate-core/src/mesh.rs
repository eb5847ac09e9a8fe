//! Indexed triangle mesh

use crate::error::{Error, Result};
use crate::point::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// An indexed triangle mesh with parallel per-vertex attribute arrays.
///
/// `indices` is a flat triangle list; every entry addresses the same slot in
/// `positions`, `uvs` and `normals`. Simplification only rewrites `indices`,
/// so attribute slots of collapsed vertices stay allocated and vertex ids
/// remain stable until the mesh is replaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    pub indices: Vec<VertexIndex>,
    pub positions: Vec<Point3f>,
    pub uvs: Vec<Point2f>,
    pub normals: Vec<Vector3f>,
}

impl Mesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self {
            indices: Vec::new(),
            positions: Vec::new(),
            uvs: Vec::new(),
            normals: Vec::new(),
        }
    }

    /// Create a mesh from its raw buffers, checking every invariant
    pub fn from_parts(
        indices: Vec<VertexIndex>,
        positions: Vec<Point3f>,
        uvs: Vec<Point2f>,
        normals: Vec<Vector3f>,
    ) -> Result<Self> {
        let mesh = Self {
            indices,
            positions,
            uvs,
            normals,
        };
        mesh.validate()?;
        Ok(mesh)
    }

    /// Create a mesh from positions and triangles.
    ///
    /// Texture coordinates default to the origin and normals are computed
    /// from the triangle geometry.
    pub fn from_positions_and_triangles(
        positions: Vec<Point3f>,
        triangles: &[[VertexIndex; 3]],
    ) -> Result<Self> {
        let uvs = vec![Point2f::origin(); positions.len()];
        let normals = vec![Vector3f::zeros(); positions.len()];
        let indices = triangles.iter().flatten().copied().collect();

        let mut mesh = Self::from_parts(indices, positions, uvs, normals)?;
        mesh.normals = mesh.calculate_vertex_normals();
        Ok(mesh)
    }

    /// Check the structural invariants of the mesh
    pub fn validate(&self) -> Result<()> {
        if self.indices.len() % 3 != 0 {
            return Err(Error::InvalidData(format!(
                "index count {} is not a multiple of 3",
                self.indices.len()
            )));
        }
        if self.positions.len() > MAX_VERTICES {
            return Err(Error::InvalidData(format!(
                "{} vertices exceed the 16-bit index range",
                self.positions.len()
            )));
        }
        if self.uvs.len() != self.positions.len() || self.normals.len() != self.positions.len() {
            return Err(Error::InvalidData(format!(
                "attribute arrays differ in length: {} positions, {} uvs, {} normals",
                self.positions.len(),
                self.uvs.len(),
                self.normals.len()
            )));
        }
        if let Some(&index) = self
            .indices
            .iter()
            .find(|&&i| i as usize >= self.positions.len())
        {
            return Err(Error::InvalidData(format!(
                "index {} out of range for {} vertices",
                index,
                self.positions.len()
            )));
        }
        Ok(())
    }

    /// Number of allocated vertex slots, referenced or not
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles in the index buffer
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Number of distinct vertices referenced by at least one triangle
    pub fn referenced_vertex_count(&self) -> usize {
        self.indices.iter().collect::<HashSet<_>>().len()
    }

    /// Check if the mesh has no triangles
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Iterate over the triangles of the index buffer
    pub fn triangles(&self) -> impl Iterator<Item = [VertexIndex; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
    }

    /// Area weighted vertex normals computed from the current triangles.
    ///
    /// Vertices without a (non-degenerate) triangle get a zero normal.
    pub fn calculate_vertex_normals(&self) -> Vec<Vector3f> {
        let mut normals = vec![Vector3f::zeros(); self.positions.len()];
        for [a, b, c] in self.triangles() {
            let (a, b, c) = (a as usize, b as usize, c as usize);
            let edge1 = self.positions[b] - self.positions[a];
            let edge2 = self.positions[c] - self.positions[a];
            let face_normal = edge1.cross(&edge2);
            normals[a] += face_normal;
            normals[b] += face_normal;
            normals[c] += face_normal;
        }
        for normal in &mut normals {
            if let Some(unit) = normal.try_normalize(f32::EPSILON) {
                *normal = unit;
            }
        }
        normals
    }

    /// Raw bytes of the index buffer, ready for an element buffer upload
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Raw bytes of the position array (three `f32` per vertex)
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Raw bytes of the texture coordinate array (two `f32` per vertex)
    pub fn uv_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.uvs)
    }

    /// Raw bytes of the normal array (three `f32` per vertex)
    pub fn normal_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.normals)
    }

    /// Clear the mesh
    pub fn clear(&mut self) {
        self.indices.clear();
        self.positions.clear();
        self.uvs.clear();
        self.normals.clear();
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}
