//! Seam between the viewer session and a render/upload backend
//!
//! The session never talks to a graphics API. Once per frame it hands the
//! backend a [`MeshBuffers`] view of the live mesh, which borrows the raw
//! arrays as bytes ready for buffer uploads.

use bytemuck::{Pod, Zeroable};
use lodcrate_core::{Mesh, Result};

/// Rasterization mode for the mesh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PolygonMode {
    #[default]
    Fill,
    Line,
    Point,
}

/// Interleaved vertex layout for backends that want a single vertex buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct GpuVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
    pub normal: [f32; 3],
}

/// Borrowed byte views of a mesh for one frame's upload
#[derive(Debug, Clone, Copy)]
pub struct MeshBuffers<'a> {
    pub positions: &'a [u8],
    pub uvs: &'a [u8],
    pub normals: &'a [u8],
    /// `u16` element buffer
    pub indices: &'a [u8],
    pub index_count: usize,
    pub vertex_count: usize,
    mesh: &'a Mesh,
}

impl<'a> MeshBuffers<'a> {
    pub fn from_mesh(mesh: &'a Mesh) -> Self {
        Self {
            positions: mesh.position_bytes(),
            uvs: mesh.uv_bytes(),
            normals: mesh.normal_bytes(),
            indices: mesh.index_bytes(),
            index_count: mesh.indices.len(),
            vertex_count: mesh.vertex_count(),
            mesh,
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.index_count / 3
    }

    /// All vertex slots interleaved, orphaned ones included, so the index
    /// buffer can be used unchanged
    pub fn interleaved(&self) -> Vec<GpuVertex> {
        (0..self.mesh.vertex_count())
            .map(|i| GpuVertex {
                position: self.mesh.positions[i].coords.into(),
                uv: self.mesh.uvs[i].coords.into(),
                normal: self.mesh.normals[i].into(),
            })
            .collect()
    }
}

/// Render/upload backend fed once per frame
pub trait MeshSink {
    fn upload(&mut self, buffers: &MeshBuffers<'_>, mode: PolygonMode) -> Result<()>;
}
