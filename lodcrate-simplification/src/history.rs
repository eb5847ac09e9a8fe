//! Snapshot stack recording the mesh before each collapse

use lodcrate_core::Mesh;

/// Independent copy of a mesh (indices and all attribute arrays).
#[derive(Debug, Clone, PartialEq)]
pub struct MeshSnapshot {
    mesh: Mesh,
}

impl MeshSnapshot {
    pub fn capture(mesh: &Mesh) -> Self {
        Self { mesh: mesh.clone() }
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn triangle_count(&self) -> usize {
        self.mesh.triangle_count()
    }

    pub fn into_mesh(self) -> Mesh {
        self.mesh
    }
}

/// LIFO stack of [`MeshSnapshot`]s.
///
/// Its depth equals the number of collapses that have not been undone.
/// Snapshots are kept until split back through; there is no eviction.
#[derive(Debug, Clone, Default)]
pub struct SimplificationHistory {
    snapshots: Vec<MeshSnapshot>,
}

impl SimplificationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a copy of `mesh` on top of the stack
    pub fn push(&mut self, mesh: &Mesh) {
        self.snapshots.push(MeshSnapshot::capture(mesh));
    }

    /// Remove and return the most recent snapshot
    pub fn pop(&mut self) -> Option<MeshSnapshot> {
        self.snapshots.pop()
    }

    pub fn peek(&self) -> Option<&MeshSnapshot> {
        self.snapshots.last()
    }

    pub fn depth(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}
