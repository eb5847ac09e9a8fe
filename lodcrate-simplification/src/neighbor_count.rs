//! Batch simplification by repeated neighbor-count collapses

use crate::driver::SimplificationDriver;
use crate::MeshSimplifier;
use lodcrate_core::{Error, Mesh, Result, VertexIndex};
use std::collections::HashMap;

/// Runs the step-wise driver until a face budget is met.
///
/// The interactive driver keeps orphaned vertices so snapshots stay cheap;
/// a batch result has no history to restore, so by default unreferenced
/// vertices are dropped and the index buffer renumbered.
pub struct NeighborCountSimplifier {
    /// Drop vertices no triangle references after simplifying
    pub compact: bool,
}

impl Default for NeighborCountSimplifier {
    fn default() -> Self {
        Self { compact: true }
    }
}

impl NeighborCountSimplifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_compaction(compact: bool) -> Self {
        Self { compact }
    }
}

impl MeshSimplifier for NeighborCountSimplifier {
    fn simplify(&self, mesh: &Mesh, reduction_ratio: f32) -> Result<Mesh> {
        if mesh.is_empty() {
            return Err(Error::InvalidData("Mesh is empty".to_string()));
        }
        if !(0.0..=1.0).contains(&reduction_ratio) {
            return Err(Error::InvalidData(
                "Reduction ratio must be between 0.0 and 1.0".to_string(),
            ));
        }

        let target = ((1.0 - reduction_ratio) * mesh.triangle_count() as f32) as usize;
        let mut driver = SimplificationDriver::new(mesh.clone())?;
        driver.reduce_to(target.max(1))?;

        let simplified = driver.into_mesh();
        if self.compact {
            compact_unreferenced(&simplified)
        } else {
            Ok(simplified)
        }
    }
}

/// Copy of `mesh` without the vertices no triangle references.
///
/// Surviving vertices keep their relative order. Fails with
/// [`Error::InvalidData`] if `mesh` does not validate.
pub fn compact_unreferenced(mesh: &Mesh) -> Result<Mesh> {
    mesh.validate()?;

    let mut referenced = vec![false; mesh.vertex_count()];
    for &index in &mesh.indices {
        referenced[index as usize] = true;
    }

    let mut remap: HashMap<VertexIndex, VertexIndex> = HashMap::new();
    let mut compacted = Mesh::new();
    for (old, _) in referenced.iter().enumerate().filter(|(_, used)| **used) {
        remap.insert(old as VertexIndex, compacted.positions.len() as VertexIndex);
        compacted.positions.push(mesh.positions[old]);
        compacted.uvs.push(mesh.uvs[old]);
        compacted.normals.push(mesh.normals[old]);
    }
    compacted.indices = mesh.indices.iter().map(|index| remap[index]).collect();
    Ok(compacted)
}
