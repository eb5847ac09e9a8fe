//! Vertex adjacency from a triangle index buffer

use itertools::Itertools;
use lodcrate_core::{Error, Result, VertexIndex};
use std::collections::BTreeSet;

/// A vertex together with the distinct vertices it shares a triangle with.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VertexAdjacency {
    pub vertex: VertexIndex,
    pub neighbors: BTreeSet<VertexIndex>,
}

impl VertexAdjacency {
    pub fn new(vertex: VertexIndex, neighbors: BTreeSet<VertexIndex>) -> Self {
        Self { vertex, neighbors }
    }

    pub fn neighbor_count(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_neighbor(&self, vertex: VertexIndex) -> bool {
        self.neighbors.contains(&vertex)
    }
}

/// Build the neighbor set of every vertex referenced by `indices`.
///
/// Each corner of a triangle records the other two corners as neighbors.
/// A vertex is never its own neighbor, so collapsed corners of degenerate
/// triangles add nothing. Vertices left without neighbors are omitted, which
/// keeps orphaned attribute slots out of every later selection. The result
/// is sorted by vertex id.
pub fn build_adjacency(indices: &[VertexIndex], vertex_count: usize) -> Result<Vec<VertexAdjacency>> {
    if indices.len() % 3 != 0 {
        return Err(Error::InvalidData(format!(
            "index count {} is not a multiple of 3",
            indices.len()
        )));
    }

    let mut neighbors: Vec<BTreeSet<VertexIndex>> = vec![BTreeSet::new(); vertex_count];

    for (&a, &b, &c) in indices.iter().tuples() {
        for (corner, others) in [(a, [b, c]), (b, [a, c]), (c, [a, b])] {
            let set = neighbors.get_mut(corner as usize).ok_or_else(|| {
                Error::InvalidData(format!(
                    "index {} out of range for {} vertices",
                    corner, vertex_count
                ))
            })?;
            set.extend(others.into_iter().filter(|&other| other != corner));
        }
    }

    Ok(neighbors
        .into_iter()
        .enumerate()
        .filter(|(_, set)| !set.is_empty())
        .map(|(vertex, set)| VertexAdjacency::new(vertex as VertexIndex, set))
        .collect())
}
