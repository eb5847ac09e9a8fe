//! Corner deduplication into an indexed mesh
//!
//! Loaders produce one position/uv/normal triple per triangle corner. Corners
//! whose three attributes are bit-identical become a single vertex, the same
//! "index VBO" pass a renderer would do before creating an element buffer.

use crate::error::IoError;
use lodcrate_core::{Mesh, Point2f, Point3f, Result, Vector3f, VertexIndex, MAX_VERTICES};
use std::collections::HashMap;
use tracing::debug;

type CornerKey = [u32; 8];

fn corner_key(position: &Point3f, uv: &Point2f, normal: &Vector3f) -> CornerKey {
    [
        position.x.to_bits(),
        position.y.to_bits(),
        position.z.to_bits(),
        uv.x.to_bits(),
        uv.y.to_bits(),
        normal.x.to_bits(),
        normal.y.to_bits(),
        normal.z.to_bits(),
    ]
}

/// Build an indexed mesh from unindexed triangle corners.
///
/// The three slices are parallel and hold three corners per triangle.
/// Vertices are numbered in order of first appearance.
#[tracing::instrument(level = "debug", skip_all, fields(corners = positions.len()))]
pub fn index_corners(positions: &[Point3f], uvs: &[Point2f], normals: &[Vector3f]) -> Result<Mesh> {
    if uvs.len() != positions.len() || normals.len() != positions.len() {
        return Err(IoError::ParseError {
            message: format!(
                "corner arrays differ in length: {} positions, {} uvs, {} normals",
                positions.len(),
                uvs.len(),
                normals.len()
            ),
        }
        .into());
    }
    if positions.len() % 3 != 0 {
        return Err(IoError::ParseError {
            message: format!("{} corners do not form whole triangles", positions.len()),
        }
        .into());
    }

    let mut lookup: HashMap<CornerKey, VertexIndex> = HashMap::new();
    let mut mesh = Mesh::new();
    mesh.indices.reserve(positions.len());

    for ((position, uv), normal) in positions.iter().zip(uvs).zip(normals) {
        let key = corner_key(position, uv, normal);
        let index = match lookup.get(&key) {
            Some(&index) => index,
            None => {
                if mesh.positions.len() >= MAX_VERTICES {
                    return Err(IoError::TooManyVertices {
                        count: mesh.positions.len() + 1,
                    }
                    .into());
                }
                let index = mesh.positions.len() as VertexIndex;
                mesh.positions.push(*position);
                mesh.uvs.push(*uv);
                mesh.normals.push(*normal);
                lookup.insert(key, index);
                index
            }
        };
        mesh.indices.push(index);
    }

    debug!(
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "indexed corners"
    );
    Ok(mesh)
}
