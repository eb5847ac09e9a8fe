//! OBJ format support

use crate::error::IoError;
use crate::indexer::index_corners;
use crate::MeshReader;
use itertools::Itertools;
use lodcrate_core::{Mesh, Point2f, Point3f, Result, Vector3f};
use obj::{IndexTuple, ObjData};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::info;

pub struct ObjReader;

impl ObjReader {
    /// Parse OBJ text from any reader.
    ///
    /// Polygons are fan triangulated. Corners without texture coordinates
    /// get `(0, 0)`; if the file carries no normals at all, area weighted
    /// vertex normals are computed after indexing.
    pub fn read_from<R: Read>(reader: R) -> Result<Mesh> {
        let data = ObjData::load_buf(reader).map_err(|e| IoError::ParseError {
            message: e.to_string(),
        })?;

        let mut positions = Vec::new();
        let mut uvs = Vec::new();
        let mut normals = Vec::new();

        let polygons = data
            .objects
            .iter()
            .flat_map(|object| &object.groups)
            .flat_map(|group| &group.polys);

        for polygon in polygons {
            let corners = &polygon.0;
            let Some((first, rest)) = corners.split_first() else {
                continue;
            };
            for (second, third) in rest.iter().tuple_windows() {
                for corner in [first, second, third] {
                    let (position, uv, normal) = resolve_corner(&data, corner)?;
                    positions.push(position);
                    uvs.push(uv);
                    normals.push(normal);
                }
            }
        }

        let mut mesh = index_corners(&positions, &uvs, &normals)?;
        if data.normal.is_empty() {
            mesh.normals = mesh.calculate_vertex_normals();
        }
        Ok(mesh)
    }
}

fn resolve_corner(data: &ObjData, corner: &IndexTuple) -> Result<(Point3f, Point2f, Vector3f)> {
    let &IndexTuple(p, t, n) = corner;

    let position = data.position.get(p).ok_or_else(|| IoError::ParseError {
        message: format!("position index {} out of range", p + 1),
    })?;
    let uv = match t {
        Some(t) => data.texture.get(t).copied().ok_or_else(|| IoError::ParseError {
            message: format!("texture index {} out of range", t + 1),
        })?,
        None => [0.0, 0.0],
    };
    let normal = match n {
        Some(n) => data.normal.get(n).copied().ok_or_else(|| IoError::ParseError {
            message: format!("normal index {} out of range", n + 1),
        })?,
        None => [0.0, 0.0, 0.0],
    };

    Ok((
        Point3f::new(position[0], position[1], position[2]),
        Point2f::new(uv[0], uv[1]),
        Vector3f::new(normal[0], normal[1], normal[2]),
    ))
}

impl MeshReader for ObjReader {
    fn read_mesh<P: AsRef<Path>>(path: P) -> Result<Mesh> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => IoError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => IoError::Io(e),
        })?;

        let mesh = Self::read_from(BufReader::new(file))?;
        info!(
            path = %path.display(),
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            "loaded OBJ mesh"
        );
        Ok(mesh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const UNIT_SQUARE: &str = "\
# unit square with uvs and normals
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
vt 0 0
vt 1 0
vt 1 1
vt 0 1
vn 0 0 1
f 1/1/1 2/2/1 3/3/1 4/4/1
";

    #[test]
    fn test_quad_is_fan_triangulated() {
        let mesh = ObjReader::read_from(UNIT_SQUARE.as_bytes()).unwrap();
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.indices, vec![0, 1, 2, 0, 2, 3]);
        assert_relative_eq!(mesh.uvs[2].x, 1.0);
        assert_relative_eq!(mesh.uvs[2].y, 1.0);
        assert_relative_eq!(mesh.normals[3].z, 1.0);
    }

    #[test]
    fn test_positions_only_computes_normals() {
        let source = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";
        let mesh = ObjReader::read_from(source.as_bytes()).unwrap();
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.uvs[1], Point2f::origin());
        for normal in &mesh.normals {
            assert_relative_eq!(normal.z, 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_shared_positions_with_distinct_uvs_stay_separate() {
        let source = "\
v 0 0 0
v 1 0 0
v 0 1 0
v 1 1 0
vt 0 0
vt 1 0
vt 0 1
vt 0.5 0.5
f 1/1 2/2 3/3
f 2/4 4/2 3/3
";
        let mesh = ObjReader::read_from(source.as_bytes()).unwrap();
        assert_eq!(mesh.triangle_count(), 2);
        // Position 2 appears with two different uvs
        assert_eq!(mesh.vertex_count(), 5);
        mesh.validate().unwrap();
    }

    #[test]
    fn test_missing_file() {
        let result = ObjReader::read_mesh("does/not/exist.obj");
        match result {
            Err(lodcrate_core::Error::Io(e)) => {
                assert_eq!(e.kind(), std::io::ErrorKind::NotFound);
                assert!(e.to_string().contains("does/not/exist.obj"));
            }
            other => panic!("expected a not-found I/O error, got {other:?}"),
        }
    }

    #[test]
    fn test_read_mesh_from_disk() {
        let path = std::env::temp_dir().join(format!(
            "lodcrate_io_read_mesh_from_disk_{}.obj",
            std::process::id()
        ));
        std::fs::write(&path, UNIT_SQUARE).unwrap();
        let mesh = ObjReader::read_mesh(&path).unwrap();
        assert_eq!(mesh.triangle_count(), 2);
        let _ = std::fs::remove_file(&path);
    }
}
