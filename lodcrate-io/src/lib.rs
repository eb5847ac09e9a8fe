//! Mesh loading for lodcrate
//!
//! This crate turns mesh files into the indexed [`Mesh`] the simplification
//! engine works on. Wavefront OBJ is supported; corners are deduplicated into
//! a 16-bit index buffer.

pub mod obj;
pub mod indexer;
pub mod error;

pub use error::*;
pub use indexer::index_corners;
pub use obj::ObjReader;

use lodcrate_core::{Mesh, Result};
use std::path::Path;

/// Trait for reading meshes from files
pub trait MeshReader {
    fn read_mesh<P: AsRef<Path>>(path: P) -> Result<Mesh>;
}

/// Auto-detect format and read mesh
pub fn read_mesh<P: AsRef<Path>>(path: P) -> Result<Mesh> {
    let path = path.as_ref();
    match path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_ascii_lowercase())
        .as_deref()
    {
        Some("obj") => obj::ObjReader::read_mesh(path),
        _ => Err(lodcrate_core::Error::UnsupportedFormat(format!(
            "Unsupported mesh format: {:?}",
            path.extension()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_extension() {
        let result = read_mesh("model.stl");
        assert!(matches!(
            result,
            Err(lodcrate_core::Error::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_dispatch_is_case_insensitive() {
        let path = std::env::temp_dir().join(format!(
            "lodcrate_io_dispatch_is_case_insensitive_{}.OBJ",
            std::process::id()
        ));
        std::fs::write(&path, "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n").unwrap();
        let mesh = read_mesh(&path).unwrap();
        assert_eq!(mesh.triangle_count(), 1);
        let _ = std::fs::remove_file(&path);
    }
}
