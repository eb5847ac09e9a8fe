//! Vertex split, the inverse of a half-edge collapse

use crate::history::SimplificationHistory;
use lodcrate_core::Mesh;

/// Undo the most recent collapse by restoring the top snapshot.
///
/// The live mesh is overwritten wholesale (indices and every attribute
/// array), so triangles the collapse removed come back exactly. Returns
/// `false` and leaves `mesh` untouched when there is nothing to split.
pub fn vertex_split(mesh: &mut Mesh, history: &mut SimplificationHistory) -> bool {
    match history.pop() {
        Some(snapshot) => {
            *mesh = snapshot.into_mesh();
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collapse::collapse_half_edge;
    use lodcrate_core::{Point3f, Vector3f};

    fn tetrahedron() -> Mesh {
        Mesh::from_positions_and_triangles(
            vec![
                Point3f::new(0.0, 0.0, 0.0),
                Point3f::new(1.0, 0.0, 0.0),
                Point3f::new(0.5, 1.0, 0.0),
                Point3f::new(0.5, 0.5, 1.0),
            ],
            &[[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]],
        )
        .unwrap()
    }

    #[test]
    fn test_split_on_empty_history() {
        let mut mesh = tetrahedron();
        let mut history = SimplificationHistory::new();
        for _ in 0..3 {
            assert!(!vertex_split(&mut mesh, &mut history));
        }
        assert_eq!(mesh, tetrahedron());
    }

    #[test]
    fn test_split_restores_collapsed_state() {
        let original = tetrahedron();
        let mut mesh = original.clone();
        let mut history = SimplificationHistory::new();

        history.push(&mesh);
        collapse_half_edge(&mut mesh.indices, 3, 2);
        assert_eq!(mesh.triangle_count(), 2);

        assert!(vertex_split(&mut mesh, &mut history));
        assert_eq!(mesh, original);
        assert!(history.is_empty());
    }

    #[test]
    fn test_split_overwrites_attributes() {
        let original = tetrahedron();
        let mut mesh = original.clone();
        let mut history = SimplificationHistory::new();
        history.push(&mesh);

        mesh.normals[0] = Vector3f::new(0.0, 0.0, -1.0);
        mesh.positions.push(Point3f::new(7.0, 7.0, 7.0));

        assert!(vertex_split(&mut mesh, &mut history));
        assert_eq!(mesh, original);
    }
}
