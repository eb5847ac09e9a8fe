//! Property-based tests for reduce/split sequences.
//!
//! Run with: cargo test -p lodcrate-simplification -- proptest

use lodcrate_core::{Mesh, Point2f, Point3f, Vector3f, VertexIndex};
use lodcrate_simplification::{build_adjacency, SimplificationDriver};
use proptest::prelude::*;

// =============================================================================
// Strategies for generating random meshes
// =============================================================================

fn arb_position() -> impl Strategy<Value = Point3f> {
    prop::array::uniform3(-10.0..10.0f32).prop_map(|[x, y, z]| Point3f::new(x, y, z))
}

/// Triangle over `n` vertices with three distinct corners.
fn arb_triangle(n: VertexIndex) -> impl Strategy<Value = [VertexIndex; 3]> {
    prop::array::uniform3(0..n).prop_filter("corners must be distinct", |[a, b, c]| {
        a != b && b != c && a != c
    })
}

/// Random triangle soup with arbitrary attributes; triangles may share
/// vertices without sharing edges.
fn arb_mesh() -> impl Strategy<Value = Mesh> {
    (3..24 as VertexIndex).prop_flat_map(|n| {
        let positions = prop::collection::vec(arb_position(), n as usize);
        let uvs = prop::collection::vec((0.0..1.0f32, 0.0..1.0f32), n as usize);
        let triangles = prop::collection::vec(arb_triangle(n), 1..40);
        (positions, uvs, triangles).prop_map(|(positions, uvs, triangles)| Mesh {
            indices: triangles.iter().flatten().copied().collect(),
            uvs: uvs.into_iter().map(|(u, v)| Point2f::new(u, v)).collect(),
            normals: positions.iter().map(|p| Vector3f::new(p.z, p.x, p.y)).collect(),
            positions,
        })
    })
}

proptest! {
    #[test]
    fn proptest_reduce_then_split_is_identity(mesh in arb_mesh(), steps in 0usize..50) {
        let mut driver = SimplificationDriver::new(mesh.clone()).unwrap();
        let mut applied = 0;
        for _ in 0..steps {
            if driver.step_reduce().unwrap() {
                applied += 1;
            }
        }
        prop_assert_eq!(driver.history_depth(), applied);
        for _ in 0..applied {
            prop_assert!(driver.step_split());
        }
        prop_assert!(!driver.step_split());
        prop_assert_eq!(driver.mesh(), &mesh);
    }

    #[test]
    fn proptest_each_reduce_removes_triangles(mesh in arb_mesh()) {
        let mut driver = SimplificationDriver::new(mesh).unwrap();
        loop {
            let before = driver.triangle_count();
            if !driver.step_reduce().unwrap() {
                prop_assert!(before <= 1);
                break;
            }
            prop_assert!(driver.triangle_count() < before);
            prop_assert!(driver.triangle_count() >= 1);
            prop_assert!(driver.mesh().validate().is_ok());
        }
    }

    #[test]
    fn proptest_adjacency_has_no_self_neighbors(mesh in arb_mesh()) {
        for record in build_adjacency(&mesh.indices, mesh.vertex_count()).unwrap() {
            prop_assert!(!record.neighbors.contains(&record.vertex));
            prop_assert!(!record.neighbors.is_empty());
        }
    }
}
