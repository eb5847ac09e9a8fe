//! Step-wise simplification driver
//!
//! Owns the live mesh and its history and applies exactly one collapse or
//! one split per call. A failed step never mutates anything.

use crate::adjacency::build_adjacency;
use crate::collapse::{collapse_half_edge, CollapseReport};
use crate::history::SimplificationHistory;
use crate::priority::VertexQueue;
use crate::split::vertex_split;
use lodcrate_core::{Error, Mesh, Result, VertexIndex};
use tracing::{debug, info};

/// The vertex pair chosen for the next half-edge collapse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollapseCandidate {
    pub remove: VertexIndex,
    pub substitute: VertexIndex,
    /// Neighbor count of `remove` when it was selected
    pub neighbor_count: usize,
}

/// Pick the vertex with the fewest neighbors and the highest ranked
/// neighbor to merge it into.
pub fn select_collapse(mesh: &Mesh) -> Result<CollapseCandidate> {
    let records = build_adjacency(&mesh.indices, mesh.vertex_count())?;
    let mut queue = VertexQueue::from_adjacency(records);

    let removed = queue.take_highest().ok_or_else(|| {
        Error::PreconditionViolation("no vertex with neighbors left to collapse".to_string())
    })?;
    let substitute = queue.take_substitute(&removed.neighbors)?;

    Ok(CollapseCandidate {
        remove: removed.vertex,
        substitute: substitute.vertex,
        neighbor_count: removed.neighbor_count(),
    })
}

/// Progressive mesh: reduce by collapsing, restore by splitting.
#[derive(Debug, Clone)]
pub struct SimplificationDriver {
    mesh: Mesh,
    history: SimplificationHistory,
    last_collapse: Option<(CollapseCandidate, CollapseReport)>,
}

impl SimplificationDriver {
    pub fn new(mesh: Mesh) -> Result<Self> {
        mesh.validate()?;
        Ok(Self {
            mesh,
            history: SimplificationHistory::new(),
            last_collapse: None,
        })
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn history(&self) -> &SimplificationHistory {
        &self.history
    }

    pub fn history_depth(&self) -> usize {
        self.history.depth()
    }

    pub fn triangle_count(&self) -> usize {
        self.mesh.triangle_count()
    }

    /// The most recent collapse that has not been split back
    pub fn last_collapse(&self) -> Option<&(CollapseCandidate, CollapseReport)> {
        self.last_collapse.as_ref()
    }

    /// No further collapse is possible
    pub fn is_fully_reduced(&self) -> bool {
        self.mesh.triangle_count() <= 1
    }

    /// Every collapse has been undone
    pub fn is_full_detail(&self) -> bool {
        self.history.is_empty()
    }

    pub fn into_mesh(self) -> Mesh {
        self.mesh
    }

    /// Collapse one vertex.
    ///
    /// Returns `Ok(false)` without changes once a single triangle is left.
    /// Candidate selection runs before the snapshot is taken, so an
    /// [`Error::PreconditionViolation`] leaves mesh and history as they were.
    pub fn step_reduce(&mut self) -> Result<bool> {
        if self.is_fully_reduced() {
            info!("cannot reduce further, only one triangle left");
            return Ok(false);
        }

        let candidate = select_collapse(&self.mesh)?;
        let before = self.mesh.triangle_count();

        self.history.push(&self.mesh);
        let report = collapse_half_edge(&mut self.mesh.indices, candidate.remove, candidate.substitute);

        debug!(
            remove = candidate.remove,
            substitute = candidate.substitute,
            neighbors = candidate.neighbor_count,
            triangles_before = before,
            triangles_after = self.mesh.triangle_count(),
            depth = self.history.depth(),
            "half-edge collapse"
        );

        self.last_collapse = Some((candidate, report));
        Ok(true)
    }

    /// Undo the most recent collapse.
    ///
    /// Returns `false` without changes when the mesh is at full detail.
    pub fn step_split(&mut self) -> bool {
        if !vertex_split(&mut self.mesh, &mut self.history) {
            info!("nothing to split, mesh is at full detail");
            return false;
        }

        self.last_collapse = None;
        debug!(
            triangles = self.mesh.triangle_count(),
            depth = self.history.depth(),
            "vertex split"
        );
        true
    }

    /// Reduce until at most `target_triangles` remain or the floor is hit.
    /// Returns the number of collapses applied.
    pub fn reduce_to(&mut self, target_triangles: usize) -> Result<usize> {
        let mut steps = 0;
        while self.mesh.triangle_count() > target_triangles && self.step_reduce()? {
            steps += 1;
        }
        Ok(steps)
    }

    /// Split back to full detail. Returns the number of splits applied.
    pub fn restore_all(&mut self) -> usize {
        let mut steps = 0;
        while self.step_split() {
            steps += 1;
        }
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lodcrate_core::Point3f;

    fn make_single_triangle() -> Mesh {
        Mesh::from_positions_and_triangles(
            vec![
                Point3f::new(0.0, 0.0, 0.0),
                Point3f::new(1.0, 0.0, 0.0),
                Point3f::new(0.5, 1.0, 0.0),
            ],
            &[[0, 1, 2]],
        )
        .unwrap()
    }

    fn make_tetrahedron() -> Mesh {
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
    fn test_select_collapse_on_tetrahedron() {
        let candidate = select_collapse(&make_tetrahedron()).unwrap();
        assert_eq!(candidate.remove, 3);
        assert_eq!(candidate.substitute, 2);
        assert_eq!(candidate.neighbor_count, 3);
    }

    #[test]
    fn test_select_collapse_without_neighbors() {
        let mut mesh = make_single_triangle();
        mesh.indices = vec![0, 0, 0, 1, 1, 1];
        assert!(matches!(
            select_collapse(&mesh),
            Err(Error::PreconditionViolation(_))
        ));
    }

    #[test]
    fn test_tetrahedron_single_reduce() {
        let mut driver = SimplificationDriver::new(make_tetrahedron()).unwrap();
        assert!(driver.step_reduce().unwrap());
        assert_eq!(driver.triangle_count(), 2);
        assert_eq!(driver.mesh().indices.len() % 3, 0);
        assert_eq!(driver.history_depth(), 1);

        let (candidate, report) = driver.last_collapse().unwrap();
        assert_eq!((candidate.remove, candidate.substitute), (3, 2));
        assert_eq!(report.removed_triangles, 2);
    }

    #[test]
    fn test_tetrahedron_down_to_one_triangle() {
        let mut driver = SimplificationDriver::new(make_tetrahedron()).unwrap();
        assert!(driver.step_reduce().unwrap());
        assert!(driver.step_reduce().unwrap());
        assert_eq!(driver.triangle_count(), 1);
        assert!(driver.is_fully_reduced());
        assert!(!driver.step_reduce().unwrap());
        assert_eq!(driver.history_depth(), 2);
    }

    #[test]
    fn test_reduce_single_triangle_is_noop() {
        let mut driver = SimplificationDriver::new(make_single_triangle()).unwrap();
        for _ in 0..3 {
            assert!(!driver.step_reduce().unwrap());
        }
        assert_eq!(driver.mesh(), &make_single_triangle());
        assert_eq!(driver.history_depth(), 0);
    }

    #[test]
    fn test_split_at_full_detail_is_noop() {
        let mut driver = SimplificationDriver::new(make_tetrahedron()).unwrap();
        for _ in 0..3 {
            assert!(!driver.step_split());
        }
        assert_eq!(driver.mesh(), &make_tetrahedron());
        assert!(driver.is_full_detail());
    }

    #[test]
    fn test_reduce_then_split_round_trip() {
        let mut driver = SimplificationDriver::new(make_tetrahedron()).unwrap();
        assert!(driver.step_reduce().unwrap());
        assert!(driver.step_split());
        assert_eq!(driver.mesh(), &make_tetrahedron());
        assert!(driver.last_collapse().is_none());
    }

    #[test]
    fn test_failed_selection_leaves_state_untouched() {
        let mut mesh = make_single_triangle();
        mesh.indices = vec![0, 0, 0, 1, 1, 1];
        let mut driver = SimplificationDriver::new(mesh.clone()).unwrap();

        assert!(matches!(
            driver.step_reduce(),
            Err(Error::PreconditionViolation(_))
        ));
        assert_eq!(driver.mesh(), &mesh);
        assert_eq!(driver.history_depth(), 0);
    }

    #[test]
    fn test_reduce_to_and_restore_all() {
        let mut driver = SimplificationDriver::new(make_tetrahedron()).unwrap();
        assert_eq!(driver.reduce_to(0).unwrap(), 2);
        assert_eq!(driver.triangle_count(), 1);
        assert_eq!(driver.restore_all(), 2);
        assert_eq!(driver.mesh(), &make_tetrahedron());
    }

    #[test]
    fn test_rejects_invalid_mesh() {
        let mut mesh = make_single_triangle();
        mesh.indices.push(0);
        assert!(SimplificationDriver::new(mesh).is_err());
    }
}
