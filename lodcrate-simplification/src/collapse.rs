//! Half-edge collapse on a triangle index buffer

use itertools::Itertools;
use lodcrate_core::VertexIndex;

/// What a single collapse did to the index buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollapseReport {
    /// Corners that referenced the removed vertex and were redirected
    pub rewritten_corners: usize,
    /// Triangles dropped because they degenerated
    pub removed_triangles: usize,
    /// The last triangle was kept as-is so the mesh stays non-empty
    pub kept_last_triangle: bool,
}

/// Merge `remove` into `substitute`.
///
/// Every corner referencing `remove` is redirected to `substitute`. A
/// rewritten triangle that then references `substitute` two or more times
/// has lost its area and is dropped. The surviving triangles are collected
/// into a fresh buffer in their original order, which replaces `indices`.
///
/// The buffer never ends up empty: if every triangle would be dropped, the
/// last input triangle is retained unmodified. Attribute arrays are not
/// touched, so vertex ids keep their meaning after the collapse.
pub fn collapse_half_edge(
    indices: &mut Vec<VertexIndex>,
    remove: VertexIndex,
    substitute: VertexIndex,
) -> CollapseReport {
    let mut report = CollapseReport::default();
    if remove == substitute || indices.len() < 3 {
        return report;
    }

    let mut collapsed = Vec::with_capacity(indices.len());
    let mut last_dropped = None;

    for (&a, &b, &c) in indices.iter().tuples() {
        let original = [a, b, c];
        if !original.contains(&remove) {
            collapsed.extend_from_slice(&original);
            continue;
        }

        let rewritten = original.map(|v| if v == remove { substitute } else { v });
        report.rewritten_corners += original.iter().filter(|&&v| v == remove).count();

        if rewritten.iter().filter(|&&v| v == substitute).count() >= 2 {
            report.removed_triangles += 1;
            last_dropped = Some(original);
        } else {
            collapsed.extend_from_slice(&rewritten);
        }
    }

    if collapsed.is_empty() {
        if let Some(original) = last_dropped {
            collapsed.extend_from_slice(&original);
            report.removed_triangles -= 1;
            report.rewritten_corners -= original.iter().filter(|&&v| v == remove).count();
            report.kept_last_triangle = true;
        }
    }

    *indices = collapsed;
    report
}
