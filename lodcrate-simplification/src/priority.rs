//! Collapse candidate ordering
//!
//! Vertices with the fewest neighbors are removed first. Among vertices with
//! the same neighbor count the larger vertex id goes first.

use crate::adjacency::VertexAdjacency;
use lodcrate_core::{Error, Result, VertexIndex};
use priority_queue::PriorityQueue;
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Queue priority of a vertex; the greatest value is popped first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollapsePriority {
    pub neighbor_count: usize,
    pub vertex: VertexIndex,
}

impl CollapsePriority {
    pub fn of(record: &VertexAdjacency) -> Self {
        Self {
            neighbor_count: record.neighbor_count(),
            vertex: record.vertex,
        }
    }
}

impl PartialOrd for CollapsePriority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CollapsePriority {
    fn cmp(&self, other: &Self) -> Ordering {
        // Fewer neighbors ranks higher, then the larger vertex id
        other
            .neighbor_count
            .cmp(&self.neighbor_count)
            .then(self.vertex.cmp(&other.vertex))
    }
}

/// Max-priority queue of adjacency records, rebuilt before every collapse.
pub struct VertexQueue {
    queue: PriorityQueue<VertexAdjacency, CollapsePriority>,
}

impl VertexQueue {
    pub fn from_adjacency(records: Vec<VertexAdjacency>) -> Self {
        let mut queue = PriorityQueue::with_capacity(records.len());
        for record in records {
            let priority = CollapsePriority::of(&record);
            queue.push(record, priority);
        }
        Self { queue }
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Priority of the next vertex `take_highest` would return
    pub fn peek_priority(&self) -> Option<CollapsePriority> {
        self.queue.peek().map(|(_, priority)| *priority)
    }

    /// Pop the vertex to remove next
    pub fn take_highest(&mut self) -> Option<VertexAdjacency> {
        self.queue.pop().map(|(record, _)| record)
    }

    /// Pop records in priority order until one belongs to `neighbors`.
    ///
    /// Every vertex that still has a neighbor is queued, so a non-empty
    /// neighbor set always finds a match. An empty set or an exhausted queue
    /// means the adjacency was built wrong.
    pub fn take_substitute(&mut self, neighbors: &BTreeSet<VertexIndex>) -> Result<VertexAdjacency> {
        if neighbors.is_empty() {
            return Err(Error::PreconditionViolation(
                "substitute requested for a vertex without neighbors".to_string(),
            ));
        }

        while let Some((record, _)) = self.queue.pop() {
            if neighbors.contains(&record.vertex) {
                return Ok(record);
            }
        }

        Err(Error::PreconditionViolation(format!(
            "no queued vertex among neighbors {:?}",
            neighbors
        )))
    }
}
