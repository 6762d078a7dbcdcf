// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::collections::{BinaryHeap, HashMap};

use crate::{Graph, VertexId};

#[derive(Debug, Clone, Copy)]
pub(super) struct QueueItem {
    pub at: VertexId,
    pub score: f64,
    seq: u64,
}

impl PartialEq for QueueItem {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for QueueItem {}

impl PartialOrd for QueueItem {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueItem {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // NOTE: We revert the order of comparison,
        // as lower scores (and earlier insertions) are considered better ("higher"),
        // and Rust's BinaryHeap is a max-heap.
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Min-priority queue of vertices shared by all search engines.
///
/// Items with equal scores are popped in insertion order.
#[derive(Debug, Default)]
pub(super) struct Frontier {
    heap: BinaryHeap<QueueItem>,
    counter: u64,
}

impl Frontier {
    pub fn push(&mut self, at: VertexId, score: f64) {
        self.heap.push(QueueItem {
            at,
            score,
            seq: self.counter,
        });
        self.counter += 1;
    }

    pub fn pop(&mut self) -> Option<QueueItem> {
        self.heap.pop()
    }
}

/// Walks `came_from` back from `goal` and returns the route from `start` to `goal`.
///
/// Returns an empty vector if `goal` can't be traced back to `start`.
pub(super) fn reconstruct_path(
    came_from: &HashMap<VertexId, VertexId>,
    start: VertexId,
    goal: VertexId,
) -> Vec<VertexId> {
    let mut path = vec![goal];
    let mut last = goal;

    while last != start {
        match came_from.get(&last) {
            Some(&prev) => {
                path.push(prev);
                last = prev;
            }
            None => return vec![],
        }
    }

    path.reverse();
    return path;
}

pub(super) fn path_names(g: &Graph, path: &[VertexId]) -> Vec<String> {
    path.iter()
        .filter_map(|&id| g.get_vertex(id))
        .map(|v| v.name.clone())
        .collect()
}
