// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::time::Instant;

use super::queue::{path_names, reconstruct_path, Frontier};
use crate::{Edge, Graph, SearchResult, VertexId};

/// Uses [greedy best-first search](https://en.wikipedia.org/wiki/Best-first_search)
/// to find a route between two vertices (identified by case-insensitive names).
///
/// Vertices are expanded in order of their great-circle distance to the goal,
/// ignoring the distance already travelled - the resulting route is usually found
/// quickly, but it is not guaranteed to be the shortest one. Every vertex remembers
/// only the vertex it was discovered from first. As a vertex is queued only on its
/// first discovery, later discoveries add nothing to `vertices_explored`; only
/// their edge evaluations are counted.
///
/// The returned cost is the sum of actual edge weights along the route.
/// Returns [SearchResult::not_found] if either vertex doesn't exist, and
/// an empty path with infinite cost if there is no route between them.
pub fn greedy_best_first(g: &Graph, start_name: &str, goal_name: &str) -> SearchResult {
    let started_at = Instant::now();

    let (Some(start), Some(goal)) = (g.find_vertex(start_name), g.find_vertex(goal_name)) else {
        return SearchResult::not_found();
    };
    let Some(goal_vertex) = g.get_vertex(goal) else {
        return SearchResult::not_found();
    };

    let heuristic = |id: VertexId| {
        g.get_vertex(id)
            .map(|v| v.distance_to(goal_vertex))
            .unwrap_or(f64::INFINITY)
    };

    let mut queue = Frontier::default();
    let mut came_from: HashMap<VertexId, VertexId> = HashMap::default();
    let mut vertices_explored: usize = 0;
    let mut edges_evaluated: usize = 0;

    queue.push(start, heuristic(start));

    while let Some(item) = queue.pop() {
        vertices_explored += 1;

        if item.at == goal {
            break;
        }

        for &Edge { to: neighbor, .. } in g.edges_from(item.at) {
            edges_evaluated += 1;

            // Every vertex enters the queue at most once, so it's also expanded at most once
            if neighbor == start || came_from.contains_key(&neighbor) {
                continue;
            }

            came_from.insert(neighbor, item.at);
            queue.push(neighbor, heuristic(neighbor));
        }
    }

    let path = reconstruct_path(&came_from, start, goal);
    let cost = path_cost(g, &path);

    log::debug!(
        "greedy best-first {} -> {}: {} vertices explored, {} edges evaluated, cost {}",
        start_name,
        goal_name,
        vertices_explored,
        edges_evaluated,
        cost,
    );

    SearchResult {
        path: path_names(g, &path),
        cost,
        vertices_explored,
        edges_evaluated,
        elapsed: started_at.elapsed(),
    }
}

/// Sums weights of the first edges joining consecutive vertices of a path.
/// Returns [f64::INFINITY] for an empty path.
fn path_cost(g: &Graph, path: &[VertexId]) -> f64 {
    if path.is_empty() {
        return f64::INFINITY;
    }

    path.windows(2).map(|pair| g.get_edge(pair[0], pair[1])).sum()
}
