// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::time::Instant;

use super::queue::{path_names, reconstruct_path, Frontier};
use crate::{Edge, Graph, SearchResult, VertexId};

/// Uses the [A* algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm)
/// to find the shortest route between two vertices (identified by case-insensitive names).
///
/// The great-circle distance to the goal is used as the heuristic, thus the route
/// is guaranteed to be the shortest only if no edge is shorter than the crow-flies
/// distance between its endpoints.
///
/// Returns [SearchResult::not_found] if either vertex doesn't exist, and
/// an empty path with infinite cost if there is no route between them.
pub fn a_star(g: &Graph, start_name: &str, goal_name: &str) -> SearchResult {
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
    let mut g_scores: HashMap<VertexId, f64> = HashMap::default();
    let mut vertices_explored: usize = 0;
    let mut edges_evaluated: usize = 0;

    g_scores.insert(start, 0.0);
    queue.push(start, heuristic(start));

    while let Some(item) = queue.pop() {
        vertices_explored += 1;

        if item.at == goal {
            break;
        }

        // Contrary to the wikipedia definition, we might keep multiple items in the queue for the same vertex.
        let current_score = g_scores.get(&item.at).cloned().unwrap_or(f64::INFINITY);

        for &Edge {
            to: neighbor, weight, ..
        } in g.edges_from(item.at)
        {
            edges_evaluated += 1;

            // Check if this is the cheapest way to the neighbor
            let tentative_score = current_score + weight;
            if tentative_score >= g_scores.get(&neighbor).cloned().unwrap_or(f64::INFINITY) {
                continue;
            }

            came_from.insert(neighbor, item.at);
            g_scores.insert(neighbor, tentative_score);
            queue.push(neighbor, tentative_score + heuristic(neighbor));
        }
    }

    let path = reconstruct_path(&came_from, start, goal);
    let cost = g_scores.get(&goal).cloned().unwrap_or(f64::INFINITY);

    log::debug!(
        "a* {} -> {}: {} vertices explored, {} edges evaluated, cost {}",
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
