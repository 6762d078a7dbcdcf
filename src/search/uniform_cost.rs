// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::time::Instant;

use super::queue::{path_names, reconstruct_path, Frontier};
use crate::{Edge, Graph, SearchResult};

/// Uses [Dijkstra's algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm)
/// to find the shortest route between two vertices (identified by case-insensitive names).
///
/// Returns [SearchResult::not_found] if either vertex doesn't exist, and
/// an empty path with infinite cost if there is no route between them.
///
/// Queue entries are not removed when a cheaper way to a vertex is found,
/// and the search stops as soon as the goal is taken out of the queue.
/// Outdated entries still count as explored vertices, and their edges as evaluated.
pub fn dijkstra(g: &Graph, start_name: &str, goal_name: &str) -> SearchResult {
    let started_at = Instant::now();

    let (Some(start), Some(goal)) = (g.find_vertex(start_name), g.find_vertex(goal_name)) else {
        return SearchResult::not_found();
    };

    let mut queue = Frontier::default();
    let mut previous: HashMap<_, _> = HashMap::default();
    let mut distances: HashMap<_, f64> = HashMap::default();
    let mut vertices_explored: usize = 0;
    let mut edges_evaluated: usize = 0;

    distances.insert(start, 0.0);
    queue.push(start, 0.0);

    while let Some(item) = queue.pop() {
        vertices_explored += 1;

        if item.at == goal {
            break;
        }

        for &Edge {
            to: neighbor, weight, ..
        } in g.edges_from(item.at)
        {
            edges_evaluated += 1;

            let neighbor_distance = item.score + weight;
            if neighbor_distance < distances.get(&neighbor).cloned().unwrap_or(f64::INFINITY) {
                distances.insert(neighbor, neighbor_distance);
                previous.insert(neighbor, item.at);
                queue.push(neighbor, neighbor_distance);
            }
        }
    }

    let path = reconstruct_path(&previous, start, goal);
    let cost = distances.get(&goal).cloned().unwrap_or(f64::INFINITY);

    log::debug!(
        "dijkstra {} -> {}: {} vertices explored, {} edges evaluated, cost {}",
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
