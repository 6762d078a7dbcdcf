// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::Graph;

/// Outcome of a route search.
///
/// `path` is empty if either endpoint doesn't exist or no route was found;
/// `cost` is only meaningful for non-empty paths (it's [f64::INFINITY] otherwise).
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Names of the vertices along the route, from start to goal.
    pub path: Vec<String>,

    /// Total length of the route, in miles.
    pub cost: f64,

    /// Number of vertices taken out of the priority queue.
    pub vertices_explored: usize,

    /// Number of outgoing edges examined.
    pub edges_evaluated: usize,

    /// Wall-clock duration of the search.
    pub elapsed: Duration,
}

impl SearchResult {
    /// Result returned when start or goal don't exist in the graph.
    pub fn not_found() -> Self {
        Self {
            path: Vec::default(),
            cost: f64::INFINITY,
            vertices_explored: 0,
            edges_evaluated: 0,
            elapsed: Duration::ZERO,
        }
    }

    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Error returned when parsing an unrecognized [Algorithm] name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm: {0:?} (expected dijkstra, greedy or astar)")]
pub struct UnknownAlgorithm(pub String);

/// Available route search engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Dijkstra,
    GreedyBestFirst,
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Self::Dijkstra, Self::GreedyBestFirst, Self::AStar];

    /// Finds a route between two vertices (identified by case-insensitive names)
    /// with the selected engine.
    pub fn run(self, g: &Graph, start: &str, goal: &str) -> SearchResult {
        match self {
            Self::Dijkstra => super::dijkstra(g, start, goal),
            Self::GreedyBestFirst => super::greedy_best_first(g, start, goal),
            Self::AStar => super::a_star(g, start, goal),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dijkstra => write!(f, "Dijkstra"),
            Self::GreedyBestFirst => write!(f, "Greedy Best-First Search"),
            Self::AStar => write!(f, "A* Search"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "dijkstra" => Ok(Self::Dijkstra),
            "2" | "greedy" | "best-first" | "greedy-best-first" => Ok(Self::GreedyBestFirst),
            "3" | "astar" | "a*" | "a-star" => Ok(Self::AStar),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}
