// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

//! Shortest-route search over a road network of named places.
//!
//! The network is a weighted directed [Graph] of [Vertices](Vertex) joined by
//! one-way [Edges](Edge). Routes can be found with [Dijkstra's algorithm](dijkstra),
//! [greedy best-first search](greedy_best_first) or [A*](a_star); the two latter
//! use the great-circle [earth_distance] to the goal as their heuristic.
//! Graphs are usually populated from CSV tables with the [loader] module.
//!
//! # Example
//!
//! ```
//! let mut g = pathfinder::Graph::new();
//! let portland = g.add_vertex(pathfinder::Vertex::new("Portland", 45.5152, -122.6784));
//! let salem = g.add_vertex(pathfinder::Vertex::new("Salem", 44.9429, -123.0351));
//! g.add_edge(pathfinder::Edge::new("I-5", salem, 47.0), Some("Portland"));
//! g.add_edge(pathfinder::Edge::new("I-5", portland, 47.0), Some("Salem"));
//!
//! let route = pathfinder::a_star(&g, "portland", "salem");
//! assert_eq!(route.path, vec!["Portland", "Salem"]);
//! assert_eq!(route.cost, 47.0);
//! ```

mod distance;
mod graph;
pub mod loader;
pub mod report;
mod search;

pub use distance::earth_distance;
pub use graph::Graph;
pub use search::{a_star, dijkstra, greedy_best_first, Algorithm, SearchResult, UnknownAlgorithm};

/// Handle of a [Vertex] inside the [Graph] which owns it.
///
/// Handles stay valid after other vertices are removed; a handle of a removed
/// vertex never resolves again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub(crate) usize);

/// Common contract of named graph elements.
pub trait Named {
    fn name(&self) -> &str;

    fn set_name(&mut self, name: String);

    /// Checks whether the element is identified by `name`. Exact comparison by default.
    fn has_name(&self, name: &str) -> bool {
        self.name() == name
    }
}

/// Represents a place in the road network.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub(crate) edges: Vec<Edge>,
    visited: bool,
}

impl Vertex {
    /// Creates a new [Vertex] without any outgoing [Edges](Edge).
    pub fn new<S: Into<String>>(name: S, lat: f64, lon: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            lon,
            edges: Vec::default(),
            visited: false,
        }
    }

    /// Returns outgoing [Edges](Edge), in the order they were added.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn coordinates(&self) -> (f64, f64) {
        (self.lat, self.lon)
    }

    pub fn set_coordinates(&mut self, lat: f64, lon: f64) {
        self.lat = lat;
        self.lon = lon;
    }

    /// Free-form bookkeeping flag. Route search doesn't read nor write it.
    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub fn set_visited(&mut self, visited: bool) {
        self.visited = visited;
    }

    /// Great-circle distance to another vertex, in miles.
    pub fn distance_to(&self, other: &Vertex) -> f64 {
        earth_distance(self.lat, self.lon, other.lat, other.lon)
    }
}

impl Named for Vertex {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    /// Vertex names are compared case-insensitively.
    fn has_name(&self, name: &str) -> bool {
        self.name
            .chars()
            .flat_map(char::to_lowercase)
            .eq(name.chars().flat_map(char::to_lowercase))
    }
}

/// Represents an outgoing (one-way) road from a specific [Vertex].
///
/// `weight` is the road length in miles and must not be negative.
/// The destination is not owned by the edge - it's a handle into the same [Graph].
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub name: String,
    pub to: VertexId,
    pub weight: f64,
}

impl Edge {
    pub fn new<S: Into<String>>(name: S, to: VertexId, weight: f64) -> Self {
        Self {
            name: name.into(),
            to,
            weight,
        }
    }
}

impl Named for Edge {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_name_is_case_insensitive() {
        let v = Vertex::new("Portland", 45.5152, -122.6784);
        assert!(v.has_name("Portland"));
        assert!(v.has_name("portland"));
        assert!(v.has_name("PORTLAND"));
        assert!(!v.has_name("Portlan"));
    }

    #[test]
    fn edge_name_is_exact() {
        let e = Edge::new("I-5", VertexId(0), 1.0);
        assert!(e.has_name("I-5"));
        assert!(!e.has_name("i-5"));
    }

    #[test]
    fn set_name() {
        let mut v = Vertex::new("Portland", 0.0, 0.0);
        v.set_name("Salem".to_string());
        assert_eq!(v.name(), "Salem");

        let mut e = Edge::new("I-5", VertexId(0), 1.0);
        e.set_name("US-26".to_string());
        assert_eq!(e.name(), "US-26");
    }

    #[test]
    fn visited_flag() {
        let mut v = Vertex::new("Bend", 44.0582, -121.3153);
        assert!(!v.is_visited());
        v.set_visited(true);
        assert!(v.is_visited());
    }
}
