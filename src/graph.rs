// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::{Edge, Named, Vertex, VertexId};

/// Represents a road network as an ordered collection of [Vertices](Vertex)
/// with outgoing [Edges](Edge).
///
/// Vertices are kept in insertion order. Removed vertices leave an empty slot behind,
/// so that [VertexIds](VertexId) of the remaining vertices stay valid.
///
/// Vertex names don't need to be unique, but all name-based lookups
/// (which are case-insensitive) only ever return the first match.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Graph {
    slots: Vec<Option<Vertex>>,
    len: usize,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of vertices in the graph.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns an iterator over all [Vertices](Vertex) in the graph, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &Vertex)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.as_ref().map(|v| (VertexId(idx), v)))
    }

    /// Retrieves a [Vertex] by its id.
    pub fn get_vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    /// Finds the id of the first [Vertex] with a matching name (compared case-insensitively).
    pub fn find_vertex(&self, name: &str) -> Option<VertexId> {
        self.iter()
            .find(|(_, v)| v.has_name(name))
            .map(|(id, _)| id)
    }

    /// Finds the first [Vertex] with a matching name (compared case-insensitively).
    pub fn get_vertex_by_name(&self, name: &str) -> Option<&Vertex> {
        self.find_vertex(name).and_then(|id| self.get_vertex(id))
    }

    /// Returns a snapshot of all [Vertices](Vertex), in insertion order.
    pub fn get_vertices(&self) -> Vec<Vertex> {
        self.iter().map(|(_, v)| v.clone()).collect()
    }

    /// Returns a snapshot of all [Edges](Edge): outgoing edges of every vertex,
    /// concatenated in vertex order.
    pub fn get_edges(&self) -> Vec<Edge> {
        self.iter()
            .flat_map(|(_, v)| v.edges.iter().cloned())
            .collect()
    }

    /// Gets all outgoing [Edges](Edge) from a vertex with a given id.
    pub fn edges_from(&self, id: VertexId) -> &[Edge] {
        self.get_vertex(id)
            .map(|v| v.edges.as_slice())
            .unwrap_or_default()
    }

    /// Gets the weight of the first [Edge] from one vertex to another.
    /// If such an edge doesn't exist, returns [f64::INFINITY].
    pub fn get_edge(&self, from: VertexId, to: VertexId) -> f64 {
        self.edges_from(from)
            .iter()
            .find(|e| e.to == to)
            .map(|e| e.weight)
            .unwrap_or(f64::INFINITY)
    }

    /// Appends a [Vertex] to the graph. Names are not checked for duplicates.
    pub fn add_vertex(&mut self, vertex: Vertex) -> VertexId {
        self.slots.push(Some(vertex));
        self.len += 1;
        VertexId(self.slots.len() - 1)
    }

    /// Removes the first [Vertex] with a matching name (compared case-insensitively),
    /// together with all edges (from any vertex) leading to a vertex with that name.
    ///
    /// Pruning goes by name, so if other vertices share the name, they stay in the graph
    /// but lose all of their incoming edges.
    ///
    /// Returns the removed vertex.
    pub fn remove_vertex(&mut self, name: &str) -> Option<Vertex> {
        let id = self.find_vertex(name)?;

        let doomed: Vec<VertexId> = self
            .iter()
            .filter(|(_, v)| v.has_name(name))
            .map(|(id, _)| id)
            .collect();

        let removed = self.slots[id.0].take();
        self.len -= 1;

        for v in self.slots.iter_mut().flatten() {
            v.edges.retain(|e| !doomed.contains(&e.to));
        }

        removed
    }

    /// Attaches an [Edge] to the first vertex named `from_vertex_name`
    /// (compared case-insensitively).
    ///
    /// Nothing happens if `from_vertex_name` is `None`, no such vertex exists,
    /// or the edge leads to a vertex outside of the graph. Returns whether the edge was added.
    pub fn add_edge(&mut self, edge: Edge, from_vertex_name: Option<&str>) -> bool {
        debug_assert!(edge.weight >= 0.0, "negative edge weight: {}", edge.weight);

        let Some(from_name) = from_vertex_name else {
            return false;
        };

        if self.get_vertex(edge.to).is_none() {
            return false;
        }

        match self.find_vertex(from_name) {
            Some(from) => {
                if let Some(v) = self.slots[from.0].as_mut() {
                    v.edges.push(edge);
                }
                true
            }
            None => false,
        }
    }

    /// Removes the first [Edge] named exactly `edge_name` from every vertex.
    /// As edge names are not unique, this may remove multiple edges from the whole graph.
    ///
    /// Returns the number of removed edges.
    pub fn remove_edge(&mut self, edge_name: &str) -> usize {
        let mut removed = 0;
        for v in self.slots.iter_mut().flatten() {
            if let Some(idx) = v.edges.iter().position(|e| e.has_name(edge_name)) {
                v.edges.remove(idx);
                removed += 1;
            }
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> (Graph, [VertexId; 3]) {
        let mut g = Graph::new();
        let a = g.add_vertex(Vertex::new("A", 0.0, 0.0));
        let b = g.add_vertex(Vertex::new("B", 0.0, 1.0));
        let c = g.add_vertex(Vertex::new("C", 0.0, 2.0));
        assert!(g.add_edge(Edge::new("ab", b, 5.0), Some("A")));
        assert!(g.add_edge(Edge::new("bc", c, 5.0), Some("B")));
        assert!(g.add_edge(Edge::new("ac", c, 20.0), Some("A")));
        assert!(g.add_edge(Edge::new("ca", a, 20.0), Some("C")));
        (g, [a, b, c])
    }

    #[test]
    fn add_vertex_preserves_order() {
        let (g, [a, b, c]) = triangle();
        assert_eq!(g.len(), 3);
        let ids: Vec<VertexId> = g.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![a, b, c]);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let mut g = Graph::new();
        g.add_vertex(Vertex::new("Portland", 45.5152, -122.6784));
        let a = g.get_vertex_by_name("Portland").unwrap();
        let b = g.get_vertex_by_name("portland").unwrap();
        assert!(std::ptr::eq(a, b));
        assert!(g.get_vertex_by_name("Salem").is_none());
    }

    #[test]
    fn lookup_returns_first_duplicate() {
        let mut g = Graph::new();
        let first = g.add_vertex(Vertex::new("Springfield", 44.0462, -123.0220));
        g.add_vertex(Vertex::new("springfield", 39.7817, -89.6501));
        assert_eq!(g.find_vertex("SPRINGFIELD"), Some(first));
        assert_eq!(g.get_vertex_by_name("Springfield").unwrap().lat, 44.0462);
    }

    #[test]
    fn get_edges_concatenates_in_vertex_order() {
        let (g, _) = triangle();
        let names: Vec<String> = g.get_edges().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["ab", "ac", "bc", "ca"]);
    }

    #[test]
    fn snapshots_are_detached() {
        let (g, _) = triangle();
        let mut vertices = g.get_vertices();
        vertices[0].name = "Z".to_string();
        vertices.clear();
        let mut edges = g.get_edges();
        edges[0].weight = 1000.0;

        assert_eq!(g.len(), 3);
        assert!(g.get_vertex_by_name("A").is_some());
        assert_eq!(g.get_edges()[0].weight, 5.0);
    }

    #[test]
    fn get_edge() {
        let (g, [a, b, c]) = triangle();
        assert_eq!(g.get_edge(a, b), 5.0);
        assert_eq!(g.get_edge(a, c), 20.0);
        assert!(g.get_edge(b, a).is_infinite());
    }

    #[test]
    fn add_edge_without_source_is_noop() {
        let (mut g, [a, ..]) = triangle();
        assert!(!g.add_edge(Edge::new("x", a, 1.0), None));
        assert!(!g.add_edge(Edge::new("x", a, 1.0), Some("Nowhere")));
        assert_eq!(g.get_edges().len(), 4);
    }

    #[test]
    fn add_edge_to_missing_vertex_is_noop() {
        let (mut g, _) = triangle();
        assert!(!g.add_edge(Edge::new("x", VertexId(42), 1.0), Some("A")));
        assert_eq!(g.get_edges().len(), 4);
    }

    #[test]
    fn add_edge_source_is_case_insensitive() {
        let (mut g, [_, b, _]) = triangle();
        assert!(g.add_edge(Edge::new("cb", b, 5.0), Some("c")));
        assert_eq!(g.get_vertex_by_name("C").unwrap().edges().len(), 2);
    }

    #[test]
    fn remove_vertex_prunes_incoming_edges() {
        let (mut g, [a, b, c]) = triangle();
        let removed = g.remove_vertex("c").unwrap();
        assert_eq!(removed.name, "C");

        assert_eq!(g.len(), 2);
        assert!(g.get_vertex(c).is_none());
        assert!(g.get_vertex_by_name("C").is_none());
        assert!(g.get_edges().iter().all(|e| e.to != c));
        assert!(g.get_edge(a, c).is_infinite());
        assert!(g.edges_from(b).is_empty());

        // Remaining handles are still valid
        assert_eq!(g.get_vertex(a).unwrap().name, "A");
        assert_eq!(g.get_edge(a, b), 5.0);
    }

    #[test]
    fn remove_vertex_with_duplicates() {
        let mut g = Graph::new();
        let p = g.add_vertex(Vertex::new("P", 0.0, 0.0));
        let upper = g.add_vertex(Vertex::new("X", 0.0, 1.0));
        let lower = g.add_vertex(Vertex::new("x", 0.0, 2.0));
        g.add_edge(Edge::new("px", upper, 1.0), Some("P"));
        g.add_edge(Edge::new("px", lower, 1.0), Some("P"));

        let removed = g.remove_vertex("X").unwrap();
        assert_eq!(removed.name, "X");
        assert_eq!(g.len(), 2);

        // The surviving "x" stays, but can't be reached anymore
        assert_eq!(g.find_vertex("x"), Some(lower));
        assert!(g.edges_from(p).is_empty());
        assert!(crate::dijkstra(&g, "P", "x").path.is_empty());
    }

    #[test]
    fn remove_missing_vertex() {
        let (mut g, _) = triangle();
        assert!(g.remove_vertex("D").is_none());
        assert_eq!(g.len(), 3);
        assert_eq!(g.get_edges().len(), 4);
    }

    #[test]
    fn remove_edge_from_every_vertex() {
        let mut g = Graph::new();
        let a = g.add_vertex(Vertex::new("A", 0.0, 0.0));
        let b = g.add_vertex(Vertex::new("B", 0.0, 1.0));
        g.add_edge(Edge::new("I-5", b, 1.0), Some("A"));
        g.add_edge(Edge::new("I-5", b, 2.0), Some("A"));
        g.add_edge(Edge::new("I-5", a, 1.0), Some("B"));

        assert_eq!(g.remove_edge("I-5"), 2);
        assert_eq!(g.edges_from(a).len(), 1);
        assert_eq!(g.edges_from(a)[0].weight, 2.0);
        assert!(g.edges_from(b).is_empty());

        assert_eq!(g.remove_edge("i-5"), 0);
    }
}
