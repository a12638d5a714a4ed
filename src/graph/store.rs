//! Adjacency-list storage for undirected weighted graphs

use std::collections::VecDeque;

use petgraph::algo::connected_components;
use petgraph::graph::{NodeIndex, UnGraph};
use serde::Serialize;

use crate::constants::vertices::ALPHABET_SIZE;
use crate::core::{EdgeTriple, VertexId};
use crate::error::PolygonWheelError;

/// One entry of a vertex's adjacency list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeRecord {
    pub neighbor: VertexId,
    pub weight: u32,
}

/// Undirected weighted graph over a fixed universe of lettered vertices
///
/// Each undirected edge is stored as two [`EdgeRecord`]s, one in the list of
/// each endpoint. New records go to the front of a list, so neighbors are
/// always visited most-recently-added first.
///
/// The graph also owns the per-vertex visited markers that the
/// [`CycleFinder`](crate::detector::CycleFinder) uses as scratch state. They
/// are all false whenever no traversal is running.
#[derive(Debug, Clone)]
pub struct WeightedGraph {
    adjacency: Vec<VecDeque<EdgeRecord>>,
    visited: Vec<bool>,
    edge_count: usize,
}

impl Default for WeightedGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl WeightedGraph {
    /// Create a graph over the whole `A..=Z` alphabet
    pub fn new() -> Self {
        Self::empty(ALPHABET_SIZE)
    }

    /// Create a graph over the first `vertex_count` letters
    pub fn with_vertex_count(vertex_count: usize) -> Result<Self, PolygonWheelError> {
        if vertex_count > ALPHABET_SIZE {
            return Err(PolygonWheelError::ConfigurationError {
                message: format!(
                    "A graph holds at most {ALPHABET_SIZE} vertices, {vertex_count} requested"
                ),
            });
        }
        Ok(Self::empty(vertex_count))
    }

    fn empty(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![VecDeque::new(); vertex_count],
            visited: vec![false; vertex_count],
            edge_count: 0,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges, parallel edges counted individually
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Add an undirected edge between `source` and `destination`
    ///
    /// No duplicate detection is done: adding the same pair twice stores two
    /// parallel edges. On error the graph is left unchanged.
    pub fn add_edge(
        &mut self,
        source: VertexId,
        destination: VertexId,
        weight: u32,
    ) -> Result<(), PolygonWheelError> {
        self.check_in_range(source)?;
        self.check_in_range(destination)?;
        if source == destination {
            return Err(PolygonWheelError::SelfLoop {
                label: source.label(),
            });
        }

        self.adjacency[source.index()].push_front(EdgeRecord {
            neighbor: destination,
            weight,
        });
        self.adjacency[destination.index()].push_front(EdgeRecord {
            neighbor: source,
            weight,
        });
        self.edge_count += 1;
        Ok(())
    }

    /// Validate the labels of a parsed triple and add it as an edge
    pub fn add_triple(&mut self, triple: &EdgeTriple) -> Result<(), PolygonWheelError> {
        let source = VertexId::from_label(triple.source)?;
        let destination = VertexId::from_label(triple.destination)?;
        self.add_edge(source, destination, triple.weight)
    }

    fn check_in_range(&self, vertex: VertexId) -> Result<(), PolygonWheelError> {
        if vertex.index() < self.vertex_count() {
            Ok(())
        } else {
            Err(PolygonWheelError::VertexOutOfRange {
                label: vertex.label(),
                vertex_count: self.vertex_count(),
            })
        }
    }

    /// Iterate over every vertex of the universe in index order
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.vertex_count()).filter_map(|index| VertexId::from_index(index).ok())
    }

    /// Vertices with at least one incident edge
    pub fn active_vertices(&self) -> Vec<VertexId> {
        self.vertices()
            .filter(|vertex| !self.adjacency[vertex.index()].is_empty())
            .collect()
    }

    /// Adjacency list of `vertex` in traversal order
    pub fn neighbors(&self, vertex: VertexId) -> &VecDeque<EdgeRecord> {
        &self.adjacency[vertex.index()]
    }

    pub fn degree(&self, vertex: VertexId) -> usize {
        self.adjacency[vertex.index()].len()
    }

    /// Weight of the first edge from `from` to `to` in `from`'s list order
    ///
    /// With parallel edges of different weights, the most recently added one
    /// wins.
    pub fn edge_weight(&self, from: VertexId, to: VertexId) -> Option<u32> {
        self.adjacency
            .get(from.index())?
            .iter()
            .find(|record| record.neighbor == to)
            .map(|record| record.weight)
    }

    pub fn mark_visited(&mut self, vertex: VertexId) {
        self.visited[vertex.index()] = true;
    }

    pub fn clear_visited(&mut self, vertex: VertexId) {
        self.visited[vertex.index()] = false;
    }

    pub fn is_visited(&self, vertex: VertexId) -> bool {
        self.visited[vertex.index()]
    }

    /// Build a petgraph view of the graph, one node per vertex of the universe
    pub fn to_petgraph(&self) -> UnGraph<VertexId, u32> {
        let mut graph = UnGraph::with_capacity(self.vertex_count(), self.edge_count);
        let nodes: Vec<NodeIndex> = self.vertices().map(|v| graph.add_node(v)).collect();

        for vertex in self.vertices() {
            for record in self.neighbors(vertex) {
                // Each undirected edge is stored twice; keep the lower-index half
                if vertex < record.neighbor {
                    graph.add_edge(
                        nodes[vertex.index()],
                        nodes[record.neighbor.index()],
                        record.weight,
                    );
                }
            }
        }

        graph
    }

    /// Structural statistics of the graph
    pub fn stats(&self) -> GraphStats {
        let active_vertices = self.active_vertices().len();
        let isolated = self.vertex_count() - active_vertices;
        // Every isolated vertex forms its own component in the petgraph view
        let components = connected_components(&self.to_petgraph()) - isolated;

        GraphStats {
            vertices: self.vertex_count(),
            active_vertices,
            edges: self.edge_count,
            components,
            circuit_rank: (self.edge_count + components).saturating_sub(active_vertices),
        }
    }
}

/// Size and connectivity summary of a [`WeightedGraph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub vertices: usize,
    pub active_vertices: usize,
    pub edges: usize,
    /// Connected components among active vertices
    pub components: usize,
    /// Number of independent cycles, `edges - active_vertices + components`
    pub circuit_rank: usize,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn v(label: char) -> VertexId {
        VertexId::from_label(label).unwrap()
    }

    #[test]
    fn test_new_graph_is_empty() {
        let graph = WeightedGraph::new();

        assert_eq!(graph.vertex_count(), 26);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.active_vertices().is_empty());
        assert!(graph.vertices().all(|vertex| !graph.is_visited(vertex)));
    }

    #[test]
    fn test_with_vertex_count_limits() {
        assert_eq!(WeightedGraph::with_vertex_count(4).unwrap().vertex_count(), 4);
        assert!(WeightedGraph::with_vertex_count(26).is_ok());
        assert!(WeightedGraph::with_vertex_count(27).is_err());
    }

    #[test]
    fn test_add_edge_inserts_both_directions_at_head() {
        let mut graph = WeightedGraph::new();
        graph.add_edge(v('A'), v('B'), 1).unwrap();
        graph.add_edge(v('A'), v('C'), 2).unwrap();

        let a_neighbors: Vec<char> = graph
            .neighbors(v('A'))
            .iter()
            .map(|record| record.neighbor.label())
            .collect();
        assert_eq!(a_neighbors, vec!['C', 'B']);
        assert_eq!(graph.edge_weight(v('B'), v('A')), Some(1));
        assert_eq!(graph.edge_weight(v('C'), v('A')), Some(2));
        assert_eq!(graph.edge_weight(v('B'), v('C')), None);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_parallel_edges_are_kept() {
        let mut graph = WeightedGraph::new();
        graph.add_edge(v('A'), v('B'), 3).unwrap();
        graph.add_edge(v('A'), v('B'), 9).unwrap();

        assert_eq!(graph.degree(v('A')), 2);
        assert_eq!(graph.degree(v('B')), 2);
        // Most recently added parallel edge is found first
        assert_eq!(graph.edge_weight(v('A'), v('B')), Some(9));
    }

    #[test]
    fn test_rejected_edges_leave_graph_unchanged() {
        let mut graph = WeightedGraph::with_vertex_count(3).unwrap();

        assert!(matches!(
            graph.add_edge(v('A'), v('D'), 1),
            Err(PolygonWheelError::VertexOutOfRange { label: 'D', vertex_count: 3 })
        ));
        assert!(matches!(
            graph.add_edge(v('B'), v('B'), 1),
            Err(PolygonWheelError::SelfLoop { label: 'B' })
        ));
        assert!(matches!(
            graph.add_triple(&EdgeTriple::new('a', 'B', 1)),
            Err(PolygonWheelError::InvalidVertexLabel { label: 'a' })
        ));

        assert_eq!(graph.edge_count(), 0);
        assert!(graph.vertices().all(|vertex| graph.degree(vertex) == 0));
    }

    #[test]
    fn test_visited_markers() {
        let mut graph = WeightedGraph::new();

        graph.mark_visited(v('E'));
        assert!(graph.is_visited(v('E')));
        assert!(!graph.is_visited(v('F')));

        graph.clear_visited(v('E'));
        assert!(!graph.is_visited(v('E')));
    }

    #[test]
    fn test_stats_for_two_components() {
        let mut graph = WeightedGraph::new();
        for (s, d) in [('A', 'B'), ('B', 'C'), ('C', 'A'), ('X', 'Y')] {
            graph.add_edge(v(s), v(d), 1).unwrap();
        }

        assert_eq!(
            graph.stats(),
            GraphStats {
                vertices: 26,
                active_vertices: 5,
                edges: 4,
                components: 2,
                circuit_rank: 1,
            }
        );
    }

    #[test]
    fn test_to_petgraph_keeps_each_edge_once() {
        let mut graph = WeightedGraph::with_vertex_count(4).unwrap();
        graph.add_edge(v('A'), v('B'), 5).unwrap();
        graph.add_edge(v('C'), v('B'), 6).unwrap();
        graph.add_edge(v('A'), v('B'), 7).unwrap();

        let view = graph.to_petgraph();
        assert_eq!(view.node_count(), 4);
        assert_eq!(view.edge_count(), 3);

        let mut weights: Vec<u32> = view.edge_weights().copied().collect();
        weights.sort();
        assert_eq!(weights, vec![5, 6, 7]);
    }
}
