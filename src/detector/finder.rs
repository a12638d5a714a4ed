use tracing::{debug, trace};

use super::census::PolygonCensus;
use super::collection::{Cycle, CycleCollection};
use crate::core::VertexId;
use crate::error::PolygonWheelError;
use crate::graph::WeightedGraph;

/// Finder for the polygons of an undirected weighted graph
///
/// Runs a depth-first search from every vertex that is not on the stack of
/// an active search. Whenever the current vertex reaches an on-stack vertex
/// other than its own parent, the stack suffix from that vertex forms a
/// cycle, which is weighed and stored under its canonical signature.
///
/// Visited markers are cleared when a vertex's search returns, so a vertex
/// can be reached again along a different path. This surfaces one cycle per
/// back edge seen along every explored path, not a minimum cycle basis.
pub struct CycleFinder {
    cycles: CycleCollection,
    has_cycle: bool,
}

/// Scratch state shared by the nested frames of one search
struct Traversal {
    parent: Vec<Option<VertexId>>,
    /// Stack from the search root to the current vertex
    path: Vec<VertexId>,
}

impl Traversal {
    fn new(vertex_count: usize) -> Self {
        Self {
            parent: vec![None; vertex_count],
            path: Vec::with_capacity(vertex_count),
        }
    }
}

impl Default for CycleFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl CycleFinder {
    pub fn new() -> Self {
        Self {
            cycles: CycleCollection::new(),
            has_cycle: false,
        }
    }

    /// Search the whole graph for cycles
    ///
    /// Leaves every visited marker of `graph` cleared, so the same graph can
    /// be searched again with a fresh finder.
    pub fn find_cycles(&mut self, graph: &mut WeightedGraph) -> Result<(), PolygonWheelError> {
        let mut traversal = Traversal::new(graph.vertex_count());
        let roots: Vec<VertexId> = graph.vertices().collect();

        for root in roots {
            if !graph.is_visited(root) {
                trace!(root = %root, "starting depth-first search");
                self.visit(graph, root, &mut traversal)?;
            }
        }

        debug!(
            cycles = self.cycles.len(),
            has_cycle = self.has_cycle,
            "cycle search complete"
        );
        Ok(())
    }

    fn visit(
        &mut self,
        graph: &mut WeightedGraph,
        vertex: VertexId,
        traversal: &mut Traversal,
    ) -> Result<(), PolygonWheelError> {
        graph.mark_visited(vertex);
        traversal.path.push(vertex);

        // Records are copied out one at a time so the graph can be mutably
        // borrowed by the nested search.
        for slot in 0..graph.degree(vertex) {
            let neighbor = graph.neighbors(vertex)[slot].neighbor;

            if !graph.is_visited(neighbor) {
                traversal.parent[neighbor.index()] = Some(vertex);
                self.visit(graph, neighbor, traversal)?;
            } else if traversal.parent[vertex.index()] != Some(neighbor) {
                self.record_back_edge(graph, neighbor, &traversal.path)?;
            }
        }

        traversal.path.pop();
        graph.clear_visited(vertex);
        Ok(())
    }

    /// Rebuild the cycle closed by the back edge from the top of `path` to
    /// `ancestor`, and store it
    fn record_back_edge(
        &mut self,
        graph: &WeightedGraph,
        ancestor: VertexId,
        path: &[VertexId],
    ) -> Result<(), PolygonWheelError> {
        self.has_cycle = true;

        let start = path
            .iter()
            .position(|&vertex| vertex == ancestor)
            .ok_or_else(|| PolygonWheelError::GraphError {
                message: format!("Back edge target '{ancestor}' is not on the search path"),
            })?;
        let route = path[start..].to_vec();

        let mut length = 0u64;
        for pair in route.windows(2) {
            length += u64::from(Self::weight_between(graph, pair[0], pair[1])?);
        }
        if let Some(&last) = route.last() {
            length += u64::from(Self::weight_between(graph, last, ancestor)?);
        }

        let cycle = Cycle::new(route, length);
        let signature = cycle.signature().clone();
        if self.cycles.insert(cycle) {
            debug!(%signature, length, "found new cycle");
        } else {
            trace!(%signature, "cycle already known");
        }

        Ok(())
    }

    fn weight_between(
        graph: &WeightedGraph,
        from: VertexId,
        to: VertexId,
    ) -> Result<u32, PolygonWheelError> {
        graph
            .edge_weight(from, to)
            .ok_or_else(|| PolygonWheelError::GraphError {
                message: format!("No edge between '{from}' and '{to}' on a cycle path"),
            })
    }

    /// Order the found cycles by ascending edge count
    pub fn sort_by_edge_count(&mut self) {
        self.cycles.sort_by_edge_count();
    }

    pub fn census(&self) -> PolygonCensus {
        PolygonCensus::from_cycles(&self.cycles)
    }

    /// Check if any back edge was seen
    pub fn has_cycle(&self) -> bool {
        self.has_cycle
    }

    pub fn cycles(&self) -> &CycleCollection {
        &self.cycles
    }

    pub fn cycle_count(&self) -> usize {
        self.cycles.len()
    }

    pub fn into_cycles(self) -> CycleCollection {
        self.cycles
    }
}
