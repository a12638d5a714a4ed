use std::collections::HashSet;
use std::io::Write;

use miette::Result;

use crate::core::VertexId;
use crate::detector::Cycle;
use crate::error::PolygonWheelError;
use crate::graph::WeightedGraph;

// Blue-Orange Accessible Palette - Soothing colors with excellent contrast
mod colors {
    pub const NORMAL_NODE_FILL: &str = "#E3F2FD"; // Light blue
    pub const NORMAL_NODE_STROKE: &str = "#1976D2"; // Medium blue
    pub const CYCLE_NODE_FILL: &str = "#FFF3E0"; // Light orange
    pub const CYCLE_NODE_STROKE: &str = "#F57C00"; // Vibrant orange
    pub const NORMAL_EDGE: &str = "#64B5F6"; // Soft blue
    pub const CYCLE_EDGE: &str = "#FF6500"; // Deep orange
}

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(PolygonWheelError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(PolygonWheelError::from)
    };
}

/// An undirected edge as drawn: lower-labelled endpoint first
type DrawnEdge = (VertexId, VertexId, u32);

/// Vertices and edges that lie on at least one cycle
struct CycleHighlights {
    vertices: HashSet<VertexId>,
    edges: HashSet<(VertexId, VertexId)>,
}

impl CycleHighlights {
    fn collect(cycles: &[Cycle], enabled: bool) -> Self {
        let mut highlights = Self {
            vertices: HashSet::new(),
            edges: HashSet::new(),
        };
        if !enabled {
            return highlights;
        }

        for cycle in cycles {
            highlights.vertices.extend(cycle.route().iter().copied());
            for (a, b) in cycle.edges() {
                highlights.edges.insert((a.min(b), a.max(b)));
            }
        }
        highlights
    }

    fn has_vertex(&self, vertex: VertexId) -> bool {
        self.vertices.contains(&vertex)
    }

    fn has_edge(&self, a: VertexId, b: VertexId) -> bool {
        self.edges.contains(&(a.min(b), a.max(b)))
    }
}

pub struct GraphRenderer {
    highlight_cycles: bool,
}

impl GraphRenderer {
    pub fn new(highlight_cycles: bool) -> Self {
        Self { highlight_cycles }
    }

    /// Every undirected edge once, in adjacency-list order of its lower endpoint
    fn drawn_edges(graph: &WeightedGraph) -> Vec<DrawnEdge> {
        graph
            .vertices()
            .flat_map(|vertex| {
                graph
                    .neighbors(vertex)
                    .iter()
                    .filter(move |record| vertex < record.neighbor)
                    .map(move |record| (vertex, record.neighbor, record.weight))
            })
            .collect()
    }

    /// Print the adjacency lists of every vertex that has edges
    pub fn render_ascii(
        &self,
        graph: &WeightedGraph,
        cycles: &[Cycle],
        output: &mut dyn Write,
    ) -> Result<()> {
        let active = graph.active_vertices();
        if active.is_empty() {
            writeln_out!(output, "No edges found to visualize")?;
            return Ok(());
        }

        let highlights = CycleHighlights::collect(cycles, self.highlight_cycles);

        writeln_out!(
            output,
            "\n📊 Weighted Graph ({} vertices, {} edges)\n",
            active.len(),
            graph.edge_count()
        )?;

        for vertex in active {
            if highlights.has_vertex(vertex) {
                writeln_out!(output, "{vertex} ⚠️  IN CYCLE")?;
            } else {
                writeln_out!(output, "{vertex}")?;
            }

            let records = graph.neighbors(vertex);
            for (i, record) in records.iter().enumerate() {
                let branch = if i + 1 == records.len() {
                    "└──"
                } else {
                    "├──"
                };
                writeln_out!(
                    output,
                    "  {} {} (weight: {})",
                    branch,
                    record.neighbor,
                    record.weight
                )?;
            }
            writeln_out!(output)?;
        }

        Ok(())
    }

    pub fn render_mermaid(
        &self,
        graph: &WeightedGraph,
        cycles: &[Cycle],
        output: &mut dyn Write,
    ) -> Result<()> {
        let highlights = CycleHighlights::collect(cycles, self.highlight_cycles);

        writeln_out!(output, "graph LR")?;

        for vertex in graph.active_vertices() {
            writeln_out!(output, "    {vertex}(({vertex}))")?;
        }

        let mut cycle_links = Vec::new();
        for (i, (a, b, weight)) in Self::drawn_edges(graph).into_iter().enumerate() {
            writeln_out!(output, "    {a} ---|{weight}| {b}")?;
            if highlights.has_edge(a, b) {
                cycle_links.push(i.to_string());
            }
        }

        writeln_out!(output)?;
        writeln_out!(
            output,
            "    classDef vertex fill:{},stroke:{},stroke-width:2px",
            colors::NORMAL_NODE_FILL,
            colors::NORMAL_NODE_STROKE
        )?;
        writeln_out!(
            output,
            "    classDef cycle fill:{},stroke:{},stroke-width:3px",
            colors::CYCLE_NODE_FILL,
            colors::CYCLE_NODE_STROKE
        )?;

        let (in_cycle, plain): (Vec<VertexId>, Vec<VertexId>) = graph
            .active_vertices()
            .into_iter()
            .partition(|&vertex| highlights.has_vertex(vertex));

        if !plain.is_empty() {
            writeln_out!(output, "    class {} vertex", join_labels(&plain))?;
        }
        if !in_cycle.is_empty() {
            writeln_out!(output, "    class {} cycle", join_labels(&in_cycle))?;
        }
        if !cycle_links.is_empty() {
            writeln_out!(
                output,
                "    linkStyle {} stroke:{},stroke-width:3px",
                cycle_links.join(","),
                colors::CYCLE_EDGE
            )?;
        }

        Ok(())
    }

    pub fn render_dot(
        &self,
        graph: &WeightedGraph,
        cycles: &[Cycle],
        output: &mut dyn Write,
    ) -> Result<()> {
        let highlights = CycleHighlights::collect(cycles, self.highlight_cycles);

        writeln_out!(output, "graph polygons {{")?;
        writeln_out!(output, "    layout=neato;")?;
        writeln_out!(output, "    node [shape=circle];")?;
        writeln_out!(output)?;

        for vertex in graph.active_vertices() {
            let (fill_color, stroke_color) = if highlights.has_vertex(vertex) {
                (colors::CYCLE_NODE_FILL, colors::CYCLE_NODE_STROKE)
            } else {
                (colors::NORMAL_NODE_FILL, colors::NORMAL_NODE_STROKE)
            };

            writeln_out!(
                output,
                r#"    "{}" [style=filled, fillcolor="{}", color="{}", penwidth=2];"#,
                vertex,
                fill_color,
                stroke_color
            )?;
        }

        writeln_out!(output)?;

        for (a, b, weight) in Self::drawn_edges(graph) {
            let (color, width) = if highlights.has_edge(a, b) {
                (colors::CYCLE_EDGE, 3)
            } else {
                (colors::NORMAL_EDGE, 1)
            };
            writeln_out!(
                output,
                r#"    "{a}" -- "{b}" [label="{weight}", color="{color}", penwidth={width}];"#
            )?;
        }

        writeln_out!(output, "}}")?;
        Ok(())
    }
}

fn join_labels(vertices: &[VertexId]) -> String {
    vertices
        .iter()
        .map(VertexId::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
