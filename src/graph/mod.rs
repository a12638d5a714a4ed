//! # Graph Storage and Rendering Module
//!
//! This module provides the weighted graph the cycle finder walks, and the
//! renderers that visualize it. It supports multiple output formats and can
//! highlight the polygons found in the graph.
//!
//! ## Components
//!
//! ### Graph Storage
//! - **WeightedGraph**: Adjacency lists over the lettered vertex universe,
//!   plus the visited markers used during cycle search
//! - **EdgeRecord**: One directed half of an undirected weighted edge
//! - **GraphStats**: Size, connectivity and circuit rank of a graph
//!
//! ### Graph Rendering
//! - **GraphRenderer**: Renders graphs in various formats (ASCII, DOT, Mermaid)
//! - Supports cycle highlighting
//!
//! ## Example
//!
//! ```
//! use polygon_wheel::core::VertexId;
//! use polygon_wheel::graph::{GraphRenderer, WeightedGraph};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut graph = WeightedGraph::new();
//! graph.add_edge(VertexId::from_label('A')?, VertexId::from_label('B')?, 3)?;
//!
//! let renderer = GraphRenderer::new(true);
//! let mut output = Vec::new();
//! renderer.render_dot(&graph, &[], &mut output)?;
//!
//! let dot_output = String::from_utf8(output)?;
//! assert!(dot_output.contains(r#""A" -- "B""#));
//! # Ok(())
//! # }
//! ```
//!
//! ## Output Formats
//!
//! - **ASCII**: Adjacency listing for the terminal
//! - **DOT**: Graphviz format for detailed visualization
//! - **Mermaid**: Markdown-compatible diagrams for documentation

mod renderer;
mod store;

pub use renderer::GraphRenderer;
pub use store::{EdgeRecord, GraphStats, WeightedGraph};
