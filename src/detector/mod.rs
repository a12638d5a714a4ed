//! # Polygon Detection Module
//!
//! This module finds the cycles of an undirected weighted graph and sorts
//! them into polygon buckets.
//!
//! ## Algorithm
//!
//! A depth-first search runs from every vertex. An edge from the current
//! vertex to a vertex already on the search stack, other than the vertex it
//! was reached from, closes a cycle: the stack suffix starting at that vertex.
//! The cycle is weighed by summing its edges, and stored under its signature,
//! the alphabetically sorted vertex labels, so the same vertex set is counted
//! once however it was walked.
//!
//! ## Key Components
//!
//! - **CycleFinder**: Runs the search and owns the found cycles
//! - **CycleCollection**: Cycles deduplicated by signature
//! - **Cycle** / **Signature**: One found cycle and its canonical key
//! - **PolygonCensus**: Counts of triangles, quadrilaterals, pentagons and
//!   larger polygons
//!
//! ## Example
//!
//! ```
//! use polygon_wheel::core::VertexId;
//! use polygon_wheel::detector::CycleFinder;
//! use polygon_wheel::graph::WeightedGraph;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut graph = WeightedGraph::new();
//! let (a, b, c) = (
//!     VertexId::from_label('A')?,
//!     VertexId::from_label('B')?,
//!     VertexId::from_label('C')?,
//! );
//! graph.add_edge(a, b, 1)?;
//! graph.add_edge(b, c, 2)?;
//! graph.add_edge(c, a, 3)?;
//!
//! let mut finder = CycleFinder::new();
//! finder.find_cycles(&mut graph)?;
//! finder.sort_by_edge_count();
//!
//! assert!(finder.has_cycle());
//! assert_eq!(finder.cycle_count(), 1);
//! assert_eq!(finder.cycles().as_slice()[0].signature().as_str(), "ABC");
//! assert_eq!(finder.cycles().as_slice()[0].length(), 6);
//! assert_eq!(finder.census().triangles, 1);
//! # Ok(())
//! # }
//! ```

mod census;
mod collection;
mod finder;

pub use census::{PolygonCensus, PolygonKind};
pub use collection::{Cycle, CycleCollection, Signature};
pub use finder::CycleFinder;
