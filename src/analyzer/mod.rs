//! # Graph Analysis Module
//!
//! This module drives the analysis of edge-list files: it discovers the
//! files, parses each one into a weighted graph, searches the graph for
//! cycles and classifies them into polygons. Files are analyzed in parallel;
//! each individual graph is searched on a single thread.
//!
//! ## Key Components
//!
//! - **GraphAnalyzer**: Discovers and analyzes edge-list files, collecting
//!   results and per-file failures
//! - **GraphAnalysis**: The graph, its sorted cycles, polygon census and
//!   structural statistics for one input
//!
//! ## Example
//!
//! ```
//! use polygon_wheel::analyzer::GraphAnalyzer;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let analyzer = GraphAnalyzer::new(false);
//! let analysis = analyzer.analyze_source("square.txt", "A B 1\nB C 1\nC D 1\nD A 1\n")?;
//!
//! assert!(analysis.has_cycle());
//! assert_eq!(analysis.census().quadrilaterals, 1);
//! assert_eq!(analysis.cycles().as_slice()[0].signature().as_str(), "ABCD");
//! assert_eq!(analysis.cycles().as_slice()[0].length(), 4);
//! # Ok(())
//! # }
//! ```

mod analyzer_impl;

pub use analyzer_impl::*;
