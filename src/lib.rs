//! # Polygon Wheel - Count the Polygons in Weighted Graphs
//!
//! Polygon Wheel reads edge lists of undirected weighted graphs whose
//! vertices are the letters `A` to `Z`, finds every cycle with a depth-first
//! search, and reports how many triangles, quadrilaterals, pentagons and
//! larger polygons each graph contains, together with the length of every
//! cycle.
//!
//! ## Main Components
//!
//! - **Analyzer**: Discovers edge-list files and analyzes each graph
//! - **Detector**: Finds, deduplicates, sorts and counts the cycles
//! - **Graph**: Stores the weighted adjacency lists and renders them
//! - **Reports**: Generates human-readable and machine-readable reports
//!
//! ## Usage
//!
//! ### Example: Counting Polygons in an Edge List
//!
//! ```
//! use polygon_wheel::analyzer::GraphAnalyzer;
//! use polygon_wheel::reports::{HumanReportGenerator, ReportGenerator};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // A square with one diagonal: two triangles and the outer quadrilateral
//! let edges = "\
//! ## square with a diagonal
//! A B 1
//! B C 2
//! C D 3
//! D A 4
//! A C 5
//! ";
//!
//! let analyzer = GraphAnalyzer::new(false);
//! let analysis = analyzer.analyze_source("square.txt", edges)?;
//!
//! let census = analysis.census();
//! assert_eq!(census.triangles, 2);
//! assert_eq!(census.quadrilaterals, 1);
//!
//! // Cycles are sorted by edge count, smallest polygons first
//! let lengths: Vec<u64> = analysis.cycles().iter().map(|c| c.length()).collect();
//! assert_eq!(lengths, vec![12, 8, 10]);
//!
//! let report = HumanReportGenerator::new(None, false).generate_report(&[analysis])?;
//! assert!(report.contains("Shapes found"));
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Working With the Graph Directly
//!
//! ```
//! use polygon_wheel::core::VertexId;
//! use polygon_wheel::detector::{CycleFinder, PolygonKind};
//! use polygon_wheel::graph::{GraphRenderer, WeightedGraph};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut graph = WeightedGraph::new();
//! for (from, to, weight) in [('A', 'B', 1), ('B', 'C', 1), ('C', 'D', 1), ('D', 'A', 1)] {
//!     graph.add_edge(VertexId::from_label(from)?, VertexId::from_label(to)?, weight)?;
//! }
//!
//! let mut finder = CycleFinder::new();
//! finder.find_cycles(&mut graph)?;
//! finder.sort_by_edge_count();
//!
//! let square = &finder.cycles().as_slice()[0];
//! assert_eq!(square.kind(), PolygonKind::Quadrilateral);
//! assert_eq!(square.length(), 4);
//!
//! // Render it as a Mermaid diagram with the cycle highlighted
//! let mut mermaid = Vec::new();
//! GraphRenderer::new(true).render_mermaid(&graph, finder.cycles().as_slice(), &mut mermaid)?;
//! assert!(String::from_utf8(mermaid)?.starts_with("graph"));
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Analyzing a Directory
//!
//! ```no_run
//! use std::path::PathBuf;
//!
//! use polygon_wheel::analyzer::GraphAnalyzer;
//! use polygon_wheel::reports::{JsonReportGenerator, ReportGenerator};
//! use miette::IntoDiagnostic;
//!
//! # fn main() -> miette::Result<()> {
//! let mut analyzer = GraphAnalyzer::new(true); // skip self-loops and bad labels
//! analyzer.analyze_paths(&[PathBuf::from("graphs")], "*.txt", None)?;
//!
//! for (path, error) in analyzer.failures() {
//!     eprintln!("{}: {error:?}", path.display());
//! }
//!
//! let json = JsonReportGenerator::new().generate_report(analyzer.analyses())?;
//! std::fs::write("polygons.json", json).into_diagnostic()?;
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod input_discovery;
mod utils;

// Public modules
pub mod analyzer;
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod detector;
pub mod edge_list_parser;
pub mod error;
pub mod executors;
pub mod graph;
pub mod progress;
pub mod reports;

use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is not set
fn default_log_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the stderr log subscriber
///
/// `RUST_LOG` wins over the `-v` count. A subscriber installed earlier (for
/// example by a test harness) is left in place.
fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_filter(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    init_logging(cli.verbose);

    execute_command(cli.command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_filter() {
        assert_eq!(default_log_filter(0), "warn");
        assert_eq!(default_log_filter(1), "info");
        assert_eq!(default_log_filter(2), "debug");
        assert_eq!(default_log_filter(3), "trace");
        assert_eq!(default_log_filter(9), "trace");
    }
}
