use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::common::{CommonArgs, CycleDisplayArgs, FormatArgs};

#[derive(Parser)]
#[command(
    name = "polygon-wheel",
    about = "🎡 Count the polygons hiding in weighted undirected graphs",
    long_about = "polygon-wheel reads edge lists of undirected weighted graphs, searches every \
                  graph for cycles with a depth-first search, and reports how many triangles, \
                  quadrilaterals, pentagons and larger polygons it contains, together with the \
                  length of each one.",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect every graph for polygons
    ///
    /// Reads each edge-list file, finds the cycles of its graph, and reports
    /// the polygon counts together with every cycle sorted by edge count.
    #[command(
        long_about = "Analyze edge-list files to find the polygons of each graph. Every file \
                      holds `SOURCE DESTINATION WEIGHT` triples with vertices labelled A-Z. The \
                      graph is searched depth-first from every vertex; each back edge closes a \
                      cycle, which is weighed and deduplicated by its vertex set. Cycles are \
                      then sorted by edge count and counted per polygon type."
    )]
    Inspect {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        cycle_display: CycleDisplayArgs,

        /// Exit with error code if any graph has a cycle
        #[arg(long, env = "POLYGON_WHEEL_ERROR_ON_CYCLES")]
        error_on_cycles: bool,
    },

    /// Put a spotlight on the polygons through one vertex
    ///
    /// Same analysis as `inspect`, keeping only the cycles that pass through
    /// the given vertex.
    #[command(
        long_about = "Analyze edge-list files and report only the cycles passing through a \
                      specific vertex. The polygon counts are recomputed over the remaining \
                      cycles, which makes it easy to see which shapes a vertex takes part in."
    )]
    Spotlight {
        /// Label of the vertex to focus on
        #[arg(value_name = "VERTEX", env = "POLYGON_WHEEL_VERTEX")]
        vertex: char,

        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        cycle_display: CycleDisplayArgs,
    },

    /// Create a spectacular visualization of each graph
    ///
    /// Renders the weighted graph in several formats, highlighting the
    /// vertices and edges that lie on a cycle.
    #[command(
        long_about = "Generate visual representations of each weighted graph as ASCII adjacency \
                      lists, Mermaid diagrams or Graphviz DOT files. Vertices and edges that \
                      belong to a found cycle are highlighted."
    )]
    Spectacle {
        #[command(flatten)]
        common: CommonArgs,

        /// Graph format
        #[arg(
            short,
            long,
            value_enum,
            default_value = crate::constants::output::DEFAULT_GRAPH_FORMAT,
            env = "POLYGON_WHEEL_GRAPH_FORMAT"
        )]
        format: GraphFormat,

        /// Output file (stdout if not specified)
        #[arg(short, long, env = "POLYGON_WHEEL_OUTPUT")]
        output: Option<PathBuf>,

        /// Highlight cycles in the graph
        #[arg(
            long,
            default_value = "true",
            action = ArgAction::Set,
            env = "POLYGON_WHEEL_HIGHLIGHT_CYCLES"
        )]
        highlight_cycles: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    Junit,
    #[value(name = "github")]
    GitHub,
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum GraphFormat {
    Ascii,
    Mermaid,
    Dot,
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_inspect() {
        let cli = Cli::try_parse_from([
            "polygon-wheel",
            "-vv",
            "inspect",
            "Sample.txt",
            "--format",
            "json",
            "--max-cycles",
            "3",
            "--show-graph",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Inspect {
                common,
                format,
                cycle_display,
                error_on_cycles,
            } => {
                assert_eq!(common.paths, vec![PathBuf::from("Sample.txt")]);
                assert!(cycle_display.show_graph);
                assert_eq!(format.format, OutputFormat::Json);
                assert_eq!(cycle_display.max_cycles, Some(3));
                assert!(!error_on_cycles);
            }
            _ => panic!("Expected Inspect command"),
        }
    }

    #[test]
    fn test_parse_spotlight_and_spectacle() {
        let cli = Cli::try_parse_from(["polygon-wheel", "spotlight", "C", "graphs"]).unwrap();
        assert!(matches!(cli.command, Commands::Spotlight { vertex: 'C', .. }));

        let cli = Cli::try_parse_from([
            "polygon-wheel",
            "spectacle",
            "--format",
            "dot",
            "--highlight-cycles",
            "false",
        ])
        .unwrap();
        match cli.command {
            Commands::Spectacle {
                format,
                highlight_cycles,
                output,
                ..
            } => {
                assert_eq!(format, GraphFormat::Dot);
                assert!(!highlight_cycles);
                assert!(output.is_none());
            }
            _ => panic!("Expected Spectacle command"),
        }
    }
}
