use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Malformed edge list in '{file}': {reason}")]
#[diagnostic(
    code(polygon_wheel::edge_list_parse_error),
    help("Each edge is written as `SOURCE DESTINATION WEIGHT`, e.g. `A B 4`")
)]
pub struct EdgeListParseError {
    pub file: String,
    pub reason: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("{reason}")]
    pub span: Option<SourceSpan>,
}

#[derive(Error, Debug, Diagnostic)]
pub enum PolygonWheelError {
    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(polygon_wheel::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    EdgeListParseError(Box<EdgeListParseError>),

    #[error("Invalid vertex label '{label}'")]
    #[diagnostic(
        code(polygon_wheel::invalid_vertex_label),
        help("Vertices are labelled with a single uppercase letter from 'A' to 'Z'")
    )]
    InvalidVertexLabel { label: char },

    #[error("Vertex '{label}' is outside a graph of {vertex_count} vertices")]
    #[diagnostic(
        code(polygon_wheel::vertex_out_of_range),
        help("Create the graph with enough vertices for every label it will hold")
    )]
    VertexOutOfRange { label: char, vertex_count: usize },

    #[error("Self-loop on vertex '{label}' is not a polygon edge")]
    #[diagnostic(
        code(polygon_wheel::self_loop),
        help("Remove the edge or connect the vertex to a different one")
    )]
    SelfLoop { label: char },

    #[error("JSON serialization error")]
    #[diagnostic(
        code(polygon_wheel::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(polygon_wheel::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(polygon_wheel::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(polygon_wheel::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },

    #[error("Graph error: {message}")]
    #[diagnostic(
        code(polygon_wheel::graph_error),
        help("This may be an internal error with graph processing")
    )]
    GraphError { message: String },
}
