//! Inspect command configuration

use std::path::PathBuf;

use super::missing_field;
use crate::cli::OutputFormat;
use crate::constants::input::DEFAULT_PATTERN;
use crate::error::PolygonWheelError;

/// Configuration for the inspect command
///
/// This struct contains all options for finding and reporting the polygons
/// of every discovered graph.
#[derive(Debug, Clone)]
pub struct InspectConfig {
    /// Files or directories holding edge lists
    pub paths: Vec<PathBuf>,
    /// File name pattern used when walking directories
    pub pattern: String,
    /// Output format for the report
    pub format: OutputFormat,
    /// Skip rejected edges instead of failing the file
    pub skip_invalid_edges: bool,
    /// Maximum number of cycles to report per graph (None = all)
    pub max_cycles: Option<usize>,
    /// Print the adjacency lists before the cycles
    pub show_graph: bool,
    /// Whether to exit with error code if cycles are found
    pub error_on_cycles: bool,
}

impl InspectConfig {
    pub fn builder() -> InspectConfigBuilder {
        InspectConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct InspectConfigBuilder {
    paths: Option<Vec<PathBuf>>,
    pattern: Option<String>,
    format: Option<OutputFormat>,
    skip_invalid_edges: bool,
    max_cycles: Option<usize>,
    show_graph: bool,
    error_on_cycles: bool,
}

impl InspectConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = Some(paths);
        self
    }

    pub fn with_pattern(mut self, pattern: String) -> Self {
        self.pattern = Some(pattern);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_skip_invalid_edges(mut self, skip_invalid_edges: bool) -> Self {
        self.skip_invalid_edges = skip_invalid_edges;
        self
    }

    pub fn with_max_cycles(mut self, max_cycles: Option<usize>) -> Self {
        self.max_cycles = max_cycles;
        self
    }

    pub fn with_show_graph(mut self, show_graph: bool) -> Self {
        self.show_graph = show_graph;
        self
    }

    pub fn with_error_on_cycles(mut self, error_on_cycles: bool) -> Self {
        self.error_on_cycles = error_on_cycles;
        self
    }
}

impl crate::common::ConfigBuilder for InspectConfigBuilder {
    type Config = InspectConfig;

    fn build(self) -> Result<Self::Config, PolygonWheelError> {
        Ok(InspectConfig {
            paths: self.paths.ok_or_else(|| missing_field("paths"))?,
            pattern: self
                .pattern
                .unwrap_or_else(|| DEFAULT_PATTERN.to_string()),
            format: self.format.ok_or_else(|| missing_field("format"))?,
            skip_invalid_edges: self.skip_invalid_edges,
            max_cycles: self.max_cycles,
            show_graph: self.show_graph,
            error_on_cycles: self.error_on_cycles,
        })
    }
}
