//! Spotlight command configuration

use std::path::PathBuf;

use super::missing_field;
use crate::cli::OutputFormat;
use crate::constants::input::DEFAULT_PATTERN;
use crate::core::VertexId;
use crate::error::PolygonWheelError;

#[derive(Debug, Clone)]
pub struct SpotlightConfig {
    pub vertex: VertexId,
    pub paths: Vec<PathBuf>,
    pub pattern: String,
    pub format: OutputFormat,
    pub skip_invalid_edges: bool,
    pub max_cycles: Option<usize>,
    pub show_graph: bool,
}

impl SpotlightConfig {
    pub fn builder() -> SpotlightConfigBuilder {
        SpotlightConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct SpotlightConfigBuilder {
    vertex: Option<char>,
    paths: Option<Vec<PathBuf>>,
    pattern: Option<String>,
    format: Option<OutputFormat>,
    skip_invalid_edges: bool,
    max_cycles: Option<usize>,
    show_graph: bool,
}

impl SpotlightConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Vertex label; validated when the config is built
    pub fn with_vertex(mut self, vertex: char) -> Self {
        self.vertex = Some(vertex);
        self
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
}

impl crate::common::ConfigBuilder for SpotlightConfigBuilder {
    type Config = SpotlightConfig;

    fn build(self) -> Result<Self::Config, PolygonWheelError> {
        let label = self.vertex.ok_or_else(|| missing_field("vertex"))?;

        Ok(SpotlightConfig {
            vertex: VertexId::from_label(label)?,
            paths: self.paths.ok_or_else(|| missing_field("paths"))?,
            pattern: self
                .pattern
                .unwrap_or_else(|| DEFAULT_PATTERN.to_string()),
            format: self.format.ok_or_else(|| missing_field("format"))?,
            skip_invalid_edges: self.skip_invalid_edges,
            max_cycles: self.max_cycles,
            show_graph: self.show_graph,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;

    fn builder() -> SpotlightConfigBuilder {
        SpotlightConfig::builder()
            .with_paths(vec![PathBuf::from(".")])
            .with_format(OutputFormat::Human)
    }

    #[test]
    fn test_vertex_is_validated() {
        let config = builder().with_vertex('C').build().unwrap();
        assert_eq!(config.vertex.label(), 'C');

        let error = builder().with_vertex('c').build().unwrap_err();
        assert!(matches!(
            error,
            PolygonWheelError::InvalidVertexLabel { label: 'c' }
        ));
    }

    #[test]
    fn test_vertex_is_required() {
        let error = builder().build().unwrap_err();
        assert!(error.to_string().contains("Missing required field: vertex"));
    }
}
