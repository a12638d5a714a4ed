//! Spectacle command configuration

use std::path::PathBuf;

use super::missing_field;
use crate::cli::GraphFormat;
use crate::constants::input::DEFAULT_PATTERN;
use crate::error::PolygonWheelError;

#[derive(Debug, Clone)]
pub struct SpectacleOptions {
    pub paths: Vec<PathBuf>,
    pub pattern: String,
    pub format: GraphFormat,
    pub skip_invalid_edges: bool,
    pub output: Option<PathBuf>,
    pub highlight_cycles: bool,
}

impl SpectacleOptions {
    pub fn builder() -> SpectacleOptionsBuilder {
        SpectacleOptionsBuilder::new()
    }
}

#[derive(Default)]
pub struct SpectacleOptionsBuilder {
    paths: Option<Vec<PathBuf>>,
    pattern: Option<String>,
    format: Option<GraphFormat>,
    skip_invalid_edges: bool,
    output: Option<PathBuf>,
    highlight_cycles: Option<bool>,
}

impl SpectacleOptionsBuilder {
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

    pub fn with_format(mut self, format: GraphFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_skip_invalid_edges(mut self, skip_invalid_edges: bool) -> Self {
        self.skip_invalid_edges = skip_invalid_edges;
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    pub fn with_highlight_cycles(mut self, highlight_cycles: bool) -> Self {
        self.highlight_cycles = Some(highlight_cycles);
        self
    }
}

impl crate::common::ConfigBuilder for SpectacleOptionsBuilder {
    type Config = SpectacleOptions;

    fn build(self) -> Result<Self::Config, PolygonWheelError> {
        Ok(SpectacleOptions {
            paths: self.paths.ok_or_else(|| missing_field("paths"))?,
            pattern: self
                .pattern
                .unwrap_or_else(|| DEFAULT_PATTERN.to_string()),
            format: self.format.ok_or_else(|| missing_field("format"))?,
            skip_invalid_edges: self.skip_invalid_edges,
            output: self.output,
            highlight_cycles: self.highlight_cycles.unwrap_or(true),
        })
    }
}
