//! Configuration constants for polygon-wheel
//!
//! This module contains all configurable constants used throughout the
//! application. These values can be overridden through environment variables or
//! command line arguments where a matching option exists.

use std::time::Duration;

/// Vertex alphabet configuration
pub mod vertices {
    /// Label of the vertex at index 0
    pub const FIRST_LABEL: char = 'A';

    /// Number of labels in the alphabet, and so the largest supported graph
    pub const ALPHABET_SIZE: usize = 26;
}

/// Polygon classification thresholds
pub mod polygons {
    pub const TRIANGLE_EDGES: usize = 3;
    pub const QUADRILATERAL_EDGES: usize = 4;
    pub const PENTAGON_EDGES: usize = 5;
}

/// Progress bar configuration
pub mod progress {
    use super::*;

    /// Duration between progress bar updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames for the wheel animation
    pub const SPINNER_FRAMES: &[&str] = &[
        "🎡 ", // Standard wheel
        "🎡△", // Triangle
        "🎡□", // Quadrilateral
        "🎡⬠", // Pentagon
        "🎡⬡", // Hexagon
        "🎡○", // Empty circle
        "🎡●", // Full circle
    ];
}

/// Input discovery configuration
pub mod input {
    /// File name pattern used when walking directories
    pub const DEFAULT_PATTERN: &str = "*.txt";

    /// Directories never descended into
    pub const SKIPPED_DIRECTORIES: &[&str] = &["target", "node_modules"];
}

/// Output formatting configuration
pub mod output {
    /// Default report format when not specified
    pub const DEFAULT_FORMAT: &str = "human";

    /// Default graph rendering format when not specified
    pub const DEFAULT_GRAPH_FORMAT: &str = "ascii";
}
