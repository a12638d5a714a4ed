//! # Configuration Module
//!
//! This module provides configuration structures for all polygon-wheel
//! commands. Each command has its own config module with a builder for easy
//! construction.
//!
//! ## Command Configurations
//!
//! - **InspectConfig**: Configuration for the `inspect` command that reports
//!   every polygon of each graph
//! - **SpotlightConfig**: Configuration for the `spotlight` command that keeps
//!   only the cycles through one vertex
//! - **SpectacleOptions**: Configuration for the `spectacle` command that
//!   renders each graph
//!
//! ## Example
//!
//! ```
//! use polygon_wheel::cli::{GraphFormat, OutputFormat};
//! use polygon_wheel::common::ConfigBuilder;
//! use polygon_wheel::config::{InspectConfig, SpectacleOptions};
//!
//! # fn main() -> Result<(), polygon_wheel::error::PolygonWheelError> {
//! let config = InspectConfig::builder()
//!     .with_paths(vec!["graphs".into()])
//!     .with_pattern("*.txt".to_string())
//!     .with_format(OutputFormat::Human)
//!     .with_error_on_cycles(true)
//!     .build()?;
//! assert!(config.error_on_cycles);
//!
//! let options = SpectacleOptions::builder()
//!     .with_paths(vec!["graphs".into()])
//!     .with_format(GraphFormat::Dot)
//!     .with_highlight_cycles(true)
//!     .build()?;
//! assert!(options.output.is_none());
//! # Ok(())
//! # }
//! ```

pub mod inspect;
pub mod spectacle;
pub mod spotlight;

pub use inspect::InspectConfig;
pub use spectacle::SpectacleOptions;
pub use spotlight::SpotlightConfig;

use crate::error::PolygonWheelError;

pub(crate) fn missing_field(field: &str) -> PolygonWheelError {
    PolygonWheelError::ConfigurationError {
        message: format!("Missing required field: {field}"),
    }
}
