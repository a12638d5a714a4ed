//! Spotlight command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::SpotlightConfig;
use crate::error::PolygonWheelError;

impl FromCommand for SpotlightConfig {
    fn from_command(command: Commands) -> Result<Self, PolygonWheelError> {
        match command {
            Commands::Spotlight {
                vertex,
                common,
                format,
                cycle_display,
            } => SpotlightConfig::builder()
                .with_vertex(vertex)
                .with_paths(common.get_paths())
                .with_pattern(common.pattern)
                .with_format(format.format)
                .with_skip_invalid_edges(common.skip_invalid_edges)
                .with_max_cycles(cycle_display.max_cycles)
                .with_show_graph(cycle_display.show_graph)
                .build(),
            _ => Err(PolygonWheelError::ConfigurationError {
                message: "Invalid command type for SpotlightConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(SpotlightConfig);

/// Execute the spotlight command for the cycles through one vertex
pub fn execute_spotlight_command(command: Commands) -> Result<()> {
    let config = SpotlightConfig::from_command(command)
        .wrap_err("Failed to parse spotlight command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::spotlight::SpotlightExecutor;
    SpotlightExecutor::execute(config)
}
