//! Inspect command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::InspectConfig;
use crate::error::PolygonWheelError;

impl FromCommand for InspectConfig {
    fn from_command(command: Commands) -> Result<Self, PolygonWheelError> {
        match command {
            Commands::Inspect {
                common,
                format,
                cycle_display,
                error_on_cycles,
            } => InspectConfig::builder()
                .with_paths(common.get_paths())
                .with_pattern(common.pattern)
                .with_format(format.format)
                .with_skip_invalid_edges(common.skip_invalid_edges)
                .with_max_cycles(cycle_display.max_cycles)
                .with_show_graph(cycle_display.show_graph)
                .with_error_on_cycles(error_on_cycles)
                .build(),
            _ => Err(PolygonWheelError::ConfigurationError {
                message: "Invalid command type for InspectConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(InspectConfig);

/// Execute the inspect command for counting the polygons of each graph
pub fn execute_inspect_command(command: Commands) -> Result<()> {
    let config = InspectConfig::from_command(command)
        .wrap_err("Failed to parse inspect command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::inspect::InspectExecutor;
    InspectExecutor::execute(config)
}
