//! Spectacle command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::SpectacleOptions;
use crate::error::PolygonWheelError;

impl FromCommand for SpectacleOptions {
    fn from_command(command: Commands) -> Result<Self, PolygonWheelError> {
        match command {
            Commands::Spectacle {
                common,
                format,
                output,
                highlight_cycles,
            } => SpectacleOptions::builder()
                .with_paths(common.get_paths())
                .with_pattern(common.pattern)
                .with_format(format)
                .with_skip_invalid_edges(common.skip_invalid_edges)
                .with_output(output)
                .with_highlight_cycles(highlight_cycles)
                .build(),
            _ => Err(PolygonWheelError::ConfigurationError {
                message: "Invalid command type for SpectacleOptions".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(SpectacleOptions);

/// Execute the spectacle command for rendering each graph
pub fn execute_spectacle_command(command: Commands) -> Result<()> {
    let config = SpectacleOptions::from_command(command)
        .wrap_err("Failed to parse spectacle command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::spectacle::SpectacleExecutor;
    SpectacleExecutor::execute(config)
}
