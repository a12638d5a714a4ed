//! Command implementations for polygon-wheel CLI
//!
//! This module contains the implementations for each CLI command:
//! - inspect: Inspect every graph for polygons
//! - spotlight: Put a spotlight on the polygons through one vertex
//! - spectacle: Create a spectacular visualization of each graph

pub mod inspect;
pub mod spectacle;
pub mod spotlight;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Inspect { .. } => inspect::execute_inspect_command(command),
        Commands::Spotlight { .. } => spotlight::execute_spotlight_command(command),
        Commands::Spectacle { .. } => spectacle::execute_spectacle_command(command),
    }
}
