//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

/// Common arguments shared by multiple commands
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Edge-list files or directories to analyze (defaults to current
    /// directory)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// File name pattern used when searching directories
    #[arg(
        long,
        default_value = crate::constants::input::DEFAULT_PATTERN,
        env = "POLYGON_WHEEL_PATTERN"
    )]
    pub pattern: String,

    /// Skip edges the graph rejects instead of failing the whole file
    #[arg(long, env = "POLYGON_WHEEL_SKIP_INVALID_EDGES")]
    pub skip_invalid_edges: bool,
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "POLYGON_WHEEL_FORMAT")]
    pub format: crate::cli::OutputFormat,
}

/// Common cycle display arguments
#[derive(Args, Debug, Clone)]
pub struct CycleDisplayArgs {
    /// Maximum number of cycles to display per graph (shows all by default)
    #[arg(long, env = "POLYGON_WHEEL_MAX_CYCLES")]
    pub max_cycles: Option<usize>,

    /// Print the adjacency lists of each graph before its cycles
    #[arg(long, env = "POLYGON_WHEEL_SHOW_GRAPH")]
    pub show_graph: bool,
}

impl CommonArgs {
    /// Get paths, using current directory if none provided
    pub fn get_paths(&self) -> Vec<PathBuf> {
        if self.paths.is_empty() {
            vec![std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))]
        } else {
            self.paths.clone()
        }
    }
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::PolygonWheelError>;
}

/// Trait for configurations that can be created from CLI commands
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(command: crate::cli::Commands)
    -> Result<Self, crate::error::PolygonWheelError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::PolygonWheelError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}
