//! Components command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::ComponentsConfig;
use crate::error::RoundaboutError;

impl FromCommand for ComponentsConfig {
    fn from_command(command: Commands) -> Result<Self, RoundaboutError> {
        match command {
            Commands::Components {
                common,
                format,
                cyclic,
            } => ComponentsConfig::builder()
                .with_manifest(common.manifest)
                .with_format(format.format)
                .with_cyclic_only(cyclic)
                .with_allow_async_cycles(common.allow_async_cycles)
                .with_base_dir(common.base_dir)
                .build(),
            _ => Err(RoundaboutError::ConfigurationError {
                message: "Invalid command type for ComponentsConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(ComponentsConfig);

/// Execute the components command for listing strongly connected components
pub fn execute_components_command(command: Commands) -> Result<()> {
    let config = ComponentsConfig::from_command(command)
        .wrap_err("Failed to parse components command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::components::ComponentsExecutor;
    ComponentsExecutor::execute(config)
}
