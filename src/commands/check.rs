//! Check command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::CheckCyclesConfig;
use crate::error::RoundaboutError;

impl FromCommand for CheckCyclesConfig {
    fn from_command(command: Commands) -> Result<Self, RoundaboutError> {
        match command {
            Commands::Check {
                common,
                format,
                cycle_display,
                error_on_cycles,
            } => CheckCyclesConfig::builder()
                .with_manifest(common.manifest)
                .with_format(format.format)
                .with_error_on_cycles(error_on_cycles)
                .with_include(common.include)
                .with_exclude(common.exclude)
                .with_allow_async_cycles(common.allow_async_cycles)
                .with_base_dir(common.base_dir)
                .with_max_cycles(cycle_display.max_cycles)
                .build(),
            _ => Err(RoundaboutError::ConfigurationError {
                message: "Invalid command type for CheckCyclesConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(CheckCyclesConfig);

/// Execute the check command for detecting module dependency cycles
pub fn execute_check_command(command: Commands) -> Result<()> {
    let config = CheckCyclesConfig::from_command(command)
        .wrap_err("Failed to parse check command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::check::CheckExecutor;
    CheckExecutor::execute(config)
}
