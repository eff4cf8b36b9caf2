//! Command implementations for the roundabout CLI
//!
//! This module contains the implementations for each CLI command:
//! - check: Check a module graph for circular dependencies
//! - components: List the strongly connected components of a module graph

pub mod check;
pub mod components;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Check { .. } => check::execute_check_command(command),
        Commands::Components { .. } => components::execute_components_command(command),
    }
}
