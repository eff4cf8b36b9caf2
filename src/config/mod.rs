//! # Configuration Module
//!
//! This module provides configuration structures for all roundabout commands.
//! Each command has its own config module with builder patterns for easy
//! construction.
//!
//! ## Command Configurations
//!
//! - **CheckCyclesConfig**: Configuration for the `check` command to detect
//!   cycles
//! - **ComponentsConfig**: Configuration for the `components` command to list
//!   strongly connected components
//!
//! ## Example
//!
//! ```
//! use roundabout::cli::OutputFormat;
//! use roundabout::config::CheckCyclesConfig;
//!
//! // Each configuration struct provides a builder pattern with with_*
//! // methods for each field
//! let builder = CheckCyclesConfig::builder()
//!     .with_manifest("graph.json".into())
//!     .with_format(OutputFormat::Human)
//!     .with_error_on_cycles(true);
//! ```

pub mod check;
pub mod components;

pub use check::CheckCyclesConfig;
pub use components::ComponentsConfig;
