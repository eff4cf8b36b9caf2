//! Configuration constants for roundabout
//!
//! This module contains all configurable constants used throughout the
//! application.

use std::time::Duration;

/// Progress bar configuration
pub mod progress {
    use super::*;

    /// Duration between progress bar updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames for the roundabout animation
    pub const SPINNER_FRAMES: &[&str] = &["🔁 ", "🔁⊙", "🔁◐", "🔁◓", "🔁◑", "🔁◒", "🔁○", "🔁●"];
}

/// Output formatting configuration
pub mod output {
    /// Default output format when not specified
    pub const DEFAULT_FORMAT: &str = "human";

    /// Separator used when rendering a cycle path as a single line
    pub const ARROW_SEPARATOR: &str = " -> ";
}
