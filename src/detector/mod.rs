//! Cycle detection over the module graph
//!
//! The detector runs in three stages: partition the graph into strongly
//! connected components, keep the components that denote real cycles, and
//! recover one simple cycle per eligible member module.

pub mod detector_impl;
pub mod options;
pub mod tarjan;

pub use detector_impl::{CollectingSink, CycleDetector, CycleSink, ModuleCycle};
pub use options::{DetectorOptions, DetectorOptionsBuilder};
pub use tarjan::{SccPartition, strongly_connected_components};
