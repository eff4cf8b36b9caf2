//! # Roundabout - Detect Circular Dependencies in Module Graphs
//!
//! Roundabout is a tool for detecting circular dependencies in build-graph
//! module manifests. It builds a deterministic dependency graph from the
//! manifest and identifies import cycles that cause incomplete module values
//! and unpredictable initialization order at runtime.
//!
//! ## Main Components
//!
//! - **Manifest**: Parses module graph manifests and adapts them into a
//!   module source
//! - **Graph**: Builds the deterministically indexed dependency graph
//! - **Detector**: Implements cycle detection (iterative Tarjan's SCC plus
//!   per-module cycle recovery)
//! - **Reports**: Generates human-readable and machine-readable reports
//!
//! ## Usage
//!
//! ### Real-World Example: Checking a Module Manifest
//!
//! ```no_run
//! use std::path::Path;
//!
//! use miette::IntoDiagnostic;
//! use roundabout::detector::{CycleDetector, DetectorOptions};
//! use roundabout::graph::ModuleGraphBuilder;
//! use roundabout::manifest::{ManifestSource, ModuleManifest};
//! use roundabout::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator};
//!
//! # fn main() -> miette::Result<()> {
//! // Step 1: Load the module graph manifest
//! let manifest = ModuleManifest::parse_file(Path::new("graph.json"))?;
//! println!("Loaded {} modules", manifest.module_count());
//!
//! // Step 2: Build the dependency graph
//! let source = ManifestSource::new(&manifest);
//! let mut graph_builder = ModuleGraphBuilder::new(
//!     false, // keep async edges in the graph
//! );
//! graph_builder.build_module_graph(&source)?;
//!
//! // Step 3: Detect circular dependencies
//! let mut detector = CycleDetector::new(DetectorOptions::default());
//! detector.detect_cycles(graph_builder.graph())?;
//!
//! // Step 4: Generate reports
//! if detector.has_cycles() {
//!     println!("⚠️  Found {} circular dependencies!", detector.cycle_count());
//!
//!     // Human-readable report for console output
//!     let human_report = HumanReportGenerator::new(Some(5)); // show max 5 cycles
//!     println!("{}", human_report.generate_report(&detector).into_diagnostic()?);
//!
//!     // JSON report for programmatic processing
//!     let json_report = JsonReportGenerator::new();
//!     let json_output = json_report.generate_report(&detector).into_diagnostic()?;
//!     std::fs::write("cycles.json", json_output).into_diagnostic()?;
//! } else {
//!     println!("✅ No circular dependencies found!");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Filtering Cycle Starts
//!
//! ```no_run
//! # use std::path::Path;
//! # use miette::IntoDiagnostic;
//! # use roundabout::detector::{CycleDetector, DetectorOptions};
//! # use roundabout::graph::ModuleGraphBuilder;
//! # use roundabout::manifest::{ManifestSource, ModuleManifest};
//! # fn main() -> miette::Result<()> {
//! # let manifest = ModuleManifest::parse_file(Path::new("graph.json"))?;
//! # let source = ManifestSource::new(&manifest);
//! // Ignore cycles that only exist through async imports, and never start a
//! // report inside vendored code
//! let mut graph_builder = ModuleGraphBuilder::new(true);
//! graph_builder.build_module_graph(&source)?;
//!
//! let options = DetectorOptions::builder()
//!     .with_exclude_pattern(Some("**/node_modules/**".to_string()))
//!     .with_allow_async_cycles(true)
//!     .build()
//!     .into_diagnostic()?;
//!
//! let mut detector = CycleDetector::new(options);
//! detector.detect_cycles(graph_builder.graph())?;
//!
//! println!("First-party dependency cycles: {}", detector.cycle_count());
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Streaming Reports Through a Sink
//!
//! ```no_run
//! # use std::path::Path;
//! # use roundabout::detector::{CycleDetector, CycleSink, DetectorOptions};
//! # use roundabout::error::RoundaboutError;
//! # use roundabout::graph::{ModuleGraphBuilder, ModuleNode};
//! # use roundabout::manifest::{ManifestSource, ModuleManifest};
//! # fn main() -> miette::Result<()> {
//! # let manifest = ModuleManifest::parse_file(Path::new("graph.json"))?;
//! # let source = ManifestSource::new(&manifest);
//! # let mut graph_builder = ModuleGraphBuilder::new(false);
//! # graph_builder.build_module_graph(&source)?;
//! struct PrintSink;
//!
//! impl CycleSink for PrintSink {
//!     fn on_cycle_detected(
//!         &mut self,
//!         module: &ModuleNode,
//!         path: &[String],
//!     ) -> Result<(), RoundaboutError> {
//!         println!("{}: {}", module.id, path.join(" -> "));
//!         Ok(())
//!     }
//! }
//!
//! let mut detector = CycleDetector::new(DetectorOptions::default());
//! let mut sink = PrintSink;
//! detector.detect_cycles_with_sink(graph_builder.graph(), &mut sink)?;
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod edge_filter;
mod progress;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod detector;
pub mod error;
pub mod executors;
pub mod graph;
pub mod manifest;
pub mod reports;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    execute_command(cli.command)
}
