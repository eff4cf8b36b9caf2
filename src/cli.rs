use clap::{Parser, Subcommand};

use crate::common::{CommonArgs, CycleDisplayArgs, FormatArgs};

#[derive(Parser)]
#[command(
    name = "roundabout",
    about = "🔁 Detect circular dependencies in build-graph module manifests",
    long_about = "roundabout loads a module graph manifest, builds a dependency graph, and uses \
                  Tarjan's algorithm to find strongly connected components (cycles). Every module \
                  caught in a cycle gets its own report showing one concrete path around the \
                  loop.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check a module graph for circular dependencies
    ///
    /// Loads the manifest, builds the dependency graph, and reports one cycle
    /// per module involved in a cycle. Circular imports cause incomplete
    /// module values at runtime and unpredictable initialization order; this
    /// command helps you find and fix them before they bite.
    #[command(
        long_about = "Analyze a module graph manifest to detect circular dependency chains. This \
                      command parses the manifest, builds a deterministic dependency graph, and \
                      uses Tarjan's algorithm to find strongly connected components (cycles). \
                      Each module inside a cycle is reported with one concrete path from itself \
                      back to itself. Include/exclude globs filter which modules may start a \
                      report."
    )]
    Check {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        cycle_display: CycleDisplayArgs,

        /// Exit with error code if cycles found
        #[arg(long, env = "ROUNDABOUT_ERROR_ON_CYCLES")]
        error_on_cycles: bool,
    },

    /// List the strongly connected components of a module graph
    ///
    /// Shows how the graph partitions into strongly connected components.
    /// Useful for understanding how tightly coupled a cycle cluster is
    /// before untangling it module by module.
    #[command(
        long_about = "Partition the module graph into strongly connected components and list \
                      them. A component with more than one module is a cycle cluster; --cyclic \
                      filters the listing down to those. Components are listed with their member \
                      resources in deterministic order, so output diffs cleanly between runs."
    )]
    Components {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        format: FormatArgs,

        /// Only list components that form cycles
        #[arg(long, env = "ROUNDABOUT_CYCLIC")]
        cyclic: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}
