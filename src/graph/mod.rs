//! Module dependency graph construction
//!
//! The builder reduces an unordered module universe to a deterministically
//! indexed petgraph `DiGraph`; node index order is the detector's report
//! order.

pub mod builder;
pub mod types;

pub use builder::ModuleGraphBuilder;
pub use types::{DependencyKind, ModuleId, ModuleNode, ModuleSource, ResolvedDependency};
