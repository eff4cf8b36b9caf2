//! Core graph types
//!
//! This module contains the fundamental data structures used in the module
//! dependency graph.

use std::fmt;

/// Opaque, host-assigned identifier for a build-graph module
///
/// The detector never inspects the contents of an id beyond equality; it only
/// needs a stable key to resolve dependency targets and discard self-edges.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleId(String);

impl ModuleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ModuleId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A module in the dependency graph
///
/// The resource identifier is a stable string key (typically an absolute file
/// path). Modules without one are carried in the graph but are never reported
/// as cycle starts, and edges pointing at them are discarded.
#[derive(Debug, Clone)]
pub struct ModuleNode {
    pub id: ModuleId,
    pub resource: Option<String>,
}

impl ModuleNode {
    pub fn new(id: ModuleId, resource: Option<String>) -> Self {
        Self { id, resource }
    }

    /// Sort key for index assignment: missing resources sort as the empty
    /// string.
    pub fn resource_key(&self) -> &str {
        self.resource.as_deref().unwrap_or("")
    }
}

/// Kind of a resolved dependency record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DependencyKind {
    Normal,
    /// A lazy/asynchronous import; excluded from the graph entirely when
    /// async cycles are allowed.
    Async,
    /// A known no-op self-referential record kind; always discarded.
    SelfReference,
}

/// A raw dependency record after host-side resolution
///
/// Resolution strategies differ across hosts, so the detector only sees this
/// shape: an optional target module and the record kind. A record whose
/// target failed to resolve is data to skip, not an error.
#[derive(Debug, Clone)]
pub struct ResolvedDependency {
    pub target: Option<ModuleId>,
    pub kind: DependencyKind,
}

impl ResolvedDependency {
    pub fn new(target: Option<ModuleId>, kind: DependencyKind) -> Self {
        Self { target, kind }
    }

    pub fn normal(target: impl Into<String>) -> Self {
        Self::new(Some(ModuleId::new(target)), DependencyKind::Normal)
    }

    pub fn asynchronous(target: impl Into<String>) -> Self {
        Self::new(Some(ModuleId::new(target)), DependencyKind::Async)
    }
}

/// Host adapter seam for supplying a module universe
///
/// Implementations enumerate the module handles once per detection pass and
/// yield each module's resolved dependency records in their original order.
/// The detector never assumes anything about how records were resolved.
pub trait ModuleSource {
    /// All module handles, in arrival order.
    fn modules(&self) -> Vec<ModuleNode>;

    /// Ordered resolved dependency records for one module.
    fn dependencies(&self, id: &ModuleId) -> Vec<ResolvedDependency>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_id_display() {
        let id = ModuleId::new("mod-a");
        assert_eq!(id.to_string(), "mod-a");
        assert_eq!(id.as_str(), "mod-a");
    }

    #[test]
    fn test_resource_key_defaults_to_empty() {
        let node = ModuleNode::new(ModuleId::new("hidden"), None);
        assert_eq!(node.resource_key(), "");

        let node = ModuleNode::new(ModuleId::new("a"), Some("/src/a.js".to_string()));
        assert_eq!(node.resource_key(), "/src/a.js");
    }
}
