//! Dependency record filtering functionality

use crate::graph::{DependencyKind, ResolvedDependency};

/// Encapsulates the record-level filtering applied before graph construction
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeFilter {
    exclude_async: bool,
}

impl EdgeFilter {
    /// Create a new edge filter
    ///
    /// # Arguments
    /// * `exclude_async` - Drop async (weak) edges from the graph entirely
    pub fn new(exclude_async: bool) -> Self {
        Self { exclude_async }
    }

    /// Check if async edges should be included
    pub fn include_async(&self) -> bool {
        !self.exclude_async
    }

    /// Check if a resolved record survives kind-level filtering
    ///
    /// Identity-based self-edge and missing-resource filtering happens in the
    /// graph builder, where the module universe is known.
    pub fn should_include(&self, dep: &ResolvedDependency) -> bool {
        match dep.kind {
            DependencyKind::Normal => true,
            DependencyKind::Async => self.include_async(),
            DependencyKind::SelfReference => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::ResolvedDependency;

    #[test]
    fn test_self_reference_records_always_dropped() {
        let dep = ResolvedDependency::new(None, DependencyKind::SelfReference);
        assert!(!EdgeFilter::new(false).should_include(&dep));
        assert!(!EdgeFilter::new(true).should_include(&dep));
    }

    #[test]
    fn test_async_records_follow_filter() {
        let dep = ResolvedDependency::asynchronous("b");
        assert!(EdgeFilter::new(false).should_include(&dep));
        assert!(!EdgeFilter::new(true).should_include(&dep));
    }

    #[test]
    fn test_normal_records_always_kept() {
        let dep = ResolvedDependency::normal("b");
        assert!(EdgeFilter::new(true).should_include(&dep));
    }
}
