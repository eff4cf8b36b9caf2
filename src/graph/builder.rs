use std::collections::{HashMap, HashSet};

use miette::Result;
use petgraph::graph::{DiGraph, NodeIndex};

use super::types::{DependencyKind, ModuleId, ModuleNode, ModuleSource};
use crate::edge_filter::EdgeFilter;

/// Builder for constructing the indexed module graph
///
/// Node indices form the detector's dense index space: nodes are added in
/// resource-identifier lexicographic order (missing resources sort as the
/// empty string), with ties broken by arrival order. Two passes over the same
/// module/edge set therefore always produce identical indices, and index
/// order doubles as report order.
pub struct ModuleGraphBuilder {
    graph: DiGraph<ModuleNode, DependencyKind>,
    module_indices: HashMap<ModuleId, NodeIndex>,
    filter: EdgeFilter,
}

impl ModuleGraphBuilder {
    /// Create a new module graph builder
    ///
    /// # Arguments
    /// * `allow_async_cycles` - Exclude async (weak) edges from the graph,
    ///   which breaks cycles that only exist via async imports
    pub fn new(allow_async_cycles: bool) -> Self {
        Self {
            graph: DiGraph::new(),
            module_indices: HashMap::new(),
            filter: EdgeFilter::new(allow_async_cycles),
        }
    }

    /// Build the graph from a module source
    ///
    /// Surviving edges are the source's resolved records minus: records
    /// dropped by the [`EdgeFilter`], records with no resolved target,
    /// self-edges by module identity, and edges whose target module lacks a
    /// resource identifier. Duplicate targets collapse to one adjacency
    /// entry, first-occurrence order preserved.
    pub fn build_module_graph<S: ModuleSource>(&mut self, source: &S) -> Result<()> {
        // Deduplicate by id in arrival order (first record wins), then sort.
        // The stable sort keeps arrival order as the tie-break for equal
        // resource keys.
        let mut seen_ids: HashSet<ModuleId> = HashSet::new();
        let mut modules: Vec<ModuleNode> = Vec::new();
        for module in source.modules() {
            if seen_ids.insert(module.id.clone()) {
                modules.push(module);
            }
        }
        modules.sort_by(|a, b| a.resource_key().cmp(b.resource_key()));

        for module in modules {
            let id = module.id.clone();
            let idx = self.graph.add_node(module);
            self.module_indices.insert(id, idx);
        }

        // Snapshot of (index, id) pairs so edges can be added while walking
        let ordered: Vec<(NodeIndex, ModuleId)> = self
            .graph
            .node_indices()
            .map(|idx| (idx, self.graph[idx].id.clone()))
            .collect();

        for (from_idx, id) in ordered {
            let mut targets: Vec<(NodeIndex, DependencyKind)> = Vec::new();
            let mut seen_targets: HashSet<NodeIndex> = HashSet::new();

            for dep in source.dependencies(&id) {
                if !self.filter.should_include(&dep) {
                    continue;
                }
                // Unresolvable records are data to skip, not a fault
                let Some(target_id) = dep.target else {
                    continue;
                };
                // Self-edges by identity never enter the graph
                if target_id == id {
                    continue;
                }
                let Some(&to_idx) = self.module_indices.get(&target_id) else {
                    continue;
                };
                // Targets without a resource identifier are unreportable
                if self.graph[to_idx].resource.is_none() {
                    continue;
                }
                if seen_targets.insert(to_idx) {
                    targets.push((to_idx, dep.kind));
                }
            }

            // petgraph iterates out-neighbors in reverse edge-insertion
            // order; insert reversed so neighbors() yields first-occurrence
            // order.
            for (to_idx, kind) in targets.into_iter().rev() {
                self.graph.add_edge(from_idx, to_idx, kind);
            }
        }

        Ok(())
    }

    pub fn graph(&self) -> &DiGraph<ModuleNode, DependencyKind> {
        &self.graph
    }

    /// Index assigned to a module id, if the module survived construction
    pub fn module_index(&self, id: &ModuleId) -> Option<NodeIndex> {
        self.module_indices.get(id).copied()
    }
}
