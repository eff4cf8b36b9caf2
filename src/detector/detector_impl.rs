use std::collections::HashSet;

use miette::Result;
use petgraph::graph::{DiGraph, NodeIndex};

use super::options::DetectorOptions;
use super::tarjan::strongly_connected_components;
use crate::constants::output::ARROW_SEPARATOR;
use crate::error::RoundaboutError;
use crate::graph::{DependencyKind, ModuleId, ModuleNode};
use crate::utils::path::relativize_resource;

/// Detector for finding dependency cycles in module graphs
///
/// Partitions the indexed graph into strongly connected components, keeps the
/// components that denote real cycles, and recovers one simple cycle through
/// every eligible member module.
pub struct CycleDetector {
    options: DetectorOptions,
    cycles: Vec<ModuleCycle>,
    callback_errors: Vec<String>,
}

/// One reported cycle: a start module and the path back to it
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleCycle {
    module_id: ModuleId,
    resource: String,
    path: Vec<String>,
}

impl ModuleCycle {
    /// Build a cycle report from a rendered path `[start, ..., start]`
    pub fn new(module_id: ModuleId, path: Vec<String>) -> Self {
        let resource = path.first().cloned().unwrap_or_default();
        Self {
            module_id,
            resource,
            path,
        }
    }

    pub fn module_id(&self) -> &ModuleId {
        &self.module_id
    }

    /// Rendered resource identifier of the start module
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Rendered cycle path; first and last elements are the start module
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Default textual rendering of the path
    pub fn arrow_path(&self) -> String {
        self.path.join(ARROW_SEPARATOR)
    }
}

/// Lifecycle callbacks receiving detection results during a pass
///
/// `on_cycle_detected` failures are caught by the detector and recorded; one
/// misbehaving cycle report must not suppress detection of other cycles.
pub trait CycleSink {
    fn on_start(&mut self) {}

    fn on_cycle_detected(
        &mut self,
        module: &ModuleNode,
        path: &[String],
    ) -> Result<(), RoundaboutError>;

    fn on_end(&mut self) {}
}

/// Sink that batches every report into a `Vec<ModuleCycle>`
#[derive(Default)]
pub struct CollectingSink {
    cycles: Vec<ModuleCycle>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_cycles(self) -> Vec<ModuleCycle> {
        self.cycles
    }
}

impl CycleSink for CollectingSink {
    fn on_cycle_detected(
        &mut self,
        module: &ModuleNode,
        path: &[String],
    ) -> Result<(), RoundaboutError> {
        self.cycles
            .push(ModuleCycle::new(module.id.clone(), path.to_vec()));
        Ok(())
    }
}

impl Default for CycleDetector {
    fn default() -> Self {
        Self::new(DetectorOptions::default())
    }
}

impl CycleDetector {
    /// Create a new cycle detector with the given per-pass options
    pub fn new(options: DetectorOptions) -> Self {
        Self {
            options,
            cycles: Vec::new(),
            callback_errors: Vec::new(),
        }
    }

    /// Detect all cycles in the module graph, collecting the reports
    ///
    /// Batch-collecting variant of [`detect_cycles_with_sink`]; results are
    /// available from [`cycles`] afterwards.
    ///
    /// [`detect_cycles_with_sink`]: Self::detect_cycles_with_sink
    /// [`cycles`]: Self::cycles
    pub fn detect_cycles(&mut self, graph: &DiGraph<ModuleNode, DependencyKind>) -> Result<()> {
        let mut sink = CollectingSink::new();
        self.detect_cycles_with_sink(graph, &mut sink)?;
        self.cycles = sink.into_cycles();
        Ok(())
    }

    /// Detect all cycles in the module graph, streaming reports to a sink
    ///
    /// For every cyclic component, member modules are visited in resource
    /// order (node index order) and each eligible member receives exactly one
    /// report whose path starts and ends at that member. Include/exclude
    /// filters apply to the start module only.
    pub fn detect_cycles_with_sink(
        &mut self,
        graph: &DiGraph<ModuleNode, DependencyKind>,
        sink: &mut dyn CycleSink,
    ) -> Result<()> {
        sink.on_start();

        let partition = strongly_connected_components(graph);
        let cyclic: Vec<bool> = partition
            .components()
            .iter()
            .map(|component| is_cyclic_component(graph, component))
            .collect();
        let members: Vec<HashSet<NodeIndex>> = partition
            .components()
            .iter()
            .map(|component| component.iter().copied().collect())
            .collect();

        // Component traversal order is an artifact and never reaches the
        // report; node index order is the deterministic resource order, so
        // the start walk spans the whole graph rather than one component at
        // a time
        for start in graph.node_indices() {
            let component = partition.component_of(start);
            if !cyclic[component] {
                continue;
            }

            let module = &graph[start];
            let Some(resource) = module.resource.as_deref() else {
                continue;
            };
            if !self.options.is_eligible_start(resource) {
                continue;
            }
            let Some(cycle) = find_cycle_through(graph, &members[component], start) else {
                continue;
            };

            let path: Vec<String> = cycle
                .iter()
                .map(|&idx| {
                    relativize_resource(graph[idx].resource_key(), self.options.base_directory())
                })
                .collect();

            if let Err(err) = sink.on_cycle_detected(module, &path) {
                self.callback_errors.push(err.to_string());
            }
        }

        sink.on_end();
        Ok(())
    }

    /// Get all detected cycles
    pub fn cycles(&self) -> &[ModuleCycle] {
        &self.cycles
    }

    /// Check if any cycles were detected
    pub fn has_cycles(&self) -> bool {
        !self.cycles.is_empty()
    }

    /// Get the number of detected cycles
    pub fn cycle_count(&self) -> usize {
        self.cycles.len()
    }

    /// Callback failures recorded during the last pass
    pub fn callback_errors(&self) -> &[String] {
        &self.callback_errors
    }

    /// Add a cycle to the detector
    ///
    /// Exists for assembling filtered or externally produced results into a
    /// detector for reporting; a detection pass never calls this.
    pub fn add_cycle(&mut self, cycle: ModuleCycle) {
        self.cycles.push(cycle);
    }
}

/// A component denotes a real cycle only if it has at least two members and
/// every member carries a resource identifier
pub(crate) fn is_cyclic_component(
    graph: &DiGraph<ModuleNode, DependencyKind>,
    members: &[NodeIndex],
) -> bool {
    members.len() > 1 && members.iter().all(|&idx| graph[idx].resource.is_some())
}

/// Recover one simple cycle through `start` inside its component
///
/// Exhaustive DFS first; if that somehow fails (it cannot for a well-formed
/// SCC), settle for a direct two-node loop, and give up entirely when even
/// that is absent.
fn find_cycle_through(
    graph: &DiGraph<ModuleNode, DependencyKind>,
    members: &HashSet<NodeIndex>,
    start: NodeIndex,
) -> Option<Vec<NodeIndex>> {
    dfs_cycle(graph, members, start).or_else(|| fallback_cycle(graph, members, start))
}

/// One suspended visit in the path search
struct PathFrame {
    neighbors: Vec<NodeIndex>,
    cursor: usize,
}

impl PathFrame {
    fn new(graph: &DiGraph<ModuleNode, DependencyKind>, node: NodeIndex) -> Self {
        Self {
            neighbors: graph.neighbors(node).collect(),
            cursor: 0,
        }
    }
}

/// Depth-first search for a simple path from `start` back to `start`,
/// restricted to the component's member set
pub(crate) fn dfs_cycle(
    graph: &DiGraph<ModuleNode, DependencyKind>,
    members: &HashSet<NodeIndex>,
    start: NodeIndex,
) -> Option<Vec<NodeIndex>> {
    enum Step {
        Found,
        Descend(NodeIndex),
        Retreat,
        Stay,
    }

    let mut visited: HashSet<NodeIndex> = HashSet::from([start]);
    let mut path: Vec<NodeIndex> = vec![start];
    let mut frames: Vec<PathFrame> = vec![PathFrame::new(graph, start)];

    loop {
        let step = {
            let Some(frame) = frames.last_mut() else {
                break;
            };
            if frame.cursor < frame.neighbors.len() {
                let w = frame.neighbors[frame.cursor];
                frame.cursor += 1;

                if w == start && path.len() >= 2 {
                    // At least one interior edge is required; a self-loop on
                    // the start (possible in hand-built graphs) cannot close
                    // the cycle
                    Step::Found
                } else if members.contains(&w) && !visited.contains(&w) {
                    Step::Descend(w)
                } else {
                    Step::Stay
                }
            } else {
                Step::Retreat
            }
        };

        match step {
            Step::Found => {
                let mut cycle = path;
                cycle.push(start);
                return Some(cycle);
            }
            Step::Descend(w) => {
                visited.insert(w);
                path.push(w);
                frames.push(PathFrame::new(graph, w));
            }
            Step::Retreat => {
                frames.pop();
                path.pop();
            }
            Step::Stay => {}
        }
    }

    None
}

/// Last-resort fallback: the minimal two-node loop through any in-component
/// neighbor of `start`
pub(crate) fn fallback_cycle(
    graph: &DiGraph<ModuleNode, DependencyKind>,
    members: &HashSet<NodeIndex>,
    start: NodeIndex,
) -> Option<Vec<NodeIndex>> {
    graph
        .neighbors(start)
        .find(|w| members.contains(w) && *w != start)
        .map(|w| vec![start, w, start])
}
