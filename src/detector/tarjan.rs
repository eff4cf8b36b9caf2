//! Strongly connected components, computed iteratively
//!
//! Tarjan's single-pass algorithm with the recursion replaced by an explicit
//! work stack. Module graphs with tens of thousands of nodes and long
//! dependency chains are in scope, so traversal depth must be bounded by heap
//! rather than by the call stack.

use petgraph::graph::{DiGraph, NodeIndex};

/// Partition of a graph's nodes into strongly connected components
///
/// Component list order is an artifact of traversal (reverse topological
/// order of the condensation); consumers re-sort members by node index before
/// reporting instead of relying on it.
#[derive(Debug)]
pub struct SccPartition {
    components: Vec<Vec<NodeIndex>>,
    component_of: Vec<usize>,
}

impl SccPartition {
    pub fn components(&self) -> &[Vec<NodeIndex>] {
        &self.components
    }

    /// Id of the component owning a node
    pub fn component_of(&self, node: NodeIndex) -> usize {
        self.component_of[node.index()]
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

/// One suspended visit in the explicit DFS
struct Frame {
    node: NodeIndex,
    neighbors: Vec<NodeIndex>,
    cursor: usize,
}

impl Frame {
    fn new<N, E>(graph: &DiGraph<N, E>, node: NodeIndex) -> Self {
        Self {
            node,
            neighbors: graph.neighbors(node).collect(),
            cursor: 0,
        }
    }
}

/// Per-node traversal state shared by every visit
struct TraversalState {
    discovery: Vec<Option<u32>>,
    lowlink: Vec<u32>,
    on_stack: Vec<bool>,
    stack: Vec<NodeIndex>,
    next_discovery: u32,
}

impl TraversalState {
    fn new(node_count: usize) -> Self {
        Self {
            discovery: vec![None; node_count],
            lowlink: vec![0; node_count],
            on_stack: vec![false; node_count],
            stack: Vec::new(),
            next_discovery: 0,
        }
    }

    fn visit(&mut self, node: NodeIndex) {
        self.discovery[node.index()] = Some(self.next_discovery);
        self.lowlink[node.index()] = self.next_discovery;
        self.next_discovery += 1;
        self.on_stack[node.index()] = true;
        self.stack.push(node);
    }
}

/// Compute the strongly connected components of a directed graph
///
/// Because adjacency order is fixed by the graph builder, discovery order and
/// the resulting components are fully determined by the input graph. Runs in
/// O(N + E) with O(N) auxiliary state.
pub fn strongly_connected_components<N, E>(graph: &DiGraph<N, E>) -> SccPartition {
    let n = graph.node_count();
    let mut state = TraversalState::new(n);
    let mut frames: Vec<Frame> = Vec::new();
    let mut components: Vec<Vec<NodeIndex>> = Vec::new();

    enum Step {
        Descend(NodeIndex),
        Retreat,
        Stay,
    }

    for root in graph.node_indices() {
        if state.discovery[root.index()].is_some() {
            continue;
        }
        state.visit(root);
        frames.push(Frame::new(graph, root));

        loop {
            let step = {
                let Some(frame) = frames.last_mut() else {
                    break;
                };
                if frame.cursor < frame.neighbors.len() {
                    let v = frame.node;
                    let w = frame.neighbors[frame.cursor];
                    frame.cursor += 1;

                    match state.discovery[w.index()] {
                        None => Step::Descend(w),
                        Some(w_discovery) if state.on_stack[w.index()] => {
                            // Back edge to a node still being explored
                            state.lowlink[v.index()] = state.lowlink[v.index()].min(w_discovery);
                            Step::Stay
                        }
                        Some(_) => Step::Stay,
                    }
                } else {
                    Step::Retreat
                }
            };

            match step {
                Step::Descend(w) => {
                    state.visit(w);
                    frames.push(Frame::new(graph, w));
                }
                Step::Retreat => {
                    let Some(done) = frames.pop() else {
                        break;
                    };
                    let v = done.node;
                    if let Some(parent) = frames.last() {
                        let p = parent.node.index();
                        state.lowlink[p] = state.lowlink[p].min(state.lowlink[v.index()]);
                    }

                    // v closes its own component exactly when its low-link
                    // equals its discovery number
                    if Some(state.lowlink[v.index()]) == state.discovery[v.index()] {
                        let mut component = Vec::new();
                        while let Some(w) = state.stack.pop() {
                            state.on_stack[w.index()] = false;
                            component.push(w);
                            if w == v {
                                break;
                            }
                        }
                        components.push(component);
                    }
                }
                Step::Stay => {}
            }
        }
    }

    let mut component_of = vec![0usize; n];
    for (id, component) in components.iter().enumerate() {
        for &node in component {
            component_of[node.index()] = id;
        }
    }

    SccPartition {
        components,
        component_of,
    }
}
