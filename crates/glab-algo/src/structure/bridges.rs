use std::collections::HashMap;

use glab_core::{Graph, GraphEdge, GraphError, GraphResult, VertexId};
use tracing::debug;

/// Tarjan's bridge-finding algorithm for undirected graphs.
///
/// An edge `(u, v)` of the DFS tree is a bridge when no vertex in the subtree
/// of `v` reaches back above `v`, i.e. `low(v) > height(u)`.
#[derive(Debug, Clone)]
pub struct BridgeFinder<'g, I, E> {
    graph: &'g Graph<I, E>,
}

struct Frame<'a, I, E> {
    vertex: &'a I,
    parent: Option<&'a I>,
    via: Option<&'a E>,
    edges: Vec<&'a E>,
    next: usize,
    parent_skipped: bool,
}

impl<'g, I: VertexId, E: GraphEdge<I>> BridgeFinder<'g, I, E> {
    /// Fails with [`GraphError::WrongDirectedness`] on a directed graph.
    pub fn new(graph: &'g Graph<I, E>) -> GraphResult<Self> {
        if graph.is_directed() {
            return Err(GraphError::WrongDirectedness {
                algorithm: "bridge finding",
                graph: graph.label().to_string(),
                expected: "undirected",
            });
        }
        Ok(Self { graph })
    }

    /// Every bridge once, oriented from the smaller endpoint, in sorted order.
    pub fn bridges(&self) -> Vec<E> {
        let graph = self.graph;
        let mut height: HashMap<&I, usize> = HashMap::with_capacity(graph.vertex_count());
        let mut low: HashMap<&I, usize> = HashMap::with_capacity(graph.vertex_count());
        let mut bridges: Vec<E> = Vec::new();

        for root in graph.vertices().map(|vertex| vertex.id()) {
            if height.contains_key(root) {
                continue;
            }
            height.insert(root, 0);
            low.insert(root, 0);
            let mut stack = vec![Frame {
                vertex: root,
                parent: None,
                via: None,
                edges: graph.vertex_edges(root).collect(),
                next: 0,
                parent_skipped: false,
            }];

            while let Some(frame) = stack.last_mut() {
                if let Some(&edge) = frame.edges.get(frame.next) {
                    frame.next += 1;
                    let vertex = frame.vertex;
                    let target = edge.target();
                    if edge.is_self_loop() {
                        continue;
                    }
                    if Some(target) == frame.parent && !frame.parent_skipped {
                        frame.parent_skipped = true;
                        continue;
                    }
                    if let Some(&seen) = height.get(target) {
                        lower(&mut low, vertex, seen);
                        continue;
                    }
                    let depth = height.get(vertex).copied().unwrap_or(0) + 1;
                    height.insert(target, depth);
                    low.insert(target, depth);
                    stack.push(Frame {
                        vertex: target,
                        parent: Some(vertex),
                        via: Some(edge),
                        edges: graph.vertex_edges(target).collect(),
                        next: 0,
                        parent_skipped: false,
                    });
                    continue;
                }

                let Some(done) = stack.pop() else { break };
                let (Some(parent), Some(edge)) = (done.parent, done.via) else {
                    continue;
                };
                let child_low = low.get(done.vertex).copied().unwrap_or(usize::MAX);
                lower(&mut low, parent, child_low);
                if child_low > height.get(parent).copied().unwrap_or(0) {
                    bridges.push(canonical(edge));
                }
            }
        }

        bridges.sort_by(|a, b| (a.source(), a.target()).cmp(&(b.source(), b.target())));
        debug!(
            graph = graph.label(),
            bridges = bridges.len(),
            "bridge search finished"
        );
        bridges
    }
}

fn lower<'a, I: VertexId>(low: &mut HashMap<&'a I, usize>, vertex: &'a I, value: usize) {
    let entry = low.entry(vertex).or_insert(value);
    if value < *entry {
        *entry = value;
    }
}

fn canonical<I: VertexId, E: GraphEdge<I>>(edge: &E) -> E {
    if edge.source() > edge.target() {
        edge.reversed()
    } else {
        edge.clone()
    }
}
