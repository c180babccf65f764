use std::collections::{BTreeSet, HashSet};

use glab_core::{Graph, GraphEdge, GraphResult, VertexId};
use tracing::debug;

/// Enumerates the simple cycles passing through a given vertex.
///
/// Cycles are reported as the vertex sequence starting at the search vertex,
/// without repeating it at the end. Only cycles of three or more vertices are
/// reported, so self-loops and the `u -> v -> u` echo of an undirected edge
/// are skipped. On undirected graphs each cycle appears once per direction.
///
/// The number of simple cycles can grow exponentially with graph size; the
/// search is exhaustive and not bounded.
#[derive(Debug, Clone)]
pub struct CycleSearch<'g, I, E> {
    graph: &'g Graph<I, E>,
}

struct Frame<'a, I> {
    targets: Vec<&'a I>,
    next: usize,
}

impl<'g, I: VertexId, E: GraphEdge<I>> CycleSearch<'g, I, E> {
    pub fn new(graph: &'g Graph<I, E>) -> Self {
        Self { graph }
    }

    /// All simple cycles through `start`.
    pub fn vertex_cycles(&self, start: &I) -> GraphResult<BTreeSet<Vec<I>>> {
        let graph = self.graph;
        graph.require_vertex(start)?;

        let targets_of = |vertex: &I| -> Vec<&'g I> {
            graph.vertex_edges(vertex).map(|edge| edge.target()).collect()
        };

        let mut cycles = BTreeSet::new();
        let mut path: Vec<&I> = vec![start];
        let mut on_path: HashSet<&I> = HashSet::from([start]);
        let mut stack = vec![Frame {
            targets: targets_of(start),
            next: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            let Some(&target) = frame.targets.get(frame.next) else {
                stack.pop();
                if let Some(left) = path.pop() {
                    on_path.remove(left);
                }
                continue;
            };
            frame.next += 1;

            if target == start {
                if path.len() > 2 {
                    cycles.insert(path.iter().map(|&id| id.clone()).collect());
                }
                continue;
            }
            if on_path.contains(target) {
                continue;
            }
            path.push(target);
            on_path.insert(target);
            stack.push(Frame {
                targets: targets_of(target),
                next: 0,
            });
        }

        debug!(
            graph = graph.label(),
            start = ?start,
            cycles = cycles.len(),
            "cycle search finished"
        );
        Ok(cycles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glab_core::{GraphError, GraphOptions, UnweightedGraph};

    fn graph(directed: bool, edges: &[(u32, u32)]) -> UnweightedGraph<u32> {
        let options = GraphOptions {
            directed,
            auto_add_vertex: true,
        };
        let mut graph = UnweightedGraph::new("cycles", options);
        for &(a, b) in edges {
            graph.add_edge(a, b).unwrap();
        }
        graph
    }

    #[test]
    fn test_directed_square() {
        let graph = graph(true, &[(1, 2), (2, 3), (3, 4), (4, 1)]);
        let cycles = CycleSearch::new(&graph).vertex_cycles(&1).unwrap();
        assert_eq!(cycles, BTreeSet::from([vec![1, 2, 3, 4]]));
    }

    #[test]
    fn test_self_loop_and_two_cycle_are_skipped() {
        let graph = graph(true, &[(1, 1), (1, 2), (2, 1)]);
        assert!(CycleSearch::new(&graph).vertex_cycles(&1).unwrap().is_empty());
    }

    #[test]
    fn test_undirected_triangle_in_both_directions() {
        let graph = graph(false, &[(1, 2), (2, 3), (3, 1)]);
        let cycles = CycleSearch::new(&graph).vertex_cycles(&1).unwrap();
        assert_eq!(cycles, BTreeSet::from([vec![1, 2, 3], vec![1, 3, 2]]));
    }

    #[test]
    fn test_multiple_cycles_through_start() {
        let graph = graph(true, &[(1, 2), (2, 3), (3, 1), (2, 4), (4, 5), (5, 1), (4, 2)]);
        let cycles = CycleSearch::new(&graph).vertex_cycles(&1).unwrap();
        assert_eq!(
            cycles,
            BTreeSet::from([vec![1, 2, 3], vec![1, 2, 4, 5]])
        );
    }

    #[test]
    fn test_vertex_without_cycles() {
        let graph = graph(true, &[(1, 2), (2, 3)]);
        assert!(CycleSearch::new(&graph).vertex_cycles(&2).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_start() {
        let graph = graph(true, &[(1, 2)]);
        assert!(matches!(
            CycleSearch::new(&graph).vertex_cycles(&7),
            Err(GraphError::UnknownVertex { .. })
        ));
    }
}
