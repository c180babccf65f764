use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use glab_core::{Graph, GraphEdge, GraphError, GraphResult, VertexId};
use tracing::debug;

/// Tarjan's strongly connected components for directed graphs.
///
/// Components are numbered in the order Tarjan's algorithm completes them,
/// which is a reverse topological order of the condensation: an edge between
/// two components always runs from the higher index to the lower one.
#[derive(Debug, Clone)]
pub struct StronglyConnectedComponents<'g, I, E> {
    graph: &'g Graph<I, E>,
}

struct Frame<'a, I> {
    vertex: &'a I,
    targets: Vec<&'a I>,
    next: usize,
}

impl<'g, I: VertexId, E: GraphEdge<I>> StronglyConnectedComponents<'g, I, E> {
    /// Fails with [`GraphError::WrongDirectedness`] on an undirected graph.
    pub fn new(graph: &'g Graph<I, E>) -> GraphResult<Self> {
        if !graph.is_directed() {
            return Err(GraphError::WrongDirectedness {
                algorithm: "strongly connected components",
                graph: graph.label().to_string(),
                expected: "directed",
            });
        }
        Ok(Self { graph })
    }

    /// Component index -> member vertices; every vertex appears exactly once.
    pub fn components(&self) -> BTreeMap<usize, BTreeSet<I>> {
        let graph = self.graph;
        let mut discovery: HashMap<&I, usize> = HashMap::with_capacity(graph.vertex_count());
        let mut low: HashMap<&I, usize> = HashMap::with_capacity(graph.vertex_count());
        let mut on_stack: HashSet<&I> = HashSet::new();
        let mut stack: Vec<&I> = Vec::new();
        let mut components = BTreeMap::new();
        let mut time = 0;

        let targets_of = |vertex: &'g I| -> Vec<&'g I> {
            graph.vertex_edges(vertex).map(|edge| edge.target()).collect()
        };

        for root in graph.vertices().map(|vertex| vertex.id()) {
            if discovery.contains_key(root) {
                continue;
            }
            discovery.insert(root, time);
            low.insert(root, time);
            time += 1;
            stack.push(root);
            on_stack.insert(root);
            let mut calls = vec![Frame {
                vertex: root,
                targets: targets_of(root),
                next: 0,
            }];

            while let Some(frame) = calls.last_mut() {
                let vertex = frame.vertex;
                if let Some(&target) = frame.targets.get(frame.next) {
                    frame.next += 1;
                    if !discovery.contains_key(target) {
                        discovery.insert(target, time);
                        low.insert(target, time);
                        time += 1;
                        stack.push(target);
                        on_stack.insert(target);
                        calls.push(Frame {
                            vertex: target,
                            targets: targets_of(target),
                            next: 0,
                        });
                    } else if on_stack.contains(target) {
                        let reach = discovery[target];
                        lower(&mut low, vertex, reach);
                    }
                    continue;
                }

                calls.pop();
                let vertex_low = low[vertex];
                if vertex_low == discovery[vertex] {
                    let mut members = BTreeSet::new();
                    while let Some(member) = stack.pop() {
                        on_stack.remove(member);
                        members.insert(member.clone());
                        if member == vertex {
                            break;
                        }
                    }
                    components.insert(components.len(), members);
                }
                if let Some(parent) = calls.last() {
                    lower(&mut low, parent.vertex, vertex_low);
                }
            }
        }

        debug!(
            graph = graph.label(),
            components = components.len(),
            "strongly connected components found"
        );
        components
    }

    /// Edges of the condensation as `(from_component, to_component)` pairs.
    pub fn condensation(&self) -> BTreeSet<(usize, usize)> {
        let components = self.components();
        let owner: HashMap<&I, usize> = components
            .iter()
            .flat_map(|(index, members)| members.iter().map(move |member| (member, *index)))
            .collect();
        self.graph
            .edges()
            .filter_map(|edge| {
                let from = *owner.get(edge.source())?;
                let to = *owner.get(edge.target())?;
                (from != to).then_some((from, to))
            })
            .collect()
    }
}

fn lower<'a, I: VertexId>(low: &mut HashMap<&'a I, usize>, vertex: &'a I, value: usize) {
    if let Some(current) = low.get_mut(vertex) {
        if value < *current {
            *current = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glab_core::{GraphOptions, UnweightedGraph};

    fn directed<I: VertexId>() -> UnweightedGraph<I> {
        UnweightedGraph::new("scc", GraphOptions::directed().with_auto_add_vertex(true))
    }

    #[test]
    fn test_undirected_graph_is_rejected() {
        let graph: UnweightedGraph<u32> = UnweightedGraph::undirected("u");
        assert!(matches!(
            StronglyConnectedComponents::new(&graph),
            Err(GraphError::WrongDirectedness { .. })
        ));
    }

    #[test]
    fn test_letters() {
        let mut graph = directed::<char>();
        for (a, b) in [
            ('A', 'B'),
            ('B', 'C'),
            ('B', 'E'),
            ('B', 'G'),
            ('C', 'D'),
            ('D', 'C'),
            ('D', 'E'),
            ('D', 'F'),
            ('E', 'F'),
            ('F', 'E'),
            ('G', 'A'),
            ('G', 'C'),
        ] {
            graph.add_edge(a, b).unwrap();
        }
        let scc = StronglyConnectedComponents::new(&graph).unwrap();
        let expected = BTreeMap::from([
            (0, BTreeSet::from(['E', 'F'])),
            (1, BTreeSet::from(['C', 'D'])),
            (2, BTreeSet::from(['A', 'B', 'G'])),
        ]);
        assert_eq!(scc.components(), expected);
        assert_eq!(
            scc.condensation(),
            BTreeSet::from([(1, 0), (2, 0), (2, 1)])
        );
    }

    #[test]
    fn test_isolated_and_self_loop() {
        let mut graph = directed::<u32>();
        graph.add_edge(1, 1).unwrap();
        graph.add_vertex(2);
        let components = StronglyConnectedComponents::new(&graph).unwrap().components();
        assert_eq!(components.len(), 2);
        assert!(components.values().any(|members| members == &BTreeSet::from([1])));
        assert!(components.values().any(|members| members == &BTreeSet::from([2])));
    }

    #[test]
    fn test_long_chain_does_not_recurse() {
        let mut graph = directed::<u32>();
        for i in 0..20_000u32 {
            graph.add_edge(i, i + 1).unwrap();
        }
        graph.add_edge(20_000, 0).unwrap();
        let components = StronglyConnectedComponents::new(&graph).unwrap().components();
        assert_eq!(components.len(), 1);
        assert_eq!(components[&0].len(), 20_001);
    }
}
