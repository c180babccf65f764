//! Minimum spanning forests of undirected graphs.
//!
//! Both algorithms return a minimum spanning *forest*: on a disconnected graph
//! every component gets its own tree, so the result always has
//! `vertex_count - components` edges. When several forests share the minimal
//! weight, Kruskal and Prim may pick different edge sets.
//!
//! ```ignore
//! use glab_algo::mst::{MinimumSpanningTree, MstAlgorithm};
//!
//! let mst = MinimumSpanningTree::new(&graph)?;
//! let forest = mst.spanning_forest(MstAlgorithm::Prim);
//! println!("{} edges, weight {}", forest.edges.len(), forest.total_weight);
//! ```

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

use glab_core::{Graph, GraphEdge, GraphError, GraphResult, VertexId};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::utils::{DisjointSets, PriorityPair};

/// Which spanning forest algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MstAlgorithm {
    #[default]
    Kruskal,
    Prim,
}

/// Edges of a spanning forest and their summed weight (unweighted edges count `1.0`).
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningForest<E> {
    pub edges: Vec<E>,
    pub total_weight: f64,
}

impl<E> SpanningForest<E> {
    fn empty() -> Self {
        Self {
            edges: Vec::new(),
            total_weight: 0.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MinimumSpanningTree<'g, I, E> {
    graph: &'g Graph<I, E>,
}

impl<'g, I: VertexId, E: GraphEdge<I>> MinimumSpanningTree<'g, I, E> {
    /// Fails with [`GraphError::WrongDirectedness`] on a directed graph.
    pub fn new(graph: &'g Graph<I, E>) -> GraphResult<Self> {
        if graph.is_directed() {
            return Err(GraphError::WrongDirectedness {
                algorithm: "minimum spanning tree",
                graph: graph.label().to_string(),
                expected: "undirected",
            });
        }
        Ok(Self { graph })
    }

    pub fn spanning_forest(&self, algorithm: MstAlgorithm) -> SpanningForest<E> {
        match algorithm {
            MstAlgorithm::Kruskal => self.kruskal(),
            MstAlgorithm::Prim => self.prim(),
        }
    }

    /// Kruskal's algorithm: cheapest edges first, skipping those that close a cycle.
    pub fn kruskal(&self) -> SpanningForest<E> {
        let graph = self.graph;
        let Ok(mut components) = DisjointSets::new(graph.id_vertices()) else {
            return SpanningForest::empty();
        };

        // each undirected edge is stored in both directions; queue one of them
        let mut queue: BinaryHeap<Reverse<PriorityPair<&E>>> = graph
            .edges()
            .filter(|edge| edge.source() < edge.target())
            .map(|edge| Reverse(PriorityPair::new(edge.weight_or(1.0), edge)))
            .collect();

        let mut forest = SpanningForest::empty();
        let needed = graph.vertex_count().saturating_sub(1);
        while let Some(Reverse(PriorityPair { priority, value: edge })) = queue.pop() {
            if forest.edges.len() == needed {
                break;
            }
            if matches!(components.union_sets(edge.source(), edge.target()), Ok(true)) {
                forest.total_weight += priority;
                forest.edges.push(edge.clone());
            }
        }

        debug!(
            graph = graph.label(),
            edges = forest.edges.len(),
            total_weight = forest.total_weight,
            "kruskal spanning forest built"
        );
        forest
    }

    /// Prim's algorithm, restarted from the next unvisited vertex whenever a
    /// component is exhausted.
    pub fn prim(&self) -> SpanningForest<E> {
        let graph = self.graph;
        let mut visited: HashSet<&I> = HashSet::with_capacity(graph.vertex_count());
        let mut forest = SpanningForest::empty();

        for root in graph.vertices().map(|vertex| vertex.id()) {
            if !visited.insert(root) {
                continue;
            }
            let mut frontier: BinaryHeap<Reverse<PriorityPair<&E>>> = graph
                .vertex_edges(root)
                .map(|edge| Reverse(PriorityPair::new(edge.weight_or(1.0), edge)))
                .collect();

            while let Some(Reverse(PriorityPair { priority, value: edge })) = frontier.pop() {
                let target = edge.target();
                if !visited.insert(target) {
                    continue;
                }
                forest.total_weight += priority;
                forest.edges.push(edge.clone());
                frontier.extend(
                    graph
                        .vertex_edges(target)
                        .filter(|next| !visited.contains(next.target()))
                        .map(|next| Reverse(PriorityPair::new(next.weight_or(1.0), next))),
                );
            }
        }

        debug!(
            graph = graph.label(),
            edges = forest.edges.len(),
            total_weight = forest.total_weight,
            "prim spanning forest built"
        );
        forest
    }
}
