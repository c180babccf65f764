use std::collections::{BTreeSet, HashMap};

use glab_core::{Graph, GraphEdge, VertexId};

use crate::utils::{SetPartition, WeightedAdjacencyIndex};

/// Gain of moving one vertex, plus its nesting in the destination community.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModularityChange {
    pub delta: f64,
    pub nesting: f64,
}

/// Scores partitions of a graph snapshot and prices single-vertex moves.
///
/// The *nesting* of a vertex `v` in a community `C` is the share of modularity
/// contributed by the pairs between `v` and the other members of `C`:
///
/// ```text
/// nest(v, C) = sum over j in C, j != v of (w(v, j) + w(j, v) - 2 d(v) d(j) / T) / T
/// ```
///
/// Moving `v` from `A` to `B` changes modularity by exactly
/// `nest(v, B) - nest(v, A)`. The evaluator caches `nest(v, community(v))` for
/// every vertex; callers that move vertices keep the cache current with
/// [`refresh_community`](Self::refresh_community).
#[derive(Debug, Clone)]
pub struct ModularityEvaluator<I> {
    adjacency: WeightedAdjacencyIndex<I>,
    nesting: HashMap<I, f64>,
}

impl<I: VertexId> ModularityEvaluator<I> {
    pub fn new<E: GraphEdge<I>>(graph: &Graph<I, E>) -> Self {
        Self {
            adjacency: WeightedAdjacencyIndex::new(graph),
            nesting: HashMap::new(),
        }
    }

    /// Rebuild the adjacency snapshot and drop every cached nesting value.
    pub fn update_matrix<E: GraphEdge<I>>(&mut self, graph: &Graph<I, E>) {
        self.adjacency.update_matrix(graph);
        self.nesting.clear();
    }

    pub fn adjacency(&self) -> &WeightedAdjacencyIndex<I> {
        &self.adjacency
    }

    /// Half the total stored edge weight.
    pub fn module(&self) -> f64 {
        self.adjacency.total_weight() / 2.0
    }

    /// Modularity of `partition`; refreshes the nesting cache of every element.
    ///
    /// Returns `0.0` for a graph without edges.
    pub fn evaluate_modularity(&mut self, partition: &SetPartition<I>) -> f64 {
        let total = self.adjacency.total_weight();
        let mut modularity = 0.0;
        for (_, community) in partition.groups() {
            for source in community {
                let source_degree = self.adjacency.vertex_weighted_degree(source);
                let mut vertex_nesting = 0.0;
                for target in community {
                    if source == target {
                        continue;
                    }
                    let weight = self.adjacency.edge_weight_or_default(source, target, 0.0);
                    let reversed = self.adjacency.edge_weight_or_default(target, source, 0.0);
                    let expected = ratio(
                        source_degree * self.adjacency.vertex_weighted_degree(target),
                        total,
                    );
                    modularity += weight - expected;
                    vertex_nesting += weight + reversed - 2.0 * expected;
                }
                self.nesting.insert(source.clone(), ratio(vertex_nesting, total));
            }
        }
        ratio(modularity, total)
    }

    /// Price of moving `vertex` out of `from` and into `to`.
    ///
    /// The nesting in `from` comes from the cache when present.
    pub fn evaluate_modularity_change(
        &self,
        vertex: &I,
        from: &BTreeSet<I>,
        to: &BTreeSet<I>,
    ) -> ModularityChange {
        let nesting_from = match self.nesting.get(vertex) {
            Some(cached) if from.contains(vertex) => *cached,
            _ => self.nesting_in(vertex, from),
        };
        let nesting_to = self.nesting_in(vertex, to);
        ModularityChange {
            delta: nesting_to - nesting_from,
            nesting: nesting_to,
        }
    }

    /// `nest(vertex, community)`, computed from scratch.
    pub fn nesting_in(&self, vertex: &I, community: &BTreeSet<I>) -> f64 {
        let total = self.adjacency.total_weight();
        let degree = self.adjacency.vertex_weighted_degree(vertex);
        let mut edges = 0.0;
        let mut community_degree = 0.0;
        for member in community {
            if member == vertex {
                continue;
            }
            edges += self.adjacency.edge_weight_or_default(vertex, member, 0.0);
            edges += self.adjacency.edge_weight_or_default(member, vertex, 0.0);
            community_degree += self.adjacency.vertex_weighted_degree(member);
        }
        ratio(edges - 2.0 * ratio(degree * community_degree, total), total)
    }

    /// Cached nesting of `vertex` in its current community.
    pub fn nesting(&self, vertex: &I) -> Option<f64> {
        self.nesting.get(vertex).copied()
    }

    pub fn update_nesting(&mut self, vertex: &I, nesting: f64) {
        self.nesting.insert(vertex.clone(), nesting);
    }

    /// Recompute the cached nesting of every member of `community`.
    pub fn refresh_community(&mut self, community: &BTreeSet<I>) {
        for member in community {
            let value = self.nesting_in(member, community);
            self.nesting.insert(member.clone(), value);
        }
    }
}

fn ratio(numerator: f64, total: f64) -> f64 {
    if total == 0.0 {
        0.0
    } else {
        numerator / total
    }
}
