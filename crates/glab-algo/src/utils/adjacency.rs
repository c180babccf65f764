//! Weight lookups derived from a graph snapshot.

use std::collections::HashMap;

use glab_core::{Graph, GraphEdge, VertexId};
use tracing::trace;

/// Edge weights and weighted out-degrees, captured from a [`Graph`] once.
///
/// The index does not observe later graph mutations; call
/// [`update_matrix`](Self::update_matrix) to rebuild it. Unweighted edges
/// weigh `1.0`. [`total_weight`](Self::total_weight) sums every stored
/// directed edge, so each undirected edge contributes twice.
#[derive(Debug, Clone, Default)]
pub struct WeightedAdjacencyIndex<I> {
    outgoing: HashMap<I, HashMap<I, f64>>,
    incoming: HashMap<I, HashMap<I, f64>>,
    degrees: HashMap<I, f64>,
    total_weight: f64,
}

impl<I: VertexId> WeightedAdjacencyIndex<I> {
    pub fn new<E: GraphEdge<I>>(graph: &Graph<I, E>) -> Self {
        let mut index = Self {
            outgoing: HashMap::new(),
            incoming: HashMap::new(),
            degrees: HashMap::new(),
            total_weight: 0.0,
        };
        index.update_matrix(graph);
        index
    }

    /// Rebuild every lookup from scratch.
    pub fn update_matrix<E: GraphEdge<I>>(&mut self, graph: &Graph<I, E>) {
        self.outgoing.clear();
        self.incoming.clear();
        self.degrees.clear();
        self.total_weight = 0.0;

        for edge in graph.edges() {
            let weight = edge.weight_or(1.0);
            let (source, target) = (edge.source(), edge.target());
            self.outgoing
                .entry(source.clone())
                .or_default()
                .insert(target.clone(), weight);
            self.incoming
                .entry(target.clone())
                .or_default()
                .insert(source.clone(), weight);
            *self.degrees.entry(source.clone()).or_insert(0.0) += weight;
            self.total_weight += weight;
        }
        trace!(
            graph = graph.label(),
            total_weight = self.total_weight,
            "adjacency index rebuilt"
        );
    }

    /// Weight of `source -> target`, or `default` when there is no such edge.
    pub fn edge_weight_or_default(&self, source: &I, target: &I, default: f64) -> f64 {
        self.outgoing
            .get(source)
            .and_then(|targets| targets.get(target))
            .copied()
            .unwrap_or(default)
    }

    /// Sum of the weights of every edge leaving `vertex`.
    pub fn vertex_weighted_degree(&self, vertex: &I) -> f64 {
        self.degrees.get(vertex).copied().unwrap_or(0.0)
    }

    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    pub fn out_neighbours(&self, vertex: &I) -> impl Iterator<Item = (&I, f64)> + '_ {
        self.outgoing
            .get(vertex)
            .into_iter()
            .flat_map(|targets| targets.iter().map(|(id, weight)| (id, *weight)))
    }

    pub fn in_neighbours(&self, vertex: &I) -> impl Iterator<Item = (&I, f64)> + '_ {
        self.incoming
            .get(vertex)
            .into_iter()
            .flat_map(|sources| sources.iter().map(|(id, weight)| (id, *weight)))
    }
}
