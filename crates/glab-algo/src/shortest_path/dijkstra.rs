use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap, HashSet};

use glab_core::{Graph, GraphEdge, GraphError, GraphResult, VertexId};
use tracing::debug;

use super::{reconstruct_path, DistanceTable, PathEntry, SourceCache};
use crate::utils::PriorityPair;

/// Dijkstra's algorithm over a borrowed graph.
///
/// The frontier is a binary heap of tentative `(distance, vertex, predecessor)`
/// entries; stale entries are skipped when popped. Unweighted edges weigh `1.0`.
#[derive(Debug)]
pub struct Dijkstra<'g, I, E> {
    graph: &'g Graph<I, E>,
    cache: SourceCache<I>,
}

impl<'g, I: VertexId, E: GraphEdge<I>> Dijkstra<'g, I, E> {
    pub fn new(graph: &'g Graph<I, E>) -> Self {
        Self {
            graph,
            cache: SourceCache::new(),
        }
    }

    /// Distance and predecessor of every vertex from `source`.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownVertex`] for a source outside the graph and
    /// [`GraphError::NegativeWeight`] if any edge weighs less than zero.
    pub fn all_paths(&mut self, source: &I) -> GraphResult<&DistanceTable<I>> {
        let graph = self.graph;
        self.cache.get_or_build(source, || build_table(graph, source))
    }

    /// Vertices of a shortest path `source ..= target`, empty when unreachable.
    pub fn path(&mut self, source: &I, target: &I) -> GraphResult<Vec<I>> {
        self.graph.require_vertex(target)?;
        let table = self.all_paths(source)?;
        Ok(reconstruct_path(table, source, target))
    }

    /// Total weight of a shortest path, `f64::INFINITY` when unreachable.
    pub fn path_weight(&mut self, source: &I, target: &I) -> GraphResult<f64> {
        self.graph.require_vertex(target)?;
        let table = self.all_paths(source)?;
        Ok(table
            .get(target)
            .map_or(f64::INFINITY, |entry| entry.distance))
    }
}

fn build_table<I: VertexId, E: GraphEdge<I>>(
    graph: &Graph<I, E>,
    source: &I,
) -> GraphResult<DistanceTable<I>> {
    graph.require_vertex(source)?;
    if let Some(edge) = graph.edges().find(|edge| edge.weight_or(1.0) < 0.0) {
        return Err(GraphError::NegativeWeight {
            from: format!("{:?}", edge.source()),
            to: format!("{:?}", edge.target()),
            weight: edge.weight_or(1.0),
        });
    }

    let mut table: DistanceTable<I> = graph
        .id_vertices()
        .into_iter()
        .map(|id| (id, PathEntry::unreachable()))
        .collect();
    let mut best: BTreeMap<&I, f64> = BTreeMap::new();
    let mut settled: HashSet<&I> = HashSet::new();
    let mut frontier = BinaryHeap::new();

    best.insert(source, 0.0);
    frontier.push(Reverse(PriorityPair::new(0.0, (source, None::<&I>))));

    while let Some(Reverse(PriorityPair {
        priority: distance,
        value: (vertex, predecessor),
    })) = frontier.pop()
    {
        if !settled.insert(vertex) {
            continue;
        }
        table.insert(
            vertex.clone(),
            PathEntry {
                distance,
                predecessor: predecessor.cloned(),
            },
        );
        for edge in graph.vertex_edges(vertex) {
            let next = edge.target();
            if settled.contains(next) {
                continue;
            }
            let candidate = distance + edge.weight_or(1.0);
            if best.get(next).map_or(true, |known| candidate < *known) {
                best.insert(next, candidate);
                frontier.push(Reverse(PriorityPair::new(candidate, (next, Some(vertex)))));
            }
        }
    }

    debug!(
        graph = graph.label(),
        source = ?source,
        reached = settled.len(),
        "dijkstra table built"
    );
    Ok(table)
}
