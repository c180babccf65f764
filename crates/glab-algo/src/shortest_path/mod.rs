//! Single-source shortest paths.
//!
//! | Algorithm | Weights | Negative cycles |
//! |-----------|---------|-----------------|
//! | [`Dijkstra`] | non-negative only | n/a |
//! | [`BellmanFord`] | any | reported as an error |
//!
//! Both build a [`DistanceTable`] for one source and keep it until a query
//! names a different source. The cache is keyed by source only: mutating the
//! graph is impossible while the algorithm borrows it, so a cached table can
//! only go stale by being rebuilt for another source.
//!
//! An unreachable target is not an error: [`path`](Dijkstra::path) returns an
//! empty vector and [`path_weight`](Dijkstra::path_weight) returns `f64::INFINITY`.

mod bellman_ford;
mod dijkstra;

use std::collections::BTreeMap;

use glab_core::{GraphResult, VertexId};

pub use bellman_ford::BellmanFord;
pub use dijkstra::Dijkstra;

/// Best known distance to a vertex and the vertex it is reached from.
#[derive(Debug, Clone, PartialEq)]
pub struct PathEntry<I> {
    pub distance: f64,
    pub predecessor: Option<I>,
}

impl<I> PathEntry<I> {
    pub fn unreachable() -> Self {
        Self {
            distance: f64::INFINITY,
            predecessor: None,
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.distance.is_finite()
    }
}

/// Per-vertex shortest path data for one source; covers every graph vertex.
pub type DistanceTable<I> = BTreeMap<I, PathEntry<I>>;

/// Table for the most recently queried source.
#[derive(Debug, Clone)]
pub(crate) struct SourceCache<I> {
    entry: Option<(I, DistanceTable<I>)>,
}

impl<I: VertexId> SourceCache<I> {
    pub(crate) fn new() -> Self {
        Self { entry: None }
    }

    /// Cached table for `source`, building it with `build` on a source change.
    pub(crate) fn get_or_build(
        &mut self,
        source: &I,
        build: impl FnOnce() -> GraphResult<DistanceTable<I>>,
    ) -> GraphResult<&DistanceTable<I>> {
        let entry = match self.entry.take() {
            Some(entry) if entry.0 == *source => entry,
            _ => (source.clone(), build()?),
        };
        Ok(&self.entry.insert(entry).1)
    }
}

/// Walk predecessors back from `target`; empty when `target` is unreachable.
pub(crate) fn reconstruct_path<I: VertexId>(table: &DistanceTable<I>, source: &I, target: &I) -> Vec<I> {
    let reachable = table.get(target).is_some_and(PathEntry::is_reachable);
    if !reachable {
        return Vec::new();
    }
    let mut path = vec![target.clone()];
    let mut current = target;
    while current != source {
        let Some(previous) = table.get(current).and_then(|entry| entry.predecessor.as_ref()) else {
            return Vec::new();
        };
        path.push(previous.clone());
        current = previous;
        // a predecessor chain never repeats a vertex; bail out if it would
        if path.len() > table.len() {
            return Vec::new();
        }
    }
    path.reverse();
    path
}
