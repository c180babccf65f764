use std::collections::HashMap;

use glab_core::{Graph, GraphEdge, GraphError, GraphResult, VertexId};
use tracing::{debug, warn};

use super::{reconstruct_path, DistanceTable, PathEntry, SourceCache};

/// Bellman-Ford over a borrowed graph, with negative cycle detection.
///
/// Builds a layered table where layer `k` holds the best distance to each
/// vertex using at most `k` edges, for `k = 0..=n+1`. A vertex that still
/// improves past layer `n - 1` lies behind a negative cycle reachable from the
/// source, and the query fails with [`GraphError::NegativeCycle`].
#[derive(Debug)]
pub struct BellmanFord<'g, I, E> {
    graph: &'g Graph<I, E>,
    cache: SourceCache<I>,
}

impl<'g, I: VertexId, E: GraphEdge<I>> BellmanFord<'g, I, E> {
    pub fn new(graph: &'g Graph<I, E>) -> Self {
        Self {
            graph,
            cache: SourceCache::new(),
        }
    }

    /// Distance and predecessor of every vertex from `source`.
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

/// Layered distances; `pred[v][k] == None` on a finite layer means the value
/// was carried over from layer `k - 1`.
struct Layers {
    dist: Vec<Vec<f64>>,
    pred: Vec<Vec<Option<usize>>>,
}

fn build_table<I: VertexId, E: GraphEdge<I>>(
    graph: &Graph<I, E>,
    source: &I,
) -> GraphResult<DistanceTable<I>> {
    graph.require_vertex(source)?;

    let ids = graph.id_vertices();
    let position: HashMap<&I, usize> = ids.iter().enumerate().map(|(i, id)| (id, i)).collect();
    let edges: Vec<(usize, usize, f64)> = graph
        .edges()
        .filter_map(|edge| {
            let from = *position.get(edge.source())?;
            let to = *position.get(edge.target())?;
            Some((from, to, edge.weight_or(1.0)))
        })
        .collect();

    let n = ids.len();
    let origin = position
        .get(source)
        .copied()
        .ok_or_else(|| graph.unknown_vertex(source))?;
    let layers = relax_layers(n, origin, &edges);

    // any vertex still improving beyond n - 1 edges sits behind a negative cycle
    let last = n + 1;
    if let Some(v) = (0..n).find(|&v| layers.dist[v][last] < layers.dist[v][n - 1]) {
        warn!(
            graph = graph.label(),
            source = ?source,
            vertex = ?ids[v],
            "negative cycle detected"
        );
        return Err(GraphError::NegativeCycle {
            graph: graph.label().to_string(),
            origin: format!("{source:?}"),
        });
    }

    let mut table = DistanceTable::new();
    for (v, id) in ids.iter().enumerate() {
        let entry = match best_layer(&layers.dist[v]) {
            Some(k) => PathEntry {
                distance: layers.dist[v][k],
                predecessor: layers.pred[v][k].map(|u| ids[u].clone()),
            },
            None => PathEntry::unreachable(),
        };
        table.insert(id.clone(), entry);
    }

    debug!(
        graph = graph.label(),
        source = ?source,
        layers = last + 1,
        "bellman-ford table built"
    );
    Ok(table)
}

fn relax_layers(n: usize, origin: usize, edges: &[(usize, usize, f64)]) -> Layers {
    let depth = n + 2;
    let mut dist = vec![vec![f64::INFINITY; depth]; n];
    let mut pred = vec![vec![None; depth]; n];
    dist[origin][0] = 0.0;

    for k in 1..depth {
        for v in 0..n {
            dist[v][k] = dist[v][k - 1];
        }
        for &(from, to, weight) in edges {
            let base = dist[from][k - 1];
            if !base.is_finite() {
                continue;
            }
            let candidate = base + weight;
            if candidate < dist[to][k] {
                dist[to][k] = candidate;
                pred[to][k] = Some(from);
            }
        }
    }
    Layers { dist, pred }
}

/// First layer holding the minimal finite distance, if any.
fn best_layer(row: &[f64]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (k, value) in row.iter().enumerate() {
        if !value.is_finite() {
            continue;
        }
        if best.map_or(true, |b| *value < row[b]) {
            best = Some(k);
        }
    }
    best
}
