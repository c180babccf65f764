//! The [`Graph`] container and its concrete variants.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::edge::{Edge, GraphEdge, WeightedEdge};
use crate::error::{GraphError, GraphResult};
use crate::VertexId;

/// Vertex wrapper around an opaque identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vertex<I>(I);

impl<I> Vertex<I> {
    #[inline]
    pub fn new(id: I) -> Self {
        Vertex(id)
    }

    #[inline]
    pub fn id(&self) -> &I {
        &self.0
    }

    pub fn into_id(self) -> I {
        self.0
    }
}

/// Shape flags fixed when a graph is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphOptions {
    /// Edges are one-way; otherwise every edge is mirrored.
    pub directed: bool,
    /// Missing edge endpoints are created instead of rejected.
    pub auto_add_vertex: bool,
}

impl GraphOptions {
    pub fn directed() -> Self {
        Self {
            directed: true,
            auto_add_vertex: false,
        }
    }

    pub fn undirected() -> Self {
        Self::default()
    }

    pub fn with_auto_add_vertex(mut self, enabled: bool) -> Self {
        self.auto_add_vertex = enabled;
        self
    }
}

/// Generic directed/undirected graph.
///
/// Vertices are kept in identifier order, and outgoing edges are stored per
/// source vertex keyed by target, so there is at most one edge per ordered
/// pair. Undirected graphs store every edge twice (once per direction), except
/// self-loops which are stored once.
///
/// Edges are inserted through the typed `add_edge` of the concrete variants
/// ([`UnweightedGraph`], [`WeightedGraph`] and [`UnitWeightGraph`]).
#[derive(Debug, Clone)]
pub struct Graph<I, E> {
    label: String,
    options: GraphOptions,
    vertices: BTreeMap<I, Vertex<I>>,
    edges: BTreeMap<I, BTreeMap<I, E>>,
}

/// Graph whose edges carry no weight (algorithms treat them as weight `1.0`).
pub type UnweightedGraph<I> = Graph<I, Edge<I>>;

/// Graph whose edges carry an `f64` weight.
pub type WeightedGraph<I> = Graph<I, WeightedEdge<I>>;

impl<I: VertexId, E: GraphEdge<I>> Graph<I, E> {
    pub fn new(label: impl Into<String>, options: GraphOptions) -> Self {
        Self {
            label: label.into(),
            options,
            vertices: BTreeMap::new(),
            edges: BTreeMap::new(),
        }
    }

    pub fn directed(label: impl Into<String>) -> Self {
        Self::new(label, GraphOptions::directed())
    }

    pub fn undirected(label: impl Into<String>) -> Self {
        Self::new(label, GraphOptions::undirected())
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn options(&self) -> GraphOptions {
        self.options
    }

    pub fn is_directed(&self) -> bool {
        self.options.directed
    }

    pub fn is_auto_add_vertex(&self) -> bool {
        self.options.auto_add_vertex
    }

    /// Add a vertex; returns `false` when it was already present.
    pub fn add_vertex(&mut self, id: I) -> bool {
        if self.vertices.contains_key(&id) {
            return false;
        }
        self.vertices.insert(id.clone(), Vertex::new(id));
        true
    }

    /// Remove a vertex together with every edge touching it.
    pub fn remove_vertex(&mut self, id: &I) -> bool {
        if self.vertices.remove(id).is_none() {
            return false;
        }
        let removed_outgoing = self.edges.remove(id).map_or(0, |targets| targets.len());
        let mut removed_incoming = 0;
        self.edges.retain(|_, targets| {
            if targets.remove(id).is_some() {
                removed_incoming += 1;
            }
            !targets.is_empty()
        });
        trace!(
            graph = %self.label,
            vertex = ?id,
            removed_outgoing,
            removed_incoming,
            "vertex removed"
        );
        true
    }

    pub fn contains_vertex(&self, id: &I) -> bool {
        self.vertices.contains_key(id)
    }

    /// Owned snapshot of the vertex identifiers, in identifier order.
    pub fn id_vertices(&self) -> Vec<I> {
        self.vertices.keys().cloned().collect()
    }

    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<I>> + '_ {
        self.vertices.values()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Outgoing edges of `id`; empty when the vertex is absent or has none.
    pub fn vertex_edges(&self, id: &I) -> impl Iterator<Item = &E> + '_ {
        self.edges
            .get(id)
            .into_iter()
            .flat_map(|targets| targets.values())
    }

    pub fn out_degree(&self, id: &I) -> usize {
        self.edges.get(id).map_or(0, |targets| targets.len())
    }

    /// Every stored directed edge (both directions for undirected graphs).
    pub fn edges(&self) -> impl Iterator<Item = &E> + '_ {
        self.edges.values().flat_map(|targets| targets.values())
    }

    /// Number of stored directed edges.
    pub fn stored_edge_count(&self) -> usize {
        self.edges.values().map(|targets| targets.len()).sum()
    }

    /// Number of logical edges; mirrored pairs of an undirected graph count once.
    pub fn edge_count(&self) -> usize {
        let stored = self.stored_edge_count();
        if self.is_directed() {
            return stored;
        }
        let self_loops = self.edges().filter(|edge| edge.is_self_loop()).count();
        (stored + self_loops) / 2
    }

    pub fn edge(&self, source: &I, target: &I) -> Option<&E> {
        self.edges.get(source).and_then(|targets| targets.get(target))
    }

    pub fn contains_edge(&self, source: &I, target: &I) -> bool {
        self.edge(source, target).is_some()
    }

    /// Remove the edge `source -> target` (and its mirror for undirected graphs).
    pub fn remove_edge(&mut self, source: &I, target: &I) -> bool {
        let removed = self.remove_directed_edge(source, target);
        if !self.is_directed() {
            self.remove_directed_edge(target, source);
        }
        removed
    }

    /// Insert an edge, validating (or auto-adding) both endpoints first.
    ///
    /// An edge with the same endpoints replaces the stored one.
    pub(crate) fn insert_edge(&mut self, edge: E) -> GraphResult<()> {
        self.ensure_vertex(edge.source())?;
        self.ensure_vertex(edge.target())?;
        if !self.is_directed() && !edge.is_self_loop() {
            self.store_edge(edge.reversed());
        }
        trace!(graph = %self.label, edge = ?edge, "edge inserted");
        self.store_edge(edge);
        Ok(())
    }

    fn ensure_vertex(&mut self, id: &I) -> GraphResult<()> {
        if self.contains_vertex(id) {
            return Ok(());
        }
        if !self.is_auto_add_vertex() {
            return Err(GraphError::MissingVertex {
                graph: self.label.clone(),
                vertex: format!("{id:?}"),
            });
        }
        self.add_vertex(id.clone());
        Ok(())
    }

    fn store_edge(&mut self, edge: E) {
        self.edges
            .entry(edge.source().clone())
            .or_default()
            .insert(edge.target().clone(), edge);
    }

    fn remove_directed_edge(&mut self, source: &I, target: &I) -> bool {
        let Some(targets) = self.edges.get_mut(source) else {
            return false;
        };
        let removed = targets.remove(target).is_some();
        if targets.is_empty() {
            self.edges.remove(source);
        }
        removed
    }

    /// Error for a query that names a vertex outside the graph.
    pub fn unknown_vertex(&self, id: &I) -> GraphError {
        GraphError::UnknownVertex {
            graph: self.label.clone(),
            vertex: format!("{id:?}"),
        }
    }

    /// Fail with [`GraphError::UnknownVertex`] unless `id` is in the graph.
    pub fn require_vertex(&self, id: &I) -> GraphResult<()> {
        if self.contains_vertex(id) {
            Ok(())
        } else {
            Err(self.unknown_vertex(id))
        }
    }
}

impl<I: VertexId> Graph<I, Edge<I>> {
    /// Add the unweighted edge `source -> target`.
    pub fn add_edge(&mut self, source: I, target: I) -> GraphResult<()> {
        self.insert_edge(Edge::new(source, target))
    }
}

impl<I: VertexId> Graph<I, WeightedEdge<I>> {
    /// Add the edge `source -> target` with the given weight.
    pub fn add_edge(&mut self, source: I, target: I, weight: f64) -> GraphResult<()> {
        self.insert_edge(WeightedEdge::new(source, target, weight))
    }
}

impl<I: VertexId, E: GraphEdge<I> + fmt::Display> fmt::Display for Graph<I, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vertices: Vec<String> = self.vertices.keys().map(|id| format!("{id:?}")).collect();
        let edges: Vec<String> = self.edges().map(|edge| edge.to_string()).collect();
        write!(
            f,
            "Graph(label = {}, vertices = [{}], edges = [{}])",
            self.label,
            vertices.join(", "),
            edges.join(", ")
        )
    }
}

/// Weighted graph that ignores caller-supplied weights and stores `1.0`.
///
/// Lets a weighted representation be analysed with unweighted semantics while
/// keeping the [`WeightedGraph`] type; it dereferences to the inner graph for
/// every read-only use.
#[derive(Debug, Clone)]
pub struct UnitWeightGraph<I>(WeightedGraph<I>);

impl<I: VertexId> UnitWeightGraph<I> {
    pub fn new(label: impl Into<String>, options: GraphOptions) -> Self {
        Self(WeightedGraph::new(label, options))
    }

    /// Add the edge `source -> target`; `_weight` is replaced by `1.0`.
    pub fn add_edge(&mut self, source: I, target: I, _weight: f64) -> GraphResult<()> {
        self.0.add_edge(source, target, 1.0)
    }

    pub fn add_vertex(&mut self, id: I) -> bool {
        self.0.add_vertex(id)
    }

    pub fn remove_vertex(&mut self, id: &I) -> bool {
        self.0.remove_vertex(id)
    }

    pub fn remove_edge(&mut self, source: &I, target: &I) -> bool {
        self.0.remove_edge(source, target)
    }

    pub fn as_graph(&self) -> &WeightedGraph<I> {
        &self.0
    }

    pub fn into_inner(self) -> WeightedGraph<I> {
        self.0
    }
}

impl<I> Deref for UnitWeightGraph<I> {
    type Target = WeightedGraph<I>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
