use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};

use petgraph::algo::connected_components;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::edge::GraphEdge;
use crate::graph::Graph;
use crate::VertexId;

/// Summary statistics (counts, degree distribution, density, weak components).
#[derive(Debug, Clone, PartialEq)]
pub struct GraphStats {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub connected_components: usize,
    pub min_degree: usize,
    pub avg_degree: f64,
    pub max_degree: usize,
    pub density: f64,
}

/// A petgraph copy of a [`Graph`] plus the vertex lookup into it.
#[derive(Debug, Clone)]
pub struct PetgraphView<I> {
    pub graph: DiGraph<I, f64>,
    pub index: HashMap<I, NodeIndex>,
}

impl<I: VertexId> PetgraphView<I> {
    pub fn node(&self, id: &I) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }
}

/// Copies every stored directed edge into a petgraph `DiGraph`.
///
/// Undirected graphs therefore appear with both directions of each edge.
/// Unweighted edges get weight `1.0`.
pub fn to_petgraph<I: VertexId, E: GraphEdge<I>>(graph: &Graph<I, E>) -> PetgraphView<I> {
    let mut out = DiGraph::with_capacity(graph.vertex_count(), graph.stored_edge_count());
    let mut index = HashMap::with_capacity(graph.vertex_count());
    for id in graph.id_vertices() {
        let node = out.add_node(id.clone());
        index.insert(id, node);
    }
    for edge in graph.edges() {
        if let (Some(&a), Some(&b)) = (index.get(edge.source()), index.get(edge.target())) {
            out.add_edge(a, b, edge.weight_or(1.0));
        }
    }
    PetgraphView { graph: out, index }
}

/// Calculates graph-level statistics such as density, out-degree distribution
/// and weakly connected component count.
pub fn graph_stats<I: VertexId, E: GraphEdge<I>>(graph: &Graph<I, E>) -> GraphStats {
    let vertex_count = graph.vertex_count();
    let edge_count = graph.edge_count();
    let degrees: Vec<usize> = graph
        .vertices()
        .map(|vertex| graph.out_degree(vertex.id()))
        .collect();
    let min_degree = *degrees.iter().min().unwrap_or(&0);
    let max_degree = *degrees.iter().max().unwrap_or(&0);
    let avg_degree = if vertex_count == 0 {
        0.0
    } else {
        degrees.iter().copied().sum::<usize>() as f64 / vertex_count as f64
    };
    let density = if vertex_count < 2 {
        0.0
    } else {
        let pairs = vertex_count as f64 * (vertex_count as f64 - 1.0);
        let factor = if graph.is_directed() { 1.0 } else { 2.0 };
        factor * edge_count as f64 / pairs
    };
    let connected_components = connected_components(&to_petgraph(graph).graph);
    GraphStats {
        vertex_count,
        edge_count,
        connected_components,
        min_degree,
        avg_degree,
        max_degree,
        density,
    }
}

/// Labels weakly connected components with a breadth-first search.
///
/// Components come back in order of their smallest vertex.
pub fn find_components<I: VertexId, E: GraphEdge<I>>(graph: &Graph<I, E>) -> Vec<BTreeSet<I>> {
    // direction is ignored, so gather neighbours both ways
    let mut neighbours: BTreeMap<&I, Vec<&I>> = BTreeMap::new();
    for edge in graph.edges() {
        neighbours.entry(edge.source()).or_default().push(edge.target());
        neighbours.entry(edge.target()).or_default().push(edge.source());
    }

    let mut visited: BTreeSet<&I> = BTreeSet::new();
    let mut components = Vec::new();
    for vertex in graph.vertices() {
        let start = vertex.id();
        if visited.contains(start) {
            continue;
        }
        let mut queue = VecDeque::new();
        queue.push_back(start);
        let mut members = BTreeSet::new();
        while let Some(current) = queue.pop_front() {
            if !visited.insert(current) {
                continue;
            }
            members.insert(current.clone());
            for &next in neighbours.get(current).into_iter().flatten() {
                if !visited.contains(next) {
                    queue.push_back(next);
                }
            }
        }
        components.push(members);
    }
    components
}
