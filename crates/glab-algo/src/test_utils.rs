//! Shared graph fixtures for unit tests, integration tests and benchmarks.

use glab_core::{GraphOptions, UnweightedGraph, WeightedGraph};

fn auto(directed: bool) -> GraphOptions {
    GraphOptions {
        directed,
        auto_add_vertex: true,
    }
}

/// Weighted graph from `(source, target, weight)` triples.
pub fn weighted_graph(directed: bool, edges: &[(u32, u32, f64)]) -> WeightedGraph<u32> {
    let mut graph = WeightedGraph::new("weighted-fixture", auto(directed));
    for &(source, target, weight) in edges {
        graph
            .add_edge(source, target, weight)
            .expect("auto-add fixture");
    }
    graph
}

/// Unweighted graph from `(source, target)` pairs.
pub fn unweighted_graph(directed: bool, edges: &[(u32, u32)]) -> UnweightedGraph<u32> {
    let mut graph = UnweightedGraph::new("unweighted-fixture", auto(directed));
    for &(source, target) in edges {
        graph.add_edge(source, target).expect("auto-add fixture");
    }
    graph
}

/// Undirected six-vertex graph with mixed-sign weights; its minimum spanning
/// tree weighs exactly `0.0`.
pub fn kruskal_fixture() -> WeightedGraph<u32> {
    weighted_graph(
        false,
        &[
            (1, 2, 4.0),
            (1, 5, -2.0),
            (1, 3, 6.0),
            (2, 3, -1.0),
            (2, 6, 5.0),
            (3, 5, 11.0),
            (4, 5, 7.0),
            (4, 6, -3.0),
            (5, 6, 2.0),
        ],
    )
}

/// Undirected graph on `1..=n` linking every pair where one divides the other.
pub fn divisibility_graph(n: u32) -> UnweightedGraph<u32> {
    let mut edges = Vec::new();
    for i in 1..=n {
        for j in (i + 1)..=n {
            if j % i == 0 {
                edges.push((i, j));
            }
        }
    }
    unweighted_graph(false, &edges)
}

/// Two undirected 4-cliques `{1..4}` and `{5..8}` joined by the edge `4 - 5`.
pub fn two_cliques() -> UnweightedGraph<u32> {
    let mut edges = Vec::new();
    for block in [1, 5] {
        for i in block..block + 4 {
            for j in (i + 1)..block + 4 {
                edges.push((i, j));
            }
        }
    }
    edges.push((4, 5));
    unweighted_graph(false, &edges)
}

/// Directed `0 -> 1 -> ... -> n-1`, with unit weights.
pub fn directed_chain(n: u32) -> WeightedGraph<u32> {
    let edges: Vec<(u32, u32, f64)> = (1..n).map(|i| (i - 1, i, 1.0)).collect();
    let mut graph = weighted_graph(true, &edges);
    if n > 0 {
        graph.add_vertex(0);
    }
    graph
}

/// Undirected `side x side` grid; the edge from `(r, c)` to the right weighs
/// `1 + (r + c) % 3`, the edge downwards `1 + (r * c) % 5`.
pub fn grid_graph(side: u32) -> WeightedGraph<u32> {
    let mut edges = Vec::new();
    for r in 0..side {
        for c in 0..side {
            let id = r * side + c;
            if c + 1 < side {
                edges.push((id, id + 1, 1.0 + ((r + c) % 3) as f64));
            }
            if r + 1 < side {
                edges.push((id, id + side, 1.0 + ((r * c) % 5) as f64));
            }
        }
    }
    weighted_graph(false, &edges)
}
