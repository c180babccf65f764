//! Integration tests for minimum spanning forests, checked by exhaustive search
//! on small random graphs.

use glab_algo::test_utils::{grid_graph, kruskal_fixture};
use glab_algo::{DisjointSets, MinimumSpanningTree, MstAlgorithm};
use glab_core::graph_utils::find_components;
use glab_core::{GraphEdge, GraphOptions, WeightedEdge, WeightedGraph};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_graph(seed: u64, vertices: u32, edges: usize) -> WeightedGraph<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let options = GraphOptions::undirected().with_auto_add_vertex(true);
    let mut graph = WeightedGraph::new(format!("random-{seed}"), options);
    for v in 0..vertices {
        graph.add_vertex(v);
    }
    for _ in 0..edges {
        let a = rng.gen_range(0..vertices);
        let b = rng.gen_range(0..vertices);
        let weight = rng.gen_range(-5..20) as f64;
        graph.add_edge(a, b, weight).unwrap();
    }
    graph
}

fn is_forest(vertices: Vec<u32>, edges: &[&WeightedEdge<u32>]) -> bool {
    let mut sets = DisjointSets::new(vertices).unwrap();
    edges
        .iter()
        .all(|edge| sets.union_sets(edge.source(), edge.target()).unwrap())
}

/// Lightest acyclic subset with `vertex_count - components` edges.
fn brute_force_weight(graph: &WeightedGraph<u32>) -> f64 {
    let candidates: Vec<&WeightedEdge<u32>> = graph
        .edges()
        .filter(|edge| edge.source() < edge.target())
        .collect();
    let size = graph.vertex_count() - find_components(graph).len();

    let mut best = f64::INFINITY;
    for mask in 0u32..(1 << candidates.len()) {
        if mask.count_ones() as usize != size {
            continue;
        }
        let chosen: Vec<&WeightedEdge<u32>> = candidates
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, edge)| *edge)
            .collect();
        if is_forest(graph.id_vertices(), &chosen) {
            best = best.min(chosen.iter().map(|edge| edge.weight).sum());
        }
    }
    best
}

#[test]
fn test_forest_weight_is_minimal() {
    for seed in 0..30 {
        let graph = random_graph(seed, 6, 10);
        let expected = brute_force_weight(&graph);
        let mst = MinimumSpanningTree::new(&graph).unwrap();
        for algorithm in [MstAlgorithm::Kruskal, MstAlgorithm::Prim] {
            let forest = mst.spanning_forest(algorithm);
            assert!(
                (forest.total_weight - expected).abs() < 1e-9,
                "seed {seed}, {algorithm:?}: {} vs {expected}",
                forest.total_weight
            );
        }
    }
}

#[test]
fn test_forest_shape() {
    for seed in 0..30 {
        let graph = random_graph(seed, 15, 18);
        let components = find_components(&graph).len();
        let mst = MinimumSpanningTree::new(&graph).unwrap();
        for algorithm in [MstAlgorithm::Kruskal, MstAlgorithm::Prim] {
            let forest = mst.spanning_forest(algorithm);
            assert_eq!(
                forest.edges.len(),
                graph.vertex_count() - components,
                "seed {seed}, {algorithm:?}"
            );
            let edges: Vec<&WeightedEdge<u32>> = forest.edges.iter().collect();
            assert!(is_forest(graph.id_vertices(), &edges), "seed {seed}");
            let summed: f64 = forest.edges.iter().map(|edge| edge.weight).sum();
            assert!((summed - forest.total_weight).abs() < 1e-9);
        }
    }
}

#[test]
fn test_kruskal_and_prim_agree_on_grid() {
    let graph = grid_graph(20);
    let mst = MinimumSpanningTree::new(&graph).unwrap();
    let kruskal = mst.kruskal();
    let prim = mst.prim();
    assert_eq!(kruskal.edges.len(), 399);
    assert_eq!(prim.edges.len(), 399);
    assert!((kruskal.total_weight - prim.total_weight).abs() < 1e-9);
}

#[test]
fn test_fixture_weighs_zero() {
    let graph = kruskal_fixture();
    let forest = MinimumSpanningTree::new(&graph)
        .unwrap()
        .spanning_forest(MstAlgorithm::default());
    assert_eq!(forest.edges.len(), 5);
    assert!(forest.total_weight.abs() < 1e-12);
}
