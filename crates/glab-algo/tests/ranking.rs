//! Integration tests for LeaderRank scores.

use glab_algo::test_utils::{directed_chain, weighted_graph};
use glab_algo::{LeaderRank, LeaderRankConfig};
use glab_core::{GraphOptions, UnweightedGraph};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_graph(seed: u64, vertices: u32, edges: usize) -> UnweightedGraph<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let options = GraphOptions::directed().with_auto_add_vertex(true);
    let mut graph = UnweightedGraph::new(format!("random-{seed}"), options);
    for v in 0..vertices {
        graph.add_vertex(v);
    }
    for _ in 0..edges {
        let a = rng.gen_range(0..vertices);
        let b = rng.gen_range(0..vertices);
        graph.add_edge(a, b).unwrap();
    }
    graph
}

#[test]
fn test_scores_are_conserved() {
    for seed in 0..15 {
        let graph = random_graph(seed, 12, 30);
        let scores = LeaderRank::new(&graph, LeaderRankConfig::default()).vertices_scores();
        assert_eq!(scores.len(), 12);
        let total: f64 = scores.values().sum();
        assert!((total - 12.0).abs() < 1e-6, "seed {seed}: {total}");
        assert!(scores.values().all(|score| *score > 0.0), "seed {seed}");
    }
}

#[test]
fn test_chain_end_collects_most() {
    let graph = directed_chain(6);
    let ranked = LeaderRank::new(&graph, LeaderRankConfig::precise()).ranked();
    assert_eq!(ranked.first().map(|(id, _)| *id), Some(5));
    assert!(ranked.windows(2).all(|pair| pair[0].1 >= pair[1].1));
}

#[test]
fn test_heavier_edges_pull_more_score() {
    let graph = weighted_graph(true, &[(0, 1, 10.0), (0, 2, 1.0), (1, 0, 1.0), (2, 0, 1.0)]);
    let scores = LeaderRank::new(&graph, LeaderRankConfig::precise()).vertices_scores();
    assert!(scores[&1] > scores[&2]);
}
