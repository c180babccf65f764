//! Performance benchmarks for the graph algorithms
//!
//! This benchmark suite measures:
//! - Single-source shortest paths (Dijkstra and Bellman-Ford) on grids
//! - Minimum spanning forests (Kruskal and Prim) on grids
//! - Strongly connected components on long chains
//! - Greedy modularity clustering on divisibility graphs
//! - LeaderRank score diffusion
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench -p glab-algo
//!
//! # Run a single group
//! cargo bench -p glab-algo -- shortest_paths
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glab_algo::test_utils::{directed_chain, divisibility_graph, grid_graph};
use glab_algo::{
    louvain_clustering, BellmanFord, ClusteringConfig, Dijkstra, LeaderRank, LeaderRankConfig,
    MinimumSpanningTree, MstAlgorithm, StronglyConnectedComponents,
};

const GRID_SIDES: &[u32] = &[10, 30, 60];

/// Benchmark: all paths from one corner of a grid
fn bench_shortest_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_paths");

    for &side in GRID_SIDES {
        let graph = grid_graph(side);
        group.bench_with_input(BenchmarkId::new("dijkstra", side), &graph, |b, graph| {
            b.iter(|| {
                // fresh solver each time, otherwise the cached table is measured
                let mut dijkstra = Dijkstra::new(graph);
                let weight = dijkstra.path_weight(&0, &(side * side - 1)).unwrap();
                black_box(weight)
            })
        });

        // the layered table is quadratic in vertex count; keep it to small grids
        if side <= 30 {
            group.bench_with_input(BenchmarkId::new("bellman_ford", side), &graph, |b, graph| {
                b.iter(|| {
                    let mut bellman_ford = BellmanFord::new(graph);
                    let weight = bellman_ford.path_weight(&0, &(side * side - 1)).unwrap();
                    black_box(weight)
                })
            });
        }
    }

    group.finish();
}

/// Benchmark: spanning forests of grids
fn bench_spanning_forest(c: &mut Criterion) {
    let mut group = c.benchmark_group("spanning_forest");

    for &side in GRID_SIDES {
        let graph = grid_graph(side);
        let mst = MinimumSpanningTree::new(&graph).unwrap();
        for algorithm in [MstAlgorithm::Kruskal, MstAlgorithm::Prim] {
            group.bench_with_input(
                BenchmarkId::new(format!("{algorithm:?}").to_lowercase(), side),
                &algorithm,
                |b, &algorithm| b.iter(|| black_box(mst.spanning_forest(algorithm))),
            );
        }
    }

    group.finish();
}

/// Benchmark: Tarjan on a chain where every vertex is its own component
fn bench_scc(c: &mut Criterion) {
    let mut group = c.benchmark_group("scc");

    for n in [1_000u32, 10_000] {
        let graph = directed_chain(n);
        let scc = StronglyConnectedComponents::new(&graph).unwrap();
        group.bench_function(BenchmarkId::new("chain", n), |b| {
            b.iter(|| black_box(scc.components()))
        });
    }

    group.finish();
}

/// Benchmark: clustering from singletons
fn bench_clustering(c: &mut Criterion) {
    let mut group = c.benchmark_group("clustering");
    group.sample_size(20);

    for n in [30u32, 100] {
        let graph = divisibility_graph(n);
        let config = ClusteringConfig::default();
        group.bench_with_input(BenchmarkId::new("louvain", n), &graph, |b, graph| {
            b.iter(|| black_box(louvain_clustering(graph, &config).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark: LeaderRank to the default threshold
fn bench_leaderrank(c: &mut Criterion) {
    let mut group = c.benchmark_group("leaderrank");
    group.sample_size(20);

    for side in [5u32, 10] {
        let graph = grid_graph(side);
        let ranking = LeaderRank::new(&graph, LeaderRankConfig::default());
        group.bench_function(BenchmarkId::new("grid", side * side), |b| {
            b.iter(|| black_box(ranking.vertices_scores()))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_shortest_paths,
    bench_spanning_forest,
    bench_scc,
    bench_clustering,
    bench_leaderrank
);
criterion_main!(benches);
