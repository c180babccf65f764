//! # glab-algo: Graph Algorithms
//!
//! Algorithms over the generic [`glab_core::Graph`] container. Every algorithm
//! borrows the graph it runs on, so the graph cannot change underneath a
//! cached result.
//!
//! ## Algorithms
//!
//! | Type / function | Graph | Result |
//! |-----------------|-------|--------|
//! | [`Dijkstra`] | any, non-negative weights | shortest paths from one source |
//! | [`BellmanFord`] | any | shortest paths, negative cycle detection |
//! | [`BridgeFinder`] | undirected | bridges |
//! | [`StronglyConnectedComponents`] | directed | SCCs + condensation |
//! | [`CycleSearch`] | any | simple cycles through a vertex |
//! | [`MinimumSpanningTree`] | undirected | Kruskal / Prim spanning forest |
//! | [`louvain_clustering`] | any | communities maximizing modularity |
//! | [`LeaderRank`] | any | vertex centrality scores |
//!
//! Unweighted edges weigh `1.0` everywhere a weight is needed.
//!
//! ## Errors
//!
//! Contract violations (wrong directedness, unknown vertices) and domain
//! violations (negative weights for Dijkstra, negative cycles) surface as
//! [`glab_core::GraphError`]. An unreachable target is not an error: paths come
//! back empty with weight `f64::INFINITY`.
//!
//! ## Example
//!
//! ```ignore
//! use glab_algo::{Dijkstra, MinimumSpanningTree, MstAlgorithm};
//! use glab_core::{GraphOptions, WeightedGraph};
//!
//! let mut graph = WeightedGraph::new("roads", GraphOptions::undirected().with_auto_add_vertex(true));
//! graph.add_edge("a", "b", 10.0)?;
//! graph.add_edge("a", "c", 2.0)?;
//! graph.add_edge("c", "b", 3.0)?;
//!
//! let mut dijkstra = Dijkstra::new(&graph);
//! assert_eq!(dijkstra.path(&"a", &"b")?, vec!["a", "c", "b"]);
//!
//! let forest = MinimumSpanningTree::new(&graph)?.spanning_forest(MstAlgorithm::Prim);
//! assert_eq!(forest.total_weight, 5.0);
//! ```

pub mod clustering;
pub mod config;
pub mod mst;
pub mod ranking;
pub mod shortest_path;
pub mod structure;
pub mod test_utils;
pub mod utils;

pub use clustering::{
    louvain_clustering, louvain_clustering_from, ClusteringResult, ModularityChange,
    ModularityEvaluator,
};
pub use config::{ClusteringConfig, LeaderRankConfig};
pub use mst::{MinimumSpanningTree, MstAlgorithm, SpanningForest};
pub use ranking::LeaderRank;
pub use shortest_path::{BellmanFord, Dijkstra, DistanceTable, PathEntry};
pub use structure::{BridgeFinder, CycleSearch, StronglyConnectedComponents};
pub use utils::{DisjointSets, PriorityPair, SetPartition, WeightedAdjacencyIndex};
