//! Modularity-based community detection.
//!
//! [`ModularityEvaluator`] scores a [`SetPartition`](crate::utils::SetPartition)
//! of the graph's vertices and prices single-vertex moves between communities.
//! [`louvain_clustering`] runs the local-move phase of the Louvain method on top
//! of it: vertices greedily join the neighbouring community with the best
//! positive gain until a pass stops paying off. There is no coarsening phase.
//!
//! ## Modularity
//!
//! With `T` the total stored edge weight (undirected edges count twice) and
//! `d(v)` the weighted out-degree,
//!
//! ```text
//! Q = 1/T * sum over communities C, ordered pairs i != j in C of (w(i, j) - d(i) d(j) / T)
//! ```
//!
//! so every vertex alone in its community scores `0.0`.

mod louvain;
mod modularity;

pub use louvain::{louvain_clustering, louvain_clustering_from, ClusteringResult};
pub use modularity::{ModularityChange, ModularityEvaluator};
