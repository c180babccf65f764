//! # glab-core: Graph Container Core
//!
//! Provides the generic graph model shared by every algorithm in `glab-algo`.
//!
//! ## Design Philosophy
//!
//! A [`Graph`] is parameterised by a vertex identifier `I` and an edge type `E`:
//! - **Vertices**: any [`VertexId`] (integers, chars, strings, newtypes, ...)
//! - **Edges**: [`Edge`] (unweighted) or [`WeightedEdge`] (`f64` weight)
//!
//! Graphs are either directed or undirected, fixed at creation through
//! [`GraphOptions`]. Undirected graphs store every edge in both directions, so
//! walking `vertex_edges` is symmetric and algorithms never special-case
//! direction when reading.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use glab_core::*;
//!
//! let mut roads: WeightedGraph<&str> =
//!     Graph::new("roads", GraphOptions::undirected().with_auto_add_vertex(true));
//! roads.add_edge("a", "b", 4.0)?;
//! roads.add_edge("b", "c", 1.5)?;
//!
//! assert_eq!(roads.vertex_count(), 3);
//! assert_eq!(roads.edge_count(), 2);
//! assert!(roads.contains_edge(&"c", &"b"));
//!
//! let stats = graph_utils::graph_stats(&roads);
//! assert_eq!(stats.connected_components, 1);
//! # Ok::<(), GraphError>(())
//! ```
//!
//! ## Modules
//!
//! - [`edge`]: edge types and the [`GraphEdge`] trait
//! - [`graph`]: the [`Graph`] container and its variants
//! - [`graph_utils`]: statistics, component detection, petgraph interop
//! - [`error`]: unified [`GraphError`] type

use std::fmt::Debug;
use std::hash::Hash;

pub mod edge;
pub mod error;
pub mod graph;
pub mod graph_utils;

pub use edge::{Edge, GraphEdge, WeightedEdge};
pub use error::{ErrorKind, GraphError, GraphResult};
pub use graph::{Graph, GraphOptions, UnitWeightGraph, UnweightedGraph, Vertex, WeightedGraph};

/// Bound satisfied by every type usable as a vertex identifier.
///
/// Ordering is required so that every collection handed back to callers
/// (vertex snapshots, components, partitions) iterates deterministically.
pub trait VertexId: Clone + Eq + Hash + Ord + Debug {}

impl<T: Clone + Eq + Hash + Ord + Debug> VertexId for T {}
