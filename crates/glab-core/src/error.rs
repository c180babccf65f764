//! Unified error types for the graphs-lab engine
//!
//! Every fallible operation in the workspace returns [`GraphResult`]. The
//! variants of [`GraphError`] fall into two families, reported by
//! [`GraphError::kind`]:
//!
//! - [`ErrorKind::Structural`]: the caller violated a structural contract
//!   (missing endpoint, wrong directedness, unknown element, ...).
//! - [`ErrorKind::Domain`]: the input is well-formed but outside the domain of
//!   the algorithm (negative weights for Dijkstra, negative cycles).
//!
//! "No path exists" is never an error; path queries return an empty path and
//! an infinite weight instead.
//!
//! # Example
//!
//! ```ignore
//! use glab_core::{GraphError, GraphResult};
//!
//! fn shortest(graph: &WeightedGraph<u32>) -> GraphResult<f64> {
//!     let mut dijkstra = Dijkstra::new(graph);
//!     dijkstra.path_weight(&1, &2)
//! }
//! ```

use thiserror::Error;

/// Coarse classification of a [`GraphError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Contract violation on graph or helper-structure shape.
    Structural,
    /// Input outside the numeric domain of an algorithm.
    Domain,
}

/// Unified error type for all graph operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// Edge endpoint is missing and the graph does not auto-add vertices
    #[error("graph '{graph}' does not auto-add vertices; vertex {vertex} is missing")]
    MissingVertex { graph: String, vertex: String },

    /// A query referenced a vertex that is not in the graph
    #[error("vertex {vertex} is not contained in graph '{graph}'")]
    UnknownVertex { graph: String, vertex: String },

    /// A helper structure (disjoint sets, partition) was asked about an unknown element
    #[error("element {0} is not contained in the structure")]
    UnknownElement(String),

    /// Disjoint sets cannot be built over an empty universe
    #[error("cannot build disjoint sets from an empty element collection")]
    EmptyElements,

    /// Algorithm constructed against a graph of the wrong directedness
    #[error("{algorithm} requires a {expected} graph, but '{graph}' is not")]
    WrongDirectedness {
        algorithm: &'static str,
        graph: String,
        expected: &'static str,
    },

    /// Negative weight passed to an algorithm that only supports non-negative weights
    #[error("negative edge weight {weight} on edge {from} -> {to}")]
    NegativeWeight { from: String, to: String, weight: f64 },

    /// Negative-weight cycle reachable from the query source
    #[error("graph '{graph}' contains a negative-weight cycle reachable from {origin}")]
    NegativeCycle { graph: String, origin: String },
}

impl GraphError {
    /// Classify the error per the structural/domain taxonomy.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GraphError::NegativeWeight { .. } | GraphError::NegativeCycle { .. } => {
                ErrorKind::Domain
            }
            _ => ErrorKind::Structural,
        }
    }

    pub fn is_structural(&self) -> bool {
        self.kind() == ErrorKind::Structural
    }

    pub fn is_domain(&self) -> bool {
        self.kind() == ErrorKind::Domain
    }

    /// Build an [`GraphError::UnknownElement`] from any debuggable element.
    pub fn unknown_element(element: &impl std::fmt::Debug) -> Self {
        GraphError::UnknownElement(format!("{element:?}"))
    }
}

/// Convenience type alias for Results using GraphError.
pub type GraphResult<T> = Result<T, GraphError>;
