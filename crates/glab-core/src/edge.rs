//! Edge types stored by [`Graph`](crate::Graph).
//!
//! Both [`Edge`] and [`WeightedEdge`] compare and hash by their endpoints only,
//! so a graph holds at most one edge per ordered `(source, target)` pair.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::VertexId;

/// Behaviour shared by every edge type a [`Graph`](crate::Graph) can store.
pub trait GraphEdge<I: VertexId>: Clone + fmt::Debug + Eq + Hash {
    fn source(&self) -> &I;

    fn target(&self) -> &I;

    /// Stored weight, `None` for unweighted edges.
    fn weight(&self) -> Option<f64>;

    /// Same edge with swapped endpoints (and the same weight).
    fn reversed(&self) -> Self;

    /// Edge weight, or `default` when the edge carries none.
    fn weight_or(&self, default: f64) -> f64 {
        self.weight().unwrap_or(default)
    }

    fn is_self_loop(&self) -> bool {
        self.source() == self.target()
    }

    /// `true` when the edge connects `a` and `b` in either direction.
    fn connects(&self, a: &I, b: &I) -> bool {
        (self.source() == a && self.target() == b) || (self.source() == b && self.target() == a)
    }
}

/// Unweighted directed edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge<I> {
    pub source: I,
    pub target: I,
}

impl<I> Edge<I> {
    pub fn new(source: I, target: I) -> Self {
        Self { source, target }
    }
}

impl<I: VertexId> GraphEdge<I> for Edge<I> {
    fn source(&self) -> &I {
        &self.source
    }

    fn target(&self) -> &I {
        &self.target
    }

    fn weight(&self) -> Option<f64> {
        None
    }

    fn reversed(&self) -> Self {
        Edge::new(self.target.clone(), self.source.clone())
    }
}

impl<I: fmt::Debug> fmt::Display for Edge<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{:?}, {:?}}}", self.source, self.target)
    }
}

/// Directed edge carrying an `f64` weight.
///
/// Equality and hashing ignore the weight: two edges with the same endpoints
/// are the same edge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightedEdge<I> {
    pub source: I,
    pub target: I,
    pub weight: f64,
}

impl<I> WeightedEdge<I> {
    pub fn new(source: I, target: I, weight: f64) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }
}

impl<I: PartialEq> PartialEq for WeightedEdge<I> {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.target == other.target
    }
}

impl<I: Eq> Eq for WeightedEdge<I> {}

impl<I: Hash> Hash for WeightedEdge<I> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
        self.target.hash(state);
    }
}

impl<I: VertexId> GraphEdge<I> for WeightedEdge<I> {
    fn source(&self) -> &I {
        &self.source
    }

    fn target(&self) -> &I {
        &self.target
    }

    fn weight(&self) -> Option<f64> {
        Some(self.weight)
    }

    fn reversed(&self) -> Self {
        WeightedEdge::new(self.target.clone(), self.source.clone(), self.weight)
    }
}

impl<I: fmt::Debug> fmt::Display for WeightedEdge<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{:?}, {:?}, {}}}", self.source, self.target, self.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_edge_equality_by_endpoints() {
        assert_eq!(Edge::new(1, 2), Edge::new(1, 2));
        assert_ne!(Edge::new(1, 2), Edge::new(2, 1));
    }

    #[test]
    fn test_weighted_edge_ignores_weight_in_equality() {
        let a = WeightedEdge::new('a', 'b', 1.5);
        let b = WeightedEdge::new('a', 'b', 9.0);
        assert_eq!(a, b);

        let set: HashSet<_> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_weight_or_default() {
        assert_eq!(Edge::new(1, 2).weight_or(1.0), 1.0);
        assert_eq!(Edge::new(1, 2).weight_or(1.5), 1.5);
        assert_eq!(WeightedEdge::new(1, 2, 1.25).weight_or(1.5), 1.25);
    }

    #[test]
    fn test_reversed_keeps_weight() {
        let edge = WeightedEdge::new(1, 2, -3.0);
        let reversed = edge.reversed();
        assert_eq!(reversed.source, 2);
        assert_eq!(reversed.target, 1);
        assert_eq!(reversed.weight, -3.0);
        assert!(edge.connects(&2, &1));
    }

    #[test]
    fn test_edge_serde_roundtrip() {
        let edge = WeightedEdge::new("x".to_string(), "y".to_string(), 2.0);
        let json = serde_json::to_string(&edge).unwrap();
        let back: WeightedEdge<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, edge);
        assert_eq!(back.weight, 2.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Edge::new(1, 2).to_string(), "{1, 2}");
        assert_eq!(WeightedEdge::new(1, 2, 0.5).to_string(), "{1, 2, 0.5}");
    }
}
