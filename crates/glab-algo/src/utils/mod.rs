//! Helper structures shared by the algorithms.

mod adjacency;
mod disjoint_sets;
mod priority;
mod set_partition;

pub use adjacency::WeightedAdjacencyIndex;
pub use disjoint_sets::DisjointSets;
pub use priority::PriorityPair;
pub use set_partition::SetPartition;
