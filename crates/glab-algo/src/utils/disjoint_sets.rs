//! Union-find over an arbitrary element universe.
//!
//! Elements are mapped to dense indices once at construction; the forest
//! itself is two index arrays (parent and rank), so `find_root` with path
//! compression and `union_sets` by rank are both near-constant time.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use glab_core::{GraphError, GraphResult, VertexId};

#[derive(Debug, Clone)]
pub struct DisjointSets<T> {
    elements: Vec<T>,
    index: HashMap<T, usize>,
    parent: Vec<usize>,
    rank: Vec<u8>,
    count: usize,
}

impl<T: VertexId> DisjointSets<T> {
    /// One singleton set per distinct element; fails on an empty universe.
    pub fn new(elements: impl IntoIterator<Item = T>) -> GraphResult<Self> {
        let mut universe = Vec::new();
        let mut index = HashMap::new();
        for element in elements {
            if !index.contains_key(&element) {
                index.insert(element.clone(), universe.len());
                universe.push(element);
            }
        }
        if universe.is_empty() {
            return Err(GraphError::EmptyElements);
        }
        let n = universe.len();
        Ok(Self {
            elements: universe,
            index,
            parent: (0..n).collect(),
            rank: vec![0; n],
            count: n,
        })
    }

    /// Number of disjoint sets currently tracked.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn contains(&self, element: &T) -> bool {
        self.index.contains_key(element)
    }

    /// Representative of the set holding `element`.
    pub fn find_root(&mut self, element: &T) -> GraphResult<T> {
        let node = self.position(element)?;
        let root = self.find(node);
        Ok(self.elements[root].clone())
    }

    /// Merge the sets of `a` and `b`; returns `false` when they already match.
    pub fn union_sets(&mut self, a: &T, b: &T) -> GraphResult<bool> {
        let left = self.position(a)?;
        let right = self.position(b)?;
        let mut left = self.find(left);
        let mut right = self.find(right);
        if left == right {
            return Ok(false);
        }
        let left_rank = self.rank[left];
        let right_rank = self.rank[right];
        if left_rank < right_rank {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if left_rank == right_rank {
            self.rank[left] = left_rank.saturating_add(1);
        }
        self.count -= 1;
        Ok(true)
    }

    pub fn is_connected(&mut self, a: &T, b: &T) -> GraphResult<bool> {
        let left = self.position(a)?;
        let right = self.position(b)?;
        Ok(self.find(left) == self.find(right))
    }

    /// Current grouping as a set of sets.
    pub fn disjoint_sets(&mut self) -> BTreeSet<BTreeSet<T>> {
        let mut groups: BTreeMap<usize, BTreeSet<T>> = BTreeMap::new();
        for node in 0..self.elements.len() {
            let root = self.find(node);
            groups
                .entry(root)
                .or_default()
                .insert(self.elements[node].clone());
        }
        groups.into_values().collect()
    }

    fn position(&self, element: &T) -> GraphResult<usize> {
        self.index
            .get(element)
            .copied()
            .ok_or_else(|| GraphError::unknown_element(element))
    }

    fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }
        root
    }
}
