use std::cmp::Ordering;

/// Value tagged with an `f64` priority, ordered by priority alone.
///
/// Uses `f64::total_cmp` so it can live in a `BinaryHeap`; wrap in
/// `std::cmp::Reverse` for a min-heap.
#[derive(Debug, Clone)]
pub struct PriorityPair<V> {
    pub priority: f64,
    pub value: V,
}

impl<V> PriorityPair<V> {
    pub fn new(priority: f64, value: V) -> Self {
        Self { priority, value }
    }
}

impl<V> PartialEq for PriorityPair<V> {
    fn eq(&self, other: &Self) -> bool {
        self.priority.total_cmp(&other.priority) == Ordering::Equal
    }
}

impl<V> Eq for PriorityPair<V> {}

impl<V> PartialOrd for PriorityPair<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V> Ord for PriorityPair<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority.total_cmp(&other.priority)
    }
}
