//! Mutable partition of a growing element set.
//!
//! Unlike [`DisjointSets`](super::DisjointSets), groups can be split again:
//! [`SetPartition::connect_elements`] moves a single element into another
//! group and [`SetPartition::disconnect_element`] isolates it. Each group has
//! a stable numeric id for as long as it is non-empty.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use glab_core::{GraphError, GraphResult, VertexId};

#[derive(Debug, Clone, Default)]
pub struct SetPartition<T> {
    membership: HashMap<T, usize>,
    groups: BTreeMap<usize, BTreeSet<T>>,
    next_group: usize,
}

impl<T: VertexId> SetPartition<T> {
    pub fn new() -> Self {
        Self {
            membership: HashMap::new(),
            groups: BTreeMap::new(),
            next_group: 0,
        }
    }

    /// Partition with every element in its own singleton group.
    pub fn singletons(elements: impl IntoIterator<Item = T>) -> Self {
        let mut partition = Self::new();
        for element in elements {
            partition.add_element(element);
        }
        partition
    }

    /// Build from explicit groups; elements repeated across groups stay in the first one.
    pub fn from_groups<G>(groups: impl IntoIterator<Item = G>) -> Self
    where
        G: IntoIterator<Item = T>,
    {
        let mut partition = Self::new();
        for group in groups {
            let id = partition.next_group;
            let mut members = BTreeSet::new();
            for element in group {
                if partition.membership.contains_key(&element) {
                    continue;
                }
                partition.membership.insert(element.clone(), id);
                members.insert(element);
            }
            if !members.is_empty() {
                partition.groups.insert(id, members);
                partition.next_group += 1;
            }
        }
        partition
    }

    /// Add `element` as a singleton group; `false` if it is already present.
    pub fn add_element(&mut self, element: T) -> bool {
        if self.membership.contains_key(&element) {
            return false;
        }
        let id = self.fresh_group();
        self.membership.insert(element.clone(), id);
        self.groups.insert(id, BTreeSet::from([element]));
        true
    }

    pub fn remove_element(&mut self, element: &T) -> bool {
        match self.membership.remove(element) {
            Some(id) => {
                self.detach(element, id);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, element: &T) -> bool {
        self.membership.contains_key(element)
    }

    /// Move `a` out of its group and into the group of `b`.
    ///
    /// Only `a` moves; the rest of `a`'s former group stays where it was.
    pub fn connect_elements(&mut self, a: &T, b: &T) -> GraphResult<()> {
        let from = self.group_id(a)?;
        let to = self.group_id(b)?;
        if from == to {
            return Ok(());
        }
        self.detach(a, from);
        self.membership.insert(a.clone(), to);
        self.groups.entry(to).or_default().insert(a.clone());
        Ok(())
    }

    /// Move `a` into a fresh singleton group.
    pub fn disconnect_element(&mut self, a: &T) -> GraphResult<()> {
        let from = self.group_id(a)?;
        if self.groups.get(&from).map_or(0, BTreeSet::len) == 1 {
            return Ok(());
        }
        self.detach(a, from);
        let id = self.fresh_group();
        self.membership.insert(a.clone(), id);
        self.groups.insert(id, BTreeSet::from([a.clone()]));
        Ok(())
    }

    pub fn is_connected(&self, a: &T, b: &T) -> GraphResult<bool> {
        Ok(self.group_id(a)? == self.group_id(b)?)
    }

    /// Members of the group holding `a` (including `a`).
    pub fn element_set(&self, a: &T) -> GraphResult<&BTreeSet<T>> {
        let id = self.group_id(a)?;
        self.groups
            .get(&id)
            .ok_or_else(|| GraphError::unknown_element(a))
    }

    /// Stable id of the group holding `a`.
    pub fn group_id(&self, a: &T) -> GraphResult<usize> {
        self.membership
            .get(a)
            .copied()
            .ok_or_else(|| GraphError::unknown_element(a))
    }

    /// Every non-empty group.
    pub fn partition(&self) -> BTreeSet<BTreeSet<T>> {
        self.groups.values().cloned().collect()
    }

    pub fn groups(&self) -> impl Iterator<Item = (usize, &BTreeSet<T>)> + '_ {
        self.groups.iter().map(|(id, members)| (*id, members))
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn len(&self) -> usize {
        self.membership.len()
    }

    pub fn is_empty(&self) -> bool {
        self.membership.is_empty()
    }

    fn fresh_group(&mut self) -> usize {
        let id = self.next_group;
        self.next_group += 1;
        id
    }

    fn detach(&mut self, element: &T, id: usize) {
        if let Some(members) = self.groups.get_mut(&id) {
            members.remove(element);
            if members.is_empty() {
                self.groups.remove(&id);
            }
        }
    }
}
