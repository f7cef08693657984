//! Group entries by recipient or by hop count.
//!
//! A [`Grouping`] borrows the entries it indexes. Keys iterate in the order
//! they first appear in the input, and each group keeps its entries in input
//! order, so every group is a subsequence of the original slice.

use crate::parser::Entry;
use std::collections::HashMap;
use std::hash::Hash;

/// Insertion-ordered mapping from key to the entries carrying that key
#[derive(Debug, Clone)]
pub struct Grouping<'a, K> {
    positions: HashMap<K, usize>,
    groups: Vec<(K, Vec<&'a Entry>)>,
}

impl<'a, K> Default for Grouping<'a, K> {
    fn default() -> Self {
        Self {
            positions: HashMap::new(),
            groups: Vec::new(),
        }
    }
}

impl<'a, K: Eq + Hash + Clone> Grouping<'a, K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the group for `key`, creating the group if needed
    pub fn push(&mut self, key: K, entry: &'a Entry) {
        match self.positions.get(&key) {
            Some(&pos) => self.groups[pos].1.push(entry),
            None => {
                self.positions.insert(key.clone(), self.groups.len());
                self.groups.push((key, vec![entry]));
            }
        }
    }

    pub fn get(&self, key: &K) -> Option<&[&'a Entry]> {
        self.positions
            .get(key)
            .map(|&pos| self.groups[pos].1.as_slice())
    }

    /// Number of entries filed under `key` (0 when absent)
    pub fn count(&self, key: &K) -> usize {
        self.get(key).map_or(0, <[_]>::len)
    }

    /// Groups in first-seen key order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &[&'a Entry])> {
        self.groups
            .iter()
            .map(|(key, entries)| (key, entries.as_slice()))
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Entries across all groups
    pub fn total_entries(&self) -> usize {
        self.groups.iter().map(|(_, entries)| entries.len()).sum()
    }
}

/// Group entries by hop count
///
/// **Public** - top-level view consumed by the aggregator
pub fn index_by_hop_count<'a, I>(entries: I) -> Grouping<'a, u32>
where
    I: IntoIterator<Item = &'a Entry>,
{
    let mut grouping = Grouping::new();
    for entry in entries {
        grouping.push(entry.hops, entry);
    }
    grouping
}

/// Group entries by recipient
///
/// **Public** - used for per-hop sub-groupings and the hop-count resolver
pub fn index_by_recipient<'a, I>(entries: I) -> Grouping<'a, String>
where
    I: IntoIterator<Item = &'a Entry>,
{
    let mut grouping = Grouping::new();
    for entry in entries {
        grouping.push(entry.recipient.clone(), entry);
    }
    grouping
}
