//! Entry API for in-place manipulation of a single key
//!
//! [`IndexedHeapQueue::entry`] resolves a key once and returns an [`Entry`]
//! through which the caller can inspect, reprioritize, insert, or remove
//! that key without further lookups.
//!
//! No method hands out `&mut P`: a priority mutated through a bare mutable
//! reference would bypass the sift machinery and silently break heap order,
//! so priority changes go through [`OccupiedEntry::update`], which restores
//! order before returning.

use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hash};

use crate::queue::IndexedHeapQueue;

/// A view into a single key of the queue, occupied or vacant
///
/// # Example
///
/// ```rust
/// use indexed_heapq::entry::Entry;
/// use indexed_heapq::IndexedHeapQueue;
///
/// let mut queue: IndexedHeapQueue<&str, u32> = IndexedHeapQueue::new();
///
/// match queue.entry("compact") {
///     Entry::Occupied(entry) => {
///         entry.update(3);
///     }
///     Entry::Vacant(entry) => entry.insert(8),
/// }
/// assert_eq!(queue.get("compact"), Some(&8));
/// ```
pub enum Entry<'a, K, P, S = RandomState> {
    /// The key is present in the queue
    Occupied(OccupiedEntry<'a, K, P, S>),
    /// The key is not present in the queue
    Vacant(VacantEntry<'a, K, P, S>),
}

impl<'a, K: Hash + Eq + Clone, P: Ord, S: BuildHasher> Entry<'a, K, P, S> {
    /// Returns the key this entry was resolved for
    pub fn key(&self) -> &K {
        match self {
            Entry::Occupied(entry) => entry.key(),
            Entry::Vacant(entry) => entry.key(),
        }
    }
}

/// A view into a key that is present in the queue
pub struct OccupiedEntry<'a, K, P, S = RandomState> {
    pub(crate) queue: &'a mut IndexedHeapQueue<K, P, S>,
    /// Heap slot of the entry; stable while this view holds the queue borrow.
    pub(crate) index: usize,
}

impl<'a, K: Hash + Eq + Clone, P: Ord, S: BuildHasher> OccupiedEntry<'a, K, P, S> {
    /// Returns the stored key
    pub fn key(&self) -> &K {
        &self.queue.slot(self.index).key
    }

    /// Returns the current priority
    pub fn priority(&self) -> &P {
        &self.queue.slot(self.index).priority
    }

    /// Replaces the priority, returning the old one
    ///
    /// The entry is moved to its new heap position before this returns.
    pub fn update(self, priority: P) -> P {
        self.queue.reprioritize(self.index, priority)
    }

    /// Removes the entry, returning the stored key and priority
    pub fn remove(self) -> (K, P) {
        let slot = self.queue.remove_at(self.index);
        (slot.key, slot.priority)
    }
}

/// A view into a key that is absent from the queue
pub struct VacantEntry<'a, K, P, S = RandomState> {
    pub(crate) queue: &'a mut IndexedHeapQueue<K, P, S>,
    pub(crate) key: K,
}

impl<'a, K: Hash + Eq + Clone, P: Ord, S: BuildHasher> VacantEntry<'a, K, P, S> {
    /// Returns the key that would be inserted
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Inserts the key with the given priority
    pub fn insert(self, priority: P) {
        self.queue.push_slot(self.key, priority);
    }
}
