//! Indexed binary min-heap priority queue
//!
//! An [`IndexedHeapQueue`] stores a set of keys, each with an associated
//! priority, and always surfaces the entry with the minimum priority first.
//! Unlike a plain binary heap, every key's heap slot is tracked in a reverse
//! index, so arbitrary keys can be looked up, reprioritized, and removed,
//! not just the minimum.
//!
//! # Time Complexity
//!
//! | Operation       | Complexity     |
//! |-----------------|----------------|
//! | `insert`        | O(log n)       |
//! | `pop`           | O(log n)       |
//! | `update`        | O(log n)       |
//! | `remove`        | O(log n)       |
//! | `peek`          | O(1)           |
//! | `get`           | O(1) average   |
//! | `contains_key`  | O(1) average   |
//! | bulk `collect`  | O(n)           |
//!
//! # Example
//!
//! ```rust
//! use indexed_heapq::IndexedHeapQueue;
//!
//! let mut queue = IndexedHeapQueue::new();
//! queue.insert("write", 3).unwrap();
//! queue.insert("fsync", 5).unwrap();
//! queue.insert("accept", 1).unwrap();
//!
//! assert_eq!(queue.peek(), Some((&"accept", &1)));
//!
//! // Any key can be reprioritized or removed, not just the minimum.
//! queue.update("fsync", 0).unwrap();
//! assert_eq!(queue.pop(), Some(("fsync", 0)));
//! assert_eq!(queue.remove("write"), Some(3));
//! assert_eq!(queue.pop(), Some(("accept", 1)));
//! assert!(queue.is_empty());
//! ```

use std::borrow::Borrow;
use std::collections::hash_map::RandomState;
use std::collections::HashMap;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::mem;
use std::ops::Index;

use crate::entry::{Entry, OccupiedEntry, VacantEntry};
use crate::error::QueueError;
use crate::iter::{IntoIter, Iter, Keys, Priorities};

/// A single (key, priority) pair stored at one slot of the heap array.
#[derive(Debug, Clone)]
pub(crate) struct Slot<K, P> {
    pub(crate) key: K,
    pub(crate) priority: P,
}

/// An indexed binary min-heap priority queue
///
/// The queue stores a set of keys, each with an associated priority, and
/// keeps two structures consistent through every mutation:
///
/// - a dense heap array of (key, priority) entries in binary-heap order, and
/// - a position index mapping each key to its current slot in the array.
///
/// The position index is what makes `update` and `remove` on arbitrary keys
/// O(log n) rather than O(n). Each key is stored once in the heap array and
/// once in the index; it is cloned exactly once, at insertion.
///
/// Keys are unique: `insert` rejects a key that is already present, while
/// [`upsert`](IndexedHeapQueue::upsert) replaces the priority in place.
///
/// This is a min-heap. For max-heap behavior, wrap priorities in
/// [`std::cmp::Reverse`].
///
/// When several keys share the minimum priority, which of them `peek` and
/// `pop` return depends on the heap's internal layout and is not part of the
/// API contract; only the returned priority is guaranteed minimal.
///
/// The queue is unsynchronized. `&mut self` on every mutating operation
/// means concurrent use requires external locking, which the borrow checker
/// enforces at compile time.
#[derive(Clone)]
pub struct IndexedHeapQueue<K, P, S = RandomState> {
    /// Entries in binary-heap array order; `heap[0]` is the minimum.
    heap: Vec<Slot<K, P>>,
    /// Current heap slot of every live key. Invariant:
    /// `heap[index[k]].key == k` for every key `k` in the queue.
    index: HashMap<K, usize, S>,
}

impl<K: Hash + Eq + Clone, P: Ord> IndexedHeapQueue<K, P, RandomState> {
    /// Creates an empty queue
    ///
    /// # Example
    ///
    /// ```rust
    /// use indexed_heapq::IndexedHeapQueue;
    ///
    /// let queue: IndexedHeapQueue<String, u32> = IndexedHeapQueue::new();
    /// assert!(queue.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_hasher(RandomState::new())
    }

    /// Creates an empty queue with space for at least `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, RandomState::new())
    }
}

impl<K: Hash + Eq + Clone, P: Ord, S: BuildHasher> IndexedHeapQueue<K, P, S> {
    /// Creates an empty queue whose position index uses the given hasher
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            heap: Vec::new(),
            index: HashMap::with_hasher(hasher),
        }
    }

    /// Creates an empty queue with the given capacity and hasher
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            index: HashMap::with_capacity_and_hasher(capacity, hasher),
        }
    }

    /// Returns the number of entries in the queue
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns true if the queue has no entries
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns true if the key is present in the queue
    ///
    /// # Time Complexity
    /// O(1) average.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Returns the priority of the given key, or `None` if absent
    ///
    /// # Time Complexity
    /// O(1) average: one index lookup plus one array access.
    pub fn get<Q>(&self, key: &Q) -> Option<&P>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let &i = self.index.get(key)?;
        Some(&self.heap[i].priority)
    }

    /// Returns the entry with the minimum priority without removing it
    ///
    /// Returns `None` when the queue is empty.
    ///
    /// # Time Complexity
    /// O(1)
    pub fn peek(&self) -> Option<(&K, &P)> {
        self.heap.first().map(|slot| (&slot.key, &slot.priority))
    }

    /// Removes and returns the entry with the minimum priority
    ///
    /// Returns `None` when the queue is empty.
    ///
    /// # Time Complexity
    /// O(log n)
    ///
    /// # Example
    ///
    /// ```rust
    /// use indexed_heapq::IndexedHeapQueue;
    ///
    /// let mut queue = IndexedHeapQueue::new();
    /// queue.insert('a', 2).unwrap();
    /// queue.insert('b', 1).unwrap();
    ///
    /// assert_eq!(queue.pop(), Some(('b', 1)));
    /// assert_eq!(queue.pop(), Some(('a', 2)));
    /// assert_eq!(queue.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<(K, P)> {
        if self.heap.is_empty() {
            return None;
        }

        let slot = self.heap.swap_remove(0);
        self.index.remove(&slot.key);
        if !self.heap.is_empty() {
            // the former-last entry now sits at the root
            self.sync_index(0);
            self.sink_down(0);
        }
        Some((slot.key, slot.priority))
    }

    /// Inserts a new key with the given priority
    ///
    /// # Errors
    /// Returns [`QueueError::DuplicateKey`] if the key is already present;
    /// the existing entry is left untouched. Use
    /// [`upsert`](IndexedHeapQueue::upsert) for insert-or-update semantics.
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn insert(&mut self, key: K, priority: P) -> Result<(), QueueError> {
        if self.index.contains_key(&key) {
            return Err(QueueError::DuplicateKey);
        }
        self.push_slot(key, priority);
        Ok(())
    }

    /// Replaces the priority of an existing key, returning the old priority
    ///
    /// The entry keeps its identity; only its priority changes, and the
    /// entry is moved to its new heap position.
    ///
    /// # Errors
    /// Returns [`QueueError::KeyNotFound`] if the key is absent; the queue
    /// is left untouched.
    ///
    /// # Time Complexity
    /// O(log n)
    ///
    /// # Example
    ///
    /// ```rust
    /// use indexed_heapq::IndexedHeapQueue;
    ///
    /// let mut queue = IndexedHeapQueue::new();
    /// queue.insert("job", 9).unwrap();
    ///
    /// assert_eq!(queue.update("job", 1), Ok(9));
    /// assert_eq!(queue.peek(), Some((&"job", &1)));
    /// ```
    pub fn update<Q>(&mut self, key: &Q, priority: P) -> Result<P, QueueError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.index.get(key) {
            Some(&i) => Ok(self.reprioritize(i, priority)),
            None => Err(QueueError::KeyNotFound),
        }
    }

    /// Updates the key's priority if present, inserts it otherwise
    ///
    /// Returns the replaced priority, or `None` if the key was newly
    /// inserted.
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn upsert(&mut self, key: K, priority: P) -> Option<P> {
        match self.index.get(&key) {
            Some(&i) => Some(self.reprioritize(i, priority)),
            None => {
                self.push_slot(key, priority);
                None
            }
        }
    }

    /// Removes an arbitrary key, returning its priority
    ///
    /// Returns `None` if the key is absent.
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn remove<Q>(&mut self, key: &Q) -> Option<P>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).map(|(_, priority)| priority)
    }

    /// Removes an arbitrary key, returning the stored key and priority
    ///
    /// Returns `None` if the key is absent.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, P)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let &i = self.index.get(key)?;
        let slot = self.remove_at(i);
        Some((slot.key, slot.priority))
    }

    /// Gets the entry for the key, for in-place inspection and manipulation
    ///
    /// # Example
    ///
    /// ```rust
    /// use indexed_heapq::entry::Entry;
    /// use indexed_heapq::IndexedHeapQueue;
    ///
    /// let mut queue = IndexedHeapQueue::new();
    /// queue.insert("retry", 5).unwrap();
    ///
    /// match queue.entry("retry") {
    ///     Entry::Occupied(entry) => {
    ///         entry.update(1);
    ///     }
    ///     Entry::Vacant(entry) => entry.insert(9),
    /// }
    /// assert_eq!(queue.get("retry"), Some(&1));
    /// ```
    pub fn entry(&mut self, key: K) -> Entry<'_, K, P, S> {
        match self.index.get(&key) {
            Some(&i) => Entry::Occupied(OccupiedEntry {
                queue: self,
                index: i,
            }),
            None => Entry::Vacant(VacantEntry { queue: self, key }),
        }
    }

    /// Removes all entries
    pub fn clear(&mut self) {
        self.heap.clear();
        self.index.clear();
    }

    /// Reserves capacity for at least `additional` more entries
    pub fn reserve(&mut self, additional: usize) {
        self.heap.reserve(additional);
        self.index.reserve(additional);
    }

    /// Returns an iterator over (key, priority) pairs in backing-array order
    ///
    /// The first pair is the minimum; the order of the rest follows the heap
    /// layout and is unspecified. The iterator borrows the live structure.
    pub fn iter(&self) -> Iter<'_, K, P> {
        Iter {
            inner: self.heap.iter(),
        }
    }

    /// Returns an iterator over the keys in backing-array order
    pub fn keys(&self) -> Keys<'_, K, P> {
        Keys {
            inner: self.heap.iter(),
        }
    }

    /// Returns an iterator over the priorities in backing-array order
    pub fn priorities(&self) -> Priorities<'_, K, P> {
        Priorities {
            inner: self.heap.iter(),
        }
    }

    /// Appends a new entry and sifts it up to its heap position.
    ///
    /// The caller must have checked that the key is not already present.
    pub(crate) fn push_slot(&mut self, key: K, priority: P) {
        let i = self.heap.len();
        self.index.insert(key.clone(), i);
        self.heap.push(Slot { key, priority });
        self.sift_up(i);
    }

    /// Writes a new priority at slot `i` and restores heap order.
    ///
    /// A strictly smaller priority can only violate order toward the root,
    /// anything else only toward the leaves; the redundant sink when the
    /// priority is unchanged is a no-op.
    pub(crate) fn reprioritize(&mut self, i: usize, priority: P) -> P {
        let old = mem::replace(&mut self.heap[i].priority, priority);
        if self.heap[i].priority < old {
            self.sift_up(i);
        } else {
            self.sink_down(i);
        }
        old
    }

    /// Removes the entry at slot `i`, filling the hole with the last entry.
    ///
    /// The displaced entry's relation to its new neighbors is unknown, so
    /// both sift directions run; at most one of them moves anything.
    pub(crate) fn remove_at(&mut self, i: usize) -> Slot<K, P> {
        let slot = self.heap.swap_remove(i);
        self.index.remove(&slot.key);
        if i < self.heap.len() {
            self.sync_index(i);
            self.sift_up(i);
            self.sink_down(i);
        }
        slot
    }

    pub(crate) fn slot(&self, i: usize) -> &Slot<K, P> {
        &self.heap[i]
    }

    /// Records the current array slot of the entry stored at `i` in the
    /// position index. Every heap entry has an index entry at all times.
    fn sync_index(&mut self, i: usize) {
        if let Some(pos) = self.index.get_mut(&self.heap[i].key) {
            *pos = i;
        } else {
            debug_assert!(false, "heap slot missing from position index");
        }
    }

    /// Moves the entry at `i` toward the root until its parent is no larger
    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.heap[i].priority < self.heap[parent].priority {
                self.heap.swap(i, parent);
                self.sync_index(i);
                self.sync_index(parent);
                i = parent;
            } else {
                break;
            }
        }
    }

    /// Moves the entry at `i` toward the leaves until no child is smaller
    ///
    /// The left child wins priority ties with the right: a child replaces
    /// the current smallest only when strictly smaller.
    fn sink_down(&mut self, mut i: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * i + 1;
            let right = 2 * i + 2;
            let mut smallest = i;

            if left < len && self.heap[left].priority < self.heap[smallest].priority {
                smallest = left;
            }
            if right < len && self.heap[right].priority < self.heap[smallest].priority {
                smallest = right;
            }

            if smallest == i {
                break;
            }
            self.heap.swap(i, smallest);
            self.sync_index(i);
            self.sync_index(smallest);
            i = smallest;
        }
    }

    /// Restores heap order over the whole array in O(n), bottom-up.
    ///
    /// Entries at `len/2..` are leaves and already in order.
    fn heapify(&mut self) {
        for i in (0..self.heap.len() / 2).rev() {
            self.sink_down(i);
        }
    }
}

impl<K: Hash + Eq + Clone, P: Ord, S: BuildHasher + Default> Default for IndexedHeapQueue<K, P, S> {
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<K: fmt::Debug, P: fmt::Debug, S> fmt::Debug for IndexedHeapQueue<K, P, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.heap.iter().map(|slot| (&slot.key, &slot.priority)))
            .finish()
    }
}

/// Equality is key-to-priority map equality, insensitive to heap layout and
/// to the hashers involved.
impl<K, P, S, S2> PartialEq<IndexedHeapQueue<K, P, S2>> for IndexedHeapQueue<K, P, S>
where
    K: Hash + Eq + Clone,
    P: Ord,
    S: BuildHasher,
    S2: BuildHasher,
{
    fn eq(&self, other: &IndexedHeapQueue<K, P, S2>) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, priority)| other.get(key) == Some(priority))
    }
}

impl<K: Hash + Eq + Clone, P: Ord, S: BuildHasher> Eq for IndexedHeapQueue<K, P, S> {}

/// Subscript-style access to a key's priority
///
/// Panics if the key is not present, as the standard map collections do.
impl<K, P, S, Q> Index<&Q> for IndexedHeapQueue<K, P, S>
where
    K: Hash + Eq + Clone + Borrow<Q>,
    P: Ord,
    S: BuildHasher,
    Q: Hash + Eq + ?Sized,
{
    type Output = P;

    fn index(&self, key: &Q) -> &P {
        self.get(key).expect("key not in priority queue")
    }
}

/// Bulk construction from (key, priority) pairs in O(n)
///
/// All pairs are appended, then heap order is restored with a single
/// bottom-up pass; the position index is kept exact throughout. When a plain
/// pair iterator yields the same key more than once, the last priority wins,
/// as when collecting into a map.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use indexed_heapq::IndexedHeapQueue;
///
/// let mapping = HashMap::from([("p", 3), ("q", 1), ("r", 2)]);
/// let queue: IndexedHeapQueue<_, _> = mapping.into_iter().collect();
///
/// assert_eq!(queue.peek(), Some((&"q", &1)));
/// ```
impl<K, P, S> FromIterator<(K, P)> for IndexedHeapQueue<K, P, S>
where
    K: Hash + Eq + Clone,
    P: Ord,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, P)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let mut queue = Self::with_capacity_and_hasher(lower, S::default());
        for (key, priority) in iter {
            match queue.index.get(&key) {
                Some(&i) => queue.heap[i].priority = priority,
                None => {
                    queue.index.insert(key.clone(), queue.heap.len());
                    queue.heap.push(Slot { key, priority });
                }
            }
        }
        queue.heapify();
        queue
    }
}

/// Upserts every pair from the iterator
impl<K, P, S> Extend<(K, P)> for IndexedHeapQueue<K, P, S>
where
    K: Hash + Eq + Clone,
    P: Ord,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, P)>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for (key, priority) in iter {
            self.upsert(key, priority);
        }
    }
}

/// Consuming iteration drains the queue in ascending priority order
///
/// # Example
///
/// ```rust
/// use indexed_heapq::IndexedHeapQueue;
///
/// let queue: IndexedHeapQueue<_, _> = [("c", 3), ("a", 1), ("b", 2)].into_iter().collect();
/// let drained: Vec<_> = queue.into_iter().collect();
///
/// assert_eq!(drained, vec![("a", 1), ("b", 2), ("c", 3)]);
/// ```
impl<K: Hash + Eq + Clone, P: Ord, S: BuildHasher> IntoIterator for IndexedHeapQueue<K, P, S> {
    type Item = (K, P);
    type IntoIter = IntoIter<K, P, S>;

    fn into_iter(self) -> IntoIter<K, P, S> {
        IntoIter { queue: self }
    }
}

impl<'a, K: Hash + Eq + Clone, P: Ord, S: BuildHasher> IntoIterator
    for &'a IndexedHeapQueue<K, P, S>
{
    type Item = (&'a K, &'a P);
    type IntoIter = Iter<'a, K, P>;

    fn into_iter(self) -> Iter<'a, K, P> {
        self.iter()
    }
}
