//! Indexed Priority Queue for Rust
//!
//! This crate provides [`IndexedHeapQueue`], a binary min-heap that keeps a
//! position index from key to heap slot, so any key (not just the minimum)
//! can be looked up, reprioritized, or removed in logarithmic time. The
//! position index is the feature distinguishing this from a plain heap, and
//! it is what algorithms like Dijkstra's shortest path need for their
//! decrease-key step.
//!
//! # Features
//!
//! - **O(log n) `insert`, `pop`, `update`, `remove`** on arbitrary keys;
//!   O(1) `peek`, O(1) average `get`/`contains_key`
//! - **O(n) bulk construction** from any `(key, priority)` iterator via
//!   `collect`, using a bottom-up heapify
//! - **Map-like surface**: `Entry` API, `Index` subscripting, `Extend`,
//!   key/priority/pair views, map-shaped equality and `Debug`
//! - **Pluggable hashing** for the position index through the standard
//!   `BuildHasher` seam
//!
//! # Example
//!
//! ```rust
//! use indexed_heapq::IndexedHeapQueue;
//!
//! let mut queue = IndexedHeapQueue::new();
//! queue.insert("a", 5).unwrap();
//! queue.insert("b", 1).unwrap();
//! queue.insert("c", 3).unwrap();
//!
//! assert_eq!(queue.peek(), Some((&"b", &1)));
//! assert_eq!(queue.pop(), Some(("b", 1)));
//!
//! queue.update("c", 0).unwrap();
//! assert_eq!(queue.peek(), Some((&"c", &0)));
//!
//! assert_eq!(queue.remove("a"), Some(5));
//! assert_eq!(queue.pop(), Some(("c", 0)));
//! assert!(queue.is_empty());
//! ```
//!
//! This is a min-heap; wrap priorities in [`std::cmp::Reverse`] for max-heap
//! behavior. Keys must be `Hash + Eq + Clone`, priorities `Ord`. The queue
//! never validates that the priority ordering is consistent: an `Ord` impl
//! that disagrees with itself yields unspecified (but safe) queue contents.

pub mod entry;
pub mod error;
pub mod iter;
pub mod queue;

pub use error::QueueError;
pub use queue::IndexedHeapQueue;
