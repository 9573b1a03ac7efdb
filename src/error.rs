//! Error type for queue operations

use std::fmt;

/// Error type for fallible queue operations
///
/// Only operations whose failure is a usage error report through this enum.
/// Interrogation-style calls (`peek`, `pop`, `get`, `remove`) report
/// emptiness or key absence as `None` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// The key is already present in the queue (`insert` on an existing key)
    DuplicateKey,
    /// The key is not present in the queue (`update` on a missing key)
    KeyNotFound,
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::DuplicateKey => {
                write!(f, "key is already in the priority queue")
            }
            QueueError::KeyNotFound => {
                write!(f, "key is not in the priority queue")
            }
        }
    }
}

impl std::error::Error for QueueError {}
