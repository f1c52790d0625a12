//! In-memory world state implementation using `DashMap`.
//!
//! Backend for tests and demos - data is lost on process restart. A real
//! deployment injects the hosting platform's state instead.

use super::WorldState;
use crate::Result;
use dashmap::DashMap;

/// In-memory key-value world state using a lock-free concurrent hashmap.
///
/// Thread-safe; `DashMap` gives O(1) average-case operations, so
/// concurrent test invocations against different keys never block each
/// other.
///
/// # Example
///
/// ```rust
/// use vaxtrial_db::kv::{MemoryWorldState, WorldState};
///
/// # async fn example() -> vaxtrial_db::Result<()> {
/// let state = MemoryWorldState::new();
/// state.put("EXP0", b"record".to_vec()).await?;
/// assert_eq!(state.get("EXP0").await?, Some(b"record".to_vec()));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct MemoryWorldState {
    entries: DashMap<String, Vec<u8>>,
}

impl MemoryWorldState {
    /// Create a new in-memory world state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Create with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: DashMap::with_capacity(capacity),
        }
    }

    /// Get the number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no keys are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all entries.
    pub fn clear(&self) {
        self.entries.clear();
    }
}

impl Default for MemoryWorldState {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldState for MemoryWorldState {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.entries.get(key).map(|v| v.value().clone()))
    }

    async fn put(&self, key: &str, value: Vec<u8>) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}
