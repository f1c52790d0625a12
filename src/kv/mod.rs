//! World State Interface
//!
//! The narrow key-value backend the store reads and writes records
//! through: the latest serialized value per key, with read-your-writes
//! visibility inside an invocation. The hosting platform owns durability,
//! isolation, and conflict handling; this crate only consumes `get`/`put`.
//!
//! # Example
//!
//! ```rust,no_run
//! use vaxtrial_db::kv::{MemoryWorldState, WorldState};
//!
//! # async fn example() -> vaxtrial_db::Result<()> {
//! let state = MemoryWorldState::new();
//!
//! state.put("EXP0", b"serialized record".to_vec()).await?;
//! let value = state.get("EXP0").await?;
//! assert_eq!(value, Some(b"serialized record".to_vec()));
//! # Ok(())
//! # }
//! ```

mod memory;

pub use memory::MemoryWorldState;

use crate::Result;
use std::future::Future;

/// Key-value world state holding serialized experiment records.
///
/// Implementations must reflect a caller's own prior writes within the
/// same invocation (read-your-writes). No delete is exposed - records are
/// only ever created, read, or overwritten.
pub trait WorldState: Send + Sync {
    /// Get the last-written value for `key`.
    ///
    /// Returns `None` when no value is stored.
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<Vec<u8>>>> + Send;

    /// Store `value` at `key`, overwriting any existing value.
    fn put(&self, key: &str, value: Vec<u8>) -> impl Future<Output = Result<()>> + Send;
}
