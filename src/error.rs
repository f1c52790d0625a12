//! Error types for Vaxtrial-DB
//!
//! Every failure is surfaced as a typed variant; decode failures are never
//! swallowed in favor of a zero-valued record.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Vaxtrial-DB error types
#[derive(Error, Debug)]
pub enum Error {
    /// Date text did not match the accepted layout
    #[error("wrong date {input:?}: expected layout like 2020-Feb-03")]
    DateFormat {
        /// The rejected input text
        input: String,
    },

    /// No record stored under the requested key
    #[error("experiment {0:?} does not exist")]
    NotFound(String),

    /// Create refused because the key already holds a record
    #[error("experiment {0:?} already exists")]
    KeyExists(String),

    /// Stored bytes do not decode to an experiment record
    #[error("stored record {key:?} is corrupt: {source}")]
    CorruptRecord {
        /// Key whose stored value failed to decode
        key: String,
        /// Underlying decode error (bad framing or bad JSON)
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Record failed to encode
    #[error("failed to serialize record: {0}")]
    Serialize(serde_json::Error),

    /// World state get/put failed
    #[error("world state error: {0}")]
    Storage(String),
}
