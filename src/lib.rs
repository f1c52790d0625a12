//! # Vaxtrial-DB: Vaccine Experiment Record Ledger
//!
//! Embedded store for vaccine research experiment records kept as
//! serialized values in a key-value world state. Records aggregate
//! structured metadata (company, leader, timeline) with two append-only
//! sub-collections (researchers, conclusions); every mutation is a single
//! get → decode → mutate → encode → put step against the backend.
//!
//! The hosting platform (ledger, consensus, transaction submission) is an
//! external collaborator reached only through the [`kv::WorldState`]
//! interface. The crate ships an in-memory backend for tests and demos.
//!
//! ## Example
//!
//! ```rust
//! use vaxtrial_db::kv::MemoryWorldState;
//! use vaxtrial_db::store::ExperimentStore;
//!
//! # async fn example() -> vaxtrial_db::Result<()> {
//! let store = ExperimentStore::new(MemoryWorldState::new());
//! store.initialize_ledger().await?;
//!
//! let experiment = store.query_experiment("EXP0").await?;
//! assert!(experiment.conclusions().is_empty());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod error;
pub mod kv;
pub mod record;
pub mod store;

pub use error::{Error, Result};
