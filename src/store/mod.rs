//! Experiment Store Service - record CRUD/append protocol
//!
//! Orchestrates the ledger operations against an injected [`WorldState`]
//! backend. Every mutating operation is one read-modify-write step:
//! get → decode → mutate → encode → put, with validation strictly before
//! the first write. The service holds no record state of its own; the
//! hosting platform treats each invocation's get/put pair as a single
//! unit of isolation and serializes conflicting writers.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use vaxtrial_db::kv::MemoryWorldState;
//! use vaxtrial_db::record::Person;
//! use vaxtrial_db::store::{ExperimentDraft, ExperimentStore};
//!
//! # async fn example() -> vaxtrial_db::Result<()> {
//! let store = ExperimentStore::new(MemoryWorldState::new());
//!
//! let draft = ExperimentDraft::new(
//!     "International Medical Laboratory",
//!     "Testing vaccine for coronavirus",
//!     Person::new("John", "Smith", "1"),
//!     "VAC-COV-1",
//!     "COVID-19",
//!     "2020-Feb-03",
//!     "2020-May-20",
//! );
//! store.create_experiment("EXP9", draft).await?;
//!
//! store
//!     .add_researcher("EXP9", Person::new("Fei", "Chu", "4"))
//!     .await?;
//! store
//!     .add_conclusion("EXP9", Person::new("Fei", "Chu", "4"), "Stable response.")
//!     .await?;
//!
//! let conclusions = store.query_conclusions("EXP9").await?;
//! assert_eq!(conclusions.len(), 1);
//! # Ok(())
//! # }
//! ```

mod codec;
mod seed;

pub use codec::RecordEncoding;

use tracing::{debug, warn};

use crate::kv::WorldState;
use crate::record::{parse_date, Conclusion, Person, VaccineExperiment};
use crate::{Error, Result};

/// Policy applied when `create_experiment` targets an occupied key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CreatePolicy {
    /// Silently replace the stored record (last write wins).
    #[default]
    Overwrite,
    /// Refuse with [`Error::KeyExists`] when the key already holds a
    /// record. Costs the one permitted read before the write.
    Reject,
}

/// Caller-supplied fields for a new experiment record.
///
/// Dates stay textual here; [`ExperimentStore::create_experiment`] parses
/// them, so a malformed date aborts the operation before anything is
/// written.
#[derive(Debug, Clone)]
pub struct ExperimentDraft {
    company: String,
    description: String,
    leader: Person,
    vaccine_name: String,
    disease: String,
    start_date: String,
    end_date: String,
}

impl ExperimentDraft {
    /// Create a draft from caller-supplied fields.
    #[must_use]
    pub fn new(
        company: impl Into<String>,
        description: impl Into<String>,
        leader: Person,
        vaccine_name: impl Into<String>,
        disease: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Self {
        Self {
            company: company.into(),
            description: description.into(),
            leader,
            vaccine_name: vaccine_name.into(),
            disease: disease.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }
}

/// Experiment record store over an injected world state backend.
///
/// Stateless between invocations - all record state lives behind the
/// [`WorldState`] handle. Records transition `absent → present` on
/// create/init and stay `present` forever; there is no delete.
#[derive(Debug)]
pub struct ExperimentStore<S> {
    state: S,
    create_policy: CreatePolicy,
    encoding: RecordEncoding,
}

impl<S: WorldState> ExperimentStore<S> {
    /// Create a store over the given world state with the default
    /// (overwrite) create policy and plain JSON record encoding.
    pub fn new(state: S) -> Self {
        Self {
            state,
            create_policy: CreatePolicy::default(),
            encoding: RecordEncoding::default(),
        }
    }

    /// Set the create policy.
    #[must_use]
    pub const fn with_create_policy(mut self, policy: CreatePolicy) -> Self {
        self.create_policy = policy;
        self
    }

    /// Set the record encoding used for stored bytes.
    #[must_use]
    pub const fn with_record_encoding(mut self, encoding: RecordEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Get a reference to the underlying world state.
    pub const fn state(&self) -> &S {
        &self.state
    }

    /// Seed the world state with the fixed example experiments at keys
    /// `EXP0`, `EXP1`, `EXP2`, each with an empty conclusion list and a
    /// populated researcher list.
    ///
    /// Re-running overwrites the same keys with the same content. A write
    /// failure aborts the remaining seeds; keys already written stay
    /// written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Storage`] on backend write failure.
    pub async fn initialize_ledger(&self) -> Result<()> {
        for (i, experiment) in seed::example_experiments()?.into_iter().enumerate() {
            let key = format!("EXP{i}");
            self.write_record(&key, &experiment).await?;
        }
        debug!("seeded example experiments");
        Ok(())
    }

    /// Validate and store a new experiment record at `key` with empty
    /// researcher and conclusion lists.
    ///
    /// Both dates are parsed before any write; under
    /// [`CreatePolicy::Overwrite`] no read is performed and any prior
    /// record at `key` is replaced.
    ///
    /// # Errors
    ///
    /// [`Error::DateFormat`] for a malformed date (nothing written),
    /// [`Error::KeyExists`] under [`CreatePolicy::Reject`] when the key is
    /// occupied, [`Error::Storage`] on backend failure.
    pub async fn create_experiment(&self, key: &str, draft: ExperimentDraft) -> Result<()> {
        let started_on = parse_date(&draft.start_date)?;
        let ended_on = parse_date(&draft.end_date)?;

        if self.create_policy == CreatePolicy::Reject && self.state.get(key).await?.is_some() {
            return Err(Error::KeyExists(key.to_string()));
        }

        let experiment = VaccineExperiment::new(
            draft.company,
            draft.description,
            draft.leader,
            draft.vaccine_name,
            draft.disease,
            started_on,
            ended_on,
        );
        self.write_record(key, &experiment).await?;
        debug!(key, "created experiment");
        Ok(())
    }

    /// Read and decode the full record at `key`.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when the key is absent,
    /// [`Error::CorruptRecord`] when the stored bytes do not decode,
    /// [`Error::Storage`] on backend failure.
    pub async fn query_experiment(&self, key: &str) -> Result<VaccineExperiment> {
        self.read_record(key).await
    }

    /// Read the record at `key` and return only its conclusions, in
    /// stored (chronological) order.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::query_experiment`].
    pub async fn query_conclusions(&self, key: &str) -> Result<Vec<Conclusion>> {
        Ok(self.read_record(key).await?.conclusions().to_vec())
    }

    /// Append a conclusion to the record at `key`.
    ///
    /// The conclusion is stamped with the service clock at append time;
    /// callers cannot supply a timestamp. The entire updated record is
    /// re-serialized and written back.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when the key is absent,
    /// [`Error::CorruptRecord`] / [`Error::Storage`] as for reads/writes.
    pub async fn add_conclusion(
        &self,
        key: &str,
        author: Person,
        content: impl Into<String> + Send,
    ) -> Result<()> {
        let mut experiment = self.read_record(key).await?;
        experiment.push_conclusion(Conclusion::new(author, content));
        self.write_record(key, &experiment).await?;
        debug!(key, "appended conclusion");
        Ok(())
    }

    /// Append a researcher to the record at `key`.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when the key is absent,
    /// [`Error::CorruptRecord`] / [`Error::Storage`] as for reads/writes.
    pub async fn add_researcher(&self, key: &str, researcher: Person) -> Result<()> {
        let mut experiment = self.read_record(key).await?;
        experiment.push_researcher(researcher);
        // Write the freshly encoded record, never the bytes read above.
        self.write_record(key, &experiment).await?;
        debug!(key, "appended researcher");
        Ok(())
    }

    async fn read_record(&self, key: &str) -> Result<VaccineExperiment> {
        let bytes = self
            .state
            .get(key)
            .await?
            .ok_or_else(|| Error::NotFound(key.to_string()))?;
        match self.encoding.decode(key, &bytes) {
            Ok(experiment) => Ok(experiment),
            Err(err) => {
                warn!(key, "stored record failed to decode");
                Err(err)
            }
        }
    }

    async fn write_record(&self, key: &str, experiment: &VaccineExperiment) -> Result<()> {
        let bytes = self.encoding.encode(experiment)?;
        self.state.put(key, bytes).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryWorldState;

    fn draft() -> ExperimentDraft {
        ExperimentDraft::new(
            "New York Medical Laboratory",
            "Testing vaccine for new mutations of common flu.",
            Person::new("Elizabeth", "Winter", "2"),
            "FLU-42-B",
            "Common flu",
            "2018-Jan-15",
            "2019-Jan-01",
        )
    }

    #[tokio::test]
    async fn test_create_then_query() {
        let store = ExperimentStore::new(MemoryWorldState::new());
        store.create_experiment("FLU1", draft()).await.unwrap();

        let experiment = store.query_experiment("FLU1").await.unwrap();
        assert_eq!(experiment.company(), "New York Medical Laboratory");
        assert!(experiment.researchers().is_empty());
        assert!(experiment.conclusions().is_empty());
    }

    #[tokio::test]
    async fn test_create_rejects_bad_date_before_write() {
        let store = ExperimentStore::new(MemoryWorldState::new());
        let bad = ExperimentDraft::new(
            "Lab",
            "desc",
            Person::new("A", "B", "1"),
            "VAC",
            "X",
            "not-a-date",
            "2020-Feb-03",
        );

        let err = store.create_experiment("BAD", bad).await.unwrap_err();
        assert!(matches!(err, Error::DateFormat { .. }));
        assert!(store.state().is_empty());
    }

    #[tokio::test]
    async fn test_reject_policy_guards_occupied_key() {
        let store =
            ExperimentStore::new(MemoryWorldState::new()).with_create_policy(CreatePolicy::Reject);
        store.create_experiment("FLU1", draft()).await.unwrap();

        let err = store.create_experiment("FLU1", draft()).await.unwrap_err();
        assert!(matches!(err, Error::KeyExists(key) if key == "FLU1"));
    }
}
