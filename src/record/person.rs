//! Person - researcher, leader, or conclusion author

use serde::{Deserialize, Serialize};

/// A person referenced by an experiment record.
///
/// Exists only as a value nested inside a [`VaccineExperiment`] or a
/// [`Conclusion`]; immutable once embedded in a collection.
///
/// The `license_id` is an opaque externally-assigned license/ID string.
/// No numeric semantics (ordering, arithmetic) are assumed.
///
/// [`VaccineExperiment`]: super::VaccineExperiment
/// [`Conclusion`]: super::Conclusion
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Person {
    name: String,
    surname: String,
    license_id: String,
}

impl Person {
    /// Create a new person.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        license_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            license_id: license_id.into(),
        }
    }

    /// Get the given name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the surname.
    #[must_use]
    pub fn surname(&self) -> &str {
        &self.surname
    }

    /// Get the opaque license/ID string.
    #[must_use]
    pub fn license_id(&self) -> &str {
        &self.license_id
    }
}
