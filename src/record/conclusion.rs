//! Conclusion - append-only findings attached to an experiment

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Person;

/// A conclusion appended to an experiment's record.
///
/// Created exactly once and never edited or removed afterward. The
/// creation timestamp comes from the service clock at append time, so
/// callers cannot backdate or forge conclusion times.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Conclusion {
    author: Person,
    content: String,
    created_at: DateTime<Utc>,
}

impl Conclusion {
    /// Create a new conclusion stamped with the current time.
    #[must_use]
    pub fn new(author: Person, content: impl Into<String>) -> Self {
        Self {
            author,
            content: content.into(),
            created_at: Utc::now(),
        }
    }

    /// Create a builder for constructing a conclusion with optional fields.
    #[must_use]
    pub fn builder(author: Person, content: impl Into<String>) -> ConclusionBuilder {
        ConclusionBuilder::new(author, content)
    }

    /// Get the author.
    #[must_use]
    pub const fn author(&self) -> &Person {
        &self.author
    }

    /// Get the conclusion text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Builder for [`Conclusion`].
#[derive(Debug)]
pub struct ConclusionBuilder {
    author: Person,
    content: String,
    created_at: DateTime<Utc>,
}

impl ConclusionBuilder {
    /// Create a new builder with required fields.
    #[must_use]
    pub fn new(author: Person, content: impl Into<String>) -> Self {
        Self {
            author,
            content: content.into(),
            created_at: Utc::now(),
        }
    }

    /// Set a custom creation timestamp (useful for deserialization/testing).
    #[must_use]
    pub const fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Build the [`Conclusion`].
    #[must_use]
    pub fn build(self) -> Conclusion {
        Conclusion {
            author: self.author,
            content: self.content,
            created_at: self.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conclusion_new() {
        let conclusion = Conclusion::new(Person::new("Fei", "Chu", "4"), "Looks promising.");
        assert_eq!(conclusion.author().name(), "Fei");
        assert_eq!(conclusion.content(), "Looks promising.");
        assert!(conclusion.created_at().timestamp() > 0);
    }

    #[test]
    fn test_conclusion_builder_timestamp_override() {
        let stamp = DateTime::from_timestamp(1_600_000_000, 0).unwrap();
        let conclusion = Conclusion::builder(Person::new("Fei", "Chu", "4"), "Archived note.")
            .created_at(stamp)
            .build();
        assert_eq!(conclusion.created_at(), stamp);
    }
}
