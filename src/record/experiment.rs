//! Vaccine Experiment - root record stored in the world state

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Conclusion, Person};

/// A vaccine research experiment record.
///
/// This is the unit of storage: one record, serialized whole, per world
/// state key. Identity is the key, not any field - two records may carry
/// identical metadata.
///
/// `researchers` and `conclusions` only grow; no operation removes an
/// entry. The end date is deliberately not validated against the start
/// date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VaccineExperiment {
    company: String,
    description: String,
    leader: Person,
    researchers: Vec<Person>,
    vaccine_name: String,
    disease: String,
    conclusions: Vec<Conclusion>,
    started_on: NaiveDate,
    ended_on: NaiveDate,
}

impl VaccineExperiment {
    /// Create a new experiment record with empty researcher and conclusion
    /// lists.
    #[must_use]
    pub fn new(
        company: impl Into<String>,
        description: impl Into<String>,
        leader: Person,
        vaccine_name: impl Into<String>,
        disease: impl Into<String>,
        started_on: NaiveDate,
        ended_on: NaiveDate,
    ) -> Self {
        Self {
            company: company.into(),
            description: description.into(),
            leader,
            researchers: Vec::new(),
            vaccine_name: vaccine_name.into(),
            disease: disease.into(),
            conclusions: Vec::new(),
            started_on,
            ended_on,
        }
    }

    /// Create a builder for constructing a record with optional fields.
    #[must_use]
    pub fn builder(
        company: impl Into<String>,
        description: impl Into<String>,
        leader: Person,
        vaccine_name: impl Into<String>,
        disease: impl Into<String>,
        started_on: NaiveDate,
        ended_on: NaiveDate,
    ) -> VaccineExperimentBuilder {
        VaccineExperimentBuilder::new(
            company,
            description,
            leader,
            vaccine_name,
            disease,
            started_on,
            ended_on,
        )
    }

    /// Get the sponsoring company.
    #[must_use]
    pub fn company(&self) -> &str {
        &self.company
    }

    /// Get the experiment description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get the experiment leader.
    #[must_use]
    pub const fn leader(&self) -> &Person {
        &self.leader
    }

    /// Get the researchers in insertion order.
    #[must_use]
    pub fn researchers(&self) -> &[Person] {
        &self.researchers
    }

    /// Get the vaccine name.
    #[must_use]
    pub fn vaccine_name(&self) -> &str {
        &self.vaccine_name
    }

    /// Get the targeted disease.
    #[must_use]
    pub fn disease(&self) -> &str {
        &self.disease
    }

    /// Get the conclusions in append (chronological) order.
    #[must_use]
    pub fn conclusions(&self) -> &[Conclusion] {
        &self.conclusions
    }

    /// Get the start date.
    #[must_use]
    pub const fn started_on(&self) -> NaiveDate {
        self.started_on
    }

    /// Get the end date.
    #[must_use]
    pub const fn ended_on(&self) -> NaiveDate {
        self.ended_on
    }

    /// Append a researcher. Duplicates are allowed; insertion order is
    /// preserved.
    pub fn push_researcher(&mut self, researcher: Person) {
        self.researchers.push(researcher);
    }

    /// Append a conclusion. Insertion order is chronological order.
    pub fn push_conclusion(&mut self, conclusion: Conclusion) {
        self.conclusions.push(conclusion);
    }
}

/// Builder for [`VaccineExperiment`].
#[derive(Debug)]
pub struct VaccineExperimentBuilder {
    company: String,
    description: String,
    leader: Person,
    researchers: Vec<Person>,
    vaccine_name: String,
    disease: String,
    started_on: NaiveDate,
    ended_on: NaiveDate,
}

impl VaccineExperimentBuilder {
    /// Create a new builder with required fields.
    #[must_use]
    pub fn new(
        company: impl Into<String>,
        description: impl Into<String>,
        leader: Person,
        vaccine_name: impl Into<String>,
        disease: impl Into<String>,
        started_on: NaiveDate,
        ended_on: NaiveDate,
    ) -> Self {
        Self {
            company: company.into(),
            description: description.into(),
            leader,
            researchers: Vec::new(),
            vaccine_name: vaccine_name.into(),
            disease: disease.into(),
            started_on,
            ended_on,
        }
    }

    /// Seed the researcher list.
    #[must_use]
    pub fn researchers(mut self, researchers: Vec<Person>) -> Self {
        self.researchers = researchers;
        self
    }

    /// Build the [`VaccineExperiment`] with an empty conclusion list.
    #[must_use]
    pub fn build(self) -> VaccineExperiment {
        VaccineExperiment {
            company: self.company,
            description: self.description,
            leader: self.leader,
            researchers: self.researchers,
            vaccine_name: self.vaccine_name,
            disease: self.disease,
            conclusions: Vec::new(),
            started_on: self.started_on,
            ended_on: self.ended_on,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::parse_date;

    fn sample() -> VaccineExperiment {
        VaccineExperiment::new(
            "International Medical Laboratory",
            "Testing vaccine for coronavirus",
            Person::new("John", "Smith", "1"),
            "VAC-COV-1",
            "COVID-19",
            parse_date("2020-Feb-03").unwrap(),
            parse_date("2020-May-20").unwrap(),
        )
    }

    #[test]
    fn test_new_starts_with_empty_collections() {
        let experiment = sample();
        assert!(experiment.researchers().is_empty());
        assert!(experiment.conclusions().is_empty());
        assert_eq!(experiment.leader().name(), "John");
        assert_eq!(experiment.vaccine_name(), "VAC-COV-1");
    }

    #[test]
    fn test_push_researcher_preserves_order_and_duplicates() {
        let mut experiment = sample();
        let fei = Person::new("Fei", "Chu", "4");
        experiment.push_researcher(fei.clone());
        experiment.push_researcher(Person::new("Helena", "Gardner", "5"));
        experiment.push_researcher(fei.clone());

        assert_eq!(experiment.researchers().len(), 3);
        assert_eq!(experiment.researchers()[0], fei);
        assert_eq!(experiment.researchers()[2], fei);
    }

    #[test]
    fn test_push_conclusion_appends_at_end() {
        let mut experiment = sample();
        experiment.push_conclusion(Conclusion::new(
            Person::new("Fei", "Chu", "4"),
            "First finding.",
        ));
        experiment.push_conclusion(Conclusion::new(
            Person::new("Helena", "Gardner", "5"),
            "Second finding.",
        ));

        assert_eq!(experiment.conclusions().len(), 2);
        assert_eq!(experiment.conclusions()[1].content(), "Second finding.");
    }

    #[test]
    fn test_builder_seeds_researchers() {
        let experiment = VaccineExperiment::builder(
            "California Main Hospital",
            "Experimenting with vaccine for laziness",
            Person::new("Jim", "Badley", "3"),
            "ANTI-LAZY-v0",
            "Laziness",
            parse_date("2017-Dec-05").unwrap(),
            parse_date("2018-Nov-03").unwrap(),
        )
        .researchers(vec![Person::new("Nicolas", "Contino", "9")])
        .build();

        assert_eq!(experiment.researchers().len(), 1);
        assert!(experiment.conclusions().is_empty());
    }

    #[test]
    fn test_end_date_not_validated_against_start() {
        // End may precede start; the record does not order-check dates.
        let experiment = VaccineExperiment::new(
            "Lab",
            "Backwards timeline",
            Person::new("John", "Smith", "1"),
            "VAC-X",
            "X",
            parse_date("2020-May-20").unwrap(),
            parse_date("2020-Feb-03").unwrap(),
        );
        assert!(experiment.ended_on() < experiment.started_on());
    }
}
