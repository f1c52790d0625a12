//! Experiment Record Schema
//!
//! Data structures stored (serialized) in the world state, plus the date
//! validation the store service applies before writing.
//!
//! ## Schema Overview
//!
//! ```text
//! VaccineExperiment (1) ──< Person (N)     [researchers, append-only]
//!                   │ ──── Person (1)      [leader]
//!                   └────< Conclusion (N)  [append-only, chronological]
//!                               └── Person [author]
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use vaxtrial_db::record::{parse_date, Conclusion, Person, VaccineExperiment};
//!
//! let leader = Person::new("John", "Smith", "1");
//! let mut experiment = VaccineExperiment::new(
//!     "International Medical Laboratory",
//!     "Testing vaccine for coronavirus",
//!     leader,
//!     "VAC-COV-1",
//!     "COVID-19",
//!     parse_date("2020-Feb-03").unwrap(),
//!     parse_date("2020-May-20").unwrap(),
//! );
//!
//! experiment.push_researcher(Person::new("Fei", "Chu", "4"));
//! experiment.push_conclusion(Conclusion::new(
//!     Person::new("Fei", "Chu", "4"),
//!     "Phase one cohort shows stable antibody response.",
//! ));
//! ```

mod conclusion;
mod date;
mod experiment;
mod person;

pub use conclusion::{Conclusion, ConclusionBuilder};
pub use date::{parse_date, DATE_LAYOUT};
pub use experiment::{VaccineExperiment, VaccineExperimentBuilder};
pub use person::Person;
