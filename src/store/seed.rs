//! Fixed example records for ledger initialization.

use crate::record::{parse_date, Person, VaccineExperiment};
use crate::Result;

/// Build the three example experiments seeded at `EXP0..EXP2`.
///
/// Each has a populated researcher list and an empty conclusion list.
pub(super) fn example_experiments() -> Result<Vec<VaccineExperiment>> {
    let coronavirus = VaccineExperiment::builder(
        "International Medical Laboratory",
        "Testing vaccine for coronavirus",
        Person::new("John", "Smith", "1"),
        "VAC-COV-1",
        "COVID-19",
        parse_date("2020-Feb-03")?,
        parse_date("2020-May-20")?,
    )
    .researchers(vec![
        Person::new("Fei", "Chu", "4"),
        Person::new("Helena", "Gardner", "5"),
        Person::new("Simon", "Sutton", "6"),
    ])
    .build();

    let flu = VaccineExperiment::builder(
        "New York Medical Laboratory",
        "Testing vaccine for new mutations of common flu.",
        Person::new("Elizabeth", "Winter", "2"),
        "FLU-42-B",
        "Common flu",
        parse_date("2018-Jan-15")?,
        parse_date("2019-Jan-01")?,
    )
    .researchers(vec![
        Person::new("Milo", "Pacher", "7"),
        Person::new("Andrew", "Human", "8"),
    ])
    .build();

    let laziness = VaccineExperiment::builder(
        "California Main Hospital",
        "Experimenting with vaccine for well known disease, which is laziness",
        Person::new("Jim", "Badley", "3"),
        "ANTI-LAZY-v0",
        "Laziness",
        parse_date("2017-Dec-05")?,
        parse_date("2018-Nov-03")?,
    )
    .researchers(vec![Person::new("Nicolas", "Contino", "9")])
    .build();

    Ok(vec![coronavirus, flu, laziness])
}
