//! Calendar date parsing for experiment timelines.

use chrono::NaiveDate;

use crate::{Error, Result};

/// Textual layout accepted for experiment dates, e.g. `2020-Feb-03`.
///
/// Year, abbreviated month name, day. Dates are naive calendar dates; no
/// timezone is modeled.
pub const DATE_LAYOUT: &str = "%Y-%b-%d";

/// Parse experiment date text.
///
/// # Errors
///
/// Returns [`Error::DateFormat`] carrying the rejected input when the text
/// does not match [`DATE_LAYOUT`].
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let date = NaiveDate::parse_from_str(input, DATE_LAYOUT).map_err(|_| Error::DateFormat {
        input: input.to_string(),
    })?;
    // chrono's %b also matches full month names and %d unpadded days; the
    // layout is fixed-shape, so only the canonical rendering is valid.
    if date.format(DATE_LAYOUT).to_string() != input {
        return Err(Error::DateFormat {
            input: input.to_string(),
        });
    }
    Ok(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_accepts_layout() {
        let date = parse_date("2020-Feb-03").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2020, 2, 3).unwrap());
    }

    #[test]
    fn test_parse_date_rejects_iso() {
        let err = parse_date("2020-02-03").unwrap_err();
        assert!(matches!(err, Error::DateFormat { .. }));
    }

    #[test]
    fn test_parse_date_error_carries_input() {
        let err = parse_date("not-a-date").unwrap_err();
        match err {
            Error::DateFormat { input } => assert_eq!(input, "not-a-date"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_date_rejects_impossible_day() {
        assert!(parse_date("2020-Feb-31").is_err());
    }

    #[test]
    fn test_parse_date_rejects_full_month_name() {
        assert!(parse_date("2020-February-03").is_err());
    }

    #[test]
    fn test_parse_date_rejects_unpadded_day() {
        assert!(parse_date("2020-Feb-3").is_err());
    }
}
