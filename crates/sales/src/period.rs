//! Monthly sales periods (`MM/YYYY` column headers).

use chrono::{Datelike, NaiveDate};
use stockdesk_core::{DomainError, DomainResult};

/// Parse a `MM/YYYY` header into the first day of that month.
///
/// A single-digit month (`3/2023`) is accepted.
pub fn parse_period(text: &str) -> DomainResult<NaiveDate> {
    let invalid = || DomainError::validation(format!("'{text}' is not a MM/YYYY period"));

    let (month, year) = text.trim().split_once('/').ok_or_else(invalid)?;
    if month.is_empty()
        || month.len() > 2
        || year.len() != 4
        || !month.bytes().chain(year.bytes()).all(|b| b.is_ascii_digit())
    {
        return Err(invalid());
    }

    let month: u32 = month.parse().map_err(|_| invalid())?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)
}

/// `YYYY-MM` label used to group sales by month.
pub fn month_label(period: NaiveDate) -> String {
    format!("{:04}-{:02}", period.year(), period.month())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_month_year() {
        assert_eq!(parse_period("01/2023"), Ok(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()));
        assert_eq!(parse_period(" 3/2024 "), Ok(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
    }

    #[test]
    fn rejects_other_shapes() {
        for text in ["13/2023", "00/2023", "2023-01", "1/23", "01/2023/1", "ab/2023", "sku", ""] {
            assert!(parse_period(text).is_err(), "{text} should be rejected");
        }
    }

    #[test]
    fn labels_are_zero_padded() {
        let period = NaiveDate::from_ymd_opt(2023, 4, 1).unwrap();
        assert_eq!(month_label(period), "2023-04");
    }

    proptest! {
        #[test]
        fn every_valid_month_parses(month in 1u32..=12, year in 1000i32..=9999) {
            let period = parse_period(&format!("{month:02}/{year}")).unwrap();
            prop_assert_eq!(period.month(), month);
            prop_assert_eq!(period.year(), year);
            prop_assert_eq!(period.day(), 1);
        }
    }
}
