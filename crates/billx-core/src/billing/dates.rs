//! Billing date parsing.

use chrono::{Datelike, NaiveDate};

use crate::error::FieldError;

/// Parse a `DD.MM.YYYY` date.
///
/// Year 0000 is rejected: chrono accepts it, but it is not a valid year in
/// the Gregorian calendar used on invoices.
pub fn parse_billing_date(s: &str) -> Result<NaiveDate, FieldError> {
    let invalid = || FieldError::InvalidDate {
        value: s.to_string(),
    };

    let date = NaiveDate::parse_from_str(s, "%d.%m.%Y").map_err(|_| invalid())?;
    if date.year() < 1 {
        return Err(invalid());
    }
    Ok(date)
}
