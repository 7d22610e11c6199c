//! Amount parsing for German-formatted totals.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::FieldError;

/// Parse a German-formatted amount (e.g., "1.234,56").
///
/// `.` is a thousands separator and `,` the decimal separator. Values are
/// exact decimals, limited to 28 significant digits: longer digit runs do not
/// fit a `Decimal` and are reported as `InvalidAmount`.
pub fn parse_german_amount(s: &str) -> Result<Decimal, FieldError> {
    let normalized = s.replace('.', "").replace(',', ".");

    Decimal::from_str(&normalized).map_err(|_| FieldError::InvalidAmount {
        value: s.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_german_amount() {
        assert_eq!(
            parse_german_amount("1.234,56"),
            Ok(Decimal::from_str("1234.56").unwrap())
        );
        assert_eq!(
            parse_german_amount("12.345.678,90"),
            Ok(Decimal::from_str("12345678.90").unwrap())
        );
        assert_eq!(parse_german_amount("99,5"), Ok(Decimal::from_str("99.5").unwrap()));
        assert_eq!(parse_german_amount("1.000"), Ok(Decimal::from(1000)));
    }

    #[test]
    fn test_parse_german_amount_renders_with_dot() {
        let amount = parse_german_amount("1.234,56").unwrap();
        assert_eq!(amount.to_string(), "1234.56");
    }

    #[test]
    fn test_parse_german_amount_rejects_garbage() {
        assert_eq!(
            parse_german_amount(",,"),
            Err(FieldError::InvalidAmount { value: ",,".to_string() })
        );
        assert!(parse_german_amount("...").is_err());
    }

    #[test]
    fn test_parse_german_amount_overflow() {
        let digits = "9".repeat(40);
        assert_eq!(
            parse_german_amount(&digits),
            Err(FieldError::InvalidAmount { value: digits.clone() })
        );
    }
}
