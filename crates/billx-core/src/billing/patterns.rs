//! Regex patterns for billing field extraction.
//!
//! Every pattern is case-sensitive, unanchored and exposes the field value as
//! its first capture group.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    pub static ref COST_CENTER: Regex = Regex::new(
        r"Kundenkostenstelle:\s*(\d+)"
    ).unwrap();

    // `Rechnung` sits outside the group: it bounds the token but is never
    // part of the contract text.
    pub static ref CONTRACT_TEXT: Regex = Regex::new(
        r"Vertragstext:\s*([A-Za-z0-9_]+)Rechnung"
    ).unwrap();

    pub static ref BILL_NUMBER: Regex = Regex::new(
        r"Rechnung\s+(\d+)"
    ).unwrap();

    // DD.MM.YYYY
    pub static ref BILLING_DATE: Regex = Regex::new(
        r"vom\s+(\d{2}\.\d{2}\.\d{4})"
    ).unwrap();

    pub static ref ORDER_NUMBER: Regex = Regex::new(
        r"Bestellnummer:\s*(\d+)"
    ).unwrap();

    // German amount format: 1.234,56
    pub static ref TOTAL_AMOUNT: Regex = Regex::new(
        r"Endbetrag\s+([0-9.,]+)"
    ).unwrap();
}

/// Return the first capture group of the first match, if any.
pub fn first_capture<'t>(pattern: &Regex, text: &'t str) -> Option<&'t str> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
