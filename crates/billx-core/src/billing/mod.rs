//! Billing field extraction from page text.

pub mod amounts;
pub mod dates;
mod extractor;
pub mod patterns;

pub use amounts::parse_german_amount;
pub use dates::parse_billing_date;
pub use extractor::{extract_fields, FieldExtraction};
