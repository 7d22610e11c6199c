//! Rule-based extraction of the six billing fields.

use tracing::trace;

use crate::error::FieldError;
use crate::models::record::BillingFields;

use super::amounts::parse_german_amount;
use super::dates::parse_billing_date;
use super::patterns::{
    first_capture, BILLING_DATE, BILL_NUMBER, CONTRACT_TEXT, COST_CENTER, ORDER_NUMBER,
    TOTAL_AMOUNT,
};

/// Result of running the field patterns over one page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldExtraction {
    /// Detected fields.
    pub fields: BillingFields,
    /// Matched values that could not be coerced. The affected fields are
    /// left empty.
    pub errors: Vec<FieldError>,
}

/// Extract billing fields from the text of one page.
///
/// Each field is evaluated independently: a missing or malformed value never
/// affects the others.
pub fn extract_fields(text: &str) -> FieldExtraction {
    let mut errors = Vec::new();

    let billing_date = first_capture(&BILLING_DATE, text)
        .and_then(|raw| parse_billing_date(raw).map_err(|e| errors.push(e)).ok());

    let total_amount = first_capture(&TOTAL_AMOUNT, text)
        .and_then(|raw| parse_german_amount(raw).map_err(|e| errors.push(e)).ok());

    let fields = BillingFields {
        cost_center: capture_owned(&COST_CENTER, text),
        contract_text: capture_owned(&CONTRACT_TEXT, text),
        bill_number: capture_owned(&BILL_NUMBER, text),
        billing_date,
        order_number: capture_owned(&ORDER_NUMBER, text),
        total_amount,
    };

    trace!("Extracted fields: {:?} ({} errors)", fields, errors.len());

    FieldExtraction { fields, errors }
}

fn capture_owned(pattern: &regex::Regex, text: &str) -> Option<String> {
    first_capture(pattern, text).map(str::to_string)
}
