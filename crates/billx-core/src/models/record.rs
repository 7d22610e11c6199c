//! Billing record emitted for every PDF page with text.

use std::path::Path;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The six business fields detected on a page.
///
/// Every field is independently optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingFields {
    /// Customer cost center (digits).
    pub cost_center: Option<String>,
    /// Contract token preceding the word "Rechnung".
    pub contract_text: Option<String>,
    /// Invoice number (digits).
    pub bill_number: Option<String>,
    /// Invoice date.
    pub billing_date: Option<NaiveDate>,
    /// Order number (digits).
    pub order_number: Option<String>,
    /// Final amount.
    pub total_amount: Option<Decimal>,
}

impl BillingFields {
    /// True when none of the fields was detected.
    pub fn is_empty(&self) -> bool {
        self.cost_center.is_none()
            && self.contract_text.is_none()
            && self.bill_number.is_none()
            && self.billing_date.is_none()
            && self.order_number.is_none()
            && self.total_amount.is_none()
    }
}

/// One output row. Field order matches the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingRecord {
    /// Path of the source PDF.
    pub path: String,
    /// Page number (1-indexed).
    pub page_number: u32,
    pub cost_center: Option<String>,
    pub contract_text: Option<String>,
    pub bill_number: Option<String>,
    pub billing_date: Option<NaiveDate>,
    pub order_number: Option<String>,
    pub total_amount: Option<Decimal>,
}

impl BillingRecord {
    /// Merge extracted fields with their source location.
    pub fn new(path: &Path, page_number: u32, fields: BillingFields) -> Self {
        Self {
            path: path.display().to_string(),
            page_number,
            cost_center: fields.cost_center,
            contract_text: fields.contract_text,
            bill_number: fields.bill_number,
            billing_date: fields.billing_date,
            order_number: fields.order_number,
            total_amount: fields.total_amount,
        }
    }
}
