//! Data models shared by the extraction pipeline.

pub mod config;
pub mod record;

pub use config::BillxConfig;
pub use record::{BillingFields, BillingRecord};
