//! Sale orders (invoices) and invoice-level aggregation.
//!
//! - Canonical invoice/line-item types as ingested from the backend
//! - Tax/total aggregation with the representative-rate rule

pub mod totals;
pub mod types;

pub use totals::{InvoiceTotals, aggregate, default_tax_percent, representative_tax_percent};
pub use types::{Invoice, LineItem};
