//! Invoice data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use trezo_shared::types::{CustomerId, InvoiceId};

use crate::wire;

/// A line item on a sale order.
///
/// `line_total` is the tax-inclusive monetary total for the line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Tax-inclusive line total. Malformed/missing values coerce to zero.
    #[serde(default, deserialize_with = "wire::lenient_money")]
    pub line_total: Decimal,
    /// Tax rate in percent for this line, when the backend supplies one.
    #[serde(default, deserialize_with = "wire::lenient_money_opt")]
    pub tax_percent: Option<Decimal>,
}

impl LineItem {
    /// Creates a line item with an explicit tax rate.
    #[must_use]
    pub const fn new(line_total: Decimal, tax_percent: Option<Decimal>) -> Self {
        Self {
            line_total,
            tax_percent,
        }
    }
}

/// An approved sale order as fetched from the ERP backend.
///
/// Read-only to the engine: every derivation produces new values, invoices
/// are never mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// Backend identifier.
    #[serde(rename = "_id")]
    pub id: InvoiceId,
    /// Human-readable transaction number.
    #[serde(default)]
    pub transaction_no: String,
    /// Calendar date of the invoice, when present and parseable.
    #[serde(default, deserialize_with = "wire::lenient_date")]
    pub date: Option<NaiveDate>,
    /// Customer reference (weak; resolved by lookup, not owned).
    #[serde(deserialize_with = "wire::entity_ref")]
    pub party_id: CustomerId,
    /// Ordered line items.
    #[serde(default)]
    pub items: Vec<LineItem>,
}
