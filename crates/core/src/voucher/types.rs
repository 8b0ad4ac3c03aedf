//! Voucher data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use trezo_shared::types::{CustomerId, InvoiceId, VoucherId};

use crate::wire;

/// An allocation of part of a voucher's amount to a specific invoice.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceLink {
    /// The invoice this allocation applies to. The backend sends either a
    /// populated invoice document or a bare id; both collapse to the typed
    /// id at ingestion.
    #[serde(deserialize_with = "wire::entity_ref")]
    pub invoice_id: InvoiceId,
    /// Amount allocated from the voucher to the invoice.
    #[serde(default, deserialize_with = "wire::lenient_money")]
    pub amount: Decimal,
    /// Pre-computed remaining balance, when the backend supplies one.
    #[serde(default, deserialize_with = "wire::lenient_money_opt")]
    pub balance: Option<Decimal>,
}

/// A receipt voucher as fetched from the ERP backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Voucher {
    /// Backend identifier.
    #[serde(rename = "_id")]
    pub id: VoucherId,
    /// Human-readable voucher number.
    #[serde(default)]
    pub voucher_no: String,
    /// Voucher date, when present and parseable.
    #[serde(default, deserialize_with = "wire::lenient_date")]
    pub date: Option<NaiveDate>,
    /// Paying customer reference.
    #[serde(deserialize_with = "wire::entity_ref")]
    pub party_id: CustomerId,
    /// Itemized invoice allocations.
    #[serde(default)]
    pub linked_invoices: Vec<InvoiceLink>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_voucher_decodes_mixed_link_shapes() {
        let voucher: Voucher = serde_json::from_value(serde_json::json!({
            "_id": "V1",
            "voucherNo": "RV-007",
            "date": "2024-03-01",
            "partyId": {"_id": "C1"},
            "linkedInvoices": [
                {"invoiceId": "I1", "amount": 100},
                {"invoiceId": {"_id": "I2", "transactionNo": "SO-2"}, "amount": "25.50", "balance": 10}
            ]
        }))
        .unwrap();

        assert_eq!(voucher.party_id, CustomerId::from("C1"));
        assert_eq!(voucher.linked_invoices[0].invoice_id, InvoiceId::from("I1"));
        assert_eq!(voucher.linked_invoices[1].invoice_id, InvoiceId::from("I2"));
        assert_eq!(voucher.linked_invoices[1].amount, dec!(25.50));
        assert_eq!(voucher.linked_invoices[1].balance, Some(dec!(10)));
    }

    #[test]
    fn test_voucher_without_links_is_empty() {
        let voucher: Voucher = serde_json::from_value(serde_json::json!({
            "_id": "V2",
            "partyId": "C3"
        }))
        .unwrap();

        assert!(voucher.linked_invoices.is_empty());
        assert_eq!(voucher.voucher_no, "");
    }
}
