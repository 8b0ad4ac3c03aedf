//! Transaction draft built from an invoice selection.
//!
//! The engine only produces the payload; submitting it is the caller's
//! concern.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use trezo_shared::types::{CustomerId, InvoiceId, round_money};

use crate::invoice::Invoice;
use crate::settlement::{PaymentStatus, first_linked_amount, resolve};
use crate::voucher::Voucher;

use super::error::SelectionError;

/// Party type constant for customer-side transactions.
pub const PARTY_TYPE_CUSTOMER: &str = "Customer";

/// Transaction type constant for sale orders.
pub const TRANSACTION_TYPE_SALE_ORDER: &str = "sale_order";

/// Remaining balance carried per selected invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceBalance {
    /// Invoice reference.
    pub invoice_id: InvoiceId,
    /// Human-readable transaction number.
    pub transaction_no: String,
    /// Outstanding balance on that invoice.
    pub balance_amount: Decimal,
}

/// Payload for `POST /transactions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDraft {
    /// Customer the new record belongs to.
    pub party_id: CustomerId,
    /// Always [`PARTY_TYPE_CUSTOMER`] for this flow.
    pub party_type: String,
    /// Transaction type discriminator.
    #[serde(rename = "type")]
    pub transaction_type: String,
    /// The invoices the record applies against.
    pub invoice_ids: Vec<InvoiceId>,
    /// Transaction number assigned by the entry form.
    pub transaction_no: String,
    /// Record date.
    pub date: NaiveDate,
    /// Gross total across the selection.
    pub total_amount: Decimal,
    /// Returned amount (always zero from this flow).
    pub return_amount: Decimal,
    /// Paid amount across the selection.
    pub paid_amount: Decimal,
    /// Outstanding balance across the selection.
    pub balance_amount: Decimal,
    /// Composite payment status.
    pub status: PaymentStatus,
    /// Per-invoice remaining balances.
    pub invoice_balances: Vec<InvoiceBalance>,
}

/// Builds the `POST /transactions` payload for a non-empty selection.
///
/// Per-invoice balances use the same first-matching-link paid contract as
/// the selection summary, so the draft and the form it auto-fills always
/// agree.
pub fn build_draft(
    selected: &[Invoice],
    vouchers: &[Voucher],
    transaction_no: impl Into<String>,
    date: NaiveDate,
) -> Result<TransactionDraft, SelectionError> {
    let first = selected.first().ok_or(SelectionError::EmptySelection)?;

    let mut total = Decimal::ZERO;
    let mut paid = Decimal::ZERO;
    let mut invoice_balances = Vec::with_capacity(selected.len());

    for invoice in selected {
        let item_total: Decimal = invoice.items.iter().map(|item| item.line_total).sum();
        let linked = first_linked_amount(invoice, vouchers);

        total += item_total;
        paid += linked;
        invoice_balances.push(InvoiceBalance {
            invoice_id: invoice.id.clone(),
            transaction_no: invoice.transaction_no.clone(),
            balance_amount: round_money(item_total - linked),
        });
    }

    let settlement = resolve(total, paid);

    Ok(TransactionDraft {
        party_id: first.party_id.clone(),
        party_type: PARTY_TYPE_CUSTOMER.to_string(),
        transaction_type: TRANSACTION_TYPE_SALE_ORDER.to_string(),
        invoice_ids: selected.iter().map(|invoice| invoice.id.clone()).collect(),
        transaction_no: transaction_no.into(),
        date,
        total_amount: round_money(total),
        return_amount: Decimal::ZERO,
        paid_amount: settlement.paid_amount,
        balance_amount: settlement.balance_amount,
        status: settlement.status,
        invoice_balances,
    })
}
