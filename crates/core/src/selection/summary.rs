//! Selection aggregation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use trezo_shared::types::format_money;

use crate::invoice::{Invoice, representative_tax_percent};
use crate::settlement::{PaymentStatus, first_linked_amount, resolve};
use crate::voucher::Voucher;

use super::error::SelectionError;

/// Display-ready summary of a multi-invoice selection.
///
/// Monetary fields are 2-decimal strings: this is the form-binding contract
/// consumed directly by the order-entry form, not an internal type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionSummary {
    /// Pre-tax sale amount across the selection.
    pub sale_amount: String,
    /// Tax portion across the selection.
    pub tax_amount: String,
    /// Gross total across the selection.
    pub total: String,
    /// Paid amount (first-matching-link contract per invoice).
    pub paid_amount: String,
    /// Outstanding balance.
    pub balance_amount: String,
    /// Composite payment status.
    pub status: PaymentStatus,
    /// Comma-joined transaction numbers, for the invoice-number field.
    pub invoice_numbers: String,
    /// Form date: the first selected invoice's date, else the supplied today.
    pub date: NaiveDate,
}

/// Aggregates a non-empty invoice selection against the voucher set.
///
/// Works on item-level totals directly (summed first across the selection);
/// tax is backed out per invoice with that invoice's representative rate.
/// Paid amounts use the narrow [`first_linked_amount`] contract, assuming
/// the vouchers were fetched pre-scoped to the selection's customer.
///
/// `today` is injected rather than read from the clock so the fallback date
/// is deterministic under test.
pub fn aggregate_selection(
    selected: &[Invoice],
    vouchers: &[Voucher],
    today: NaiveDate,
) -> Result<SelectionSummary, SelectionError> {
    if selected.is_empty() {
        return Err(SelectionError::EmptySelection);
    }

    let mut total = Decimal::ZERO;
    let mut tax_amount = Decimal::ZERO;

    for invoice in selected {
        let item_total: Decimal = invoice.items.iter().map(|item| item.line_total).sum();
        let rate = representative_tax_percent(&invoice.items);
        let divisor = Decimal::ONE + rate / Decimal::ONE_HUNDRED;

        let pre_tax = if divisor.is_zero() {
            Decimal::ZERO
        } else {
            item_total / divisor
        };

        total += item_total;
        tax_amount += item_total - pre_tax;
    }

    let paid: Decimal = selected
        .iter()
        .map(|invoice| first_linked_amount(invoice, vouchers))
        .sum();

    let settlement = resolve(total, paid);

    Ok(SelectionSummary {
        sale_amount: format_money(total - tax_amount),
        tax_amount: format_money(tax_amount),
        total: format_money(total),
        paid_amount: format_money(settlement.paid_amount),
        balance_amount: format_money(settlement.balance_amount),
        status: settlement.status,
        invoice_numbers: selected
            .iter()
            .map(|invoice| invoice.transaction_no.as_str())
            .collect::<Vec<_>>()
            .join(","),
        date: selected
            .first()
            .and_then(|invoice| invoice.date)
            .unwrap_or(today),
    })
}
