//! Invoice-level tax and total aggregation.
//!
//! Line totals arrive tax-inclusive; the pre-tax sale amount is backed out
//! using a single representative rate for the whole invoice.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use trezo_shared::types::round_money;

use super::types::{Invoice, LineItem};

/// Default tax rate (percent) applied when no line item carries one.
#[must_use]
pub fn default_tax_percent() -> Decimal {
    Decimal::from(5)
}

/// The representative tax rate for a whole invoice.
///
/// The first line item's rate stands in for the entire invoice, even when
/// later lines carry different rates. Multi-rate invoices are an open
/// product question; keeping the rule behind this function means true
/// per-line tax summation is a one-place swap.
#[must_use]
pub fn representative_tax_percent(items: &[LineItem]) -> Decimal {
    items
        .first()
        .and_then(|item| item.tax_percent)
        .unwrap_or_else(default_tax_percent)
}

/// Derived invoice totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceTotals {
    /// Pre-tax sale amount (rounded to display precision).
    pub sale_amount: Decimal,
    /// Tax portion (`total - sale_amount`, so the identity holds exactly).
    pub tax_amount: Decimal,
    /// Gross total: sum of tax-inclusive line totals.
    pub total: Decimal,
}

impl InvoiceTotals {
    /// All-zero totals, used for empty or fully-malformed invoices.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            sale_amount: Decimal::ZERO,
            tax_amount: Decimal::ZERO,
            total: Decimal::ZERO,
        }
    }
}

/// Computes gross total, pre-tax sale amount, and tax amount for an invoice.
///
/// Degenerates gracefully: empty items yield all-zero totals, and a
/// representative rate of -100% (zero divisor) collapses to zero rather
/// than dividing by zero.
#[must_use]
pub fn aggregate(invoice: &Invoice) -> InvoiceTotals {
    if invoice.items.is_empty() {
        return InvoiceTotals::zero();
    }

    let total: Decimal = invoice.items.iter().map(|item| item.line_total).sum();
    let rate = representative_tax_percent(&invoice.items);
    let divisor = Decimal::ONE + rate / Decimal::ONE_HUNDRED;

    let sale_amount = if divisor.is_zero() {
        Decimal::ZERO
    } else {
        round_money(total / divisor)
    };

    InvoiceTotals {
        sale_amount,
        tax_amount: total - sale_amount,
        total,
    }
}
