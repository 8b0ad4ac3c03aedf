//! Voucher-to-invoice payment linking.

use rust_decimal::Decimal;

use crate::invoice::{Invoice, aggregate};
use crate::voucher::Voucher;

use super::status::{Settlement, resolve};

/// Whether to apply the party consistency filter when scanning vouchers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoucherScope {
    /// Only consider vouchers whose party matches the invoice's party.
    /// Required for table display, where the voucher set spans customers.
    MatchParty,
    /// Consider every voucher. Safe only when the caller fetched vouchers
    /// already scoped to the invoice's customer.
    PreScoped,
}

/// Sums every allocation across all vouchers that references the invoice.
///
/// Order-independent: the result is a plain commutative sum over matching
/// links.
#[must_use]
pub fn paid_amount(invoice: &Invoice, vouchers: &[Voucher], scope: VoucherScope) -> Decimal {
    vouchers
        .iter()
        .filter(|voucher| match scope {
            VoucherScope::MatchParty => voucher.party_id == invoice.party_id,
            VoucherScope::PreScoped => true,
        })
        .flat_map(|voucher| &voucher.linked_invoices)
        .filter(|link| link.invoice_id == invoice.id)
        .map(|link| link.amount)
        .sum()
}

/// The first matching allocation only.
///
/// Narrower contract used by the invoice-picker flow, which assumes at most
/// one receipt per invoice: the first voucher containing a link to the
/// invoice contributes its first such link, later vouchers are ignored. An
/// invoice paid across two receipts is understated here by design; see the
/// module docs before unifying this with [`paid_amount`].
#[must_use]
pub fn first_linked_amount(invoice: &Invoice, vouchers: &[Voucher]) -> Decimal {
    vouchers
        .iter()
        .find_map(|voucher| {
            voucher
                .linked_invoices
                .iter()
                .find(|link| link.invoice_id == invoice.id)
                .map(|link| link.amount)
        })
        .unwrap_or(Decimal::ZERO)
}

/// Full per-invoice settlement: aggregate totals, link payments, resolve.
#[must_use]
pub fn settle(invoice: &Invoice, vouchers: &[Voucher], scope: VoucherScope) -> Settlement {
    let totals = aggregate(invoice);
    resolve(totals.total, paid_amount(invoice, vouchers, scope))
}
