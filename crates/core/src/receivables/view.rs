//! Derived receivable rows.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;
use trezo_shared::types::{CustomerId, InvoiceId};

use crate::invoice::{Invoice, aggregate};
use crate::party::Customer;
use crate::settlement::{PaymentStatus, VoucherScope, paid_amount, resolve};
use crate::voucher::Voucher;

/// Label shown when a customer reference does not resolve.
pub const UNKNOWN_CUSTOMER: &str = "Unknown";

/// A display-ready receivable: one invoice with all derived fields attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceivableRow {
    /// Invoice identifier.
    pub id: InvoiceId,
    /// Human-readable transaction number.
    pub transaction_no: String,
    /// Invoice date.
    pub date: Option<NaiveDate>,
    /// Customer reference.
    pub party_id: CustomerId,
    /// Resolved customer name; `None` when the reference is dangling.
    pub customer_name: Option<String>,
    /// Pre-tax sale amount.
    pub sale_amount: Decimal,
    /// Tax portion.
    pub tax_amount: Decimal,
    /// Gross total.
    pub total: Decimal,
    /// Total received against the invoice.
    pub paid_amount: Decimal,
    /// Outstanding balance.
    pub balance_amount: Decimal,
    /// Payment status.
    pub status: PaymentStatus,
}

impl ReceivableRow {
    /// Customer name for display, with the placeholder for dangling refs.
    #[must_use]
    pub fn display_customer(&self) -> &str {
        self.customer_name.as_deref().unwrap_or(UNKNOWN_CUSTOMER)
    }
}

/// Derives one row per invoice from the fetched collections.
///
/// Payment linking applies the party consistency filter
/// ([`VoucherScope::MatchParty`]) because the voucher set here spans all
/// customers. Tolerates partial data: any collection may still be empty
/// while its fetch is in flight, and the rows simply recompute when it
/// lands.
#[must_use]
pub fn derive_rows(
    invoices: &[Invoice],
    vouchers: &[Voucher],
    customers: &[Customer],
) -> Vec<ReceivableRow> {
    let names: HashMap<&CustomerId, &str> = customers
        .iter()
        .map(|customer| (&customer.id, customer.customer_name.as_str()))
        .collect();

    invoices
        .iter()
        .map(|invoice| {
            let totals = aggregate(invoice);
            let paid = paid_amount(invoice, vouchers, VoucherScope::MatchParty);
            let settlement = resolve(totals.total, paid);

            let customer_name = names.get(&invoice.party_id).map(ToString::to_string);
            if customer_name.is_none() {
                debug!(
                    invoice = %invoice.id,
                    party = %invoice.party_id,
                    "customer reference did not resolve"
                );
            }

            ReceivableRow {
                id: invoice.id.clone(),
                transaction_no: invoice.transaction_no.clone(),
                date: invoice.date,
                party_id: invoice.party_id.clone(),
                customer_name,
                sale_amount: totals.sale_amount,
                tax_amount: totals.tax_amount,
                total: totals.total,
                paid_amount: settlement.paid_amount,
                balance_amount: settlement.balance_amount,
                status: settlement.status,
            }
        })
        .collect()
}
