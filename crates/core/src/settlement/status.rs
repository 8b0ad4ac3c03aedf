//! Balance and payment-status resolution.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use trezo_shared::types::round_money;

/// Payment status of a receivable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    /// Balance fully settled (balance <= 0).
    Paid,
    /// Nothing received yet.
    Unpaid,
    /// Some payment received, balance remains.
    #[serde(rename = "Partially Paid")]
    PartiallyPaid,
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Paid => write!(f, "Paid"),
            Self::Unpaid => write!(f, "Unpaid"),
            Self::PartiallyPaid => write!(f, "Partially Paid"),
        }
    }
}

/// Resolved settlement state for an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settlement {
    /// Total received against the invoice (display precision).
    pub paid_amount: Decimal,
    /// Outstanding balance (`total - paid`, display precision).
    pub balance_amount: Decimal,
    /// Three-way payment status.
    pub status: PaymentStatus,
}

/// Combines a gross total and a paid amount into balance and status.
///
/// Both inputs are rounded to display precision first so sub-cent residue
/// can never produce a false "Partially Paid". A balance of exactly zero is
/// "Paid" even if paid does not literally equal total.
#[must_use]
pub fn resolve(total: Decimal, paid: Decimal) -> Settlement {
    let total = round_money(total);
    let paid = round_money(paid);
    let balance = total - paid;

    let status = if balance <= Decimal::ZERO {
        PaymentStatus::Paid
    } else if paid.is_zero() {
        PaymentStatus::Unpaid
    } else {
        PaymentStatus::PartiallyPaid
    };

    Settlement {
        paid_amount: paid,
        balance_amount: balance,
        status,
    }
}
