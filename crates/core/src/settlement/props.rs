//! Property tests for payment linking and status resolution.

use proptest::prelude::*;
use rust_decimal::Decimal;
use trezo_shared::types::{CustomerId, InvoiceId, VoucherId};

use crate::invoice::{Invoice, LineItem};
use crate::voucher::{InvoiceLink, Voucher};

use super::linker::{VoucherScope, paid_amount};
use super::status::{PaymentStatus, resolve};

/// Strategy for non-negative monetary amounts with 2 decimal places.
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for a set of allocation amounts.
fn amounts_strategy(max_len: usize) -> impl Strategy<Value = Vec<Decimal>> {
    prop::collection::vec(amount_strategy(), 0..=max_len)
}

fn target_invoice() -> Invoice {
    Invoice {
        id: InvoiceId::from("I-target"),
        transaction_no: "SO-1".to_string(),
        date: None,
        party_id: CustomerId::from("C1"),
        items: vec![LineItem::new(Decimal::from(100), Some(Decimal::from(5)))],
    }
}

/// One voucher per amount, alternating matching and non-matching links so
/// both kinds are interleaved in every generated set.
fn build_vouchers(matching: &[Decimal], other: &[Decimal]) -> Vec<Voucher> {
    let mut vouchers = Vec::with_capacity(matching.len() + other.len());

    for (i, amount) in matching.iter().enumerate() {
        vouchers.push(Voucher {
            id: VoucherId::from(format!("V-m{i}")),
            voucher_no: format!("RV-m{i}"),
            date: None,
            party_id: CustomerId::from("C1"),
            linked_invoices: vec![InvoiceLink {
                invoice_id: InvoiceId::from("I-target"),
                amount: *amount,
                balance: None,
            }],
        });
    }
    for (i, amount) in other.iter().enumerate() {
        vouchers.push(Voucher {
            id: VoucherId::from(format!("V-o{i}")),
            voucher_no: format!("RV-o{i}"),
            date: None,
            party_id: CustomerId::from("C1"),
            linked_invoices: vec![InvoiceLink {
                invoice_id: InvoiceId::from("I-other"),
                amount: *amount,
                balance: None,
            }],
        });
    }

    vouchers
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// **Paid amount is order-independent.**
    ///
    /// *For any* fixed set of vouchers, the summed paid amount is identical
    /// under every iteration order (commutativity of summation).
    #[test]
    fn prop_paid_amount_order_independent(
        matching in amounts_strategy(8),
        other in amounts_strategy(8),
        order in prop::collection::vec(any::<usize>(), 0..16),
    ) {
        let invoice = target_invoice();
        let vouchers = build_vouchers(&matching, &other);
        let baseline = paid_amount(&invoice, &vouchers, VoucherScope::MatchParty);

        // Derive a permutation from the random order vector.
        let mut shuffled = vouchers.clone();
        for (i, pick) in order.iter().enumerate() {
            if !shuffled.is_empty() {
                let len = shuffled.len();
                let j = pick % len;
                shuffled.swap(i % len, j);
            }
        }

        prop_assert_eq!(
            paid_amount(&invoice, &shuffled, VoucherScope::MatchParty),
            baseline,
            "paid amount must not depend on voucher order"
        );
    }

    /// **Paid amount equals the plain sum of matching links.**
    #[test]
    fn prop_paid_amount_equals_matching_sum(
        matching in amounts_strategy(8),
        other in amounts_strategy(8),
    ) {
        let invoice = target_invoice();
        let vouchers = build_vouchers(&matching, &other);
        let expected: Decimal = matching.iter().copied().sum();

        prop_assert_eq!(
            paid_amount(&invoice, &vouchers, VoucherScope::MatchParty),
            expected
        );
    }

    /// **Status trichotomy is exhaustive and mutually exclusive.**
    ///
    /// *For any* (total, paid) pair, exactly one of Paid / Unpaid /
    /// Partially Paid is produced, and it follows the balance rule.
    #[test]
    fn prop_status_trichotomy(
        total in amount_strategy(),
        paid in amount_strategy(),
    ) {
        let settlement = resolve(total, paid);

        let expected = if settlement.balance_amount <= Decimal::ZERO {
            PaymentStatus::Paid
        } else if settlement.paid_amount.is_zero() {
            PaymentStatus::Unpaid
        } else {
            PaymentStatus::PartiallyPaid
        };

        prop_assert_eq!(settlement.status, expected);
    }

    /// **Balance identity**: balance always equals rounded total minus
    /// rounded paid.
    #[test]
    fn prop_balance_identity(
        total in amount_strategy(),
        paid in amount_strategy(),
    ) {
        let settlement = resolve(total, paid);
        prop_assert_eq!(
            settlement.balance_amount,
            total.round_dp(2) - settlement.paid_amount
        );
    }
}
