//! Monetary rounding and formatting helpers.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! All monetary fields in the system are `rust_decimal::Decimal`; these
//! helpers pin down the single place where display precision is decided.

use rust_decimal::Decimal;

/// Number of decimal places carried by display-facing monetary values.
pub const DISPLAY_SCALE: u32 = 2;

/// Rounds a monetary amount to display precision (2 decimal places),
/// using `round_dp`'s midpoint-nearest-even strategy.
///
/// Status comparisons and UI-bound values go through this first so that
/// sub-cent residue can never flip a payment status.
#[must_use]
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp(DISPLAY_SCALE)
}

/// Formats a monetary amount as a 2-decimal string (e.g., `"95.24"`).
///
/// This is the form-binding contract used by selection summaries.
#[must_use]
pub fn format_money(amount: Decimal) -> String {
    format!("{:.2}", round_money(amount))
}
