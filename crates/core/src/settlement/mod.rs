//! Payment linking and balance/status resolution.
//!
//! Two deliberately distinct paid-amount contracts live here:
//!
//! - [`paid_amount`] sums every matching allocation across all vouchers
//!   (table display).
//! - [`first_linked_amount`] counts only the first voucher that links the
//!   invoice (customer/invoice-picker flow, which assumes one receipt per
//!   invoice). Collapsing the two would change observable totals in the
//!   existing flows, so both stay, each pinned by its own tests.

pub mod linker;
pub mod status;

#[cfg(test)]
mod props;

pub use linker::{VoucherScope, first_linked_amount, paid_amount, settle};
pub use status::{PaymentStatus, Settlement, resolve};
