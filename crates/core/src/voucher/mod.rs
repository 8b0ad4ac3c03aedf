//! Receipt vouchers and their linked-invoice allocations.

pub mod types;

pub use types::{InvoiceLink, Voucher};
