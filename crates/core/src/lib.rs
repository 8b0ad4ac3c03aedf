//! Core reconciliation logic for Trezo.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. It consumes the collections fetched from the ERP backend
//! (customers, sale orders, receipt vouchers) and produces derived,
//! display-ready receivable records.
//!
//! # Modules
//!
//! - `wire` - Normalization of backend wire-format quirks at ingestion
//! - `party` - Flat customer records used for reference lookups
//! - `invoice` - Sale orders and invoice-level tax/total aggregation
//! - `voucher` - Receipt vouchers and their linked-invoice allocations
//! - `settlement` - Payment linking and balance/status resolution
//! - `selection` - Multi-invoice selection summaries and transaction drafts
//! - `receivables` - Derived table rows plus sort/filter projection

pub mod invoice;
pub mod party;
pub mod receivables;
pub mod selection;
pub mod settlement;
pub mod voucher;
pub mod wire;
