//! Derived receivable rows and their table projection.
//!
//! `view` cross-references invoices, vouchers, and customers into
//! display-ready rows; `projection` applies the user's search, customer
//! filter, and column sort. Both are pure recomputations over snapshots:
//! inputs are never mutated, and identical inputs produce identical output.

pub mod projection;
pub mod view;

pub use projection::{SortDirection, SortKey, SortState, TableQuery, project};
pub use view::{ReceivableRow, derive_rows};
