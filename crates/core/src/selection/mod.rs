//! Multi-invoice selection summaries and transaction drafts.
//!
//! When the user checks invoices in the order-entry picker, the selection is
//! aggregated into a display-ready summary (2-decimal strings, form-binding
//! contract) and a ready-to-POST transaction draft.

pub mod draft;
pub mod error;
pub mod summary;

pub use draft::{InvoiceBalance, TransactionDraft, build_draft};
pub use error::SelectionError;
pub use summary::{SelectionSummary, aggregate_selection};
