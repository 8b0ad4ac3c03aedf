//! Selection error types.

use thiserror::Error;

/// Errors for selection aggregation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// The selection contained no invoices.
    #[error("Selection must contain at least one invoice")]
    EmptySelection,
}
