//! Typed IDs for type-safe entity references.
//!
//! The ERP backend hands out opaque string identifiers (Mongo-style object
//! ids). Wrapping them in distinct newtypes prevents accidentally passing a
//! `CustomerId` where an `InvoiceId` is expected.

use serde::{Deserialize, Serialize};

/// Macro to generate typed ID wrappers around opaque backend ids.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Creates an ID from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the id as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consumes the wrapper and returns the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

typed_id!(CustomerId, "Unique identifier for a customer (party).");
typed_id!(InvoiceId, "Unique identifier for a sale order / invoice.");
typed_id!(VoucherId, "Unique identifier for a receipt voucher.");
