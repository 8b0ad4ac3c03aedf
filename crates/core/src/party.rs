//! Flat party records.
//!
//! Customers are plain lookup entities here; the reconciliation engine only
//! needs them to resolve display names for derived rows.

use serde::{Deserialize, Serialize};
use trezo_shared::types::CustomerId;

/// Activity status shared by flat party/master-data records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PartyStatus {
    /// Record is active and selectable.
    #[default]
    Active,
    /// Record is retired but kept for historical references.
    Inactive,
}

/// A customer record fetched from the ERP backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Backend identifier.
    #[serde(rename = "_id")]
    pub id: CustomerId,
    /// Display name.
    #[serde(default)]
    pub customer_name: String,
    /// Activity status.
    #[serde(default)]
    pub status: PartyStatus,
}
