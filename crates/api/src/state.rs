//! In-memory collection store.
//!
//! The store holds the three fetched collections behind independent locks.
//! Nothing mutates records in place: refresh replaces whole collections,
//! and every derivation works on a cloned snapshot. Partial data (one
//! collection landed, another still empty) is a supported state.

use tokio::sync::RwLock;
use tracing::info;

use trezo_client::{BackendClient, fetch_or_empty};
use trezo_core::invoice::Invoice;
use trezo_core::party::Customer;
use trezo_core::voucher::Voucher;

/// In-memory snapshot of the backend collections.
#[derive(Debug, Default)]
pub struct Store {
    customers: RwLock<Vec<Customer>>,
    invoices: RwLock<Vec<Invoice>>,
    vouchers: RwLock<Vec<Voucher>>,
}

/// Sizes of the stored collections.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct CollectionCounts {
    /// Customers fetched.
    pub customers: usize,
    /// Invoices fetched.
    pub invoices: usize,
    /// Vouchers fetched.
    pub vouchers: usize,
}

impl Store {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-fetches all three collections concurrently.
    ///
    /// The fetches are independent: each one replaces its collection as it
    /// completes, in whatever order the backend answers. A failed fetch
    /// leaves that collection empty (fail-soft) and the others unaffected.
    pub async fn refresh(&self, client: &BackendClient) -> CollectionCounts {
        tokio::join!(
            async {
                *self.customers.write().await =
                    fetch_or_empty("customers", client.customers()).await;
            },
            async {
                *self.invoices.write().await =
                    fetch_or_empty("invoices", client.approved_sale_orders()).await;
            },
            async {
                *self.vouchers.write().await =
                    fetch_or_empty("vouchers", client.receipt_vouchers(None)).await;
            },
        );

        let outcome = self.counts().await;
        info!(
            customers = outcome.customers,
            invoices = outcome.invoices,
            vouchers = outcome.vouchers,
            "collections refreshed"
        );
        outcome
    }

    /// Current collection sizes.
    pub async fn counts(&self) -> CollectionCounts {
        CollectionCounts {
            customers: self.customers.read().await.len(),
            invoices: self.invoices.read().await.len(),
            vouchers: self.vouchers.read().await.len(),
        }
    }

    /// Snapshot of the customer collection.
    pub async fn customers(&self) -> Vec<Customer> {
        self.customers.read().await.clone()
    }

    /// Snapshot of the invoice collection.
    pub async fn invoices(&self) -> Vec<Invoice> {
        self.invoices.read().await.clone()
    }

    /// Snapshot of the voucher collection.
    pub async fn vouchers(&self) -> Vec<Voucher> {
        self.vouchers.read().await.clone()
    }

    /// Replaces the customer collection.
    pub async fn set_customers(&self, customers: Vec<Customer>) {
        *self.customers.write().await = customers;
    }

    /// Replaces the invoice collection.
    pub async fn set_invoices(&self, invoices: Vec<Invoice>) {
        *self.invoices.write().await = invoices;
    }

    /// Replaces the voucher collection.
    pub async fn set_vouchers(&self, vouchers: Vec<Voucher>) {
        *self.vouchers.write().await = vouchers;
    }
}
