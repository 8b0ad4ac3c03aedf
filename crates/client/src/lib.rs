//! HTTP client for the external ERP backend.
//!
//! Thin fetch layer: every method maps one backend endpoint to the
//! canonical core types, with wire normalization happening in the types'
//! own deserializers. No retries, by design; callers that want the
//! fail-soft display posture wrap calls in [`fetch_or_empty`].

use std::future::Future;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::warn;

use trezo_core::invoice::Invoice;
use trezo_core::party::Customer;
use trezo_core::selection::TransactionDraft;
use trezo_core::voucher::Voucher;
use trezo_shared::config::BackendConfig;
use trezo_shared::types::CustomerId;
use trezo_shared::{AppError, AppResult};

/// Client for the ERP REST backend.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Creates a client from backend configuration.
    pub fn new(config: &BackendConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|err| AppError::Internal(format!("http client: {err}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// `GET /customers`
    pub async fn customers(&self) -> AppResult<Vec<Customer>> {
        self.get_json("/customers", &[]).await
    }

    /// `GET /transactions?partyType=Customer&type=sale_order&status=APPROVED`
    pub async fn approved_sale_orders(&self) -> AppResult<Vec<Invoice>> {
        self.get_json(
            "/transactions",
            &[
                ("partyType", "Customer"),
                ("type", "sale_order"),
                ("status", "APPROVED"),
            ],
        )
        .await
    }

    /// `GET /vouchers?voucherType=receipt[&partyId=...]`
    ///
    /// Passing a party pre-scopes the result to one customer, which is what
    /// allows the selection flow to skip the party consistency filter.
    pub async fn receipt_vouchers(&self, party: Option<&CustomerId>) -> AppResult<Vec<Voucher>> {
        let mut query: Vec<(&str, &str)> = vec![("voucherType", "receipt")];
        if let Some(party) = party {
            query.push(("partyId", party.as_str()));
        }
        self.get_json("/vouchers", &query).await
    }

    /// `POST /transactions` with a draft built by the selection engine.
    pub async fn create_transaction(&self, draft: &TransactionDraft) -> AppResult<()> {
        let url = format!("{}/transactions", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(draft)
            .send()
            .await
            .map_err(|err| AppError::Backend(format!("POST /transactions: {err}")))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(AppError::Backend(format!(
                "POST /transactions: status {status}"
            )))
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> AppResult<T> {
        let url = format!("{}{path}", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|err| AppError::Backend(format!("GET {path}: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Backend(format!("GET {path}: status {status}")));
        }

        response
            .json()
            .await
            .map_err(|err| AppError::Decode(format!("GET {path}: {err}")))
    }
}

/// Fail-soft fetch: on error, log a warning and continue with an empty
/// collection so the display layer keeps working on partial data.
pub async fn fetch_or_empty<T, F>(collection: &str, fut: F) -> Vec<T>
where
    F: Future<Output = AppResult<Vec<T>>>,
{
    match fut.await {
        Ok(items) => items,
        Err(err) => {
            warn!(collection, error = %err, "fetch failed; continuing with empty collection");
            Vec::new()
        }
    }
}
