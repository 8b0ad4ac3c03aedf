//! Health check endpoints.

use axum::extract::State;
use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::AppState;
use crate::state::CollectionCounts;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
    /// Sizes of the cached backend collections.
    pub collections: CollectionCounts,
}

/// Health check handler.
///
/// Reports collection sizes alongside the status, so a store left empty by
/// a failed fetch is visible without digging through logs.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        collections: state.store.counts().await,
    })
}

/// Creates health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Store;
    use std::sync::Arc;
    use trezo_client::BackendClient;
    use trezo_shared::config::BackendConfig;

    fn test_state() -> AppState {
        AppState {
            store: Arc::new(Store::new()),
            client: Arc::new(
                BackendClient::new(&BackendConfig {
                    base_url: "http://localhost:0".to_string(),
                    timeout_secs: 1,
                })
                .unwrap(),
            ),
        }
    }

    #[tokio::test]
    async fn test_health_reports_collection_sizes() {
        let state = test_state();
        state
            .store
            .set_customers(
                serde_json::from_value(serde_json::json!([
                    {"_id": "C1", "customerName": "Acme Traders"}
                ]))
                .unwrap(),
            )
            .await;

        let Json(body) = health_check(State(state)).await;

        assert_eq!(body.status, "healthy");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(body.collections.customers, 1);
        assert_eq!(body.collections.invoices, 0);
        assert_eq!(body.collections.vouchers, 0);
    }
}
