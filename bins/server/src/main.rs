//! Trezo reconciliation server
//!
//! Main entry point for the receivables reconciliation service.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trezo_api::{AppState, Store, create_router};
use trezo_client::BackendClient;
use trezo_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trezo=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;

    // Create the backend client
    let client = BackendClient::new(&config.backend)?;
    info!(base_url = %config.backend.base_url, "Backend client configured");

    // Create application state and warm the store. Failed fetches degrade
    // to empty collections; the service still starts.
    let state = AppState {
        store: Arc::new(Store::new()),
        client: Arc::new(client),
    };
    let outcome = state.store.refresh(&state.client).await;
    info!(
        customers = outcome.customers,
        invoices = outcome.invoices,
        vouchers = outcome.vouchers,
        "Initial collections loaded"
    );

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
