//! HTTP API layer serving derived receivable views.
//!
//! This crate provides:
//! - REST routes for the console UI (list, selection summary, refresh)
//! - The in-memory collection store fed by the backend client
//! - Error-to-response mapping

pub mod error;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use trezo_client::BackendClient;

pub use state::{CollectionCounts, Store};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// In-memory collections fetched from the ERP backend.
    pub store: Arc<Store>,
    /// Client for the ERP backend.
    pub client: Arc<BackendClient>,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
