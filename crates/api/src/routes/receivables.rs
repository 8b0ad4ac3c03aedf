//! Receivables routes: derived table rows, selection summaries, refresh.

use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{Value, json};

use trezo_core::invoice::Invoice;
use trezo_core::receivables::{SortDirection, SortKey, SortState, TableQuery, derive_rows, project};
use trezo_core::selection::{aggregate_selection, build_draft};
use trezo_core::voucher::Voucher;
use trezo_shared::AppError;
use trezo_shared::types::{CustomerId, InvoiceId};

use crate::AppState;
use crate::error::ApiError;

/// Creates the receivables routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/receivables", get(list_receivables))
        .route("/receivables/summary", get(selection_summary))
        .route("/refresh", post(refresh))
}

/// Query parameters for the receivables table.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceivablesParams {
    /// Case-insensitive substring match on the transaction number.
    pub search: Option<String>,
    /// Restrict to one customer.
    pub customer_id: Option<String>,
    /// Column to sort on.
    pub sort_key: Option<SortKey>,
    /// Sort direction (defaults to ascending).
    #[serde(default)]
    pub sort_direction: SortDirection,
}

/// GET `/receivables` - derived, filtered, sorted receivable rows.
async fn list_receivables(
    State(state): State<AppState>,
    Query(params): Query<ReceivablesParams>,
) -> Json<Value> {
    let customers = state.store.customers().await;
    let invoices = state.store.invoices().await;
    let vouchers = state.store.vouchers().await;

    let rows = derive_rows(&invoices, &vouchers, &customers);
    let query = TableQuery {
        search: params.search,
        customer: params.customer_id.map(CustomerId::from),
        sort: params.sort_key.map(|key| SortState {
            key,
            direction: params.sort_direction,
        }),
    };

    Json(json!({ "receivables": project(&rows, &query) }))
}

/// Query parameters for a selection summary.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryParams {
    /// Comma-separated invoice ids the user selected.
    pub ids: String,
    /// Customer to scope the voucher set to. When omitted, the selected
    /// invoices' own customer is used, so the selection flow always
    /// operates on a pre-scoped voucher set.
    pub party_id: Option<String>,
    /// Transaction number the entry form assigned (if any yet).
    pub transaction_no: Option<String>,
}

/// GET `/receivables/summary` - aggregate a selection for form auto-fill.
async fn selection_summary(
    State(state): State<AppState>,
    Query(params): Query<SummaryParams>,
) -> Result<Json<Value>, ApiError> {
    let ids: Vec<InvoiceId> = params
        .ids
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(InvoiceId::from)
        .collect();

    if ids.is_empty() {
        return Err(AppError::Validation("ids must contain at least one invoice id".into()).into());
    }

    let invoices = state.store.invoices().await;
    let selected: Vec<Invoice> = ids
        .iter()
        .filter_map(|id| invoices.iter().find(|invoice| &invoice.id == id).cloned())
        .collect();

    let Some(first) = selected.first() else {
        return Err(AppError::NotFound("none of the selected invoices exist".into()).into());
    };

    // All invoices in a selection belong to one customer; a voucher from
    // any other customer must never count toward the paid amount, even
    // when it links one of the selected invoices.
    let party = params
        .party_id
        .map_or_else(|| first.party_id.clone(), CustomerId::from);
    let vouchers: Vec<Voucher> = state
        .store
        .vouchers()
        .await
        .into_iter()
        .filter(|voucher| voucher.party_id == party)
        .collect();

    let today = chrono::Utc::now().date_naive();
    let summary = aggregate_selection(&selected, &vouchers, today)
        .map_err(|err| AppError::Validation(err.to_string()))?;
    let draft = build_draft(
        &selected,
        &vouchers,
        params.transaction_no.unwrap_or_default(),
        summary.date,
    )
    .map_err(|err| AppError::Validation(err.to_string()))?;

    Ok(Json(json!({ "summary": summary, "draft": draft })))
}

/// POST `/refresh` - re-fetch all collections from the ERP backend.
async fn refresh(State(state): State<AppState>) -> Json<Value> {
    let outcome = state.store.refresh(&state.client).await;
    Json(json!({ "refreshed": outcome }))
}
