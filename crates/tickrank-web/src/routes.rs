use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use tickrank_core::{normalize_symbols, rank, BatchFetcher, SortSpec, ValuationRecord};

use crate::error::ApiError;

/// Shared handler state: one batch fetcher reused by every request.
/// The fetcher builds a fresh permit pool per call, so requests do
/// not contend on a shared gate.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<BatchFetcher>,
}

/// Rank request body.
#[derive(Debug, Deserialize)]
pub struct RankRequest {
    pub symbols: Vec<String>,
    #[serde(default)]
    pub sort: SortSpec,
}

/// Rank response envelope.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankResponse {
    pub input_count: usize,
    pub sort: SortSpec,
    pub data: Vec<ValuationRecord>,
}

/// Build the service router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/rank", post(rank_companies))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn healthz() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Rank a symbol batch by the requested valuation key.
///
/// Validation failures answer 400 before any upstream call starts;
/// a per-symbol fetch failure only marks its own row.
async fn rank_companies(
    State(state): State<AppState>,
    Json(payload): Json<RankRequest>,
) -> Result<Json<RankResponse>, ApiError> {
    let symbols = normalize_symbols(&payload.symbols)?;
    let input_count = symbols.len();

    let started = Instant::now();
    let records = state.fetcher.run(&symbols).await;
    let failed = records.iter().filter(|row| row.is_failed()).count();
    tracing::info!(
        symbols = input_count,
        failed,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "rank batch complete"
    );

    let data = rank(records, &payload.sort);

    Ok(Json(RankResponse {
        input_count,
        sort: payload.sort,
        data,
    }))
}
