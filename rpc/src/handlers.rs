//! HTTP request handlers.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::response::Html;
use axum::{Form, Json};
use pactchain_ledger::LedgerSummary;
use pactchain_types::{AgreementDraft, Block};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::RpcError;
use crate::page::render_page;
use crate::server::AppState;

// ── Chain ────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub struct ChainResponse {
    pub chain: Vec<Block>,
    pub length: usize,
}

/// `GET /chain`
pub async fn full_chain(State(state): State<Arc<AppState>>) -> Json<ChainResponse> {
    let chain = state.ledger.chain();
    let length = chain.len();
    Json(ChainResponse { chain, length })
}

/// `GET /status`
pub async fn status(State(state): State<Arc<AppState>>) -> Result<Json<LedgerSummary>, RpcError> {
    Ok(Json(state.ledger.summary()?))
}

// ── Page ─────────────────────────────────────────────────────────────────

/// `GET /`
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(render_page(&state.ledger.chain()))
}

/// `POST /add_agreement`
///
/// Every accepted submission is mined straight into its own block. The
/// proof search runs on the blocking pool so it never stalls the runtime.
pub async fn add_agreement(
    State(state): State<Arc<AppState>>,
    Form(draft): Form<AgreementDraft>,
) -> Result<Html<String>, RpcError> {
    let agreement = draft.into_agreement().inspect_err(|e| {
        state.metrics.agreements_rejected.inc();
        warn!(error = %e, "agreement rejected");
    })?;

    let ledger = Arc::clone(&state.ledger);
    let started = Instant::now();
    let block = tokio::task::spawn_blocking(move || ledger.submit_and_commit(agreement))
        .await
        .map_err(|e| RpcError::Server(format!("commit task failed: {e}")))?
        .inspect_err(|e| {
            state.metrics.commits_failed.inc();
            warn!(error = %e, "agreement dropped, no block sealed");
        })?;

    state
        .metrics
        .commit_time_ms
        .observe(started.elapsed().as_secs_f64() * 1000.0);
    state.metrics.agreements_submitted.inc();
    state.metrics.blocks_sealed.inc();
    state.metrics.chain_length.set(state.ledger.len() as i64);
    info!(index = block.index, proof = block.proof, "agreement sealed");

    Ok(Html(render_page(&state.ledger.chain())))
}

// ── Metrics ──────────────────────────────────────────────────────────────

/// `GET /metrics`
pub async fn metrics(State(state): State<Arc<AppState>>) -> Result<String, RpcError> {
    state
        .metrics
        .chain_length
        .set(state.ledger.len() as i64);
    state
        .metrics
        .encode()
        .map_err(|e| RpcError::Server(e.to_string()))
}
