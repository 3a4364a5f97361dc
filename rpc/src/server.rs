//! Axum-based HTTP server.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use pactchain_ledger::Ledger;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::RpcError;
use crate::handlers;
use crate::metrics::RpcMetrics;

/// Shared state handed to every handler.
pub struct AppState {
    pub ledger: Arc<Ledger>,
    pub metrics: RpcMetrics,
}

impl AppState {
    pub fn new(ledger: Arc<Ledger>) -> Result<Self, RpcError> {
        let metrics = RpcMetrics::new().map_err(|e| RpcError::Server(e.to_string()))?;
        metrics.chain_length.set(ledger.len() as i64);
        Ok(Self { ledger, metrics })
    }
}

/// Build the router with all routes mounted.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/add_agreement", post(handlers::add_agreement))
        .route("/chain", get(handlers::full_chain))
        .route("/status", get(handlers::status))
        .route("/metrics", get(handlers::metrics))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub struct RpcServer {
    pub addr: SocketAddr,
    pub state: Arc<AppState>,
}

impl RpcServer {
    pub fn new(addr: SocketAddr, ledger: Arc<Ledger>) -> Result<Self, RpcError> {
        Ok(Self {
            addr,
            state: Arc::new(AppState::new(ledger)?),
        })
    }

    /// Serve until `shutdown` resolves.
    pub async fn start<F>(&self, shutdown: F) -> Result<(), RpcError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = router(Arc::clone(&self.state));
        let listener = tokio::net::TcpListener::bind(self.addr)
            .await
            .map_err(|e| RpcError::Server(format!("bind {}: {e}", self.addr)))?;
        let local = listener
            .local_addr()
            .map_err(|e| RpcError::Server(e.to_string()))?;
        info!("HTTP server listening on {}", local);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| RpcError::Server(e.to_string()))?;

        info!("HTTP server stopped");
        Ok(())
    }
}
