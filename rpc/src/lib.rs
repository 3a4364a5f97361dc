//! HTTP server for the pactchain ledger.
//!
//! Provides endpoints for:
//! - Agreement submission (form post, auto-mined into its own block)
//! - The full chain as JSON
//! - An HTML page listing every block
//! - Ledger status and Prometheus metrics

pub mod error;
pub mod handlers;
pub mod metrics;
pub mod page;
pub mod server;

pub use error::RpcError;
pub use metrics::RpcMetrics;
pub use server::{router, AppState, RpcServer};
