//! RPC error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use pactchain_ledger::LedgerError;
use pactchain_types::AgreementError;
use pactchain_work::WorkError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RpcError {
    #[error("invalid agreement: {0}")]
    InvalidAgreement(#[from] AgreementError),

    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("server error: {0}")]
    Server(String),
}

impl RpcError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidAgreement(_) | Self::Ledger(LedgerError::InvalidAgreement(_)) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::Ledger(LedgerError::Work(WorkError::ProofNotFound { .. }))
            | Self::Ledger(LedgerError::Work(WorkError::Cancelled)) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            Self::Ledger(_) | Self::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RpcError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}
