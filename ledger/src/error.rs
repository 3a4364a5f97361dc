use pactchain_types::AgreementError;
use pactchain_work::WorkError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("invalid agreement: {0}")]
    InvalidAgreement(#[from] AgreementError),

    #[error("chain is empty")]
    EmptyChain,

    #[error("proof-of-work failed: {0}")]
    Work(#[from] WorkError),

    #[error("invalid genesis block: {reason}")]
    InvalidGenesis { reason: String },

    #[error("block at position {position} has index {found}")]
    IndexMismatch { position: u64, found: u64 },

    #[error("block {index} does not link to the hash of its predecessor")]
    BrokenLink { index: u64 },

    #[error("block {index} carries an invalid proof {proof}")]
    InvalidProof { index: u64, proof: u64 },
}
