use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkError {
    #[error("no valid proof found within {attempts} attempts")]
    ProofNotFound { attempts: u64 },

    #[error("proof search cancelled")]
    Cancelled,

    #[error("difficulty {requested} exceeds the {max} hex digits of a SHA-256 digest")]
    DifficultyOutOfRange { requested: u8, max: u8 },
}
