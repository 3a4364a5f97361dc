//! Proof-of-work for sealing blocks.
//!
//! A proof is a non-negative integer `p` such that SHA-256 of the decimal
//! string `"{last_proof}{p}"` renders in hex with a fixed run of leading
//! `'0'` characters. The search is strictly sequential from zero, so the proof
//! found for a given `last_proof` and difficulty is always the same.

pub mod difficulty;
pub mod error;
pub mod generator;
pub mod validator;

pub use difficulty::{Difficulty, DEFAULT_DIFFICULTY};
pub use error::WorkError;
pub use generator::{CancelToken, WorkGenerator};
pub use validator::{is_valid_proof, proof_digest};
