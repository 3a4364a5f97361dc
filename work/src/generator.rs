//! Proof search (single-threaded, sequential).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use pactchain_crypto::sha256;

use crate::validator::write_guess;
use crate::{Difficulty, WorkError};

/// Candidates tried between cancellation checks.
const BATCH_SIZE: u64 = 4096;

/// Cooperative cancellation flag for [`WorkGenerator::search`].
///
/// Clones share the same flag.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Finds proofs by trying `0, 1, 2, …` in order.
///
/// The search is never split across threads: the first valid candidate in
/// increasing order is always the one returned.
#[derive(Clone, Copy, Debug, Default)]
pub struct WorkGenerator {
    difficulty: Difficulty,
    max_attempts: Option<u64>,
}

impl WorkGenerator {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            max_attempts: None,
        }
    }

    /// Give up after `max_attempts` candidates instead of searching forever.
    pub fn with_max_attempts(mut self, max_attempts: Option<u64>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn max_attempts(&self) -> Option<u64> {
        self.max_attempts
    }

    /// Return the smallest valid proof following `last_proof`.
    ///
    /// Blocks until a proof is found and ignores `max_attempts`. Valid proofs
    /// occur with density `16^-difficulty`, so the loop terminates.
    pub fn find_proof(&self, last_proof: u64) -> u64 {
        let mut guess = String::with_capacity(40);
        let mut candidate = 0u64;
        loop {
            if self.check(&mut guess, last_proof, candidate) {
                return candidate;
            }
            candidate += 1;
        }
    }

    /// Like [`find_proof`](Self::find_proof), but stops early when `cancel`
    /// fires or the `max_attempts` ceiling is reached.
    pub fn search(&self, last_proof: u64, cancel: &CancelToken) -> Result<u64, WorkError> {
        let limit = self.max_attempts.unwrap_or(u64::MAX);
        let mut guess = String::with_capacity(40);
        let mut candidate = 0u64;

        while candidate < limit {
            if candidate % BATCH_SIZE == 0 && cancel.is_cancelled() {
                return Err(WorkError::Cancelled);
            }
            if self.check(&mut guess, last_proof, candidate) {
                return Ok(candidate);
            }
            candidate += 1;
        }

        Err(WorkError::ProofNotFound { attempts: limit })
    }

    fn check(&self, guess: &mut String, last_proof: u64, candidate: u64) -> bool {
        write_guess(guess, last_proof, candidate);
        self.difficulty.is_met_by(&sha256(guess.as_bytes()))
    }
}
