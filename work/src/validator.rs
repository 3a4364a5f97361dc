//! Proof validation.

use std::fmt::Write;

use pactchain_crypto::sha256;

use crate::Difficulty;

/// SHA-256 of the decimal concatenation `"{last_proof}{candidate}"`.
pub fn proof_digest(last_proof: u64, candidate: u64) -> [u8; 32] {
    let mut guess = String::with_capacity(40);
    write_guess(&mut guess, last_proof, candidate);
    sha256(guess.as_bytes())
}

/// Whether `candidate` is a valid proof following `last_proof`.
///
/// Pure: identical inputs always give the same answer.
pub fn is_valid_proof(last_proof: u64, candidate: u64, difficulty: Difficulty) -> bool {
    difficulty.is_met_by(&proof_digest(last_proof, candidate))
}

pub(crate) fn write_guess(buf: &mut String, last_proof: u64, candidate: u64) {
    buf.clear();
    // Writing into a String cannot fail.
    let _ = write!(buf, "{last_proof}{candidate}");
}
