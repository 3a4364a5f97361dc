//! Genesis block creation.
//!
//! The genesis block is never mined. It carries a fixed proof and the
//! sentinel previous hash `"1"`, so every process starts from an equivalent
//! first block; only its timestamp differs between runs.

use pactchain_types::{Block, PreviousHash, Timestamp};

/// Proof stored in the genesis block.
pub const GENESIS_PROOF: u64 = 100;

/// Create the genesis block stamped with `timestamp`.
pub fn create_genesis_block(timestamp: Timestamp) -> Block {
    Block {
        index: 1,
        timestamp,
        agreements: Vec::new(),
        proof: GENESIS_PROOF,
        previous_hash: PreviousHash::Genesis,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genesis_shape() {
        let block = create_genesis_block(Timestamp::from_millis(0));
        assert_eq!(block.index, 1);
        assert_eq!(block.proof, 100);
        assert_eq!(block.previous_hash, PreviousHash::Genesis);
        assert_eq!(block.previous_hash.to_string(), "1");
        assert!(block.agreements.is_empty());
        assert!(block.is_genesis());
    }

    #[test]
    fn genesis_hash_is_deterministic_for_fixed_time() {
        let a = create_genesis_block(Timestamp::from_millis(42));
        let b = create_genesis_block(Timestamp::from_millis(42));
        assert_eq!(
            pactchain_crypto::hash_block(&a),
            pactchain_crypto::hash_block(&b)
        );
    }
}
