//! Whole-chain verification.

use pactchain_crypto::hash_block;
use pactchain_types::Block;
use pactchain_work::{is_valid_proof, Difficulty};

use crate::{LedgerError, GENESIS_PROOF};

/// Check every structural invariant of `blocks`, stopping at the first
/// violation:
///
/// - the first block is genesis (`index 1`, proof [`GENESIS_PROOF`],
///   previous hash `"1"`);
/// - `blocks[i].index == i + 1`;
/// - each later block's `previous_hash` is the hash of the block before it;
/// - each later block's proof is valid against the previous proof.
pub fn verify_chain(blocks: &[Block], difficulty: Difficulty) -> Result<(), LedgerError> {
    let genesis = blocks.first().ok_or(LedgerError::EmptyChain)?;
    if genesis.index != 1 {
        return Err(LedgerError::IndexMismatch {
            position: 1,
            found: genesis.index,
        });
    }
    if !genesis.previous_hash.is_genesis() {
        return Err(LedgerError::InvalidGenesis {
            reason: format!("previous hash is {}", genesis.previous_hash),
        });
    }
    if genesis.proof != GENESIS_PROOF {
        return Err(LedgerError::InvalidGenesis {
            reason: format!("proof is {}, expected {GENESIS_PROOF}", genesis.proof),
        });
    }

    for (offset, pair) in blocks.windows(2).enumerate() {
        let (previous, block) = (&pair[0], &pair[1]);
        let position = offset as u64 + 2;

        if block.index != position {
            return Err(LedgerError::IndexMismatch {
                position,
                found: block.index,
            });
        }
        if block.previous_hash.block_hash() != Some(&hash_block(previous)) {
            return Err(LedgerError::BrokenLink { index: block.index });
        }
        if !is_valid_proof(previous.proof, block.proof, difficulty) {
            return Err(LedgerError::InvalidProof {
                index: block.index,
                proof: block.proof,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_genesis_block;
    use pactchain_types::{PreviousHash, Timestamp};
    use pactchain_work::WorkGenerator;

    fn easy() -> Difficulty {
        Difficulty::new(1).unwrap()
    }

    fn mined_chain(len: usize) -> Vec<Block> {
        let generator = WorkGenerator::new(easy());
        let mut blocks = vec![create_genesis_block(Timestamp::from_millis(0))];
        while blocks.len() < len {
            let last = blocks.last().unwrap();
            blocks.push(Block {
                index: last.index + 1,
                timestamp: Timestamp::from_millis(last.index),
                agreements: Vec::new(),
                proof: generator.find_proof(last.proof),
                previous_hash: PreviousHash::Block(hash_block(last)),
            });
        }
        blocks
    }

    #[test]
    fn well_formed_chain_passes() {
        assert_eq!(verify_chain(&mined_chain(5), easy()), Ok(()));
    }

    #[test]
    fn empty_chain_fails() {
        assert_eq!(verify_chain(&[], easy()), Err(LedgerError::EmptyChain));
    }

    #[test]
    fn tampered_block_breaks_next_link() {
        let mut blocks = mined_chain(4);
        blocks[1].timestamp = Timestamp::from_millis(999);
        assert_eq!(
            verify_chain(&blocks, easy()),
            Err(LedgerError::BrokenLink { index: 3 })
        );
    }

    #[test]
    fn bad_proof_detected() {
        let mut blocks = mined_chain(2);
        let bad = (0..)
            .find(|c| !is_valid_proof(GENESIS_PROOF, *c, easy()))
            .unwrap();
        blocks[1].proof = bad;
        assert_eq!(
            verify_chain(&blocks, easy()),
            Err(LedgerError::InvalidProof { index: 2, proof: bad })
        );
    }

    #[test]
    fn skipped_index_detected() {
        let mut blocks = mined_chain(3);
        blocks[2].index = 7;
        assert_eq!(
            verify_chain(&blocks, easy()),
            Err(LedgerError::IndexMismatch {
                position: 3,
                found: 7
            })
        );
    }

    #[test]
    fn wrong_genesis_proof_detected() {
        let mut blocks = mined_chain(1);
        blocks[0].proof = 1;
        assert!(matches!(
            verify_chain(&blocks, easy()),
            Err(LedgerError::InvalidGenesis { .. })
        ));
    }
}
