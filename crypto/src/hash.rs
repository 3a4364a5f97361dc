//! SHA-256 hashing for blocks and proofs.

use pactchain_types::{Block, BlockHash};
use sha2::{Digest, Sha256};

use crate::canonical_bytes;

/// Compute a 256-bit SHA-256 hash of arbitrary data.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// SHA-256 of `data` as a lowercase hex string.
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(sha256(data))
}

/// Hash a block over its canonical encoding.
pub fn hash_block(block: &Block) -> BlockHash {
    // Blocks contain only strings, integers, dates and sequences of those;
    // encoding them to JSON has no failure path.
    let bytes = canonical_bytes(block).expect("Block is always serializable to JSON");
    BlockHash::new(sha256(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pactchain_types::{Agreement, PreviousHash, Timestamp};

    fn sample_block() -> Block {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        Block {
            index: 2,
            timestamp: Timestamp::from_millis(1_700_000_000_000),
            agreements: vec![Agreement::new("Alice", "Bob", "NDA", "Confidential", date).unwrap()],
            proof: 35293,
            previous_hash: PreviousHash::Block(BlockHash::new([7; 32])),
        }
    }

    #[test]
    fn sha256_known_vectors() {
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            sha256_hex(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn block_hash_is_deterministic() {
        let block = sample_block();
        assert_eq!(hash_block(&block), hash_block(&block.clone()));
        assert_eq!(hash_block(&block).to_hex(), hash_block(&block).to_hex());
    }

    #[test]
    fn block_hash_covers_every_field() {
        let base = hash_block(&sample_block());

        let mut changed = sample_block();
        changed.proof += 1;
        assert_ne!(hash_block(&changed), base);

        let mut changed = sample_block();
        changed.timestamp = Timestamp::from_millis(1);
        assert_ne!(hash_block(&changed), base);

        let mut changed = sample_block();
        changed.agreements[0].terms.push('!');
        assert_ne!(hash_block(&changed), base);

        let mut changed = sample_block();
        changed.previous_hash = PreviousHash::Genesis;
        assert_ne!(hash_block(&changed), base);
    }

    #[test]
    fn block_hash_matches_canonical_encoding() {
        let block = sample_block();
        let bytes = canonical_bytes(&block).unwrap();
        let text = String::from_utf8(bytes.clone()).unwrap();
        assert!(text.starts_with(r#"{"agreements":[{"agreement_title":"NDA""#));
        assert!(text.ends_with(r#""proof":35293,"timestamp":1700000000000}"#));
        assert_eq!(hash_block(&block), BlockHash::new(sha256(&bytes)));
    }
}
