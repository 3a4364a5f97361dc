//! Hashing primitives for the pactchain ledger.
//!
//! Everything the ledger hashes goes through SHA-256. Blocks are first encoded
//! with a canonical, key-sorted JSON serialization so that the digest depends
//! only on block content.

pub mod canonical;
pub mod hash;

pub use canonical::canonical_bytes;
pub use hash::{hash_block, sha256, sha256_hex};
