//! Sealed blocks and the hashes that link them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Agreement, Timestamp};

/// The `previous_hash` carried by the genesis block.
pub const GENESIS_PREVIOUS_HASH: &str = "1";

/// A 32-byte SHA-256 block hash.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockHash([u8; 32]);

impl BlockHash {
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hex rendering, 64 characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl FromStr for BlockHash {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(Self(bytes))
    }
}

impl fmt::Debug for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockHash({}\u{2026})", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// What a block points back to.
///
/// On the wire this is a plain string: `"1"` for genesis, otherwise the
/// hex digest of the prior block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PreviousHash {
    Genesis,
    Block(BlockHash),
}

impl PreviousHash {
    pub fn is_genesis(&self) -> bool {
        matches!(self, Self::Genesis)
    }

    pub fn block_hash(&self) -> Option<&BlockHash> {
        match self {
            Self::Genesis => None,
            Self::Block(hash) => Some(hash),
        }
    }
}

impl From<BlockHash> for PreviousHash {
    fn from(hash: BlockHash) -> Self {
        Self::Block(hash)
    }
}

impl fmt::Display for PreviousHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Genesis => f.write_str(GENESIS_PREVIOUS_HASH),
            Self::Block(hash) => fmt::Display::fmt(hash, f),
        }
    }
}

impl From<PreviousHash> for String {
    fn from(previous: PreviousHash) -> Self {
        previous.to_string()
    }
}

impl TryFrom<String> for PreviousHash {
    type Error = hex::FromHexError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value == GENESIS_PREVIOUS_HASH {
            Ok(Self::Genesis)
        } else {
            value.parse().map(Self::Block)
        }
    }
}

/// A sealed block. Immutable once appended to the chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// 1-based position in the chain.
    pub index: u64,
    pub timestamp: Timestamp,
    /// Agreements in submission order.
    pub agreements: Vec<Agreement>,
    /// Winning proof-of-work nonce.
    pub proof: u64,
    pub previous_hash: PreviousHash,
}

impl Block {
    pub fn is_genesis(&self) -> bool {
        self.index == 1 && self.previous_hash.is_genesis()
    }
}
