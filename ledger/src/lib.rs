//! Append-only agreement ledger.
//!
//! Agreements wait in a [`TransactionPool`] until a commit drains them into a
//! new block. Each block links to the hash of its predecessor and carries a
//! proof-of-work found from the predecessor's proof. There is exactly one
//! chain: no forks, no reorgs, no pruning.

pub mod error;
pub mod genesis;
pub mod ledger;
pub mod pool;
pub mod verify;

pub use error::LedgerError;
pub use genesis::{create_genesis_block, GENESIS_PROOF};
pub use ledger::{Ledger, LedgerConfig, LedgerSummary};
pub use pool::TransactionPool;
pub use verify::verify_chain;
