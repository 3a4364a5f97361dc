//! Fundamental types for the pactchain agreement ledger.
//!
//! This crate defines the records shared by every other crate in the workspace:
//! agreements, sealed blocks, block hashes and timestamps.

pub mod agreement;
pub mod block;
pub mod error;
pub mod time;

pub use agreement::{Agreement, AgreementDraft, DATE_FORMAT};
pub use block::{Block, BlockHash, PreviousHash, GENESIS_PREVIOUS_HASH};
pub use error::AgreementError;
pub use time::Timestamp;
