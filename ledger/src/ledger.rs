//! The chain of sealed blocks and the commit path that extends it.

use std::sync::{Mutex, RwLock};
use std::time::Instant;

use pactchain_crypto::hash_block;
use pactchain_types::{Agreement, Block, BlockHash, PreviousHash, Timestamp};
use pactchain_work::{is_valid_proof, CancelToken, Difficulty, WorkGenerator};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::genesis::create_genesis_block;
use crate::pool::TransactionPool;
use crate::verify::verify_chain;
use crate::LedgerError;

/// Tunables fixed at ledger construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Leading zero hex digits every proof must produce.
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Ceiling on candidates tried per commit. `None` searches until found.
    #[serde(default)]
    pub max_proof_attempts: Option<u64>,
}

/// Summary statistics for the ledger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LedgerSummary {
    pub blocks: u64,
    pub pending: u64,
    pub difficulty: u8,
    pub latest_hash: String,
}

/// A single append-only chain plus its pool of unsealed agreements.
///
/// Constructed once by the process entry point and shared behind an `Arc`.
/// Submissions may run concurrently with each other; commits are serialized
/// by `commit_lock`, so at most one proof search runs per ledger. An
/// agreement passed to [`submit_and_commit`](Self::submit_and_commit) stays
/// out of the pool until its proof is found.
pub struct Ledger {
    chain: RwLock<Vec<Block>>,
    pool: TransactionPool,
    commit_lock: Mutex<()>,
    work: WorkGenerator,
}

impl Ledger {
    /// Create a ledger holding only the genesis block.
    pub fn new(config: LedgerConfig) -> Self {
        let genesis = create_genesis_block(Timestamp::now());
        info!(
            difficulty = config.difficulty.leading_zeros(),
            expected_attempts = config.difficulty.expected_attempts(),
            genesis_hash = %hash_block(&genesis),
            "ledger initialised"
        );
        Self {
            chain: RwLock::new(vec![genesis]),
            pool: TransactionPool::new(),
            commit_lock: Mutex::new(()),
            work: WorkGenerator::new(config.difficulty)
                .with_max_attempts(config.max_proof_attempts),
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.work.difficulty()
    }

    // ── Pool ────────────────────────────────────────────────────────────

    /// Queue an agreement for the next block.
    ///
    /// Returns the index of the block the agreement is expected to land in
    /// (current chain length + 1).
    pub fn submit(&self, agreement: Agreement) -> Result<u64, LedgerError> {
        self.pool.submit(agreement)?;
        Ok(self.len() as u64 + 1)
    }

    pub fn pool(&self) -> &TransactionPool {
        &self.pool
    }

    /// Copy of the agreements not yet sealed.
    pub fn pending(&self) -> Vec<Agreement> {
        self.pool.snapshot()
    }

    // ── Chain ───────────────────────────────────────────────────────────

    /// Append a block holding the whole pool, with the given proof and link.
    ///
    /// Performs no validation: the caller establishes the proof first (see
    /// [`commit`](Self::commit)). The pool is drained while the chain write
    /// lock is held, so readers never see the agreements in both places.
    pub fn seal_block(&self, proof: u64, previous_hash: PreviousHash) -> Block {
        self.append(proof, previous_hash, None)
    }

    /// Seal the pool, followed by `incoming` if given, into the next block.
    fn append(
        &self,
        proof: u64,
        previous_hash: PreviousHash,
        incoming: Option<Agreement>,
    ) -> Block {
        let mut chain = self.chain.write().expect("chain lock poisoned");
        let mut agreements = self.pool.drain();
        agreements.extend(incoming);
        let block = Block {
            index: chain.len() as u64 + 1,
            timestamp: Timestamp::now(),
            agreements,
            proof,
            previous_hash,
        };
        chain.push(block.clone());
        info!(
            index = block.index,
            proof = block.proof,
            agreements = block.agreements.len(),
            "block sealed"
        );
        block
    }

    /// The most recently sealed block.
    pub fn latest_block(&self) -> Result<Block, LedgerError> {
        self.chain
            .read()
            .expect("chain lock poisoned")
            .last()
            .cloned()
            .ok_or(LedgerError::EmptyChain)
    }

    /// Content hash of `block` over its canonical encoding.
    pub fn hash_of(block: &Block) -> BlockHash {
        hash_block(block)
    }

    /// Blocking sequential search for the first proof following `last_proof`.
    pub fn find_proof(&self, last_proof: u64) -> u64 {
        self.work.find_proof(last_proof)
    }

    /// Whether `candidate` is a valid proof following `last_proof` at this
    /// ledger's difficulty.
    pub fn is_valid_proof(&self, last_proof: u64, candidate: u64) -> bool {
        is_valid_proof(last_proof, candidate, self.work.difficulty())
    }

    /// Mine and seal the next block from whatever is in the pool.
    pub fn commit(&self) -> Result<Block, LedgerError> {
        self.commit_with(&CancelToken::new())
    }

    /// [`commit`](Self::commit) with a cancellation token.
    ///
    /// On cancellation or when the attempt ceiling is hit nothing is sealed
    /// and the pool keeps its agreements.
    pub fn commit_with(&self, cancel: &CancelToken) -> Result<Block, LedgerError> {
        self.mine(cancel, None)
    }

    /// Submit one agreement and immediately seal it into its own block.
    ///
    /// Validation, proof search and sealing form one unit under the commit
    /// lock: the returned block always holds `agreement`, and concurrent
    /// callers each get a block of their own. The agreement only enters the
    /// chain once a proof is found; if the search fails it is dropped and
    /// the pool is left as it was. Anything queued earlier through
    /// [`submit`](Self::submit) is sealed ahead of it.
    pub fn submit_and_commit(&self, agreement: Agreement) -> Result<Block, LedgerError> {
        agreement.validate()?;
        self.mine(&CancelToken::new(), Some(agreement))
    }

    fn mine(&self, cancel: &CancelToken, incoming: Option<Agreement>) -> Result<Block, LedgerError> {
        let _guard = self.commit_lock.lock().expect("commit lock poisoned");

        let last = self.latest_block()?;
        let started = Instant::now();
        let proof = self.work.search(last.proof, cancel)?;
        debug!(
            last_proof = last.proof,
            proof,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "proof found"
        );

        let previous_hash = PreviousHash::Block(Self::hash_of(&last));
        Ok(self.append(proof, previous_hash, incoming))
    }

    /// Copy of every sealed block, oldest first.
    pub fn chain(&self) -> Vec<Block> {
        self.chain.read().expect("chain lock poisoned").clone()
    }

    pub fn len(&self) -> usize {
        self.chain.read().expect("chain lock poisoned").len()
    }

    /// Always false once constructed; genesis is never removed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Re-check linkage, indexing and proofs across the whole chain.
    pub fn verify_chain(&self) -> Result<(), LedgerError> {
        let chain = self.chain.read().expect("chain lock poisoned");
        verify_chain(&chain, self.work.difficulty())
    }

    pub fn summary(&self) -> Result<LedgerSummary, LedgerError> {
        let chain = self.chain.read().expect("chain lock poisoned");
        let latest = chain.last().ok_or(LedgerError::EmptyChain)?;
        Ok(LedgerSummary {
            blocks: chain.len() as u64,
            pending: self.pool.len() as u64,
            difficulty: self.work.difficulty().leading_zeros(),
            latest_hash: Self::hash_of(latest).to_hex(),
        })
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new(LedgerConfig::default())
    }
}
