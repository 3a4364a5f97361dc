//! Pool of agreements waiting to be sealed.

use std::sync::Mutex;

use pactchain_types::Agreement;
use tracing::debug;

use crate::LedgerError;

/// Agreements in arrival order, not yet part of any block.
///
/// Safe to share between threads: every access goes through one mutex, so
/// concurrent submissions never interleave with a drain.
#[derive(Debug, Default)]
pub struct TransactionPool {
    pending: Mutex<Vec<Agreement>>,
}

impl TransactionPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a validated agreement.
    ///
    /// Returns the agreement's zero-based slot among the pending agreements,
    /// which is also its position in the next sealed block. A rejected
    /// agreement leaves the pool untouched.
    pub fn submit(&self, agreement: Agreement) -> Result<usize, LedgerError> {
        agreement.validate()?;
        let mut pending = self.pending.lock().expect("transaction pool lock poisoned");
        let slot = pending.len();
        debug!(
            slot,
            title = %agreement.agreement_title,
            "agreement added to pool"
        );
        pending.push(agreement);
        Ok(slot)
    }

    /// Take every pending agreement, leaving the pool empty.
    pub fn drain(&self) -> Vec<Agreement> {
        let mut pending = self.pending.lock().expect("transaction pool lock poisoned");
        std::mem::take(&mut *pending)
    }

    /// Copy of the pending agreements, in arrival order.
    pub fn snapshot(&self) -> Vec<Agreement> {
        self.pending
            .lock()
            .expect("transaction pool lock poisoned")
            .clone()
    }

    pub fn len(&self) -> usize {
        self.pending.lock().expect("transaction pool lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pactchain_types::AgreementError;
    use std::sync::Arc;
    use std::thread;

    fn agreement(title: &str) -> Agreement {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        Agreement::new("Alice", "Bob", title, "Confidential", date).unwrap()
    }

    #[test]
    fn submit_returns_arrival_slot() {
        let pool = TransactionPool::new();
        assert_eq!(pool.submit(agreement("first")).unwrap(), 0);
        assert_eq!(pool.submit(agreement("second")).unwrap(), 1);
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn drain_empties_and_preserves_order() {
        let pool = TransactionPool::new();
        pool.submit(agreement("a")).unwrap();
        pool.submit(agreement("b")).unwrap();
        pool.submit(agreement("c")).unwrap();

        let drained = pool.drain();
        let titles: Vec<_> = drained.iter().map(|a| a.agreement_title.as_str()).collect();
        assert_eq!(titles, ["a", "b", "c"]);
        assert!(pool.is_empty());
        assert!(pool.drain().is_empty());
    }

    #[test]
    fn rejects_empty_field_without_mutation() {
        let pool = TransactionPool::new();
        pool.submit(agreement("kept")).unwrap();

        let mut bad = agreement("bad");
        bad.party_a.clear();
        assert_eq!(
            pool.submit(bad),
            Err(LedgerError::InvalidAgreement(AgreementError::EmptyField(
                "party_a"
            )))
        );
        assert_eq!(pool.snapshot(), vec![agreement("kept")]);
    }

    #[test]
    fn concurrent_submissions_are_all_kept() {
        let pool = Arc::new(TransactionPool::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let pool = Arc::clone(&pool);
                thread::spawn(move || {
                    for i in 0..50 {
                        pool.submit(agreement(&format!("{t}-{i}"))).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let drained = pool.drain();
        assert_eq!(drained.len(), 400);
        // Per-thread order survives interleaving.
        for t in 0..8 {
            let prefix = format!("{t}-");
            let seq: Vec<usize> = drained
                .iter()
                .filter_map(|a| a.agreement_title.strip_prefix(&prefix))
                .map(|n| n.parse().unwrap())
                .collect();
            assert_eq!(seq, (0..50).collect::<Vec<_>>());
        }
    }
}
