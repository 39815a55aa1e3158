//! Per-account transaction history
//!
//! This module provides the History component that keeps the ordered log of
//! an account's completed transactions. The log is append-only: records are
//! never removed or rewritten, so its length always equals the number of
//! transactions that succeeded on the account.
//!
//! Checking accounts derive their withdrawal count from this log on every
//! attempt; no separate counter is kept.

use crate::types::{TransactionKind, TransactionRecord};
use rust_decimal::Decimal;
use std::slice::Iter;

/// Append-only log of completed transactions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    /// Records in the order they were applied
    records: Vec<TransactionRecord>,
}

/// Totals over a history, per transaction kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistorySummary {
    pub deposits: usize,
    pub withdrawals: usize,
    pub total_deposited: Decimal,
    pub total_withdrawn: Decimal,
}

impl HistorySummary {
    /// Net effect of the history on the balance
    pub fn net(&self) -> Decimal {
        self.total_deposited - self.total_withdrawn
    }
}

impl History {
    /// Create a new empty history
    pub fn new() -> Self {
        History {
            records: Vec::new(),
        }
    }

    /// Append a completed transaction
    ///
    /// Only transaction application may call this, and only after the
    /// account primitive reported success.
    pub(crate) fn append(&mut self, record: TransactionRecord) {
        self.records.push(record);
    }

    /// Number of recorded withdrawals
    ///
    /// Recomputed from the live log on every call.
    pub fn withdrawal_count(&self) -> usize {
        self.count_of(TransactionKind::Withdrawal)
    }

    /// Number of recorded transactions of the given kind
    pub fn count_of(&self, kind: TransactionKind) -> usize {
        self.records
            .iter()
            .filter(|record| record.kind == kind)
            .count()
    }

    /// All records in insertion order
    pub fn all(&self) -> &[TransactionRecord] {
        &self.records
    }

    pub fn iter(&self) -> Iter<'_, TransactionRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Counts and totals per kind
    pub fn summary(&self) -> HistorySummary {
        self.records
            .iter()
            .fold(HistorySummary::default(), |mut summary, record| {
                match record.kind {
                    TransactionKind::Deposit => {
                        summary.deposits += 1;
                        summary.total_deposited += record.amount;
                    }
                    TransactionKind::Withdrawal => {
                        summary.withdrawals += 1;
                        summary.total_withdrawn += record.amount;
                    }
                }
                summary
            })
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a TransactionRecord;
    type IntoIter = Iter<'a, TransactionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
