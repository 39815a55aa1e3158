//! Transaction-related types for the banking core
//!
//! This module defines the identifiers, the closed set of transaction kinds and
//! the record that an account's history keeps for every completed transaction.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Account number, unique within the branch
///
/// Numbers are assigned sequentially starting at 1.
pub type AccountNumber = u32;

/// Client identifier (CPF, digits only)
pub type Cpf = String;

/// Kinds of transaction an account can record
///
/// Histories compare kinds by value, so counting withdrawals never depends on
/// how a transaction type happens to be named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Credit funds to an account
    Deposit,

    /// Debit funds from an account
    Withdrawal,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Deposit => f.write_str("Deposit"),
            TransactionKind::Withdrawal => f.write_str("Withdrawal"),
        }
    }
}

/// A completed transaction as kept in an account's history
///
/// Records only exist for transactions whose account primitive succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    /// Deposit or withdrawal
    pub kind: TransactionKind,

    /// Amount moved by the transaction
    pub amount: Decimal,

    /// Local time at which the transaction was applied
    pub timestamp: NaiveDateTime,
}

impl TransactionRecord {
    pub fn new(kind: TransactionKind, amount: Decimal, timestamp: NaiveDateTime) -> Self {
        TransactionRecord {
            kind,
            amount,
            timestamp,
        }
    }
}
