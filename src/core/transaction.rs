//! Transactions and their application to accounts
//!
//! A `Transaction` describes *what* to do (deposit or withdraw an amount);
//! `apply` performs it on a given account. Applying runs the matching account
//! primitive and, only when that succeeds, appends a record to the account's
//! history. A rejected transaction therefore leaves both the balance and the
//! history untouched.

use crate::core::account::Account;
use crate::types::{BankError, TransactionKind, TransactionRecord};
use chrono::{Local, NaiveDateTime};
use log::debug;
use rust_decimal::Decimal;

/// An operation on a single account
///
/// Transactions are immutable values with no identity beyond kind and amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transaction {
    /// Credit `amount` to the account
    Deposit { amount: Decimal },

    /// Debit `amount` from the account, subject to its withdrawal policy
    Withdrawal { amount: Decimal },
}

impl Transaction {
    pub fn deposit(amount: Decimal) -> Self {
        Transaction::Deposit { amount }
    }

    pub fn withdrawal(amount: Decimal) -> Self {
        Transaction::Withdrawal { amount }
    }

    pub fn kind(&self) -> TransactionKind {
        match self {
            Transaction::Deposit { .. } => TransactionKind::Deposit,
            Transaction::Withdrawal { .. } => TransactionKind::Withdrawal,
        }
    }

    pub fn amount(&self) -> Decimal {
        match *self {
            Transaction::Deposit { amount } | Transaction::Withdrawal { amount } => amount,
        }
    }

    /// Apply the transaction to `account`, stamping the record with the
    /// current local time
    pub fn apply(&self, account: &mut Account) -> Result<(), BankError> {
        self.apply_at(account, Local::now().naive_local())
    }

    /// Apply the transaction to `account` with an explicit timestamp
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The primitive succeeded and the record was appended
    /// * `Err(BankError)` - The primitive rejected the transaction; nothing
    ///   was recorded
    pub fn apply_at(
        &self,
        account: &mut Account,
        timestamp: NaiveDateTime,
    ) -> Result<(), BankError> {
        match *self {
            Transaction::Deposit { amount } => account.deposit(amount)?,
            Transaction::Withdrawal { amount } => account.withdraw(amount)?,
        }

        account
            .history_mut()
            .append(TransactionRecord::new(self.kind(), self.amount(), timestamp));

        debug!(
            "{} of {} applied to account {}/{}",
            self.kind(),
            self.amount(),
            account.branch(),
            account.number()
        );

        Ok(())
    }
}
