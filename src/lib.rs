//! Banking Core Library
//! # Overview
//!
//! An in-memory single-branch banking model: clients own checking accounts,
//! and deposits and withdrawals are applied through transactions that record
//! themselves in the account's history only when they succeed.
//!
//! # Architecture
//!
//! - [`types`] - Identifiers, withdrawal policies, history records and errors
//! - [`core`] - Business logic components:
//!   - [`core::account`] - Balance primitives and withdrawal policy checks
//!   - [`core::transaction`] - Apply-then-record transactions
//!   - [`core::history`] - Append-only transaction log
//!   - [`core::client`] - Account ownership
//!   - [`core::bank`] - Client and account registry
//! - [`io`] - CSV script reading and account summary output
//! - [`cli`] - CLI arguments parsing
//! - [`replay`] - Script replay driver
//!
//! # Withdrawal Rules
//!
//! Every account rejects non-positive amounts and amounts above its balance.
//! Checking accounts first apply two policy checks:
//!
//! - **Per-withdrawal limit**: amounts above the limit (default 500) are
//!   rejected; the limit itself is allowed
//! - **Withdrawal count**: once the history holds the maximum number of
//!   withdrawals (default 3), further withdrawals are rejected. The count is
//!   never reset.
//!
//! # Example
//!
//! ```
//! use banking_core::{Account, BankError, Transaction};
//! use rust_decimal::Decimal;
//!
//! let mut account = Account::checking(1, "12345678900");
//! Transaction::deposit(Decimal::new(1000, 0)).apply(&mut account).unwrap();
//!
//! let rejected = Transaction::withdrawal(Decimal::new(600, 0)).apply(&mut account);
//! assert!(matches!(rejected, Err(BankError::LimitExceeded { .. })));
//! assert_eq!(account.balance(), Decimal::new(1000, 0));
//! assert_eq!(account.history().len(), 1);
//! ```

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod replay;
pub mod types;

pub use crate::core::{Account, Bank, BankConfig, Client, History, NewClient, Transaction};
pub use types::{
    AccountNumber, BankError, CheckingLimits, Cpf, TransactionKind, TransactionRecord,
    WithdrawalPolicy, BRANCH,
};
