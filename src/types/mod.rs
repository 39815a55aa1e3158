//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Branch constant and withdrawal policies
//! - `transaction`: Identifiers, transaction kinds and history records
//! - `error`: Error types for the banking core

pub mod account;
pub mod error;
pub mod transaction;

pub use account::{CheckingLimits, WithdrawalPolicy, BRANCH};
pub use error::BankError;
pub use transaction::{AccountNumber, Cpf, TransactionKind, TransactionRecord};
