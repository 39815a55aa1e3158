//! Core business logic module
//!
//! This module contains the account/transaction domain model and the
//! registry built on top of it:
//! - `history` - Append-only per-account transaction log
//! - `account` - Balance primitives and withdrawal policies
//! - `transaction` - Deposit/withdrawal values and their application
//! - `client` - Account ownership and the transaction entry point
//! - `bank` - Client and account registry
//! - `statement` - Statement and account listing rendering

pub mod account;
pub mod bank;
pub mod client;
pub mod history;
pub mod statement;
pub mod transaction;

pub use account::Account;
pub use bank::{Bank, BankConfig, NewClient};
pub use client::Client;
pub use history::{History, HistorySummary};
pub use statement::{format_money, render_account, render_statement};
pub use transaction::Transaction;
