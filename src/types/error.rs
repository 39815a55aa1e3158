//! Error types for the banking core
//!
//! Every rejected operation is reported as a `BankError` value returned to the
//! immediate caller. None of the domain errors are fatal: a failed deposit or
//! withdrawal leaves the account exactly as it was.
//!
//! # Error Categories
//!
//! - **Funds Errors**: Invalid amounts, insufficient funds, arithmetic overflow
//! - **Policy Errors**: Checking-account limit and withdrawal-count violations
//! - **Registry Errors**: Unknown or duplicate clients and accounts
//! - **Script Errors**: File I/O and CSV parsing problems at the replay boundary

use super::transaction::{AccountNumber, Cpf};
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the banking core
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BankError {
    /// Amount is zero or negative
    #[error("Invalid amount {amount}: amounts must be greater than zero")]
    InvalidAmount {
        /// The rejected amount
        amount: Decimal,
    },

    /// Withdrawal amount exceeds the current balance
    ///
    /// The account state remains unchanged.
    #[error("Insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Balance at the time of the attempt
        balance: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// Withdrawal amount exceeds the per-withdrawal ceiling of a checking account
    #[error("Withdrawal of {requested} exceeds the per-withdrawal limit of {limit}")]
    LimitExceeded {
        /// Configured per-withdrawal limit
        limit: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// Checking account already reached its maximum number of withdrawals
    #[error("Maximum of {max} withdrawals reached")]
    WithdrawalCountExceeded {
        /// Configured maximum number of withdrawals
        max: usize,
    },

    /// Balance arithmetic would overflow
    #[error("Arithmetic overflow in {operation}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
    },

    /// Account number is not known to the client or the registry
    #[error("Account {account} not found")]
    AccountNotFound {
        /// The account number that was looked up
        account: AccountNumber,
    },

    /// No client is registered under the identifier
    #[error("Client {cpf} not found")]
    ClientNotFound {
        /// The CPF that was looked up
        cpf: Cpf,
    },

    /// A client with the same CPF is already registered
    #[error("Client {cpf} is already registered")]
    DuplicateClient {
        /// The duplicated CPF
        cpf: Cpf,
    },

    /// The account is already attached to the client
    #[error("Account {account} is already attached")]
    DuplicateAccount {
        /// The duplicated account number
        account: AccountNumber,
    },

    /// The account belongs to a different client
    #[error("Account {account} is owned by client {actual}, not {expected}")]
    OwnerMismatch {
        /// Account number
        account: AccountNumber,
        /// Client the account was attached to
        expected: Cpf,
        /// Owner recorded on the account
        actual: Cpf,
    },

    /// The client has no accounts yet
    #[error("Client {cpf} has no accounts")]
    NoAccounts {
        /// The client's CPF
        cpf: Cpf,
    },

    /// The client has several accounts and none was selected
    #[error("Client {cpf} has {count} accounts; an account number is required")]
    AmbiguousAccount {
        /// The client's CPF
        cpf: Cpf,
        /// Number of accounts owned by the client
        count: usize,
    },

    /// Birth date is not in `DD-MM-YYYY` form
    #[error("Invalid birth date '{value}', expected DD-MM-YYYY")]
    InvalidBirthDate {
        /// The rejected input
        value: String,
    },

    /// Script file not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    ///
    /// The malformed row is skipped and replay continues.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// Unknown operation in a script row
    #[error("Invalid operation '{op}'{}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    InvalidOperation {
        /// The unknown operation name
        op: String,
        /// Line number (if available)
        line: Option<u64>,
    },

    /// A script row is missing a field its operation requires
    #[error("{op} requires the '{field}' field")]
    MissingField {
        /// The missing column
        field: String,
        /// Operation that requires it
        op: String,
    },
}

// Conversion from io::Error to BankError
impl From<std::io::Error> for BankError {
    fn from(error: std::io::Error) -> Self {
        BankError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to BankError
impl From<csv::Error> for BankError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        BankError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl BankError {
    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Decimal) -> Self {
        BankError::InvalidAmount { amount }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(balance: Decimal, requested: Decimal) -> Self {
        BankError::InsufficientFunds { balance, requested }
    }

    /// Create a LimitExceeded error
    pub fn limit_exceeded(limit: Decimal, requested: Decimal) -> Self {
        BankError::LimitExceeded { limit, requested }
    }

    /// Create a WithdrawalCountExceeded error
    pub fn withdrawal_count_exceeded(max: usize) -> Self {
        BankError::WithdrawalCountExceeded { max }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str) -> Self {
        BankError::ArithmeticOverflow {
            operation: operation.to_string(),
        }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(account: AccountNumber) -> Self {
        BankError::AccountNotFound { account }
    }

    /// Create a ClientNotFound error
    pub fn client_not_found(cpf: &str) -> Self {
        BankError::ClientNotFound {
            cpf: cpf.to_string(),
        }
    }

    /// Create a DuplicateClient error
    pub fn duplicate_client(cpf: &str) -> Self {
        BankError::DuplicateClient {
            cpf: cpf.to_string(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: &str, op: &str) -> Self {
        BankError::MissingField {
            field: field.to_string(),
            op: op.to_string(),
        }
    }

    /// Attach a script line number to row-level errors that lack one
    pub fn at_line(self, at: u64) -> Self {
        match self {
            BankError::ParseError {
                line: None,
                message,
            } => BankError::ParseError {
                line: Some(at),
                message,
            },
            BankError::InvalidOperation { op, line: None } => BankError::InvalidOperation {
                op,
                line: Some(at),
            },
            other => other,
        }
    }

    /// Returns `true` for the rejections a checking account adds on top of
    /// the basic funds rules.
    pub fn is_policy_violation(&self) -> bool {
        matches!(
            self,
            BankError::LimitExceeded { .. } | BankError::WithdrawalCountExceeded { .. }
        )
    }
}
