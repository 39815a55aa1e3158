//! CSV format handling for replay scripts and account output
//!
//! This module centralizes all CSV format concerns, providing:
//! - ScriptRecord structure for deserialization
//! - Conversion from script rows to replay commands
//! - Account summary serialization
//!
//! All functions are pure (no file I/O) for easy testing.
//!
//! # Script format
//!
//! ```text
//! op,cpf,account,amount,name,birth_date,address
//! register,12345678900,,,Ana Souza,12-04-1990,"Rua A, 10 - Recife/PE"
//! open,12345678900,,,,,
//! deposit,12345678900,1,1000.00,,,
//! withdraw,12345678900,,250,,,
//! statement,12345678900,,,,,
//! ```

use crate::core::{format_money, Account, Client, NewClient};
use crate::types::{AccountNumber, BankError, Cpf};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// CSV row structure for deserialization
///
/// Only `op` and `cpf` are required on every row; the other columns are
/// required or ignored depending on the operation.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct ScriptRecord {
    pub op: String,
    pub cpf: Cpf,
    #[serde(default)]
    pub account: Option<AccountNumber>,
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// A replay operation decoded from one script row
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Register a new client
    Register(NewClient),

    /// Open a checking account for a client
    Open { cpf: Cpf },

    /// Deposit into a client's account
    Deposit {
        cpf: Cpf,
        account: Option<AccountNumber>,
        amount: Decimal,
    },

    /// Withdraw from a client's account
    Withdraw {
        cpf: Cpf,
        account: Option<AccountNumber>,
        amount: Decimal,
    },

    /// Render the statement of a client's account
    Statement {
        cpf: Cpf,
        account: Option<AccountNumber>,
    },
}

impl Command {
    /// Name of the operation as written in scripts
    pub fn op(&self) -> &'static str {
        match self {
            Command::Register(_) => "register",
            Command::Open { .. } => "open",
            Command::Deposit { .. } => "deposit",
            Command::Withdraw { .. } => "withdraw",
            Command::Statement { .. } => "statement",
        }
    }
}

/// Convert a ScriptRecord to a Command
///
/// Operation names are case-insensitive. Empty optional columns count as
/// missing.
pub fn convert_script_record(record: ScriptRecord) -> Result<Command, BankError> {
    let op = record.op.trim().to_lowercase();
    let cpf = record.cpf.trim().to_string();

    match op.as_str() {
        "register" => Ok(Command::Register(NewClient {
            cpf,
            name: required(record.name, "name", "register")?,
            birth_date: required(record.birth_date, "birth_date", "register")?,
            address: required(record.address, "address", "register")?,
        })),
        "open" => Ok(Command::Open { cpf }),
        "deposit" => Ok(Command::Deposit {
            cpf,
            account: record.account,
            amount: parse_amount(record.amount, "deposit")?,
        }),
        "withdraw" | "withdrawal" => Ok(Command::Withdraw {
            cpf,
            account: record.account,
            amount: parse_amount(record.amount, "withdraw")?,
        }),
        "statement" => Ok(Command::Statement {
            cpf,
            account: record.account,
        }),
        _ => Err(BankError::InvalidOperation {
            op: record.op,
            line: None,
        }),
    }
}

fn required(value: Option<String>, field: &str, op: &str) -> Result<String, BankError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| BankError::missing_field(field, op))
}

/// Parse a script amount; at most two decimal places once trailing zeros
/// are dropped
fn parse_amount(value: Option<String>, op: &str) -> Result<Decimal, BankError> {
    let raw = required(value, "amount", op)?;
    let amount = Decimal::from_str(&raw).map_err(|_| BankError::ParseError {
        line: None,
        message: format!("Invalid amount '{}' for {}", raw, op),
    })?;

    if amount.normalize().scale() > 2 {
        return Err(BankError::ParseError {
            line: None,
            message: format!("Amount '{}' for {} has more than two decimal places", raw, op),
        });
    }

    Ok(amount)
}

/// Write the account summary in CSV format
///
/// Columns: branch, account, cpf, holder, balance, withdrawals. Rows are
/// written in the order given.
pub fn write_accounts_csv(
    accounts: &[(&Client, &Account)],
    output: &mut dyn Write,
) -> Result<(), BankError> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    writer.write_record(["branch", "account", "cpf", "holder", "balance", "withdrawals"])?;

    for (client, account) in accounts {
        writer.write_record(&[
            account.branch().to_string(),
            account.number().to_string(),
            client.cpf().to_string(),
            client.name().to_string(),
            format_money(account.balance()),
            account.history().withdrawal_count().to_string(),
        ])?;
    }

    writer.flush()?;

    Ok(())
}
