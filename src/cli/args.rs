use crate::core::BankConfig;
use crate::types::CheckingLimits;
use clap::{Parser, ValueEnum};
use log::warn;
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Replay a script of banking operations against an in-memory branch
#[derive(Parser, Debug)]
#[command(name = "bank-replay")]
#[command(about = "Replay a script of banking operations against an in-memory branch", long_about = None)]
pub struct CliArgs {
    /// Input CSV script path
    #[arg(value_name = "SCRIPT", help = "Path to the CSV script of operations")]
    pub input_file: PathBuf,

    /// Per-withdrawal limit of checking accounts
    #[arg(
        long = "withdrawal-limit",
        value_name = "AMOUNT",
        help = "Largest single withdrawal a checking account allows (default: 500)"
    )]
    pub withdrawal_limit: Option<Decimal>,

    /// Maximum number of withdrawals of checking accounts
    #[arg(
        long = "max-withdrawals",
        value_name = "COUNT",
        help = "Number of withdrawals a checking account allows (default: 3)"
    )]
    pub max_withdrawals: Option<usize>,

    /// What to write to stdout
    #[arg(
        long = "output",
        value_name = "MODE",
        default_value = "summary",
        help = "Output: 'summary' for the account CSV or 'statements' for rendered statements"
    )]
    pub output: OutputMode,
}

/// Available output modes
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    Summary,
    Statements,
}

impl CliArgs {
    /// Create a BankConfig from CLI arguments
    ///
    /// Values that are not positive fall back to the defaults with a warning.
    pub fn to_bank_config(&self) -> BankConfig {
        let default = CheckingLimits::default();

        let per_withdrawal = match self.withdrawal_limit {
            Some(limit) if limit > Decimal::ZERO => limit,
            Some(limit) => {
                warn!(
                    "Ignoring withdrawal limit {}; using default {}",
                    limit, default.per_withdrawal
                );
                default.per_withdrawal
            }
            None => default.per_withdrawal,
        };

        let max_withdrawals = match self.max_withdrawals {
            Some(0) => {
                warn!(
                    "Ignoring max withdrawals 0; using default {}",
                    default.max_withdrawals
                );
                default.max_withdrawals
            }
            Some(count) => count,
            None => default.max_withdrawals,
        };

        BankConfig {
            checking_limits: CheckingLimits::new(per_withdrawal, max_withdrawals),
        }
    }
}
