//! Script replay
//!
//! Drives a [`Bank`] through the commands of a CSV script and writes the
//! result. Orchestration only, delegating:
//! - CSV parsing to `ScriptReader` (iterator interface)
//! - Business rules to `Bank`, `Client` and `Account`
//! - Output formatting to `csv_format::write_accounts_csv` and the statement
//!   renderer
//!
//! # Error Handling
//!
//! Fatal errors (script not found, output not writable) are returned
//! immediately. Malformed rows and rejected operations are logged at `warn`
//! and replay continues with the next row.

use crate::cli::OutputMode;
use crate::core::{render_account, Bank, BankConfig, Transaction};
use crate::io::csv_format::{write_accounts_csv, Command};
use crate::io::script_reader::{ScriptLine, ScriptReader};
use crate::types::BankError;
use log::{debug, info, warn};
use std::io::{Read, Write};
use std::path::Path;

/// Listing line written when the branch has no accounts
pub const NO_ACCOUNTS: &str = "No accounts created yet.";

/// Counters and rendered statements of one replay
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplayReport {
    /// Rows whose operation succeeded
    pub applied: usize,
    /// Rows that were malformed or rejected
    pub rejected: usize,
    /// Rejected rows refused by a checking-account limit (included in `rejected`)
    pub policy_rejections: usize,
    /// Statements rendered by `statement` rows, in script order
    pub statements: Vec<String>,
}

/// Execute one command against the bank
///
/// Returns the rendered statement for `statement` commands.
pub fn execute(bank: &mut Bank, command: &Command) -> Result<Option<String>, BankError> {
    match command {
        Command::Register(new_client) => {
            bank.create_client(new_client.clone())?;
            Ok(None)
        }
        Command::Open { cpf } => {
            bank.open_account(cpf)?;
            Ok(None)
        }
        Command::Deposit {
            cpf,
            account,
            amount,
        } => {
            bank.apply(cpf, *account, &Transaction::deposit(*amount))?;
            Ok(None)
        }
        Command::Withdraw {
            cpf,
            account,
            amount,
        } => {
            bank.apply(cpf, *account, &Transaction::withdrawal(*amount))?;
            Ok(None)
        }
        Command::Statement { cpf, account } => bank.statement(cpf, *account).map(Some),
    }
}

/// Replay every row of `reader` against `bank`
pub fn replay<R: Read>(reader: ScriptReader<R>, bank: &mut Bank) -> ReplayReport {
    let mut report = ReplayReport::default();

    for result in reader {
        match result {
            Ok(ScriptLine { line, command }) => match execute(bank, &command) {
                Ok(statement) => {
                    debug!("Line {}: {} applied", line, command.op());
                    report.applied += 1;
                    report.statements.extend(statement);
                }
                Err(e) if e.is_policy_violation() => {
                    warn!(
                        "Line {}: {} refused by checking policy: {}",
                        line,
                        command.op(),
                        e
                    );
                    report.rejected += 1;
                    report.policy_rejections += 1;
                }
                Err(e) => {
                    warn!("Line {}: {} rejected: {}", line, command.op(), e);
                    report.rejected += 1;
                }
            },
            Err(e) => {
                warn!("Skipping row: {}", e);
                report.rejected += 1;
            }
        }
    }

    info!(
        "Replay finished: {} applied, {} rejected ({} by checking policy)",
        report.applied, report.rejected, report.policy_rejections
    );
    report
}

/// Replay the script at `input_path` and write the requested output
pub fn run(
    input_path: &Path,
    config: BankConfig,
    mode: OutputMode,
    output: &mut dyn Write,
) -> Result<ReplayReport, BankError> {
    let reader = ScriptReader::from_path(input_path)?;
    let mut bank = Bank::new(config);

    let report = replay(reader, &mut bank);
    write_output(&bank, &report, mode, output)?;

    Ok(report)
}

/// Write the replay result in the requested mode
pub fn write_output(
    bank: &Bank,
    report: &ReplayReport,
    mode: OutputMode,
    output: &mut dyn Write,
) -> Result<(), BankError> {
    let accounts = bank.accounts();

    match mode {
        OutputMode::Summary => write_accounts_csv(&accounts, output),
        OutputMode::Statements => {
            for statement in &report.statements {
                writeln!(output, "{}", statement)?;
            }
            if accounts.is_empty() {
                writeln!(output, "{}", NO_ACCOUNTS)?;
            }
            for (client, account) in &accounts {
                writeln!(output, "{}", render_account(account, client.name()))?;
            }
            output.flush()?;
            Ok(())
        }
    }
}
