//! Statement and account listing rendering
//!
//! Pure formatting over an account's history; nothing here mutates state.

use crate::core::account::Account;
use rust_decimal::{Decimal, RoundingStrategy};

const STATEMENT_HEADER: &str = "================ STATEMENT ================";
const RULE: &str = "===========================================";
const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Format an amount with two decimal places, rounding half away from zero
pub fn format_money(amount: Decimal) -> String {
    format!(
        "{:.2}",
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

/// Render the statement of `account`: every recorded transaction in order,
/// followed by the current balance
pub fn render_statement(account: &Account) -> String {
    let mut out = String::new();
    out.push_str(STATEMENT_HEADER);
    out.push('\n');

    if account.history().is_empty() {
        out.push_str("No transactions recorded.\n");
    } else {
        for record in account.history() {
            out.push_str(&format!(
                "{} - {}:\n\tR$ {}\n",
                record.timestamp.format(TIMESTAMP_FORMAT),
                record.kind,
                format_money(record.amount)
            ));
        }
    }

    out.push_str(&format!(
        "\nBalance:\n\tR$ {}\n",
        format_money(account.balance())
    ));
    out.push_str(RULE);
    out.push('\n');
    out
}

/// Render the listing block of one account
pub fn render_account(account: &Account, holder: &str) -> String {
    format!(
        "Branch:\t\t{}\nAccount:\t{}\nHolder:\t\t{}\n",
        account.branch(),
        account.number(),
        holder
    )
}
