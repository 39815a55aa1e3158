//! Account-related types for the banking core
//!
//! This module defines the branch constant and the withdrawal policies an
//! account can carry. The account itself lives in [`crate::core::account`].

use rust_decimal::Decimal;

/// Branch code shared by every account in the system
pub const BRANCH: &str = "0001";

/// Withdrawal ceilings of a checking account
///
/// The withdrawal count is a lifetime count: nothing resets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckingLimits {
    /// Largest amount a single withdrawal may move (inclusive)
    pub per_withdrawal: Decimal,

    /// Number of successful withdrawals the account allows
    pub max_withdrawals: usize,
}

impl CheckingLimits {
    /// Default per-withdrawal limit (500.00)
    pub const DEFAULT_PER_WITHDRAWAL: Decimal = Decimal::from_parts(500, 0, 0, false, 0);

    /// Default maximum number of withdrawals
    pub const DEFAULT_MAX_WITHDRAWALS: usize = 3;

    pub fn new(per_withdrawal: Decimal, max_withdrawals: usize) -> Self {
        CheckingLimits {
            per_withdrawal,
            max_withdrawals,
        }
    }
}

impl Default for CheckingLimits {
    fn default() -> Self {
        CheckingLimits {
            per_withdrawal: Self::DEFAULT_PER_WITHDRAWAL,
            max_withdrawals: Self::DEFAULT_MAX_WITHDRAWALS,
        }
    }
}

/// Rules an account applies before the funds check of a withdrawal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WithdrawalPolicy {
    /// Only the funds rules apply (positive amount, sufficient balance)
    Basic,

    /// Checking account: per-withdrawal ceiling and maximum withdrawal count
    /// are checked first, then the funds rules
    Checking(CheckingLimits),
}

impl WithdrawalPolicy {
    /// Returns the checking limits, if any
    pub fn limits(&self) -> Option<&CheckingLimits> {
        match self {
            WithdrawalPolicy::Basic => None,
            WithdrawalPolicy::Checking(limits) => Some(limits),
        }
    }
}
