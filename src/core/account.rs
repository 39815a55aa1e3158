//! Account state and balance primitives
//!
//! This module provides the `Account` struct: a balance, its history and the
//! withdrawal policy that decides which withdrawals are honored.
//!
//! The primitives `deposit` and `withdraw` validate their input before
//! touching the balance, so a rejected call never mutates the account.
//! They do not record anything: recording is done by
//! [`Transaction::apply`](crate::core::Transaction::apply) once a primitive
//! reports success.

use crate::core::history::History;
use crate::types::{AccountNumber, BankError, CheckingLimits, Cpf, WithdrawalPolicy, BRANCH};
use rust_decimal::Decimal;

/// A bank account
///
/// # Invariants
///
/// - `balance >= 0` after every operation
/// - `balance` only changes through `deposit` and `withdraw`
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    number: AccountNumber,
    owner: Cpf,
    balance: Decimal,
    history: History,
    policy: WithdrawalPolicy,
}

impl Account {
    /// Create an account with only the funds rules
    ///
    /// # Arguments
    ///
    /// * `number` - Account number within the branch
    /// * `owner` - CPF of the owning client
    pub fn basic(number: AccountNumber, owner: impl Into<Cpf>) -> Self {
        Self::with_policy(number, owner, WithdrawalPolicy::Basic)
    }

    /// Create a checking account with the default limits (500.00 per
    /// withdrawal, 3 withdrawals)
    pub fn checking(number: AccountNumber, owner: impl Into<Cpf>) -> Self {
        Self::checking_with(number, owner, CheckingLimits::default())
    }

    /// Create a checking account with explicit limits
    pub fn checking_with(
        number: AccountNumber,
        owner: impl Into<Cpf>,
        limits: CheckingLimits,
    ) -> Self {
        Self::with_policy(number, owner, WithdrawalPolicy::Checking(limits))
    }

    fn with_policy(number: AccountNumber, owner: impl Into<Cpf>, policy: WithdrawalPolicy) -> Self {
        Account {
            number,
            owner: owner.into(),
            balance: Decimal::ZERO,
            history: History::new(),
            policy,
        }
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn branch(&self) -> &'static str {
        BRANCH
    }

    /// CPF of the owning client
    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub(crate) fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    pub fn policy(&self) -> &WithdrawalPolicy {
        &self.policy
    }

    /// Returns `true` for accounts with checking limits
    pub fn is_checking(&self) -> bool {
        matches!(self.policy, WithdrawalPolicy::Checking(_))
    }

    /// Withdrawals still allowed by the checking limits
    ///
    /// `None` for basic accounts, which have no count limit.
    pub fn withdrawals_remaining(&self) -> Option<usize> {
        self.policy.limits().map(|limits| {
            limits
                .max_withdrawals
                .saturating_sub(self.history.withdrawal_count())
        })
    }

    /// Deposit funds into the account
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the deposit was successful
    /// * `Err(BankError)` - If the amount is not positive or the balance
    ///   would overflow; the balance is unchanged
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), BankError> {
        if amount <= Decimal::ZERO {
            return Err(BankError::invalid_amount(amount));
        }

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| BankError::arithmetic_overflow("deposit"))?;

        Ok(())
    }

    /// Withdraw funds from the account
    ///
    /// Checking accounts evaluate their policy first, in this order:
    /// 1. `amount` above the per-withdrawal limit → `LimitExceeded`
    /// 2. withdrawal count already at the maximum → `WithdrawalCountExceeded`
    ///
    /// Then the funds rules apply to every account:
    /// 3. `amount` above the balance → `InsufficientFunds`
    /// 4. `amount` not positive → `InvalidAmount`
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the withdrawal was successful
    /// * `Err(BankError)` - The first rule that rejected it; the balance is
    ///   unchanged
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), BankError> {
        if let WithdrawalPolicy::Checking(limits) = self.policy {
            let past_withdrawals = self.history.withdrawal_count();

            if amount > limits.per_withdrawal {
                return Err(BankError::limit_exceeded(limits.per_withdrawal, amount));
            }
            if past_withdrawals >= limits.max_withdrawals {
                return Err(BankError::withdrawal_count_exceeded(
                    limits.max_withdrawals,
                ));
            }
        }

        self.withdraw_funds(amount)
    }

    fn withdraw_funds(&mut self, amount: Decimal) -> Result<(), BankError> {
        if amount > self.balance {
            return Err(BankError::insufficient_funds(self.balance, amount));
        }
        if amount <= Decimal::ZERO {
            return Err(BankError::invalid_amount(amount));
        }

        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or_else(|| BankError::arithmetic_overflow("withdrawal"))?;

        Ok(())
    }
}
