//! Bank clients and the accounts they own
//!
//! A `Client` owns its accounts and is the single entry point through which a
//! transaction reaches one of them. Accounts are attached after the client is
//! created and are never detached.

use crate::core::account::Account;
use crate::core::transaction::Transaction;
use crate::types::{AccountNumber, BankError, Cpf};
use chrono::NaiveDate;

/// A registered client (physical person)
#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    cpf: Cpf,
    name: String,
    birth_date: NaiveDate,
    address: String,
    /// Owned accounts, in attachment order
    accounts: Vec<Account>,
}

impl Client {
    /// Create a client with no accounts
    pub fn new(
        cpf: impl Into<Cpf>,
        name: impl Into<String>,
        birth_date: NaiveDate,
        address: impl Into<String>,
    ) -> Self {
        Client {
            cpf: cpf.into(),
            name: name.into(),
            birth_date,
            address: address.into(),
            accounts: Vec::new(),
        }
    }

    pub fn cpf(&self) -> &str {
        &self.cpf
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Owned accounts in attachment order
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn account(&self, number: AccountNumber) -> Option<&Account> {
        self.accounts.iter().find(|account| account.number() == number)
    }

    fn account_mut(&mut self, number: AccountNumber) -> Option<&mut Account> {
        self.accounts
            .iter_mut()
            .find(|account| account.number() == number)
    }

    /// Attach an account to this client
    ///
    /// # Errors
    ///
    /// - `OwnerMismatch` if the account records a different owner
    /// - `DuplicateAccount` if an account with the same number is attached
    pub fn attach_account(&mut self, account: Account) -> Result<(), BankError> {
        if account.owner() != self.cpf {
            return Err(BankError::OwnerMismatch {
                account: account.number(),
                expected: self.cpf.clone(),
                actual: account.owner().to_string(),
            });
        }
        if self.account(account.number()).is_some() {
            return Err(BankError::DuplicateAccount {
                account: account.number(),
            });
        }

        self.accounts.push(account);
        Ok(())
    }

    /// Apply `transaction` to one of this client's accounts
    ///
    /// # Errors
    ///
    /// - `AccountNotFound` if the client owns no account with that number
    /// - Any rejection reported by the transaction itself
    pub fn apply_transaction(
        &mut self,
        number: AccountNumber,
        transaction: &Transaction,
    ) -> Result<(), BankError> {
        let account = self
            .account_mut(number)
            .ok_or_else(|| BankError::account_not_found(number))?;

        transaction.apply(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn client() -> Client {
        Client::new(
            "12345678900",
            "Ana Souza",
            NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
            "Rua A, 10 - Centro - Recife/PE",
        )
    }

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_new_client_has_no_accounts() {
        let client = client();
        assert_eq!(client.cpf(), "12345678900");
        assert_eq!(client.name(), "Ana Souza");
        assert_eq!(client.address(), "Rua A, 10 - Centro - Recife/PE");
        assert_eq!(
            client.birth_date(),
            NaiveDate::from_ymd_opt(1990, 4, 12).unwrap()
        );
        assert!(client.accounts().is_empty());
    }

    #[test]
    fn test_attach_preserves_order() {
        let mut client = client();
        client
            .attach_account(Account::checking(3, "12345678900"))
            .unwrap();
        client
            .attach_account(Account::checking(1, "12345678900"))
            .unwrap();

        let numbers: Vec<AccountNumber> = client.accounts().iter().map(Account::number).collect();
        assert_eq!(numbers, vec![3, 1]);
    }

    #[test]
    fn test_attach_rejects_foreign_account() {
        let mut client = client();

        let result = client.attach_account(Account::checking(1, "99999999999"));

        assert!(matches!(result, Err(BankError::OwnerMismatch { account: 1, .. })));
        assert!(client.accounts().is_empty());
    }

    #[test]
    fn test_attach_rejects_duplicate_number() {
        let mut client = client();
        client
            .attach_account(Account::checking(1, "12345678900"))
            .unwrap();

        let result = client.attach_account(Account::basic(1, "12345678900"));

        assert_eq!(result, Err(BankError::DuplicateAccount { account: 1 }));
        assert_eq!(client.accounts().len(), 1);
    }

    #[test]
    fn test_apply_transaction_to_owned_account() {
        let mut client = client();
        client
            .attach_account(Account::checking(1, "12345678900"))
            .unwrap();

        client
            .apply_transaction(1, &Transaction::deposit(dec("250")))
            .unwrap();

        let account = client.account(1).unwrap();
        assert_eq!(account.balance(), dec("250"));
        assert_eq!(account.history().len(), 1);
    }

    #[test]
    fn test_apply_transaction_unknown_account() {
        let mut client = client();

        let result = client.apply_transaction(7, &Transaction::deposit(dec("1")));

        assert_eq!(result, Err(BankError::account_not_found(7)));
    }

    #[test]
    fn test_accounts_are_isolated() {
        let mut client = client();
        client
            .attach_account(Account::checking(1, "12345678900"))
            .unwrap();
        client
            .attach_account(Account::checking(2, "12345678900"))
            .unwrap();

        client
            .apply_transaction(1, &Transaction::deposit(dec("300")))
            .unwrap();

        let other = client.account(2).unwrap();
        assert_eq!(other.balance(), Decimal::ZERO);
        assert!(other.history().is_empty());
        assert_eq!(client.account(1).unwrap().balance(), dec("300"));
    }
}
