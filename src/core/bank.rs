//! Client and account registry
//!
//! The `Bank` resolves clients by CPF and accounts by number, registers new
//! clients and opens checking accounts for them. It only looks things up;
//! every balance change still goes through [`Client::apply_transaction`].
//!
//! # Account numbering
//!
//! Account numbers are sequential across the whole branch, starting at 1, in
//! the order accounts are opened.

use crate::core::account::Account;
use crate::core::client::Client;
use crate::core::statement::render_statement;
use crate::core::transaction::Transaction;
use crate::types::{AccountNumber, BankError, CheckingLimits, Cpf};
use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Format of birth dates accepted at registration
pub const BIRTH_DATE_FORMAT: &str = "%d-%m-%Y";

/// Registry configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BankConfig {
    /// Limits given to every checking account opened by the registry
    pub checking_limits: CheckingLimits,
}

/// Registration data for a new client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClient {
    pub cpf: Cpf,
    pub name: String,
    /// Birth date as `DD-MM-YYYY`
    pub birth_date: String,
    pub address: String,
}

/// Registry of clients and accounts
#[derive(Debug, Clone, Default)]
pub struct Bank {
    config: BankConfig,
    /// Clients in registration order
    clients: Vec<Client>,
    /// CPF → position in `clients`
    index: HashMap<Cpf, usize>,
    /// Every opened account as (number, owner), in opening order
    opened: Vec<(AccountNumber, Cpf)>,
}

impl Bank {
    pub fn new(config: BankConfig) -> Self {
        Bank {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &BankConfig {
        &self.config
    }

    /// Register a new client
    ///
    /// # Errors
    ///
    /// - `DuplicateClient` if the CPF is already registered
    /// - `InvalidBirthDate` if the birth date is not `DD-MM-YYYY`
    pub fn create_client(&mut self, new_client: NewClient) -> Result<&Client, BankError> {
        if self.index.contains_key(&new_client.cpf) {
            return Err(BankError::duplicate_client(&new_client.cpf));
        }

        let birth_date = NaiveDate::parse_from_str(new_client.birth_date.trim(), BIRTH_DATE_FORMAT)
            .map_err(|_| BankError::InvalidBirthDate {
                value: new_client.birth_date.clone(),
            })?;

        let position = self.clients.len();
        self.index.insert(new_client.cpf.clone(), position);
        self.clients.push(Client::new(
            new_client.cpf,
            new_client.name,
            birth_date,
            new_client.address,
        ));

        let client = &self.clients[position];
        debug!("Registered client {}", client.cpf());
        Ok(client)
    }

    pub fn find_client(&self, cpf: &str) -> Option<&Client> {
        self.index.get(cpf).map(|&position| &self.clients[position])
    }

    pub fn find_client_mut(&mut self, cpf: &str) -> Option<&mut Client> {
        let position = *self.index.get(cpf)?;
        self.clients.get_mut(position)
    }

    /// Clients in registration order
    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    /// Open a checking account for the client and return its number
    ///
    /// # Errors
    ///
    /// - `ClientNotFound` if no client is registered under `cpf`
    /// - `ArithmeticOverflow` if the account numbers are exhausted
    pub fn open_account(&mut self, cpf: &str) -> Result<AccountNumber, BankError> {
        let number = account_number_after(self.opened.len())?;
        let limits = self.config.checking_limits;

        let client = self
            .find_client_mut(cpf)
            .ok_or_else(|| BankError::client_not_found(cpf))?;
        client.attach_account(Account::checking_with(number, cpf, limits))?;

        self.opened.push((number, cpf.to_string()));
        debug!("Opened account {} for client {}", number, cpf);
        Ok(number)
    }

    /// Resolve which account of a client an operation targets
    ///
    /// With an explicit `number` the client must own that account. Without
    /// one, the client must own exactly one account.
    pub fn resolve_account(
        &self,
        cpf: &str,
        number: Option<AccountNumber>,
    ) -> Result<&Account, BankError> {
        let client = self
            .find_client(cpf)
            .ok_or_else(|| BankError::client_not_found(cpf))?;

        match number {
            Some(number) => client
                .account(number)
                .ok_or_else(|| BankError::account_not_found(number)),
            None => match client.accounts() {
                [] => Err(BankError::NoAccounts {
                    cpf: cpf.to_string(),
                }),
                [only] => Ok(only),
                accounts => Err(BankError::AmbiguousAccount {
                    cpf: cpf.to_string(),
                    count: accounts.len(),
                }),
            },
        }
    }

    /// Apply a transaction to an account resolved as in [`Bank::resolve_account`]
    ///
    /// Returns the number of the account the transaction was applied to.
    pub fn apply(
        &mut self,
        cpf: &str,
        number: Option<AccountNumber>,
        transaction: &Transaction,
    ) -> Result<AccountNumber, BankError> {
        let number = self.resolve_account(cpf, number)?.number();
        let client = self
            .find_client_mut(cpf)
            .ok_or_else(|| BankError::client_not_found(cpf))?;

        client.apply_transaction(number, transaction)?;
        Ok(number)
    }

    pub fn deposit(
        &mut self,
        cpf: &str,
        number: Option<AccountNumber>,
        amount: Decimal,
    ) -> Result<AccountNumber, BankError> {
        self.apply(cpf, number, &Transaction::deposit(amount))
    }

    pub fn withdraw(
        &mut self,
        cpf: &str,
        number: Option<AccountNumber>,
        amount: Decimal,
    ) -> Result<AccountNumber, BankError> {
        self.apply(cpf, number, &Transaction::withdrawal(amount))
    }

    /// Rendered statement of a client's account
    pub fn statement(&self, cpf: &str, number: Option<AccountNumber>) -> Result<String, BankError> {
        self.resolve_account(cpf, number).map(render_statement)
    }

    /// Every account with its holder, in opening order
    pub fn accounts(&self) -> Vec<(&Client, &Account)> {
        self.opened
            .iter()
            .filter_map(|(number, cpf)| {
                let client = self.find_client(cpf)?;
                Some((client, client.account(*number)?))
            })
            .collect()
    }
}

/// Number of the account opened after `opened` accounts
fn account_number_after(opened: usize) -> Result<AccountNumber, BankError> {
    AccountNumber::try_from(opened)
        .ok()
        .and_then(|count| count.checked_add(1))
        .ok_or_else(|| BankError::arithmetic_overflow("account numbering"))
}
