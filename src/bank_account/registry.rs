use crate::bank_account::bank_table::builtin_bank_table;
use crate::bank_account::config::{AccountType, BankSpecConfig, Comment};
use crate::bank_account::BankAccount;
use crate::checksum::{ascii_digits, ChecksumAlgorithm};
use crate::error::{BankRegistryError, ValidationError};
use crate::observability::metrics::ValidationMetrics;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt::Display;

lazy_static! {
    static ref BUILTIN_REGISTRY: BankRegistry =
        BankRegistry::from_config(&builtin_bank_table()).unwrap();
}

/// A compiled [BankSpecConfig].
#[derive(Debug, Clone)]
pub struct BankSpec {
    name: String,
    pattern: Regex,
    excluded_prefixes: Vec<String>,
    account_type: Option<AccountType>,
    comment: Option<Comment>,
    clearing_length: usize,
    algorithm: ChecksumAlgorithm,
}

impl BankSpec {
    fn compile(config: &BankSpecConfig) -> Result<Self, BankRegistryError> {
        if config.clearing_length == 0 {
            return Err(BankRegistryError::EmptyClearingNumber(config.name.clone()));
        }
        let pattern =
            Regex::new(&config.pattern).map_err(|err| BankRegistryError::InvalidPattern {
                bank: config.name.clone(),
                message: err.to_string(),
            })?;

        Ok(Self {
            name: config.name.clone(),
            pattern,
            excluded_prefixes: config.excluded_prefixes.clone(),
            account_type: config.account_type,
            comment: config.comment,
            clearing_length: config.clearing_length,
            algorithm: config.algorithm,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn matches(&self, number: &str) -> bool {
        !self
            .excluded_prefixes
            .iter()
            .any(|prefix| number.starts_with(prefix.as_str()))
            && self.pattern.is_match(number)
    }

    /// Splits a digits-only account into clearing number and account number.
    fn split<'a>(&self, number: &'a str) -> (&'a str, &'a str) {
        number.split_at(self.clearing_length.min(number.len()))
    }

    /// Digits covered by the check digit
    fn checksum_input(&self, clearing: &str, account: &str) -> String {
        match (self.account_type, self.comment) {
            (Some(AccountType::Type1), Some(Comment::One)) => {
                format!("{}{account}", clearing.get(1..).unwrap_or_default())
            }
            (Some(AccountType::Type1), Some(Comment::Two)) => format!("{clearing}{account}"),
            _ => account.to_owned(),
        }
    }

    fn validate(&self, number: &str) -> Result<BankAccount, ValidationError> {
        let (clearing, account) = self.split(number);
        let digits = ascii_digits(&self.checksum_input(clearing, account))
            .ok_or(ValidationError::Format("no digits to check"))?;

        if !self.algorithm.verify(&digits) {
            return Err(ValidationError::Checksum);
        }
        Ok(BankAccount {
            bank: self.name.clone(),
            clearing: clearing.to_owned(),
            number: account.to_owned(),
        })
    }
}

/// Ordered list of bank numbering schemes.
///
/// Only the first entry matching an account is used, even when its check digit is wrong.
#[derive(Debug, Clone)]
pub struct BankRegistry {
    banks: Vec<BankSpec>,
}

impl BankRegistry {
    pub fn from_config(configs: &[BankSpecConfig]) -> Result<Self, BankRegistryError> {
        let banks = configs
            .iter()
            .map(BankSpec::compile)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { banks })
    }

    /// Registry of the Swedish banks, shared by the whole process
    pub fn builtin() -> &'static BankRegistry {
        &BUILTIN_REGISTRY
    }

    pub fn banks(&self) -> &[BankSpec] {
        &self.banks
    }

    /// Validates an account number. Every character but the digits is ignored.
    pub fn check(&self, account: impl Display) -> Option<BankAccount> {
        ValidationMetrics::new("swedish_bank_account").collapse(self.validate(account))
    }

    fn validate(&self, account: impl Display) -> Result<BankAccount, ValidationError> {
        let number: String = account
            .to_string()
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();

        self.banks
            .iter()
            .find(|bank| bank.matches(&number))
            .ok_or(ValidationError::Format("unknown clearing number"))?
            .validate(&number)
    }
}
