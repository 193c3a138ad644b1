use crate::checksum::ChecksumAlgorithm;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CLEARING_LENGTH: usize = 4;

/// Numbering scheme of an account, as defined by the Swedish bank giro centre.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    /// Short account numbers, the clearing number may take part in the check digit
    Type1,
    /// Longer account numbers, checked without their clearing number
    Type2,
}

/// Variant of a numbering scheme, deciding which digits are covered by the check digit.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Comment {
    One,
    Two,
    Three,
}

/// Description of the account numbers of one bank.
///
/// A registry evaluates these in order and stops at the first one matching an account.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct BankSpecConfig {
    pub name: String,

    /// Regex matched against the account number stripped of everything but digits
    pub pattern: String,

    /// Accounts starting with one of these prefixes never match this entry
    #[serde(default)]
    pub excluded_prefixes: Vec<String>,

    #[serde(default)]
    pub account_type: Option<AccountType>,

    #[serde(default)]
    pub comment: Option<Comment>,

    #[serde(default = "default_clearing_length")]
    pub clearing_length: usize,

    #[serde(default = "default_algorithm")]
    pub algorithm: ChecksumAlgorithm,
}

fn default_clearing_length() -> usize {
    DEFAULT_CLEARING_LENGTH
}

fn default_algorithm() -> ChecksumAlgorithm {
    ChecksumAlgorithm::Mod11
}

impl BankSpecConfig {
    pub fn new(name: &str, pattern: &str) -> Self {
        Self {
            name: name.to_owned(),
            pattern: pattern.to_owned(),
            excluded_prefixes: vec![],
            account_type: None,
            comment: None,
            clearing_length: DEFAULT_CLEARING_LENGTH,
            algorithm: ChecksumAlgorithm::Mod11,
        }
    }

    /// Type 1 account checked with mod 11
    pub fn type1(name: &str, pattern: &str, comment: Comment) -> Self {
        Self::new(name, pattern)
            .account_type(AccountType::Type1)
            .comment(comment)
    }

    pub fn type2(name: &str, pattern: &str, comment: Comment) -> Self {
        Self::new(name, pattern)
            .account_type(AccountType::Type2)
            .comment(comment)
    }

    pub fn excluded_prefixes(&self, prefixes: &[&str]) -> Self {
        self.mutate_clone(|x| {
            x.excluded_prefixes = prefixes.iter().map(|p| p.to_string()).collect()
        })
    }

    pub fn account_type(&self, account_type: AccountType) -> Self {
        self.mutate_clone(|x| x.account_type = Some(account_type))
    }

    pub fn comment(&self, comment: Comment) -> Self {
        self.mutate_clone(|x| x.comment = Some(comment))
    }

    pub fn clearing_length(&self, clearing_length: usize) -> Self {
        self.mutate_clone(|x| x.clearing_length = clearing_length)
    }

    pub fn algorithm(&self, algorithm: ChecksumAlgorithm) -> Self {
        self.mutate_clone(|x| x.algorithm = algorithm)
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}
