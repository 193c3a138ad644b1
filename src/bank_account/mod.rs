mod bank_table;
pub mod config;
mod registry;

pub use bank_table::builtin_bank_table;
pub use registry::{BankRegistry, BankSpec};

use crate::validator::Validator;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A valid account number, split into its parts.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct BankAccount {
    pub bank: String,
    pub clearing: String,
    pub number: String,
}

/// Validates a Swedish bank account number against the numbering scheme of its bank.
///
/// Anything but digits is stripped first, so `"3300-7505092556"`, `"3300 750509 2556"` and
/// `33007505092556u64` are the same account.
pub fn account_number_check(account: impl Display) -> Option<BankAccount> {
    BankRegistry::builtin().check(account)
}

pub struct SwedishBankAccount;

impl Validator for SwedishBankAccount {
    fn is_valid_match(&self, candidate: &str) -> bool {
        account_number_check(candidate).is_some()
    }
}
