use crate::bank_account::SwedishBankAccount;
use crate::national_id::{DanishSsn, FinnishSsn, NorwegianSsn, SwedishSsn};
use crate::validator::Validator;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Serializable choice of a validator, e.g. for a rule configuration.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter,
)]
#[serde(tag = "type")]
#[strum(serialize_all = "snake_case")]
pub enum ValidatorKind {
    SwedishSsn,
    DanishSsn,
    NorwegianSsn,
    FinnishSsn,
    SwedishBankAccount,
}

impl Validator for ValidatorKind {
    fn is_valid_match(&self, candidate: &str) -> bool {
        match self {
            ValidatorKind::SwedishSsn => SwedishSsn.is_valid_match(candidate),
            ValidatorKind::DanishSsn => DanishSsn.is_valid_match(candidate),
            ValidatorKind::NorwegianSsn => NorwegianSsn.is_valid_match(candidate),
            ValidatorKind::FinnishSsn => FinnishSsn.is_valid_match(candidate),
            ValidatorKind::SwedishBankAccount => SwedishBankAccount.is_valid_match(candidate),
        }
    }
}
