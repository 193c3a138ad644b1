// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod bank_account;
pub mod checksum;
mod date;
mod error;
mod national_id;
mod observability;
mod validator;
mod validator_kind;

// This is the public API of the library
pub use bank_account::config::{AccountType, BankSpecConfig, Comment, DEFAULT_CLEARING_LENGTH};
pub use bank_account::{
    account_number_check, builtin_bank_table, BankAccount, BankRegistry, BankSpec,
    SwedishBankAccount,
};
pub use checksum::ChecksumAlgorithm;
pub use date::{days_in_month, is_leap_year, is_valid_date, CalendarNumber};
pub use error::BankRegistryError;
pub use national_id::{
    diff_years, is_valid_danish_ssn, is_valid_finnish_ssn, is_valid_norwegian_ssn,
    is_valid_norwegian_ssn_at, is_valid_swedish_ssn, norwegian_age, norwegian_age_at,
    norwegian_birth_date, norwegian_id_number_type, DanishSsn, FinnishSsn, IdNumberType,
    NorwegianSsn, SwedishSsn,
};
pub use observability::metrics::{INVALID_METRIC, VALID_METRIC};
pub use validator::Validator;
pub use validator_kind::ValidatorKind;
