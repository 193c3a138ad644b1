use strum::IntoStaticStr;
use thiserror::Error;

/// Reason a single validation was rejected.
///
/// This never crosses the public API: every validator collapses it into `false` (or `None`)
/// so that callers can't tell a malformed input from one with a bad checksum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub(crate) enum ValidationError {
    #[error("invalid format: {0}")]
    Format(&'static str),

    #[error("embedded date is not a calendar date")]
    Date,

    #[error("check digit mismatch")]
    Checksum,

    #[error("derived age is outside the plausible range")]
    Age,
}

impl ValidationError {
    /// Short label used for metrics
    pub fn reason(&self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum BankRegistryError {
    /// The pattern of a bank entry could not be compiled
    #[error("invalid pattern for bank `{bank}`: {message}")]
    InvalidPattern { bank: String, message: String },

    /// The clearing number length must be non-zero
    #[error("clearing number length of bank `{0}` must be non-zero")]
    EmptyClearingNumber(String),
}
