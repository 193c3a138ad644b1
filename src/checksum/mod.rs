mod mod10;
mod mod11;

pub use mod10::mod10;
pub use mod11::{mod11, weighted_mod11};

pub(crate) use mod10::mod10_digits;
pub(crate) use mod11::mod11_digits;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Check digit algorithm protecting an account number.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ChecksumAlgorithm {
    Mod10,
    Mod11,
}

impl ChecksumAlgorithm {
    pub(crate) fn verify(&self, digits: &[u32]) -> bool {
        match self {
            ChecksumAlgorithm::Mod10 => mod10_digits(digits),
            ChecksumAlgorithm::Mod11 => mod11_digits(digits),
        }
    }
}

/// Whether the sum of `terms` is a non-zero multiple of `modulus`.
///
/// The sum is kept reduced so that arbitrarily long inputs can't overflow. Terms are never
/// negative, so the sum is zero exactly when every term is.
pub(crate) fn is_nonzero_multiple(terms: impl IntoIterator<Item = u64>, modulus: u64) -> bool {
    let (nonzero, remainder) = terms
        .into_iter()
        .fold((false, 0), |(nonzero, remainder), term| {
            (nonzero || term > 0, (remainder + term % modulus) % modulus)
        });
    nonzero && remainder == 0
}

/// Converts a string made only of ASCII digits into their values.
///
/// Returns `None` for an empty string or as soon as a non-digit is found.
pub(crate) fn ascii_digits(input: &str) -> Option<Vec<u32>> {
    if input.is_empty() {
        return None;
    }
    input
        .bytes()
        .map(|b| b.is_ascii_digit().then(|| u32::from(b - b'0')))
        .collect()
}

/// Builds a number out of consecutive digits, most significant first
pub(crate) fn digits_to_number(digits: &[u32]) -> u32 {
    digits.iter().fold(0, |acc, digit| acc * 10 + digit)
}
