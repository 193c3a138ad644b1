use crate::checksum::{ascii_digits, is_nonzero_multiple};

/// Mod-11 validation of a string of ASCII digits.
///
/// Each digit is weighted with its 1-based position from the right, restarting at 1 every
/// ten positions. The number is valid when the weighted sum is a non-zero multiple of 11.
pub fn mod11(number: &str) -> bool {
    ascii_digits(number).is_some_and(|digits| mod11_digits(&digits))
}

pub(crate) fn mod11_digits(digits: &[u32]) -> bool {
    let terms = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(index, &digit)| (index as u64 % 10 + 1) * u64::from(digit));

    is_nonzero_multiple(terms, 11)
}

/// Applies a fixed weight vector to the leading digits, left to right.
///
/// Only as many digits as there are weights take part in the sum. Valid when the sum is a
/// non-zero multiple of 11; `false` when there are fewer digits than weights.
pub fn weighted_mod11(weights: &[u32], digits: &[u32]) -> bool {
    if digits.len() < weights.len() {
        return false;
    }
    let terms = weights
        .iter()
        .zip(digits)
        .map(|(&weight, &digit)| u64::from(weight) * u64::from(digit));

    is_nonzero_multiple(terms, 11)
}
