use crate::checksum::{ascii_digits, is_nonzero_multiple};

/// Mod-10 (Luhn) validation of a string of ASCII digits.
///
/// Starting from the rightmost digit, every second digit is doubled and 9 is subtracted
/// from products above 9. The number is valid when the sum is a non-zero multiple of 10.
pub fn mod10(number: &str) -> bool {
    ascii_digits(number).is_some_and(|digits| mod10_digits(&digits))
}

pub(crate) fn mod10_digits(digits: &[u32]) -> bool {
    let terms = digits.iter().rev().enumerate().map(|(index, &digit)| {
        let product = if index % 2 == 0 { digit } else { digit * 2 };
        u64::from(if product > 9 { product - 9 } else { product })
    });

    is_nonzero_multiple(terms, 10)
}
