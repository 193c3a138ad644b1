use crate::checksum::{ascii_digits, digits_to_number};
use crate::date::is_valid_date;
use crate::error::ValidationError;
use crate::observability::metrics::ValidationMetrics;
use crate::validator::Validator;
use lazy_static::lazy_static;
use regex::Regex;

pub struct FinnishSsn;

const HETU_LENGTH: usize = 11;
const CONTROL_CHARS: &[u8; 31] = b"0123456789ABCDEFHJKLMNPRSTUVWXY";

/// Century of the two-digit year, by century marker.
const CENTURY_MARKERS: [(u8, i64); 13] = [
    (b'A', 2000),
    (b'B', 2000),
    (b'C', 2000),
    (b'D', 2000),
    (b'E', 2000),
    (b'F', 2000),
    (b'-', 1900),
    (b'U', 1900),
    (b'V', 1900),
    (b'W', 1900),
    (b'X', 1900),
    (b'Y', 1900),
    (b'+', 1800),
];

lazy_static! {
    // DDMMYYCZZZQ. `+` is only used for years 50-99 and A-F for years 00-29.
    static ref FINNISH_SSN_REGEX: Regex = Regex::new(
        r"^(0[1-9]|[12][0-9]|3[01])(0[1-9]|1[0-2])([5-9][0-9]\+|[0-9]{2}[-U-Y]|[012][0-9][A-F])[0-9]{3}[0-9A-Z]$"
    )
    .unwrap();
}

/// Validates a Finnish personal identity code (henkilötunnus).
///
/// The control character is case sensitive: only upper case letters are accepted.
pub fn is_valid_finnish_ssn(input: &str) -> bool {
    ValidationMetrics::new("finnish_ssn")
        .collapse(validate(input))
        .is_some()
}

impl Validator for FinnishSsn {
    fn is_valid_match(&self, candidate: &str) -> bool {
        is_valid_finnish_ssn(candidate)
    }
}

fn validate(input: &str) -> Result<(), ValidationError> {
    if input.len() != HETU_LENGTH {
        return Err(ValidationError::Format("expected 11 characters"));
    }
    if !FINNISH_SSN_REGEX.is_match(input) {
        return Err(ValidationError::Format("expected DDMMYYCZZZQ"));
    }

    // The regex only lets ASCII through, byte offsets are character offsets
    let bytes = input.as_bytes();
    let date_digits =
        ascii_digits(&input[0..6]).ok_or(ValidationError::Format("expected a date"))?;
    let individual_digits = ascii_digits(&input[7..10])
        .ok_or(ValidationError::Format("expected an individual number"))?;

    let century = century_of(bytes[6]).ok_or(ValidationError::Format("unknown century marker"))?;
    let day = digits_to_number(&date_digits[0..2]);
    let month = digits_to_number(&date_digits[2..4]);
    let year = century + i64::from(digits_to_number(&date_digits[4..6]));
    if !is_valid_date(year, month, day) {
        return Err(ValidationError::Date);
    }

    let checksum_base = digits_to_number(&[date_digits, individual_digits].concat());
    let expected = CONTROL_CHARS[(checksum_base % 31) as usize];
    if bytes[10] != expected {
        return Err(ValidationError::Checksum);
    }
    Ok(())
}

fn century_of(marker: u8) -> Option<i64> {
    CENTURY_MARKERS
        .iter()
        .find(|(candidate, _)| *candidate == marker)
        .map(|(_, century)| *century)
}
