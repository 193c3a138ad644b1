use crate::checksum::{ascii_digits, digits_to_number, mod10_digits};
use crate::date::is_valid_date;
use crate::error::ValidationError;
use crate::observability::metrics::ValidationMetrics;
use crate::validator::Validator;
use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;

pub struct SwedishSsn;

const SEPARATOR: char = '-';
const SHORT_FORM_LENGTH: usize = 10;

lazy_static! {
    // YYMMDD-XXXX or YYYYMMDD-XXXX
    static ref SWEDISH_SSN_REGEX: Regex =
        Regex::new(r"^(?:[0-9]{6}|[0-9]{8})-[0-9]{4}$").unwrap();
}

/// Validates a Swedish personal identity number (personnummer).
///
/// Accepts `YYMMDD-XXXX`, `YYYYMMDD-XXXX` and the same forms without separator. The
/// century digits of the long form are ignored: the date is checked with its two-digit year.
pub fn is_valid_swedish_ssn(input: &str) -> bool {
    ValidationMetrics::new("swedish_ssn")
        .collapse(validate(input))
        .is_some()
}

impl Validator for SwedishSsn {
    fn is_valid_match(&self, candidate: &str) -> bool {
        is_valid_swedish_ssn(candidate)
    }
}

fn validate(input: &str) -> Result<(), ValidationError> {
    if input.is_empty() {
        return Err(ValidationError::Format("empty input"));
    }
    if !input.is_ascii() {
        return Err(ValidationError::Format("non-ascii characters"));
    }

    let normalized = with_separator(input)?;
    if !SWEDISH_SSN_REGEX.is_match(&normalized) {
        return Err(ValidationError::Format("expected YYMMDD-XXXX or YYYYMMDD-XXXX"));
    }

    let digits: String = normalized.chars().filter(|c| *c != SEPARATOR).collect();
    let mut digits =
        ascii_digits(&digits).ok_or(ValidationError::Format("expected only digits"))?;
    if digits.len() > SHORT_FORM_LENGTH {
        digits.drain(..digits.len() - SHORT_FORM_LENGTH);
    }

    let year = digits_to_number(&digits[0..2]);
    let month = digits_to_number(&digits[2..4]);
    let day = digits_to_number(&digits[4..6]);
    if !is_valid_date(year, month, day) {
        return Err(ValidationError::Date);
    }

    if !mod10_digits(&digits) {
        return Err(ValidationError::Checksum);
    }
    Ok(())
}

/// Inserts the separator before the last four digits when it's missing.
fn with_separator(input: &str) -> Result<Cow<'_, str>, ValidationError> {
    if input.contains(SEPARATOR) {
        return Ok(Cow::Borrowed(input));
    }
    let split_at = if input.len() == SHORT_FORM_LENGTH { 6 } else { 8 };
    if input.len() < split_at {
        return Err(ValidationError::Format("too short"));
    }
    let (date, serial) = input.split_at(split_at);
    Ok(Cow::Owned(format!("{date}{SEPARATOR}{serial}")))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn validate_swedish_ssns() {
        let valid_ssns = vec![
            // current century
            "202302185760",
            // without century
            "2302185760",
            // mid 20th century
            "195403018798",
            // early 20th century
            "193207264171",
            "19320726-4171",
            "320726-4171",
            "811228-9874",
            "670919-9530",
        ];
        for ssn in valid_ssns {
            assert!(SwedishSsn.is_valid_match(ssn), "{ssn} should be valid");
        }
    }

    #[test]
    fn test_invalid_swedish_ssns() {
        let invalid_ssns = vec![
            // too short
            "19",
            // too long
            "1932072641712",
            "",
            // bad checksum
            "193207264172",
            "811228-9873",
            // Feb 29 on a non-leap year
            "199902294171",
            // misplaced separator
            "1932-07264171",
            "32072-64171",
            // unexpected characters
            "19320726+4171",
            "１９３２０７２６４１７１",
            "abcdefghij",
        ];
        for ssn in invalid_ssns {
            assert!(!SwedishSsn.is_valid_match(ssn), "{ssn} should be invalid");
        }
    }

    #[test]
    fn failures_carry_a_reason() {
        assert_eq!(validate(""), Err(ValidationError::Format("empty input")));
        assert_eq!(validate("199902294171"), Err(ValidationError::Date));
        assert_eq!(validate("193207264172"), Err(ValidationError::Checksum));
    }

    #[test]
    fn separator_is_inserted_by_length() {
        assert_eq!(with_separator("2302185760").unwrap(), "230218-5760");
        assert_eq!(with_separator("202302185760").unwrap(), "20230218-5760");
        assert_eq!(with_separator("230218-5760").unwrap(), "230218-5760");
        assert!(with_separator("1234567").is_err());
    }
}
