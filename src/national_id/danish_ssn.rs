use crate::date::is_valid_date;
use crate::error::ValidationError;
use crate::observability::metrics::ValidationMetrics;
use crate::validator::Validator;
use lazy_static::lazy_static;
use regex::Regex;

pub struct DanishSsn;

const CPR_LENGTH: usize = 10;

lazy_static! {
    // DDMMYYSSSS
    static ref DANISH_SSN_REGEX: Regex =
        Regex::new(r"^(0[1-9]|[12][0-9]|3[01])(0[1-9]|1[0-2])([0-9]{2})([0-9]{4})$").unwrap();
}

/// Validates a Danish CPR number.
///
/// CPR numbers have no check digit, only the format and the birth date are checked. The
/// century is not encoded so the date is checked against its two-digit year.
pub fn is_valid_danish_ssn(input: &str) -> bool {
    ValidationMetrics::new("danish_ssn")
        .collapse(validate(input))
        .is_some()
}

impl Validator for DanishSsn {
    fn is_valid_match(&self, candidate: &str) -> bool {
        is_valid_danish_ssn(candidate)
    }
}

fn validate(input: &str) -> Result<(), ValidationError> {
    if input.len() != CPR_LENGTH {
        return Err(ValidationError::Format("expected 10 characters"));
    }
    let captures = DANISH_SSN_REGEX
        .captures(input)
        .ok_or(ValidationError::Format("expected DDMMYYSSSS"))?;

    let field = |index: usize| -> Result<u32, ValidationError> {
        captures
            .get(index)
            .and_then(|m| m.as_str().parse().ok())
            .ok_or(ValidationError::Format("expected DDMMYYSSSS"))
    };
    let (day, month, year) = (field(1)?, field(2)?, field(3)?);

    if !is_valid_date(year, month, day) {
        return Err(ValidationError::Date);
    }
    Ok(())
}
