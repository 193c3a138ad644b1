use crate::checksum::{ascii_digits, digits_to_number, weighted_mod11};
use crate::date::{is_valid_date, to_naive_date};
use crate::error::ValidationError;
use crate::observability::metrics::ValidationMetrics;
use crate::validator::Validator;
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::ops::Range;
use strum::Display;

pub struct NorwegianSsn;

const ID_NUMBER_LENGTH: usize = 11;

const FIRST_CHECK_DIGIT_WEIGHTS: [u32; 10] = [3, 7, 6, 1, 8, 9, 4, 5, 2, 1];
const SECOND_CHECK_DIGIT_WEIGHTS: [u32; 11] = [5, 4, 3, 2, 7, 6, 5, 4, 3, 2, 1];

/// Ages outside of this range can't belong to a living person.
const PLAUSIBLE_AGES: Range<i32> = 0..125;

/// Offset added to the day (D-number) or the month (H-number) of the birth date.
const DIGIT_OFFSET: u32 = 4;

/// The different kinds of Norwegian identification numbers.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum IdNumberType {
    /// National identity number (fødselsnummer), given to residents.
    BirthNumber,
    /// Temporary number for people staying a short while. The first digit is raised by 4.
    DNumber,
    /// Assistance number for people without a known identity. The third digit is raised by 4.
    HNumber,
    /// Health care number for anonymous patients. Carries neither birth date nor gender.
    FhNumber,
}

/// One row of the century table, evaluated in order.
struct CenturyBand {
    individual_numbers: Range<u32>,
    /// Lowest two-digit year the band applies to
    min_year: u32,
    applies_to_d_numbers: bool,
    century: i64,
}

const CENTURY_BANDS: [CenturyBand; 3] = [
    CenturyBand {
        individual_numbers: 0..500,
        min_year: 0,
        applies_to_d_numbers: true,
        century: 1900,
    },
    CenturyBand {
        individual_numbers: 500..750,
        min_year: 54,
        applies_to_d_numbers: false,
        century: 1800,
    },
    CenturyBand {
        individual_numbers: 900..1000,
        min_year: 40,
        applies_to_d_numbers: false,
        century: 1900,
    },
];

const DEFAULT_CENTURY: i64 = 2000;

impl CenturyBand {
    fn matches(&self, kind: IdNumberType, individual_number: u32, year: u32) -> bool {
        (self.applies_to_d_numbers || kind != IdNumberType::DNumber)
            && self.individual_numbers.contains(&individual_number)
            && year >= self.min_year
    }
}

/// Validates a Norwegian identification number: birth number, D-number, H-number or FH-number.
///
/// Both check digits must match. Except for FH-numbers, the embedded birth date must exist
/// and give an age between 0 and 124 years as of today.
pub fn is_valid_norwegian_ssn(input: &str) -> bool {
    is_valid_norwegian_ssn_at(input, today())
}

/// Same as [is_valid_norwegian_ssn], computing the age as of `today`.
pub fn is_valid_norwegian_ssn_at(input: &str, today: NaiveDate) -> bool {
    ValidationMetrics::new("norwegian_ssn")
        .collapse(validate(input, today))
        .is_some()
}

impl Validator for NorwegianSsn {
    fn is_valid_match(&self, candidate: &str) -> bool {
        is_valid_norwegian_ssn(candidate)
    }
}

/// Kind of identification number, without validating anything else than the format.
pub fn norwegian_id_number_type(input: &str) -> Option<IdNumberType> {
    parse_digits(input).ok().map(|digits| id_number_type(&digits))
}

/// Birth date embedded in an identification number. Check digits are not verified.
///
/// `None` for FH-numbers and for numbers whose date doesn't exist.
pub fn norwegian_birth_date(input: &str) -> Option<NaiveDate> {
    let digits = parse_digits(input).ok()?;
    birth_date(&digits, id_number_type(&digits)).ok()
}

/// Age of the holder of an identification number, only when it is plausible.
pub fn norwegian_age(input: &str) -> Option<u32> {
    norwegian_age_at(input, today())
}

/// Same as [norwegian_age], as of `today`.
pub fn norwegian_age_at(input: &str, today: NaiveDate) -> Option<u32> {
    let birth_date = norwegian_birth_date(input)?;
    plausible_age(today, birth_date).ok()
}

/// Number of whole years between two dates.
///
/// The difference of the calendar years, minus one when the anniversary of `earlier` is still
/// to come in the year of `later`. Negative when `earlier` is after `later`.
pub fn diff_years(later: NaiveDate, earlier: NaiveDate) -> i32 {
    let diff = later.year() - earlier.year();
    if (earlier.month(), earlier.day()) > (later.month(), later.day()) {
        diff - 1
    } else {
        diff
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn validate(input: &str, today: NaiveDate) -> Result<(), ValidationError> {
    let digits = parse_digits(input)?;

    if !weighted_mod11(&FIRST_CHECK_DIGIT_WEIGHTS, &digits)
        || !weighted_mod11(&SECOND_CHECK_DIGIT_WEIGHTS, &digits)
    {
        return Err(ValidationError::Checksum);
    }

    let kind = id_number_type(&digits);
    if kind == IdNumberType::FhNumber {
        return Ok(());
    }

    let birth_date = birth_date(&digits, kind)?;
    plausible_age(today, birth_date)?;
    Ok(())
}

fn parse_digits(input: &str) -> Result<[u32; ID_NUMBER_LENGTH], ValidationError> {
    let trimmed = input.trim();
    if trimmed.len() != ID_NUMBER_LENGTH {
        return Err(ValidationError::Format("expected 11 digits"));
    }
    let digits = ascii_digits(trimmed).ok_or(ValidationError::Format("expected only digits"))?;
    digits
        .try_into()
        .map_err(|_| ValidationError::Format("expected 11 digits"))
}

fn id_number_type(digits: &[u32; ID_NUMBER_LENGTH]) -> IdNumberType {
    match digits[0] {
        8 | 9 => IdNumberType::FhNumber,
        4..=7 => IdNumberType::DNumber,
        _ => match digits[2] {
            4 | 5 => IdNumberType::HNumber,
            _ => IdNumberType::BirthNumber,
        },
    }
}

fn birth_date(
    digits: &[u32; ID_NUMBER_LENGTH],
    kind: IdNumberType,
) -> Result<NaiveDate, ValidationError> {
    let mut corrected = *digits;
    match kind {
        IdNumberType::FhNumber => return Err(ValidationError::Format("no birth date")),
        IdNumberType::DNumber => corrected[0] -= DIGIT_OFFSET,
        IdNumberType::HNumber => corrected[2] -= DIGIT_OFFSET,
        IdNumberType::BirthNumber => {}
    }

    let day = digits_to_number(&corrected[0..2]);
    let month = digits_to_number(&corrected[2..4]);
    let year = digits_to_number(&corrected[4..6]);
    let individual_number = digits_to_number(&corrected[6..9]);

    if !is_valid_date(year, month, day) {
        return Err(ValidationError::Date);
    }

    let century = CENTURY_BANDS
        .iter()
        .find(|band| band.matches(kind, individual_number, year))
        .map_or(DEFAULT_CENTURY, |band| band.century);

    // The two-digit year may be a leap year while the full one isn't (e.g. 1900)
    to_naive_date(century + i64::from(year), month, day).ok_or(ValidationError::Date)
}

fn plausible_age(today: NaiveDate, birth_date: NaiveDate) -> Result<u32, ValidationError> {
    let age = diff_years(today, birth_date);
    if !PLAUSIBLE_AGES.contains(&age) {
        return Err(ValidationError::Age);
    }
    u32::try_from(age).map_err(|_| ValidationError::Age)
}
