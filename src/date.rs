use chrono::NaiveDate;

const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A numeric value that may be used as a calendar component.
///
/// Integers always convert. Floating point values only convert when they hold a whole number,
/// so that `2021.5` is rejected instead of being truncated to `2021`.
pub trait CalendarNumber: Copy {
    fn whole(self) -> Option<i64>;
}

macro_rules! impl_calendar_number_for_int {
    ($($int:ty),*) => {
        $(
            impl CalendarNumber for $int {
                #[inline]
                fn whole(self) -> Option<i64> {
                    i64::try_from(self).ok()
                }
            }
        )*
    };
}

impl_calendar_number_for_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

// Beyond this magnitude an f64 cannot distinguish consecutive integers anymore
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_991.0;

impl CalendarNumber for f64 {
    fn whole(self) -> Option<i64> {
        if self.is_finite() && self.fract() == 0.0 && self.abs() <= MAX_EXACT_FLOAT {
            Some(self as i64)
        } else {
            None
        }
    }
}

impl CalendarNumber for f32 {
    fn whole(self) -> Option<i64> {
        f64::from(self).whole()
    }
}

/// Gregorian leap year rule.
pub fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days of `month` (1-based) in `year`, `None` for a month outside 1..=12.
pub fn days_in_month(year: i64, month: u32) -> Option<u32> {
    let index = usize::try_from(month.checked_sub(1)?).ok()?;
    let days = *DAYS_IN_MONTH.get(index)?;
    if month == 2 && is_leap_year(year) {
        Some(days + 1)
    } else {
        Some(days)
    }
}

/// Checks that `(year, month, day)` names an existing day of the Gregorian calendar.
///
/// The check is done twice: once against the month lengths and once by asking `chrono` to
/// build the date, which also rejects years outside the representable range.
pub fn is_valid_date(
    year: impl CalendarNumber,
    month: impl CalendarNumber,
    day: impl CalendarNumber,
) -> bool {
    let (Some(year), Some(month), Some(day)) = (year.whole(), month.whole(), day.whole()) else {
        return false;
    };
    if !(1..=12).contains(&month) || day < 1 {
        return false;
    }
    let (Ok(month), Ok(day)) = (u32::try_from(month), u32::try_from(day)) else {
        return false;
    };

    let Some(max_day) = days_in_month(year, month) else {
        return false;
    };
    if day > max_day {
        return false;
    }

    to_naive_date(year, month, day).is_some()
}

pub(crate) fn to_naive_date(year: i64, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)
}
