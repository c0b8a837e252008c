use super::{CalcError, CalcResult};
use chrono::{Days, NaiveDate};
use std::str::FromStr;

/// `DD-MM-YYYY`, the only date format the tools accept and emit.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Direction of a date shift, named after the keywords the model sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftOperation {
    /// `"soma"`
    Add,
    /// `"subtrai"`
    Subtract,
}

impl FromStr for ShiftOperation {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        match s {
            "soma" => Ok(ShiftOperation::Add),
            "subtrai" => Ok(ShiftOperation::Subtract),
            _ => Err(CalcError::InvalidOperation),
        }
    }
}

/// Parses a `DD-MM-YYYY` date, ignoring surrounding whitespace.
///
/// The year must be exactly four digits; chrono's `%Y` alone would read
/// `"01-01-25"` as year 25.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    let (_, year) = input.rsplit_once('-')?;
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    NaiveDate::parse_from_str(input, DATE_FORMAT).ok()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Absolute number of days between two `DD-MM-YYYY` dates.
pub fn date_difference(date1: &str, date2: &str) -> CalcResult<i64> {
    let (Some(first), Some(second)) = (parse_date(date1), parse_date(date2)) else {
        return Err(CalcError::InvalidDates);
    };

    Ok(second.signed_duration_since(first).num_days().abs())
}

/// Moves `date` forwards (`"soma"`) or backwards (`"subtrai"`) by `days`.
///
/// The date is validated before the operation keyword.
pub fn shift_date(date: &str, operation: &str, days: i64) -> CalcResult<NaiveDate> {
    let start = parse_date(date).ok_or(CalcError::InvalidDate)?;
    let operation: ShiftOperation = operation.parse()?;

    let forward = (operation == ShiftOperation::Add) == (days >= 0);
    let step = Days::new(days.unsigned_abs());

    let shifted = if forward {
        start.checked_add_days(step)
    } else {
        start.checked_sub_days(step)
    };

    shifted.ok_or(CalcError::OutOfRange)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shifted(date: &str, operation: &str, days: i64) -> CalcResult<String> {
        shift_date(date, operation, days).map(format_date)
    }

    #[test]
    fn test_date_difference_leap_year() {
        assert_eq!(date_difference("01-01-2020", "01-01-2021"), Ok(366));
        assert_eq!(date_difference("01-01-2021", "01-01-2022"), Ok(365));
    }

    #[test]
    fn test_date_difference_is_absolute() {
        assert_eq!(date_difference("23-08-2025", "01-04-2025"), Ok(144));
        assert_eq!(date_difference("01-04-2025", "23-08-2025"), Ok(144));
        assert_eq!(date_difference("10-10-2024", "10-10-2024"), Ok(0));
    }

    #[test]
    fn test_date_difference_rejects_other_formats() {
        assert_eq!(
            date_difference("2020-01-01", "01-01-2021"),
            Err(CalcError::InvalidDates)
        );
        assert_eq!(
            date_difference("01-01-2020", "31-02-2021"),
            Err(CalcError::InvalidDates)
        );
        assert_eq!(
            CalcError::InvalidDates.to_string(),
            "Por favor, informe datas válidas no formato 'DD-MM-YYYY'."
        );
    }

    #[test]
    fn test_year_must_have_four_digits() {
        assert_eq!(parse_date("01-01-25"), None);
        assert_eq!(parse_date("01-01-02025"), None);
        assert_eq!(parse_date("01-01-+202"), None);
        assert_eq!(parse_date("01-01-2025"), NaiveDate::from_ymd_opt(2025, 1, 1));

        assert_eq!(
            date_difference("01-01-25", "01-01-2025"),
            Err(CalcError::InvalidDates)
        );
        assert_eq!(shifted("01-01-25", "soma", 45), Err(CalcError::InvalidDate));
    }

    #[test]
    fn test_shift_date() {
        assert_eq!(shifted("01-01-2025", "soma", 45).unwrap(), "15-02-2025");
        assert_eq!(shifted("05-04-2025", "subtrai", 30).unwrap(), "06-03-2025");
        assert_eq!(shifted(" 28-02-2024 ", "soma", 1).unwrap(), "29-02-2024");
    }

    #[test]
    fn test_shift_date_negative_days_reverses_direction() {
        assert_eq!(shifted("15-02-2025", "soma", -45).unwrap(), "01-01-2025");
        assert_eq!(shifted("06-03-2025", "subtrai", -30).unwrap(), "05-04-2025");
    }

    #[test]
    fn test_shift_date_invalid_operation() {
        assert_eq!(
            shifted("01-01-2025", "multiplica", 3),
            Err(CalcError::InvalidOperation)
        );
        assert_eq!(
            CalcError::InvalidOperation.to_string(),
            "Operação inválida. Use 'soma' ou 'subtrai'."
        );
    }

    #[test]
    fn test_shift_date_checks_date_first() {
        assert_eq!(
            shifted("2025/01/01", "multiplica", 3),
            Err(CalcError::InvalidDate)
        );
    }

    #[test]
    fn test_shift_date_out_of_range() {
        assert_eq!(
            shifted("01-01-2025", "soma", i64::MAX),
            Err(CalcError::OutOfRange)
        );
        assert_eq!(
            shifted("01-01-2025", "subtrai", i64::MIN),
            Err(CalcError::OutOfRange)
        );
    }
}
