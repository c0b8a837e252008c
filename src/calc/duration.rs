use super::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Days counted per year. Not calendar-accurate.
pub const DAYS_PER_YEAR: i64 = 365;
/// Days counted per month. Not calendar-accurate.
pub const DAYS_PER_MONTH: i64 = 30;

/// A years/months/days triple under the 365/30-day convention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Duration {
    pub years: i64,
    pub months: i64,
    pub days: i64,
}

impl Duration {
    pub fn new(years: i64, months: i64, days: i64) -> Self {
        Self {
            years,
            months,
            days,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0 dias");
        }

        let parts: Vec<String> = [
            (self.years, "ano", "anos"),
            (self.months, "mês", "meses"),
            (self.days, "dia", "dias"),
        ]
        .into_iter()
        .filter(|(count, _, _)| *count > 0)
        .map(|(count, singular, plural)| {
            format!("{} {}", count, if count == 1 { singular } else { plural })
        })
        .collect();

        match parts.split_last() {
            Some((last, [])) => f.write_str(last),
            Some((last, rest)) => write!(f, "{} e {}", rest.join(", "), last),
            None => Ok(()),
        }
    }
}

/// Total days in `years`, `months` and `days`.
pub fn days_from_duration(years: i64, months: i64, days: i64) -> CalcResult<i64> {
    if years < 0 || months < 0 || days < 0 {
        return Err(CalcError::InvalidValue);
    }

    years
        .checked_mul(DAYS_PER_YEAR)
        .and_then(|total| total.checked_add(months.checked_mul(DAYS_PER_MONTH)?))
        .and_then(|total| total.checked_add(days))
        .ok_or(CalcError::InvalidValue)
}

/// Splits a day count into years, months and remaining days.
///
/// The split is greedy and never normalizes, so converting a duration with
/// `months >= 12` or `days >= 30` to days and back yields a different triple.
pub fn duration_from_days(days: i64) -> CalcResult<Duration> {
    if days < 0 {
        return Err(CalcError::InvalidValue);
    }

    let remainder = days % DAYS_PER_YEAR;
    Ok(Duration {
        years: days / DAYS_PER_YEAR,
        months: remainder / DAYS_PER_MONTH,
        days: remainder % DAYS_PER_MONTH,
    })
}

/// Day count written out in words, e.g. `"1 ano e 15 dias"`.
pub fn describe_days(days: i64) -> CalcResult<String> {
    duration_from_days(days).map(|duration| duration.to_string())
}
