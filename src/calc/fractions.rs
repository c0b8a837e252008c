use super::{CalcError, CalcResult};
use serde::Serialize;
use std::fmt;

/// Sentence-reduction fractions as `(label, numerator, denominator)`.
const FRACTIONS: [(&str, i64, i64); 11] = [
    ("1/6", 1, 6),
    ("1/5", 1, 5),
    ("1/4", 1, 4),
    ("1/3", 1, 3),
    ("3/8", 3, 8),
    ("2/5", 2, 5),
    ("5/12", 5, 12),
    ("11/24", 11, 24),
    ("1/2", 1, 2),
    ("3/5", 3, 5),
    ("2/3", 2, 3),
];

const PERCENTAGES: [(&str, f64); 8] = [
    ("16%", 0.16),
    ("20%", 0.20),
    ("25%", 0.25),
    ("30%", 0.30),
    ("40%", 0.40),
    ("50%", 0.50),
    ("60%", 0.60),
    ("70%", 0.70),
];

const ENTRY_SEPARATOR: &str = " | ";

/// One labelled portion of a day count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Share {
    pub label: &'static str,
    pub value: f64,
}

impl fmt::Display for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.2}", self.label, self.value)
    }
}

/// Fixed fractions and percentages of a day count.
///
/// Renders as two lines, fractions first, entries separated by `" | "`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FractionReport {
    pub fractions: Vec<Share>,
    pub percentages: Vec<Share>,
}

impl FractionReport {
    pub fn get(&self, label: &str) -> Option<f64> {
        self.fractions
            .iter()
            .chain(&self.percentages)
            .find(|share| share.label == label)
            .map(|share| share.value)
    }
}

impl fmt::Display for FractionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_group(f, &self.fractions)?;
        f.write_str("\n")?;
        write_group(f, &self.percentages)
    }
}

fn write_group(f: &mut fmt::Formatter<'_>, shares: &[Share]) -> fmt::Result {
    for (idx, share) in shares.iter().enumerate() {
        if idx > 0 {
            f.write_str(ENTRY_SEPARATOR)?;
        }
        write!(f, "{}", share)?;
    }
    Ok(())
}

pub fn fraction_and_percentage(days: i64) -> CalcResult<FractionReport> {
    if days < 0 {
        return Err(CalcError::InvalidValue);
    }

    let fractions = FRACTIONS
        .iter()
        .map(|&(label, numerator, denominator)| Share {
            label,
            value: days as f64 * numerator as f64 / denominator as f64,
        })
        .collect();

    let percentages = PERCENTAGES
        .iter()
        .map(|&(label, rate)| Share {
            label,
            value: days as f64 * rate,
        })
        .collect();

    Ok(FractionReport {
        fractions,
        percentages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_for_300_days() {
        let report = fraction_and_percentage(300).unwrap();
        let text = report.to_string();

        assert!(text.contains("1/2: 150.00"));
        assert!(text.contains("50%: 150.00"));
        assert!(text.contains("1/6: 50.00"));
        assert!(text.contains("11/24: 137.50"));
        assert!(text.contains("70%: 210.00"));
        assert_eq!(report.get("2/3"), Some(200.0));
    }

    #[test]
    fn test_report_layout() {
        let report = fraction_and_percentage(24).unwrap();
        let text = report.to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("1/6: 4.00 | 1/5: 4.80"));
        assert!(lines[0].ends_with("2/3: 16.00"));
        assert!(lines[1].starts_with("16%: 3.84"));
        assert_eq!(lines[0].split(ENTRY_SEPARATOR).count(), 11);
        assert_eq!(lines[1].split(ENTRY_SEPARATOR).count(), 8);
    }

    #[test]
    fn test_repeating_fractions_round_to_two_places() {
        let report = fraction_and_percentage(100).unwrap();
        let text = report.to_string();

        assert!(text.contains("1/3: 33.33"));
        assert!(text.contains("2/3: 66.67"));
        assert!(text.contains("5/12: 41.67"));
    }

    #[test]
    fn test_zero_days() {
        let report = fraction_and_percentage(0).unwrap();
        assert!(report.fractions.iter().all(|share| share.value == 0.0));
    }

    #[test]
    fn test_negative_days_rejected() {
        assert_eq!(fraction_and_percentage(-5), Err(CalcError::InvalidValue));
    }
}
