//! Pure date arithmetic behind the agent's tools.
//!
//! Every function here is synchronous and side-effect free. Failures are
//! reported as [`CalcError`], whose `Display` text is the Portuguese message
//! relayed to the end user by the tools layer.

pub mod calendar;
pub mod duration;
pub mod fractions;

use thiserror::Error;

pub use calendar::{
    date_difference, format_date, parse_date, shift_date, ShiftOperation, DATE_FORMAT,
};
pub use duration::{
    days_from_duration, describe_days, duration_from_days, Duration, DAYS_PER_MONTH, DAYS_PER_YEAR,
};
pub use fractions::{fraction_and_percentage, FractionReport, Share};

/// Validation failures of the date helpers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("Por favor, informe um valor válido.")]
    InvalidValue,

    #[error("Por favor, informe datas válidas no formato 'DD-MM-YYYY'.")]
    InvalidDates,

    #[error("Por favor, informe uma data válida no formato 'DD-MM-YYYY'.")]
    InvalidDate,

    #[error("Operação inválida. Use 'soma' ou 'subtrai'.")]
    InvalidOperation,

    #[error("A data resultante está fora do intervalo suportado.")]
    OutOfRange,
}

/// Result type for the date helpers
pub type CalcResult<T> = std::result::Result<T, CalcError>;
