use thiserror::Error;

use crate::field::FieldKind;

/// Errors raised while turning expression text into a schedule.
///
/// Construction is fail-fast: the first bad field aborts parsing and no
/// partially-valid schedule is ever produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected {expected} fields in cron expression, got {found}: \"{expression}\"")]
    FieldCount {
        expected: usize,
        found: usize,
        expression: String,
    },

    #[error("incrementer has more than two parts: '{token}' in {field} field")]
    MalformedIncrementer { field: FieldKind, token: String },

    #[error("range has more than two parts: '{token}' in {field} field")]
    MalformedRange { field: FieldKind, token: String },

    #[error("invalid number '{token}' in {field} field")]
    InvalidNumber { field: FieldKind, token: String },

    #[error("value {value} in '{token}' exceeds maximum ({max}) for {field} field")]
    AboveMaximum {
        field: FieldKind,
        token: String,
        value: u8,
        max: u8,
    },

    #[error("value {value} in '{token}' is below minimum ({min}) for {field} field")]
    BelowMinimum {
        field: FieldKind,
        token: String,
        value: u8,
        min: u8,
    },

    #[error("step must be 1 or higher: '{token}' in {field} field")]
    ZeroStep { field: FieldKind, token: String },

    #[error("{field} field '{token}' allows no values at all")]
    EmptyField { field: FieldKind, token: String },
}

/// Errors raised while searching for the next fire time.
///
/// Neither variant is retried internally; the caller decides whether the
/// schedule is permanently broken or this tick should be skipped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("cron expression \"{expression}\" led to runaway search for next trigger (advanced more than {cap} years)")]
    Unsatisfiable { expression: String, cap: i32 },

    #[error("overflow in day search for cron expression \"{expression}\" ({cap} attempts)")]
    DayOverflow { expression: String, cap: u32 },

    #[error("timestamp {millis} is outside the representable range")]
    InvalidTimestamp { millis: i64 },
}
