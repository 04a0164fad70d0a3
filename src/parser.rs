use tracing::debug;

use crate::error::ParseError;
use crate::field::{FieldKind, FieldSet};

/// Allowed-value sets for the six fields, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldTable {
    pub seconds: FieldSet,
    pub minutes: FieldSet,
    pub hours: FieldSet,
    pub days_of_month: FieldSet,
    pub months: FieldSet,
    pub days_of_week: FieldSet,
}

pub(crate) const FIELD_COUNT: usize = 6;

/// Split the expression on whitespace and drive the per-field builders.
///
/// Fail-fast: the first field error aborts construction.
pub(crate) fn parse_expression(expression: &str) -> Result<FieldTable, ParseError> {
    let parts: Vec<&str> = expression.split_whitespace().collect();

    if parts.len() != FIELD_COUNT {
        return Err(ParseError::FieldCount {
            expected: FIELD_COUNT,
            found: parts.len(),
            expression: expression.to_string(),
        });
    }

    let [seconds, minutes, hours, days_of_month, months, days_of_week]: [&str; FIELD_COUNT] =
        parts.try_into().unwrap();

    debug!(expression, "parsing cron expression");

    Ok(FieldTable {
        seconds: FieldSet::build(FieldKind::Second, seconds)?,
        minutes: FieldSet::build(FieldKind::Minute, minutes)?,
        hours: FieldSet::build(FieldKind::Hour, hours)?,
        days_of_month: FieldSet::build(FieldKind::DayOfMonth, days_of_month)?,
        months: FieldSet::build(FieldKind::Month, months)?,
        days_of_week: FieldSet::build(FieldKind::DayOfWeek, days_of_week)?,
    })
}
