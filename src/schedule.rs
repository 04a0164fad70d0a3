use std::fmt;

use chrono_tz::Tz;
use tracing::debug;

use crate::error::{ParseError, SearchError};
use crate::field::{FieldKind, FieldSet};
use crate::parser::{self, FieldTable};
use crate::search;

/// A parsed cron schedule bound to a timezone.
///
/// Immutable once constructed; a single schedule can be shared and queried
/// from any number of threads concurrently, each `next_after` call owning
/// its own search state.
#[derive(Debug, Clone)]
pub struct CronSchedule {
    expression: String,
    timezone: Tz,
    fields: FieldTable,
}

impl CronSchedule {
    /// Parse `expression` (six whitespace-separated fields: second, minute,
    /// hour, day-of-month, month, day-of-week) into a schedule evaluated in
    /// `timezone`.
    pub fn new(expression: &str, timezone: Tz) -> Result<CronSchedule, ParseError> {
        let fields = parser::parse_expression(expression)?;
        debug!(expression, %timezone, "built cron schedule");
        Ok(CronSchedule {
            expression: expression.to_string(),
            timezone,
            fields,
        })
    }

    /// The next instant strictly after `millis` (epoch milliseconds) that
    /// satisfies every field, in this schedule's timezone. Sub-second
    /// precision of the input is discarded before the search.
    pub fn next_after(&self, millis: i64) -> Result<i64, SearchError> {
        search::next_after(self, millis)
    }

    /// The original expression text.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Allowed-value set for one field, over its internal domain.
    pub fn field_set(&self, kind: FieldKind) -> &FieldSet {
        match kind {
            FieldKind::Second => &self.fields.seconds,
            FieldKind::Minute => &self.fields.minutes,
            FieldKind::Hour => &self.fields.hours,
            FieldKind::DayOfMonth => &self.fields.days_of_month,
            FieldKind::Month => &self.fields.months,
            FieldKind::DayOfWeek => &self.fields.days_of_week,
        }
    }

    pub(crate) fn fields(&self) -> &FieldTable {
        &self.fields
    }
}

/// Equality compares the allowed-value sets, not the expression spelling:
/// `"0 0 0 1 JAN *"` equals `"0 0 0 1 1 *"`.
impl PartialEq for CronSchedule {
    fn eq(&self, other: &Self) -> bool {
        self.fields == other.fields
    }
}

impl Eq for CronSchedule {}

impl fmt::Display for CronSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CronSchedule: {}", self.expression)
    }
}
