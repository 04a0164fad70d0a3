use tracing::trace;

use crate::cursor::{TimeCursor, TimeField};
use crate::error::SearchError;
use crate::field::FieldSet;
use crate::schedule::CronSchedule;

/// How far past the seed's year the month search may drift before the
/// expression is declared unsatisfiable.
const MAX_YEAR_DRIFT: i32 = 4;

/// Cap on day-by-day advances in the combined day-of-month/day-of-week
/// search; day values alone repeat within a year.
const MAX_DAY_ATTEMPTS: u32 = 366;

/// Smallest instant strictly after `millis` matching every field of the
/// schedule, as epoch milliseconds.
pub(crate) fn next_after(schedule: &CronSchedule, millis: i64) -> Result<i64, SearchError> {
    let mut cursor = TimeCursor::from_millis(millis, schedule.timezone())
        .ok_or(SearchError::InvalidTimestamp { millis })?;
    let seed = cursor
        .timestamp_millis()
        .ok_or(SearchError::InvalidTimestamp { millis })?;

    run_pass(schedule, &mut cursor)?;
    let mut result = cursor
        .timestamp_millis()
        .ok_or(SearchError::InvalidTimestamp { millis })?;

    // a result equal to the seed means the seed itself matched; bump one
    // second and search again so the answer is strictly later
    if result == seed {
        cursor.add(TimeField::Second);
        run_pass(schedule, &mut cursor)?;
        result = cursor
            .timestamp_millis()
            .ok_or(SearchError::InvalidTimestamp { millis })?;
    }
    Ok(result)
}

/// One search pass: visit fields from finest to coarsest, carrying and
/// restarting until the cursor satisfies all of them at once.
///
/// Any field that advances invalidates the finer fields already visited, so
/// the pass restarts from the seconds. The restart count is bounded by the
/// day and year guards.
fn run_pass(schedule: &CronSchedule, cursor: &mut TimeCursor) -> Result<(), SearchError> {
    let fields = schedule.fields();
    let base_year = cursor.get(TimeField::Year);

    'pass: loop {
        trace!(year = cursor.get(TimeField::Year), "search pass");

        // fields visited without advancing; zeroed if a coarser field moves
        let mut pending_resets: Vec<TimeField> = Vec::new();

        let second = cursor.get(TimeField::Second);
        let next_second = find_next(
            &fields.seconds,
            second,
            cursor,
            TimeField::Second,
            TimeField::Minute,
            &pending_resets,
        );
        if next_second == second {
            pending_resets.push(TimeField::Second);
        }

        let minute = cursor.get(TimeField::Minute);
        let next_minute = find_next(
            &fields.minutes,
            minute,
            cursor,
            TimeField::Minute,
            TimeField::Hour,
            &pending_resets,
        );
        if next_minute == minute {
            pending_resets.push(TimeField::Minute);
        } else {
            continue 'pass;
        }

        let hour = cursor.get(TimeField::Hour);
        let next_hour = find_next(
            &fields.hours,
            hour,
            cursor,
            TimeField::Hour,
            TimeField::Day,
            &pending_resets,
        );
        if next_hour == hour {
            pending_resets.push(TimeField::Hour);
        } else {
            continue 'pass;
        }

        let day = cursor.get(TimeField::Day);
        let next_day = find_next_day(schedule, cursor, &pending_resets)?;
        if next_day == day {
            pending_resets.push(TimeField::Day);
        } else {
            continue 'pass;
        }

        let month = cursor.get(TimeField::Month);
        let next_month = find_next(
            &fields.months,
            month,
            cursor,
            TimeField::Month,
            TimeField::Year,
            &pending_resets,
        );
        if next_month != month {
            if cursor.get(TimeField::Year) - base_year > MAX_YEAR_DRIFT {
                return Err(SearchError::Unsatisfiable {
                    expression: schedule.expression().to_string(),
                    cap: MAX_YEAR_DRIFT,
                });
            }
            continue 'pass;
        }

        return Ok(());
    }
}

/// Advance one field to its next allowed value.
///
/// No member at or above the current value means the field's domain is
/// exhausted: carry one unit into `coarser` and restart from the domain
/// floor. When the field moves, every finer field in `pending_resets` is
/// zeroed.
fn find_next(
    set: &FieldSet,
    value: i32,
    cursor: &mut TimeCursor,
    field: TimeField,
    coarser: TimeField,
    pending_resets: &[TimeField],
) -> i32 {
    let next = match set.next_member(value as u8) {
        Some(v) => v,
        None => {
            cursor.add(coarser);
            cursor.reset(field);
            set.first()
        }
    };
    let next = next as i32;

    if next != value {
        cursor.set(field, next);
        for f in pending_resets {
            cursor.reset(*f);
        }
    }
    next
}

/// Walk forward one day at a time until the date satisfies the day-of-month
/// and day-of-week sets simultaneously (AND semantics).
fn find_next_day(
    schedule: &CronSchedule,
    cursor: &mut TimeCursor,
    pending_resets: &[TimeField],
) -> Result<i32, SearchError> {
    let fields = schedule.fields();
    let mut attempts: u32 = 0;

    while !(fields.days_of_month.contains(cursor.get(TimeField::Day) as u8)
        && fields.days_of_week.contains(cursor.weekday()))
    {
        attempts += 1;
        if attempts >= MAX_DAY_ATTEMPTS {
            return Err(SearchError::DayOverflow {
                expression: schedule.expression().to_string(),
                cap: MAX_DAY_ATTEMPTS,
            });
        }
        cursor.add(TimeField::Day);
        for f in pending_resets {
            cursor.reset(*f);
        }
    }

    Ok(cursor.get(TimeField::Day))
}
