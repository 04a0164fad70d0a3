use chrono::{Datelike, Duration, LocalResult, NaiveDate, TimeZone, Timelike};
use chrono_tz::Tz;

/// One calendar axis of the cursor, finest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TimeField {
    Second,
    Minute,
    Hour,
    Day,
    Month,
    Year,
}

/// Mutable wall-clock position in a fixed timezone, decomposed into
/// calendar components so fields can be set and carried independently.
///
/// Months run over the internal [0,12) domain. Owned exclusively by one
/// search invocation.
#[derive(Debug, Clone)]
pub(crate) struct TimeCursor {
    year: i32,
    month0: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    tz: Tz,
}

impl TimeCursor {
    /// Position the cursor at `millis`, truncated to whole-second
    /// precision. `None` if the instant is outside chrono's range.
    pub fn from_millis(millis: i64, tz: Tz) -> Option<TimeCursor> {
        let dt = match tz.timestamp_millis_opt(millis) {
            LocalResult::Single(dt) => dt,
            _ => return None,
        };
        Some(TimeCursor {
            year: dt.year(),
            month0: dt.month0() as u8,
            day: dt.day() as u8,
            hour: dt.hour() as u8,
            minute: dt.minute() as u8,
            second: dt.second() as u8,
            tz,
        })
    }

    pub fn get(&self, field: TimeField) -> i32 {
        match field {
            TimeField::Second => self.second as i32,
            TimeField::Minute => self.minute as i32,
            TimeField::Hour => self.hour as i32,
            TimeField::Day => self.day as i32,
            TimeField::Month => self.month0 as i32,
            TimeField::Year => self.year,
        }
    }

    /// Set one field with no cascading side effect.
    pub fn set(&mut self, field: TimeField, value: i32) {
        match field {
            TimeField::Second => self.second = value as u8,
            TimeField::Minute => self.minute = value as u8,
            TimeField::Hour => self.hour = value as u8,
            TimeField::Day => self.day = value as u8,
            TimeField::Month => self.month0 = value as u8,
            TimeField::Year => self.year = value,
        }
    }

    /// Set one field back to its domain minimum (1 for days, 0 otherwise).
    pub fn reset(&mut self, field: TimeField) {
        let floor = if field == TimeField::Day { 1 } else { 0 };
        self.set(field, floor);
    }

    /// Add one unit to a field, carrying into coarser fields per calendar
    /// rules (59 seconds roll into the next minute, Dec 31 into Jan 1).
    pub fn add(&mut self, field: TimeField) {
        match field {
            TimeField::Second => {
                if self.second == 59 {
                    self.second = 0;
                    self.add(TimeField::Minute);
                } else {
                    self.second += 1;
                }
            }
            TimeField::Minute => {
                if self.minute == 59 {
                    self.minute = 0;
                    self.add(TimeField::Hour);
                } else {
                    self.minute += 1;
                }
            }
            TimeField::Hour => {
                if self.hour == 23 {
                    self.hour = 0;
                    self.add(TimeField::Day);
                } else {
                    self.hour += 1;
                }
            }
            TimeField::Day => {
                if self.day >= days_in_month(self.year, self.month0) {
                    self.day = 1;
                    self.add(TimeField::Month);
                } else {
                    self.day += 1;
                }
            }
            TimeField::Month => {
                if self.month0 == 11 {
                    self.month0 = 0;
                    self.add(TimeField::Year);
                } else {
                    self.month0 += 1;
                }
            }
            TimeField::Year => {
                self.year += 1;
            }
        }
    }

    /// Day of week for the cursor's date, 0 = Sunday through 6 = Saturday.
    pub fn weekday(&self) -> u8 {
        NaiveDate::from_ymd_opt(self.year, self.month0 as u32 + 1, self.day as u32)
            .map_or(0, |d| d.weekday().num_days_from_sunday() as u8)
    }

    /// Resolve the cursor's wall-clock components to epoch milliseconds in
    /// its timezone. An ambiguous local time (DST fall-back) resolves to the
    /// earlier instant; a nonexistent one (DST gap) rolls forward an hour.
    pub fn timestamp_millis(&self) -> Option<i64> {
        let naive = NaiveDate::from_ymd_opt(self.year, self.month0 as u32 + 1, self.day as u32)?
            .and_hms_opt(self.hour as u32, self.minute as u32, self.second as u32)?;
        match self.tz.from_local_datetime(&naive) {
            LocalResult::Single(dt) => Some(dt.timestamp_millis()),
            LocalResult::Ambiguous(earliest, _) => Some(earliest.timestamp_millis()),
            LocalResult::None => self
                .tz
                .from_local_datetime(&(naive + Duration::hours(1)))
                .earliest()
                .map(|dt| dt.timestamp_millis()),
        }
    }
}

fn days_in_month(year: i32, month0: u8) -> u8 {
    match month0 {
        0 | 2 | 4 | 6 | 7 | 9 | 11 => 31,
        3 | 5 | 8 | 10 => 30,
        _ => {
            if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
                29
            } else {
                28
            }
        }
    }
}
