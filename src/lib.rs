//! Cron expression parsing and next-fire-time computation.
//!
//! Parses six-field cron expressions (`second minute hour day-of-month
//! month day-of-week`) into immutable per-field value sets, then computes
//! the next instant strictly after a given one that satisfies them all, in
//! a fixed timezone. Day-of-month and day-of-week are combined with AND
//! semantics: both must hold on the same date.
//!
//! ```
//! use chrono::TimeZone;
//! use cronseq::CronSchedule;
//!
//! let schedule = CronSchedule::new("0 0 9 * * MON-FRI", chrono_tz::UTC).unwrap();
//!
//! // Friday 2024-01-05 08:00 UTC -> same day 09:00
//! let from = chrono::Utc.with_ymd_and_hms(2024, 1, 5, 8, 0, 0).unwrap();
//! let next = schedule.next_after(from.timestamp_millis()).unwrap();
//! let expect = chrono::Utc.with_ymd_and_hms(2024, 1, 5, 9, 0, 0).unwrap();
//! assert_eq!(next, expect.timestamp_millis());
//! ```

pub mod error;
pub mod field;
pub mod schedule;

mod cursor;
mod parser;
mod range;
mod search;

pub use error::{ParseError, SearchError};
pub use field::{FieldKind, FieldSet};
pub use schedule::CronSchedule;
