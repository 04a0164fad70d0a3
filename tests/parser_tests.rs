// tests/parser_tests.rs

use chrono_tz::UTC;
use cronseq::{CronSchedule, FieldKind, FieldSet, ParseError};

fn members(set: &FieldSet, domain_max: u8) -> Vec<u8> {
    (0..domain_max).filter(|v| set.contains(*v)).collect()
}

fn assert_members(set: &FieldSet, expected: &[u8], domain_max: u8) {
    let got = members(set, domain_max);
    assert_eq!(got, expected.to_vec(), "field set mismatch");
}

#[test]
fn parses_wildcards_for_all_fields() {
    let s = CronSchedule::new("* * * * * *", UTC).unwrap();

    assert_eq!(members(s.field_set(FieldKind::Second), 60).len(), 60);
    assert_eq!(members(s.field_set(FieldKind::Minute), 60).len(), 60);
    assert_eq!(members(s.field_set(FieldKind::Hour), 24).len(), 24);
    // days 1..=31; the 0-slot is discarded
    assert_eq!(members(s.field_set(FieldKind::DayOfMonth), 32).len(), 31);
    assert!(!s.field_set(FieldKind::DayOfMonth).contains(0));
    // months live on the internal [0,12) domain
    assert_eq!(members(s.field_set(FieldKind::Month), 13).len(), 12);
    assert_eq!(members(s.field_set(FieldKind::DayOfWeek), 8).len(), 7);
}

#[test]
fn parses_simple_values_and_boundaries() {
    let s = CronSchedule::new("59 58 23 31 12 6", UTC).unwrap();

    assert_members(s.field_set(FieldKind::Second), &[59], 60);
    assert_members(s.field_set(FieldKind::Minute), &[58], 60);
    assert_members(s.field_set(FieldKind::Hour), &[23], 24);
    assert_members(s.field_set(FieldKind::DayOfMonth), &[31], 32);
    // December shifts down to internal 11
    assert_members(s.field_set(FieldKind::Month), &[11], 13);
    assert_members(s.field_set(FieldKind::DayOfWeek), &[6], 8);
}

#[test]
fn parses_comma_lists_and_ranges() {
    let s = CronSchedule::new("0,15,30,45 10-12 * 1,2,3 3-5 2-4", UTC).unwrap();

    assert_members(s.field_set(FieldKind::Second), &[0, 15, 30, 45], 60);
    assert_members(s.field_set(FieldKind::Minute), &[10, 11, 12], 60);
    assert_members(s.field_set(FieldKind::DayOfMonth), &[1, 2, 3], 32);
    assert_members(s.field_set(FieldKind::Month), &[2, 3, 4], 13);
    assert_members(s.field_set(FieldKind::DayOfWeek), &[2, 3, 4], 8);
}

#[test]
fn step_without_upper_bound_runs_to_the_ceiling() {
    let set = FieldSet::build(FieldKind::Minute, "0/15").unwrap();
    assert_members(&set, &[0, 15, 30, 45], 60);

    let set = FieldSet::build(FieldKind::Minute, "*/15").unwrap();
    assert_members(&set, &[0, 15, 30, 45], 60);

    let set = FieldSet::build(FieldKind::Hour, "20/2").unwrap();
    assert_members(&set, &[20, 22], 24);
}

#[test]
fn step_with_explicit_range_stops_at_its_bound() {
    let set = FieldSet::build(FieldKind::Minute, "10-40/10").unwrap();
    assert_members(&set, &[10, 20, 30, 40], 60);
}

#[test]
fn month_names_equal_their_ordinals() {
    let named = CronSchedule::new("0 0 0 1 JAN *", UTC).unwrap();
    let numeric = CronSchedule::new("0 0 0 1 1 *", UTC).unwrap();
    assert_eq!(named, numeric);

    let named = CronSchedule::new("0 0 0 1 jan-mar *", UTC).unwrap();
    let numeric = CronSchedule::new("0 0 0 1 1-3 *", UTC).unwrap();
    assert_eq!(named, numeric);
}

#[test]
fn sunday_has_three_spellings() {
    let named = CronSchedule::new("0 0 0 * * SUN", UTC).unwrap();
    let zero = CronSchedule::new("0 0 0 * * 0", UTC).unwrap();
    let seven = CronSchedule::new("0 0 0 * * 7", UTC).unwrap();

    assert_eq!(named, zero);
    assert_eq!(zero, seven);
    assert_members(named.field_set(FieldKind::DayOfWeek), &[0], 8);
}

#[test]
fn weekday_names_and_ranges() {
    let named = CronSchedule::new("0 0 9 * * MON-FRI", UTC).unwrap();
    let numeric = CronSchedule::new("0 0 9 * * 1-5", UTC).unwrap();
    assert_eq!(named, numeric);
    assert_members(named.field_set(FieldKind::DayOfWeek), &[1, 2, 3, 4, 5], 8);
}

#[test]
fn question_mark_is_a_wildcard_for_day_fields() {
    let s = CronSchedule::new("0 0 0 ? * ?", UTC).unwrap();
    let star = CronSchedule::new("0 0 0 * * *", UTC).unwrap();
    assert_eq!(s, star);
}

#[test]
fn trims_and_requires_six_fields() {
    assert!(CronSchedule::new("   0 0 0 1 1 *   ", UTC).is_ok());

    let err = CronSchedule::new("0 0 1 1 0", UTC).unwrap_err();
    assert_eq!(
        err,
        ParseError::FieldCount {
            expected: 6,
            found: 5,
            expression: "0 0 1 1 0".to_string(),
        }
    );

    let err = CronSchedule::new("0 0 0 1 1 * 2024", UTC).unwrap_err();
    assert!(matches!(err, ParseError::FieldCount { found: 7, .. }));
}

#[test]
fn rejects_values_above_the_field_maximum() {
    let err = CronSchedule::new("0 70 0 * * *", UTC).unwrap_err();
    assert_eq!(
        err,
        ParseError::AboveMaximum {
            field: FieldKind::Minute,
            token: "70".to_string(),
            value: 70,
            max: 60,
        }
    );
}

#[test]
fn rejects_values_below_the_field_minimum() {
    // months parse over [1,13)
    let err = CronSchedule::new("0 0 0 1 0 *", UTC).unwrap_err();
    assert!(matches!(
        err,
        ParseError::BelowMinimum {
            field: FieldKind::Month,
            min: 1,
            ..
        }
    ));
}

#[test]
fn rejects_malformed_ranges_and_incrementers() {
    let err = CronSchedule::new("0 1-2-3 0 * * *", UTC).unwrap_err();
    assert!(matches!(err, ParseError::MalformedRange { .. }));

    let err = CronSchedule::new("0 1/2/3 0 * * *", UTC).unwrap_err();
    assert!(matches!(err, ParseError::MalformedIncrementer { .. }));
}

#[test]
fn rejects_non_numeric_tokens() {
    let err = CronSchedule::new("0 abc 0 * * *", UTC).unwrap_err();
    assert_eq!(
        err,
        ParseError::InvalidNumber {
            field: FieldKind::Minute,
            token: "abc".to_string(),
        }
    );

    // unknown names fall through to the numeric parser
    let err = CronSchedule::new("0 0 0 1 FOO *", UTC).unwrap_err();
    assert!(matches!(err, ParseError::InvalidNumber { .. }));
}

#[test]
fn rejects_a_zero_step() {
    let err = CronSchedule::new("0 0/0 0 * * *", UTC).unwrap_err();
    assert!(matches!(err, ParseError::ZeroStep { .. }));
}

#[test]
fn rejects_a_field_that_allows_nothing() {
    // an inverted range marks no values
    let err = CronSchedule::new("0 0 0 * * 5-3", UTC).unwrap_err();
    assert!(matches!(
        err,
        ParseError::EmptyField {
            field: FieldKind::DayOfWeek,
            ..
        }
    ));
}

#[test]
fn field_set_next_member_and_first() {
    let set = FieldSet::build(FieldKind::Minute, "10,20,30").unwrap();
    assert_eq!(set.first(), 10);
    assert_eq!(set.next_member(0), Some(10));
    assert_eq!(set.next_member(10), Some(10));
    assert_eq!(set.next_member(11), Some(20));
    assert_eq!(set.next_member(31), None);
}
