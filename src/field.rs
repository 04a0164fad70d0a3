use std::fmt;

use crate::error::ParseError;
use crate::range::parse_field_mask;

const MONTH_NAMES: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

const DAY_NAMES: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

/// The six field positions of a cron expression, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Second,
    Minute,
    Hour,
    DayOfMonth,
    Month,
    DayOfWeek,
}

impl FieldKind {
    /// Half-open `[min, max)` parse domain for this field.
    ///
    /// Day-of-month parses over [0,32) with bit 0 discarded afterwards,
    /// months over [1,13) before the shift down to [0,12), and day-of-week
    /// over [0,8) so that Sunday's second spelling (7) survives until the
    /// fold back onto 0.
    pub fn domain(self) -> (u8, u8) {
        match self {
            FieldKind::Second | FieldKind::Minute => (0, 60),
            FieldKind::Hour => (0, 24),
            FieldKind::DayOfMonth => (0, 32),
            FieldKind::Month => (1, 13),
            FieldKind::DayOfWeek => (0, 8),
        }
    }

    fn names(self) -> Option<(&'static [&'static str], u8)> {
        match self {
            FieldKind::Month => Some((&MONTH_NAMES, 1)),
            FieldKind::DayOfWeek => Some((&DAY_NAMES, 0)),
            _ => None,
        }
    }

    fn accepts_question_mark(self) -> bool {
        matches!(self, FieldKind::DayOfMonth | FieldKind::DayOfWeek)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Second => "second",
            FieldKind::Minute => "minute",
            FieldKind::Hour => "hour",
            FieldKind::DayOfMonth => "day-of-month",
            FieldKind::Month => "month",
            FieldKind::DayOfWeek => "day-of-week",
        };
        f.write_str(name)
    }
}

/// Immutable set of allowed values for one field, as a bitmask over its
/// domain. Guaranteed non-empty once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSet {
    mask: u64,
}

impl FieldSet {
    /// Parse one raw expression token into the allowed-value set for `kind`,
    /// applying the field-specific preprocessing (`?` handling, name
    /// substitution) and post-processing (0-slot discard, month shift,
    /// 7-folds-to-0 for Sunday).
    pub fn build(kind: FieldKind, token: &str) -> Result<FieldSet, ParseError> {
        let mut value = token.to_string();

        if let Some((names, offset)) = kind.names() {
            value = replace_ordinals(&value, names, offset);
        }
        if kind.accepts_question_mark() && value.contains('?') {
            value = "*".to_string();
        }

        let (min, max) = kind.domain();
        let mut mask = parse_field_mask(&value, min, max, kind)?;

        match kind {
            FieldKind::DayOfMonth => {
                // the unused 0-slot; days of month start at 1
                mask &= !1;
            }
            FieldKind::Month => {
                // months parse 1-based, shift to the internal [0,12) domain
                mask >>= 1;
            }
            FieldKind::DayOfWeek => {
                // Sunday can be spelled 0 or 7
                if mask & (1 << 7) != 0 {
                    mask |= 1;
                    mask &= !(1 << 7);
                }
            }
            _ => {}
        }

        if mask == 0 {
            return Err(ParseError::EmptyField {
                field: kind,
                token: token.to_string(),
            });
        }
        Ok(FieldSet { mask })
    }

    pub fn contains(&self, value: u8) -> bool {
        value < 64 && self.mask & (1 << value) != 0
    }

    /// Smallest member of the set that is >= `value`, if any.
    pub fn next_member(&self, value: u8) -> Option<u8> {
        if value >= 64 {
            return None;
        }
        let shifted = self.mask >> value;
        if shifted == 0 {
            None
        } else {
            Some(value + shifted.trailing_zeros() as u8)
        }
    }

    /// Smallest member overall. Relies on the non-empty invariant from
    /// [`FieldSet::build`].
    pub fn first(&self) -> u8 {
        self.mask.trailing_zeros() as u8
    }
}

/// Replace whole alphabetic tokens (case-insensitive) with `offset + index`
/// in the name table. Numeric sub-tokens pass through untouched; unknown
/// alphabetic tokens are left in place for the numeric parser to reject.
fn replace_ordinals(value: &str, names: &[&str], offset: u8) -> String {
    let mut out = String::with_capacity(value.len());
    let mut word = String::new();
    for ch in value.chars() {
        if ch.is_ascii_alphabetic() {
            word.push(ch.to_ascii_uppercase());
        } else {
            flush_word(&mut out, &mut word, names, offset);
            out.push(ch);
        }
    }
    flush_word(&mut out, &mut word, names, offset);
    out
}

fn flush_word(out: &mut String, word: &mut String, names: &[&str], offset: u8) {
    if word.is_empty() {
        return;
    }
    match names.iter().position(|n| *n == word) {
        Some(i) => out.push_str(&(i as u8 + offset).to_string()),
        None => out.push_str(word),
    }
    word.clear();
}
