use crate::error::ParseError;
use crate::field::FieldKind;

/// Parse one comma-part as an inclusive range over `[min, max)`.
///
/// `"*"` covers the whole domain, `"a-b"` is an explicit range, a bare
/// number is the degenerate range `(n, n)`.
pub(crate) fn parse_range(
    token: &str,
    min: u8,
    max: u8,
    field: FieldKind,
) -> Result<(u8, u8), ParseError> {
    let (low, high) = if token == "*" {
        (min, max - 1)
    } else if token.contains('-') {
        let parts: Vec<&str> = token.split('-').collect();
        if parts.len() > 2 {
            return Err(ParseError::MalformedRange {
                field,
                token: token.to_string(),
            });
        }
        (
            parse_number(parts[0], field)?,
            parse_number(parts[1], field)?,
        )
    } else {
        let n = parse_number(token, field)?;
        (n, n)
    };

    for value in [low, high] {
        if value >= max {
            return Err(ParseError::AboveMaximum {
                field,
                token: token.to_string(),
                value,
                max,
            });
        }
        if value < min {
            return Err(ParseError::BelowMinimum {
                field,
                token: token.to_string(),
                value,
                min,
            });
        }
    }
    Ok((low, high))
}

/// Fill a bitmask from a full field token: a comma-separated list of ranges
/// and `base/step` incrementers. An incrementer whose base has no explicit
/// upper bound runs to the domain ceiling.
pub(crate) fn parse_field_mask(
    value: &str,
    min: u8,
    max: u8,
    field: FieldKind,
) -> Result<u64, ParseError> {
    let mut mask: u64 = 0;

    for part in value.split(',') {
        if let Some((base, step_str)) = part.split_once('/') {
            if step_str.contains('/') {
                return Err(ParseError::MalformedIncrementer {
                    field,
                    token: part.to_string(),
                });
            }
            let (low, mut high) = parse_range(base, min, max, field)?;
            if !base.contains('-') {
                high = max - 1;
            }
            let step = parse_number(step_str, field)?;
            if step == 0 {
                return Err(ParseError::ZeroStep {
                    field,
                    token: part.to_string(),
                });
            }
            let mut v = low;
            while v <= high {
                mask |= 1 << v;
                v = match v.checked_add(step) {
                    Some(next) => next,
                    None => break,
                };
            }
        } else {
            let (low, high) = parse_range(part, min, max, field)?;
            for v in low..=high {
                mask |= 1 << v;
            }
        }
    }

    Ok(mask)
}

fn parse_number(token: &str, field: FieldKind) -> Result<u8, ParseError> {
    token.parse::<u8>().map_err(|_| ParseError::InvalidNumber {
        field,
        token: token.to_string(),
    })
}
