//! Compact duration literals such as `45m`, `1h30m`, `1.5h` or `-90s`.

use chrono::Duration;

use crate::error::DurationError;

const NANOS_PER_MICRO: u64 = 1_000;
const NANOS_PER_MILLI: u64 = 1_000_000;
const NANOS_PER_SECOND: u64 = 1_000_000_000;
const NANOS_PER_MINUTE: u64 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: u64 = 60 * NANOS_PER_MINUTE;

/// Magnitude of `i64::MIN`; only reachable for negative literals.
const MAX_MAGNITUDE: u64 = 1 << 63;

/// Parses a signed sequence of `<number><unit>` groups into a [`Duration`].
///
/// Accepted units are `ns`, `us` (also `µs`/`μs`), `ms`, `s`, `m` and `h`. A
/// bare `0` needs no unit. Whitespace is not allowed anywhere.
pub fn parse_duration(input: &str) -> Result<Duration, DurationError> {
    let (negative, mut rest) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };

    if rest == "0" {
        return Ok(Duration::zero());
    }
    if rest.is_empty() {
        return Err(DurationError::Empty);
    }

    let mut total: u64 = 0;
    while !rest.is_empty() {
        let first = rest.as_bytes()[0];
        if first != b'.' && !first.is_ascii_digit() {
            return Err(DurationError::InvalidNumber);
        }

        let (whole, after_whole) = leading_int(rest)?;
        let has_whole = after_whole.len() != rest.len();
        rest = after_whole;

        let mut fraction = 0u64;
        let mut scale = 1.0f64;
        let mut has_fraction = false;
        if let Some(after_dot) = rest.strip_prefix('.') {
            let (value, fraction_scale, after_fraction) = leading_fraction(after_dot);
            has_fraction = after_fraction.len() != after_dot.len();
            fraction = value;
            scale = fraction_scale;
            rest = after_fraction;
        }
        if !has_whole && !has_fraction {
            return Err(DurationError::InvalidNumber);
        }

        let unit_len = rest
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(rest.len());
        if unit_len == 0 {
            return Err(DurationError::MissingUnit);
        }
        let (unit_str, after_unit) = rest.split_at(unit_len);
        rest = after_unit;
        let unit = unit_nanos(unit_str)
            .ok_or_else(|| DurationError::UnknownUnit(unit_str.to_string()))?;

        if whole > MAX_MAGNITUDE / unit {
            return Err(DurationError::Overflow);
        }
        let mut value = whole * unit;
        if fraction > 0 {
            value += (fraction as f64 * (unit as f64 / scale)) as u64;
            if value > MAX_MAGNITUDE {
                return Err(DurationError::Overflow);
            }
        }

        total = total.checked_add(value).ok_or(DurationError::Overflow)?;
        if total > MAX_MAGNITUDE {
            return Err(DurationError::Overflow);
        }
    }

    if negative {
        // total <= 2^63, so the wrapping cast lands exactly on the negated value.
        return Ok(Duration::nanoseconds((total as i64).wrapping_neg()));
    }
    if total > i64::MAX as u64 {
        return Err(DurationError::Overflow);
    }
    Ok(Duration::nanoseconds(total as i64))
}

fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(NANOS_PER_MICRO),
        "ms" => Some(NANOS_PER_MILLI),
        "s" => Some(NANOS_PER_SECOND),
        "m" => Some(NANOS_PER_MINUTE),
        "h" => Some(NANOS_PER_HOUR),
        _ => None,
    }
}

fn leading_int(s: &str) -> Result<(u64, &str), DurationError> {
    let digits = s.bytes().take_while(u8::is_ascii_digit).count();
    let mut value: u64 = 0;
    for b in s[..digits].bytes() {
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(b - b'0')))
            .filter(|v| *v <= MAX_MAGNITUDE)
            .ok_or(DurationError::Overflow)?;
    }
    Ok((value, &s[digits..]))
}

/// Digits past what fits in a `u64` are consumed but ignored.
fn leading_fraction(s: &str) -> (u64, f64, &str) {
    let digits = s.bytes().take_while(u8::is_ascii_digit).count();
    let mut value: u64 = 0;
    let mut scale = 1.0f64;
    let mut overflowed = false;
    for b in s[..digits].bytes() {
        if overflowed {
            continue;
        }
        match value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(b - b'0')))
        {
            Some(next) => {
                value = next;
                scale *= 10.0;
            }
            None => overflowed = true,
        }
    }
    (value, scale, &s[digits..])
}
