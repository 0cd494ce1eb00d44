//! Numeric argument parsing.

use crate::error::MonitorError;

/// Parses an unsigned 64-bit integer with C `strtoull` base-0 rules.
///
/// `0x`/`0X` selects hexadecimal, a leading `0` octal, anything else decimal.
/// Leading whitespace and a single `+` or `-` sign are accepted; `-` negates
/// modulo 2^64. The whole token must be consumed.
///
/// # Arguments
///
/// * `s` - The token to parse.
///
/// # Returns
///
/// The value, [`MonitorError::NotANumber`] for empty input, no digits or trailing
/// characters, and [`MonitorError::TooLarge`] when the digits exceed `u64::MAX`.
///
/// # Examples
///
/// ```
/// use rvmon_sdb::parse::parse_ull;
///
/// assert_eq!(parse_ull("0x1A").unwrap(), 26);
/// assert_eq!(parse_ull("010").unwrap(), 8);
/// assert!(parse_ull("42x").is_err());
/// ```
pub fn parse_ull(s: &str) -> Result<u64, MonitorError> {
    let s = s.trim_start_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r'));
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let hex = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .filter(|rest| rest.starts_with(|c: char| c.is_ascii_hexdigit()));
    let (radix, digits) = match hex {
        Some(rest) => (16, rest),
        None if s.starts_with('0') => (8, s),
        None => (10, s),
    };

    let len = digits.find(|c: char| !c.is_digit(radix)).unwrap_or(digits.len());
    if len == 0 || len != digits.len() {
        return Err(MonitorError::NotANumber);
    }

    let value = digits
        .chars()
        .try_fold(0u64, |acc, c| {
            acc.checked_mul(u64::from(radix))?
                .checked_add(u64::from(c.to_digit(radix)?))
        })
        .ok_or(MonitorError::TooLarge)?;

    Ok(if negative { value.wrapping_neg() } else { value })
}
