//! Parse-or-zero normalization for monetary amounts.
//!
//! Amounts reach the ledger from hand-filled forms and loosely typed JSON.
//! Blank, absent and non-numeric values are normalized to zero here, at the
//! boundary, so that everything downstream works with plain `Decimal`s.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

/// Parses the leading numeric portion of `input`, returning zero when there
/// is none.
///
/// Leading whitespace is skipped and trailing garbage is ignored, so
/// `"1500 IDR"` parses as `1500` and `"abc"` as `0`. Exponents are accepted
/// (`"1e3"` is `1000`).
#[must_use]
pub fn parse_amount_or_zero(input: &str) -> Decimal {
    let prefix = numeric_prefix(input.trim_start());
    if prefix.is_empty() {
        return Decimal::ZERO;
    }

    let (negative, unsigned) = match prefix.as_bytes()[0] {
        b'-' => (true, &prefix[1..]),
        b'+' => (false, &prefix[1..]),
        _ => (false, prefix),
    };
    let mut normalized = String::with_capacity(prefix.len() + 2);
    if negative {
        normalized.push('-');
    }
    if unsigned.starts_with('.') {
        normalized.push('0');
    }
    normalized.push_str(unsigned);

    let parsed = if normalized.contains(['e', 'E']) {
        Decimal::from_scientific(&normalized)
    } else {
        Decimal::from_str(&normalized)
    };

    parsed.unwrap_or(Decimal::ZERO)
}

/// Returns the longest prefix of `s` shaped like `[+-]digits[.digits][e[+-]digits]`.
fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        // "12." keeps the dot out; Decimal rejects a dangling point.
        if frac_end > frac_start {
            end = frac_end;
        }
    }

    if mantissa_digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > digits_start {
            end = exp_end;
        }
    }

    &s[..end]
}

/// Serde deserializer applying parse-or-zero to any JSON value.
///
/// Use with `#[serde(default, deserialize_with = "deserialize_lenient")]`
/// so that missing fields also become zero.
pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => parse_amount_or_zero(&n.to_string()),
        serde_json::Value::String(s) => parse_amount_or_zero(&s),
        _ => Decimal::ZERO,
    })
}
