//! Value formatting for the `limits` and `costs` blocks.
use crate::record::Number;

/// Group the decimal digits of `value` in threes from the right, separated
/// by single spaces. The sign, if any, stays in front of the digits.
#[must_use]
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    grouped
}

/// Render a token limit.
///
/// Integers are quoted and grouped (`128000` → `'128 000'`). Floats pass
/// through in their shortest round-trip form, unquoted (`4096.0` → `4096.0`,
/// `1e16` → `1e16`, NaN → `NaN`).
#[must_use]
pub fn limit(value: Number) -> String {
    match value {
        Number::Integer(n) => format!("'{}'", group_thousands(n)),
        Number::Float(f) => format!("{f:?}"),
    }
}

/// Render a price with exactly two decimal digits.
///
/// Rounds the exact binary value half-to-even, so `0.125` → `0.12` and
/// `0.015` (stored just below the tie) → `0.01`.
#[must_use]
pub fn cost(value: Number) -> String {
    format!("{:.2}", value.as_f64())
}
