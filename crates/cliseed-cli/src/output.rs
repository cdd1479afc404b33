//! Formatting for values that end up in log lines.

use chrono::{DateTime, Utc};
use num_bigint::BigUint;

/// Results longer than this many digits are shortened unless verbose.
pub const MAX_INLINE_DIGITS: usize = 100;

/// Digits kept at each end of a shortened result.
const EDGE_DIGITS: usize = 50;

/// Format a `BigUint` for display, potentially truncating.
#[must_use]
pub fn format_result(value: &BigUint, verbose: bool) -> String {
    let s = value.to_string();
    if !verbose && s.len() > MAX_INLINE_DIGITS {
        format!(
            "{}...{} ({} digits)",
            &s[..EDGE_DIGITS],
            &s[s.len() - EDGE_DIGITS..],
            format_number(s.len() as u64)
        )
    } else {
        s
    }
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a UTC timestamp for start/end banners,
/// e.g. `2026-10-19 08:15:02.123456+00:00`.
#[must_use]
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S%.6f%:z").to_string()
}
