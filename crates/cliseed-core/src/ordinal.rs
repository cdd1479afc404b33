//! English ordinal suffixes.

/// Return the ordinal suffix for `n`: `"st"` for 1, `"nd"` for 2, `"rd"` for 3,
/// `"th"` otherwise.
///
/// Numbers ending in 11, 12 or 13 take `"th"` (`11th`, `112th`), so this is
/// not a last-digit-only rule, which would give `11st`. Takes `i128` so every
/// `u64` index converts losslessly.
#[must_use]
pub fn ordinal_suffix(n: i128) -> &'static str {
    let n = n.unsigned_abs();
    if matches!(n % 100, 11..=13) {
        return "th";
    }
    match n % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}
