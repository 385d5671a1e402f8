//! Phone canonicalization.

use crate::patterns::{MIN_PHONE_DIGITS, PHONE_REGEX};

/// Canonicalize a phone-bearing string to a fixed display format.
///
/// Ten digits format as `(DDD) DDD-DDDD`; eleven digits with a leading
/// `1` as `+1 (DDD) DDD-DDDD`. Anything else with ten or more digits is
/// treated as international and passes through as the matched substring
/// with its original separators and leading `+` intact. Fewer than ten
/// digits is not a phone number.
#[must_use]
pub fn normalize_phone(raw: &str) -> Option<String> {
    let digits: String = raw.chars().filter(|ch| ch.is_ascii_digit()).collect();
    if digits.len() == 10 {
        return Some(us_format(&digits, ""));
    }
    if digits.len() == 11 && digits.starts_with('1') {
        return Some(us_format(&digits[1..], "+1 "));
    }
    if digits.len() >= MIN_PHONE_DIGITS {
        return PHONE_REGEX
            .find(raw)
            .map(|found| found.as_str().trim().to_string());
    }
    None
}

fn us_format(digits: &str, prefix: &str) -> String {
    format!(
        "{prefix}({}) {}-{}",
        &digits[..3],
        &digits[3..6],
        &digits[6..]
    )
}
