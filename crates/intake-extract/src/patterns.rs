//! Compiled extraction patterns.
//!
//! Compiled once at first use; read-only afterwards, safe for any
//! number of concurrent callers.

use std::sync::LazyLock;

use regex::Regex;

/// `local@domain.tld` with at least one domain dot and a 2+ letter TLD.
/// The local part allows letters, digits, and `._%+-`.
pub(crate) static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
        .expect("invalid email regex")
});

/// Phone candidates: optional leading `+`, then a run of at least ten
/// digits and space/dash/dot/parenthesis separators. Candidates still
/// need a digit-count check; the run length alone is not enough.
pub(crate) static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+?[\d\s()\-.]{10,}").expect("invalid phone regex"));

/// Minimum digits for a candidate to count as a phone number.
pub(crate) const MIN_PHONE_DIGITS: usize = 10;

pub(crate) fn digit_count(text: &str) -> usize {
    text.chars().filter(|ch| ch.is_ascii_digit()).count()
}
