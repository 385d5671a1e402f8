//! Email and phone extraction over strings and nested values.
//!
//! All functions here are total: any input yields a (possibly empty)
//! result, never an error.

use intake_model::Value;

use crate::patterns::{EMAIL_REGEX, MIN_PHONE_DIGITS, PHONE_REGEX, digit_count};

/// All non-overlapping email matches, left to right.
#[must_use]
pub fn find_emails(text: &str) -> Vec<String> {
    EMAIL_REGEX
        .find_iter(text)
        .map(|found| found.as_str().to_string())
        .collect()
}

/// All non-overlapping phone candidates with at least ten digits, left
/// to right, trimmed of surrounding separators.
#[must_use]
pub fn find_phones(text: &str) -> Vec<String> {
    PHONE_REGEX
        .find_iter(text)
        .map(|found| found.as_str().trim().to_string())
        .filter(|candidate| digit_count(candidate) >= MIN_PHONE_DIGITS)
        .collect()
}

/// Depth-first email extraction over a decoded value tree. Matches come
/// back in document order; duplicates are preserved.
#[must_use]
pub fn find_emails_in(value: &Value) -> Vec<String> {
    let mut found = Vec::new();
    value.for_each_text(&mut |text| found.extend(find_emails(text)));
    found
}

/// Depth-first phone extraction over a decoded value tree.
#[must_use]
pub fn find_phones_in(value: &Value) -> Vec<String> {
    let mut found = Vec::new();
    value.for_each_text(&mut |text| found.extend(find_phones(text)));
    found
}

/// All values of a named field anywhere in a nested structure.
///
/// Keys match case-insensitively. Scalar values are stringified;
/// sequence values are flattened one level. Null, sequence-of-aggregate,
/// and mapping values under a matching key are skipped.
#[must_use]
pub fn extract_field(value: &Value, field_name: &str) -> Vec<String> {
    let needle = field_name.trim().to_lowercase();
    let mut found = Vec::new();
    if !needle.is_empty() {
        collect_field(value, &needle, &mut found);
    }
    found
}

fn collect_field(value: &Value, needle: &str, found: &mut Vec<String>) {
    match value {
        Value::Mapping(entries) => {
            for (key, child) in entries {
                if key.trim().to_lowercase() == needle {
                    match child {
                        Value::Sequence(items) => {
                            found.extend(items.iter().filter_map(Value::scalar_string));
                        }
                        other => found.extend(other.scalar_string()),
                    }
                } else {
                    collect_field(child, needle, found);
                }
            }
        }
        Value::Sequence(items) => {
            for item in items {
                collect_field(item, needle, found);
            }
        }
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::Text(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emails_match_left_to_right() {
        let text = "write a@b.com or b@c.org, not a@b";
        assert_eq!(find_emails(text), vec!["a@b.com", "b@c.org"]);
    }

    #[test]
    fn phone_candidates_need_ten_digits() {
        assert_eq!(find_phones("call 555-123-4567 now"), vec!["555-123-4567"]);
        assert!(find_phones("ext. 555-0123").is_empty());
        assert_eq!(find_phones("+34 91 123 4567"), vec!["+34 91 123 4567"]);
    }

    #[test]
    fn extraction_is_total_over_junk() {
        assert!(find_emails("@@@ ... ---").is_empty());
        assert!(find_phones("").is_empty());
        assert!(find_phones("(((((((((((").is_empty());
    }

    #[test]
    fn extract_field_matches_keys_case_insensitively() {
        let value = Value::Mapping(vec![
            ("Name".to_string(), Value::Text("Ada".to_string())),
            (
                "friends".to_string(),
                Value::Sequence(vec![Value::Mapping(vec![(
                    "name".to_string(),
                    Value::Text("Grace".to_string()),
                )])]),
            ),
        ]);
        assert_eq!(extract_field(&value, "name"), vec!["Ada", "Grace"]);
        assert!(extract_field(&value, "missing").is_empty());
    }
}
