//! Combined-name splitting.

/// Split a combined name into `(first, last)`.
///
/// A comma means "Last, First" order and splits on its first occurrence.
/// Otherwise whitespace tokens decide: one token is a first name alone,
/// two are first and last, three or more keep the first token and join
/// the rest as the last name. The rule is the same regardless of which
/// input format produced the string.
#[must_use]
pub fn split_name(full_name: &str) -> (Option<String>, Option<String>) {
    let trimmed = full_name.trim();
    if trimmed.is_empty() {
        return (None, None);
    }
    if let Some((before, after)) = trimmed.split_once(',') {
        return (non_blank(after), non_blank(before));
    }
    let mut tokens = trimmed.split_whitespace();
    let first = tokens.next().map(str::to_string);
    let rest: Vec<&str> = tokens.collect();
    let last = if rest.is_empty() {
        None
    } else {
        Some(rest.join(" "))
    };
    (first, last)
}

fn non_blank(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
