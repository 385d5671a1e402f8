//! Input format classification.
//!
//! Classification is total: parse probes that reject fall through to
//! the next candidate, and the worst case is plain text.

use intake_model::{Delimiter, DetectedFormat, ParsedInput, Value};

use crate::decode::{decode_json, decode_xml};
use crate::table::parse_table;

/// Classify raw text as one of the four supported formats.
#[must_use]
pub fn detect_format(text: &str) -> DetectedFormat {
    match classify(text) {
        Classified::Json(_) => DetectedFormat::Json,
        Classified::Xml(_) => DetectedFormat::Xml,
        Classified::Table => DetectedFormat::Table,
        Classified::PlainText => DetectedFormat::PlainText,
    }
}

/// Classify and structurally decode one input document.
#[must_use]
pub fn detect_and_parse(text: &str) -> ParsedInput {
    match classify(text) {
        Classified::Json(root) => ParsedInput::Document {
            format: DetectedFormat::Json,
            root,
        },
        Classified::Xml(root) => ParsedInput::Document {
            format: DetectedFormat::Xml,
            root,
        },
        Classified::Table => ParsedInput::Table(parse_table(text)),
        Classified::PlainText => ParsedInput::Text(text.to_string()),
    }
}

enum Classified {
    Json(Value),
    Xml(Value),
    Table,
    PlainText,
}

fn classify(text: &str) -> Classified {
    let trimmed = text.trim();
    let braced = (trimmed.starts_with('{') && trimmed.ends_with('}'))
        || (trimmed.starts_with('[') && trimmed.ends_with(']'));
    if braced && let Ok(root) = decode_json(trimmed) {
        return Classified::Json(root);
    }
    if trimmed.starts_with('<')
        && trimmed.ends_with('>')
        && let Ok(root) = decode_xml(trimmed)
    {
        return Classified::Xml(root);
    }
    if consistent_delimiter(text).is_some() {
        return Classified::Table;
    }
    Classified::PlainText
}

/// A candidate delimiter with the same nonzero count on the first two
/// non-empty lines marks tabular input.
fn consistent_delimiter(text: &str) -> Option<Delimiter> {
    if !text.contains('\n') {
        return None;
    }
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());
    let first = lines.next()?;
    let second = lines.next()?;
    Delimiter::CANDIDATES.into_iter().find(|delimiter| {
        let count = first.matches(delimiter.as_char()).count();
        count > 0 && count == second.matches(delimiter.as_char()).count()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detection_walks_the_candidate_ladder() {
        assert_eq!(detect_format(r#"{"a": 1}"#), DetectedFormat::Json);
        assert_eq!(detect_format("[1, 2, 3]"), DetectedFormat::Json);
        assert_eq!(detect_format("<a>x</a>"), DetectedFormat::Xml);
        assert_eq!(detect_format("a,b\nc,d"), DetectedFormat::Table);
        assert_eq!(detect_format("just a sentence"), DetectedFormat::PlainText);
    }

    #[test]
    fn malformed_probes_fall_through_silently() {
        assert_eq!(detect_format("{not json}"), DetectedFormat::PlainText);
        assert_eq!(detect_format("<not <xml>"), DetectedFormat::PlainText);
        // Malformed JSON that still looks tabular keeps falling.
        assert_eq!(detect_format("{a,b\nc,d}"), DetectedFormat::Table);
    }

    #[test]
    fn tables_need_a_consistent_count_across_two_lines() {
        assert_eq!(detect_format("a,b\nc,d,e"), DetectedFormat::PlainText);
        assert_eq!(detect_format("a|b|c"), DetectedFormat::PlainText);
        assert_eq!(detect_format("a;b\n\nc;d"), DetectedFormat::Table);
    }
}
