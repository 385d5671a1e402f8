//! Delimiter detection, row extraction, and header detection.

use intake_map::resolve_header;
use intake_model::{Delimiter, ParsedTable, UnsupportedDelimiterError, synthesized_columns};

/// Pick the delimiter by counting candidates in the first line.
///
/// The strictly highest count wins; ties fall to the earlier candidate
/// in priority order (comma > semicolon > tab > pipe), and an all-zero
/// count defaults to comma.
#[must_use]
pub fn detect_delimiter(text: &str) -> Delimiter {
    let first_line = text.lines().next().unwrap_or("");
    let mut best = Delimiter::Comma;
    let mut best_count = 0usize;
    for candidate in Delimiter::CANDIDATES {
        let count = first_line.matches(candidate.as_char()).count();
        if count > best_count {
            best = candidate;
            best_count = count;
        }
    }
    best
}

/// Parse delimited text with an auto-detected delimiter.
#[must_use]
pub fn parse_table(text: &str) -> ParsedTable {
    parse_with(text, detect_delimiter(text))
}

/// Parse delimited text with a caller-supplied delimiter.
///
/// A delimiter outside the recognized set is the one delimiter error in
/// the pipeline; auto-detection never fails.
pub fn parse_table_with(
    text: &str,
    delimiter: char,
) -> Result<ParsedTable, UnsupportedDelimiterError> {
    Ok(parse_with(text, Delimiter::try_from(delimiter)?))
}

fn parse_with(text: &str, delimiter: Delimiter) -> ParsedTable {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter.as_byte())
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let Ok(record) = record else {
            // Unreadable line; parsing stays total.
            tracing::warn!(delimiter = ?delimiter, "dropping unreadable table row");
            continue;
        };
        let row: Vec<String> = record.iter().map(|cell| cell.trim().to_string()).collect();
        if row.iter().all(String::is_empty) {
            continue;
        }
        rows.push(row);
    }

    let has_headers = rows.first().is_some_and(|first| headers_present(first));
    let (columns, data_rows) = if has_headers {
        let header_row = rows.remove(0);
        let columns = header_row.iter().map(|cell| normalize_header(cell)).collect();
        (columns, rows)
    } else {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        (synthesized_columns(width), rows)
    };
    tracing::debug!(
        delimiter = ?delimiter,
        has_headers,
        columns = columns.len(),
        rows = data_rows.len(),
        "parsed table"
    );

    ParsedTable {
        delimiter,
        has_headers,
        columns,
        rows: data_rows,
    }
}

/// Score the first row for header-ness.
///
/// Synonym matches count double, other non-numeric cells without an `@`
/// count single, and digit-only or address-bearing cells count nothing.
/// The row is a header when the score reaches the cell count, so a row
/// of plain data (names plus emails plus phones) stays below the bar
/// while recognized or all-text header rows clear it.
fn headers_present(first_row: &[String]) -> bool {
    if first_row.is_empty() {
        return false;
    }
    let mut score = 0usize;
    for cell in first_row {
        let cell = cell.trim().to_lowercase();
        if cell.is_empty() {
            continue;
        }
        if resolve_header(&cell).is_some() {
            score += 2;
        } else if !cell.contains('@') && !is_numeric_like(&cell) {
            score += 1;
        }
    }
    score >= first_row.len()
}

/// Digits-only once common phone punctuation is stripped.
fn is_numeric_like(cell: &str) -> bool {
    let mut digits = 0usize;
    for ch in cell.chars() {
        if ch.is_ascii_digit() {
            digits += 1;
        } else if !matches!(ch, '.' | '-' | '(' | ')' | ' ') {
            return false;
        }
    }
    digits > 0
}

/// Collapse inner whitespace and strip any BOM from a header cell.
fn normalize_header(raw: &str) -> String {
    raw.trim()
        .trim_matches('\u{feff}')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
