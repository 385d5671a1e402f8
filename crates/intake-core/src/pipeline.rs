//! Entry points tying detection, canonicalization, and assembly together.
//!
//! The pipeline is a fixed sequence, detect → parse → resolve →
//! assemble, with no loops or retries. Batch policy stays with the
//! caller: every row comes back as its own `Result`.

use intake_map::canonicalize_row;
use intake_model::{CanonicalRecord, NormalizedContact, ParsedTable, ValidationError, Value};

use crate::assemble::assemble_contact;

/// Normalize one canonicalized record into a contact.
pub fn normalize_record(record: &CanonicalRecord) -> Result<NormalizedContact, ValidationError> {
    assemble_contact(record)
}

/// Canonicalize raw `(key, value)` pairs, then normalize them.
pub fn normalize_fields<'a, I>(pairs: I) -> Result<NormalizedContact, ValidationError>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    normalize_record(&canonicalize_row(pairs))
}

/// One canonical record per table row, headers resolved per row.
#[must_use]
pub fn table_records(table: &ParsedTable) -> Vec<CanonicalRecord> {
    table.named_rows().map(canonicalize_row).collect()
}

/// Normalize every row of a table. Abort versus skip on a failed row is
/// the caller's decision; nothing is aggregated here.
#[must_use]
pub fn normalize_table(table: &ParsedTable) -> Vec<Result<NormalizedContact, ValidationError>> {
    table_records(table)
        .iter()
        .map(normalize_record)
        .collect()
}

/// Canonical records for the items of a decoded document.
///
/// The first sequence holding mappings, depth-first, provides the
/// items; without one, a mapping root is itself the single item.
/// Nested item values flatten to their scalar texts space-joined so
/// data smeared into sub-structures stays reachable by the assembler's
/// fallback scans.
#[must_use]
pub fn document_records(root: &Value) -> Vec<CanonicalRecord> {
    if let Some(items) = first_mapping_sequence(root) {
        return items.iter().filter_map(record_from_item).collect();
    }
    record_from_item(root).into_iter().collect()
}

/// Keep only records whose `field` equals `value`, case-insensitively.
#[must_use]
pub fn filter_records<'a>(
    records: &'a [CanonicalRecord],
    field: &str,
    value: &str,
) -> Vec<&'a CanonicalRecord> {
    let field = field.trim().to_lowercase();
    records
        .iter()
        .filter(|record| {
            record
                .get(&field)
                .is_some_and(|found| found.trim().eq_ignore_ascii_case(value.trim()))
        })
        .collect()
}

fn first_mapping_sequence(value: &Value) -> Option<&[Value]> {
    match value {
        Value::Sequence(items) => {
            if items.iter().any(|item| matches!(item, Value::Mapping(_))) {
                return Some(items);
            }
            items.iter().find_map(first_mapping_sequence)
        }
        Value::Mapping(entries) => entries
            .iter()
            .find_map(|(_, child)| first_mapping_sequence(child)),
        _ => None,
    }
}

fn record_from_item(item: &Value) -> Option<CanonicalRecord> {
    let Value::Mapping(entries) = item else {
        return None;
    };
    let pairs: Vec<(&str, String)> = entries
        .iter()
        .map(|(key, child)| (key.as_str(), flatten_value(child)))
        .collect();
    Some(canonicalize_row(
        pairs.iter().map(|(key, value)| (*key, value.as_str())),
    ))
}

/// A scalar as its string form; aggregates as their scalar texts joined
/// with spaces.
fn flatten_value(value: &Value) -> String {
    if let Some(text) = value.scalar_string() {
        return text;
    }
    let mut parts: Vec<String> = Vec::new();
    value.for_each_text(&mut |text| parts.push(text.to_string()));
    parts.join(" ")
}
