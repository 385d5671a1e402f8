//! Header resolution and row canonicalization.

use intake_model::{CanonicalField, CanonicalRecord};

use crate::synonyms::synonyms;

/// Resolve one raw header to a canonical field.
///
/// The header is lower-cased and trimmed, then canonical fields are
/// tested in [`CanonicalField::RESOLUTION_ORDER`]; the first field with
/// a synonym occurring as a substring of the header wins. `None` means
/// the header is unrecognized and should be preserved as-is.
#[must_use]
pub fn resolve_header(header: &str) -> Option<CanonicalField> {
    let needle = header.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    CanonicalField::RESOLUTION_ORDER
        .into_iter()
        .find(|field| synonyms(*field).iter().any(|synonym| needle.contains(synonym)))
}

/// Canonicalize one row's `(column, value)` pairs into a record.
///
/// Recognized headers become canonical field names; when two columns
/// resolve to the same canonical field the first one wins. Unrecognized
/// headers are kept verbatim, lower-cased, so no column is lost.
pub fn canonicalize_row<'a, I>(pairs: I) -> CanonicalRecord
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut record = CanonicalRecord::new();
    for (column, value) in pairs {
        match resolve_header(column) {
            Some(field) if !record.contains_key(field.as_str()) => {
                record.insert(field.as_str(), value);
            }
            Some(_) => {}
            None => record.insert(column.trim().to_lowercase(), value),
        }
    }
    record
}
