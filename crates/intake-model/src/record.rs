//! Canonical contact fields and per-row records.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// The fixed contact fields relied on by downstream consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanonicalField {
    FirstName,
    LastName,
    FullName,
    Email,
    Phone,
    Company,
}

impl CanonicalField {
    /// Fixed order in which headers are tested against the synonym
    /// tables. `FullName` goes last: its bare "name" synonym would
    /// otherwise swallow headers like "first name" or "company name".
    pub const RESOLUTION_ORDER: [CanonicalField; 6] = [
        CanonicalField::FirstName,
        CanonicalField::LastName,
        CanonicalField::Email,
        CanonicalField::Phone,
        CanonicalField::Company,
        CanonicalField::FullName,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::FullName => "full_name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Company => "company",
        }
    }
}

/// Prefix of column names synthesized for headerless tables.
pub const SYNTHESIZED_PREFIX: &str = "column_";

/// True for `column_0`, `column_1`, … style synthesized names.
#[must_use]
pub fn is_synthesized_column(key: &str) -> bool {
    key.strip_prefix(SYNTHESIZED_PREFIX)
        .is_some_and(|rest| !rest.is_empty() && rest.bytes().all(|byte| byte.is_ascii_digit()))
}

/// Positional column names for a headerless table of the given width.
#[must_use]
pub fn synthesized_columns(count: usize) -> Vec<String> {
    (0..count)
        .map(|index| format!("{SYNTHESIZED_PREFIX}{index}"))
        .collect()
}

/// Insertion-ordered field map for one row or item.
///
/// Keys are canonical field names or original unmapped headers
/// lower-cased; nothing is dropped. Re-inserting an existing key keeps
/// its position and replaces the value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CanonicalRecord {
    fields: Vec<(String, String)>,
}

impl CanonicalRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        if let Some((_, existing)) = self.fields.iter_mut().find(|(name, _)| *name == key) {
            *existing = value.into();
        } else {
            self.fields.push((key, value.into()));
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// A canonical field's value, trimmed, when present and non-blank.
    #[must_use]
    pub fn canonical(&self, field: CanonicalField) -> Option<&str> {
        self.get(field.as_str())
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// True when every key is a synthesized positional column name,
    /// i.e. the record came from a headerless table.
    #[must_use]
    pub fn is_positional(&self) -> bool {
        !self.fields.is_empty()
            && self.fields.iter().all(|(key, _)| is_synthesized_column(key))
    }
}

impl FromIterator<(String, String)> for CanonicalRecord {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut record = Self::new();
        for (key, value) in pairs {
            record.insert(key, value);
        }
        record
    }
}

/// Fully normalized contact produced by the assembler.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedContact {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
}

impl NormalizedContact {
    #[must_use]
    pub fn has_name(&self) -> bool {
        self.first_name.is_some() || self.last_name.is_some()
    }

    #[must_use]
    pub fn has_contact_method(&self) -> bool {
        self.email.is_some() || self.phone.is_some()
    }

    /// Enforce the normalization invariant: a name AND a contact method.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.has_name() {
            return Err(ValidationError::MissingName);
        }
        if !self.has_contact_method() {
            return Err(ValidationError::MissingContactMethod);
        }
        Ok(())
    }
}
