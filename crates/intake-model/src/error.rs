//! Error types surfaced by the normalization pipeline.

use thiserror::Error;

/// A record failed the normalization invariant.
///
/// A contact is valid only when it carries a first or last name AND an
/// email or phone. The variant names which requirement was unmet; a
/// partially populated contact is never returned silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// No first or last name could be derived from the record.
    #[error("no first or last name could be derived from the record")]
    MissingName,
    /// No email address or phone number could be derived from the record.
    #[error("no email address or phone number could be derived from the record")]
    MissingContactMethod,
}

/// A caller bypassed auto-detection with a delimiter outside the
/// recognized set. Auto-detection itself never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unsupported delimiter {0:?}; expected one of ',', ';', tab, '|'")]
pub struct UnsupportedDelimiterError(pub char);
