//! Input format classification results.

use serde::{Deserialize, Serialize};

use crate::table::ParsedTable;
use crate::value::Value;

/// The four input shapes the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DetectedFormat {
    Json,
    Xml,
    Table,
    PlainText,
}

impl DetectedFormat {
    /// Human-readable label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Xml => "XML",
            Self::Table => "table",
            Self::PlainText => "plain text",
        }
    }
}

/// Output of detection plus structural decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParsedInput {
    /// Delimited rows with detected delimiter and header verdict.
    Table(ParsedTable),
    /// A decoded JSON or XML document.
    Document { format: DetectedFormat, root: Value },
    /// Free text with no recognized structure.
    Text(String),
}
