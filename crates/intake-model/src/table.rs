//! Parsed tabular intermediate representation.

use serde::{Deserialize, Serialize};

use crate::error::UnsupportedDelimiterError;

/// The recognized cell delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Delimiter {
    Comma,
    Semicolon,
    Tab,
    Pipe,
}

impl Delimiter {
    /// Candidate delimiters in tie-break priority order.
    pub const CANDIDATES: [Delimiter; 4] = [
        Delimiter::Comma,
        Delimiter::Semicolon,
        Delimiter::Tab,
        Delimiter::Pipe,
    ];

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Comma => ',',
            Self::Semicolon => ';',
            Self::Tab => '\t',
            Self::Pipe => '|',
        }
    }

    #[must_use]
    pub const fn as_byte(self) -> u8 {
        self.as_char() as u8
    }
}

impl TryFrom<char> for Delimiter {
    type Error = UnsupportedDelimiterError;

    fn try_from(raw: char) -> Result<Self, Self::Error> {
        match raw {
            ',' => Ok(Self::Comma),
            ';' => Ok(Self::Semicolon),
            '\t' => Ok(Self::Tab),
            '|' => Ok(Self::Pipe),
            other => Err(UnsupportedDelimiterError(other)),
        }
    }
}

/// Rows extracted from delimited text.
///
/// The delimiter and the header verdict are computed once, from the first
/// line and first row respectively, and apply to every row. When headers
/// are absent `columns` holds synthesized `column_0, column_1, …` names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedTable {
    pub delimiter: Delimiter,
    pub has_headers: bool,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ParsedTable {
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Each data row as ordered `(column, value)` pairs. Short rows pad
    /// with empty values; cells beyond the column list are dropped.
    pub fn named_rows(&self) -> impl Iterator<Item = Vec<(&str, &str)>> + '_ {
        self.rows.iter().map(|row| {
            self.columns
                .iter()
                .enumerate()
                .map(|(index, column)| {
                    (column.as_str(), row.get(index).map_or("", String::as_str))
                })
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_delimiter_is_rejected() {
        assert_eq!(Delimiter::try_from('\t'), Ok(Delimiter::Tab));
        assert_eq!(
            Delimiter::try_from('#'),
            Err(UnsupportedDelimiterError('#'))
        );
    }

    #[test]
    fn named_rows_pad_and_truncate_to_columns() {
        let table = ParsedTable {
            delimiter: Delimiter::Comma,
            has_headers: true,
            columns: vec!["a".to_string(), "b".to_string()],
            rows: vec![
                vec!["1".to_string()],
                vec!["2".to_string(), "3".to_string(), "4".to_string()],
            ],
        };
        let rows: Vec<Vec<(&str, &str)>> = table.named_rows().collect();
        assert_eq!(rows[0], vec![("a", "1"), ("b", "")]);
        assert_eq!(rows[1], vec![("a", "2"), ("b", "3")]);
    }
}
