pub mod error;
pub mod format;
pub mod record;
pub mod table;
pub mod value;

pub use error::{UnsupportedDelimiterError, ValidationError};
pub use format::{DetectedFormat, ParsedInput};
pub use record::{
    CanonicalField, CanonicalRecord, NormalizedContact, SYNTHESIZED_PREFIX, is_synthesized_column,
    synthesized_columns,
};
pub use table::{Delimiter, ParsedTable};
pub use value::Value;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_serializes_round_trip() {
        let contact = NormalizedContact {
            first_name: Some("Luis".to_string()),
            last_name: Some("García".to_string()),
            email: Some("luis@empresa.es".to_string()),
            phone: None,
            company: None,
        };
        let json = serde_json::to_string(&contact).expect("serialize contact");
        let round: NormalizedContact = serde_json::from_str(&json).expect("deserialize contact");
        assert_eq!(round, contact);
    }

    #[test]
    fn synthesized_columns_are_positional() {
        let columns = synthesized_columns(3);
        assert_eq!(columns, vec!["column_0", "column_1", "column_2"]);
        assert!(columns.iter().all(|name| is_synthesized_column(name)));
        assert!(!is_synthesized_column("column_"));
        assert!(!is_synthesized_column("column_x"));
    }
}
