//! Contact ingestion and normalization pipeline.
//!
//! Pure, synchronous building blocks for turning messy structured text
//! (JSON, XML, delimited tables, or plain prose) into validated
//! contacts. Orchestration, batching policy, and storage belong to the
//! caller; this crate only detects, decodes, canonicalizes, and
//! assembles, one document or row at a time.
//!
//! # Example
//!
//! ```
//! use intake_core::normalize_fields;
//!
//! let contact = normalize_fields([
//!     ("nombre", "Luis"),
//!     ("apellidos", "García"),
//!     ("correo", "luis@empresa.es"),
//! ])
//! .expect("record has a name and an email");
//!
//! assert_eq!(contact.first_name.as_deref(), Some("Luis"));
//! assert_eq!(contact.last_name.as_deref(), Some("García"));
//! assert_eq!(contact.email.as_deref(), Some("luis@empresa.es"));
//! assert_eq!(contact.phone, None);
//! ```

pub mod assemble;
pub mod pipeline;

pub use assemble::assemble_contact;
pub use pipeline::{
    document_records, filter_records, normalize_fields, normalize_record, normalize_table,
    table_records,
};

pub use intake_ingest::{detect_and_parse, detect_format};
