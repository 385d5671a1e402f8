pub mod decode;
pub mod detect;
pub mod table;

pub use decode::{DecodeError, decode_json, decode_xml};
pub use detect::{detect_and_parse, detect_format};
pub use table::{detect_delimiter, parse_table, parse_table_with};
