//! # csvline
//!
//! Parser for a single line of comma-separated text, as produced by
//! spreadsheet exports of word lists and quiz tables.
//!
//! - Commas inside `"..."` are literal
//! - `""` inside a quoted region is one literal `"`
//! - Every field is trimmed of surrounding whitespace
//! - Never fails; an unmatched quote runs to the end of the line
//!
//! Splitting a file into lines and mapping fields to columns is left to the caller.
//!
//! ## Quick Start
//!
//! ```
//! use csvline::{LineEncoder, LineParser};
//!
//! let parser = LineParser::new();
//! let fields = parser.parse_line(r#"hello, "hola, buenas" ,"say ""hi""""#);
//! assert_eq!(fields, vec!["hello", "hola, buenas", r#"say "hi""#]);
//!
//! let line = LineEncoder::new().encode_line(&fields);
//! assert_eq!(parser.parse_line(&line), fields);
//! ```

pub mod csv;
pub mod error;

pub use csv::{parse_line, LineEncoder, LineParser};
pub use error::{CsvError, Result};
