//! CSV line utilities for parsing and encoding

mod encoder;
mod parser;

pub use encoder::LineEncoder;
pub use parser::{parse_line, LineParser};

/// Field separator
pub const DELIMITER: char = ',';

/// Quote character; doubled inside a quoted region to mean a literal quote
pub const QUOTE: char = '"';
