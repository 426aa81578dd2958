//! Single-line CSV parsing with quote handling and per-field trimming

use super::{DELIMITER, QUOTE};
use crate::error::{CsvError, Result};

/// Parser for one line of comma-separated text
///
/// Quoted regions keep commas literal, `""` inside a quoted region becomes
/// one `"`, and every field is trimmed after quote processing. Parsing never
/// fails: an unmatched quote swallows the rest of the line into the last field.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineParser;

impl LineParser {
    /// Create a new line parser
    pub fn new() -> Self {
        Self
    }

    /// Parse a line into trimmed fields
    ///
    /// Always yields at least one field; `""` parses to `[""]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use csvline::LineParser;
    ///
    /// let parser = LineParser::new();
    /// assert_eq!(parser.parse_line(r#" a ,"b,c", "d""e" "#), vec!["a", "b,c", r#"d"e"#]);
    /// ```
    pub fn parse_line(&self, line: &str) -> Vec<String> {
        let mut fields = Vec::new();
        let mut current_field = String::new();
        let mut in_quotes = false;
        let mut chars = line.chars().peekable();

        while let Some(ch) = chars.next() {
            if ch == QUOTE {
                if in_quotes && chars.peek() == Some(&QUOTE) {
                    // Escaped quote ("")
                    current_field.push(QUOTE);
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            } else if ch == DELIMITER && !in_quotes {
                fields.push(current_field.trim().to_string());
                current_field.clear();
            } else {
                current_field.push(ch);
            }
        }

        // Unterminated quote: whatever was read is the last field
        fields.push(current_field.trim().to_string());
        fields
    }

    /// Number of fields `parse_line` would produce, without building them
    ///
    /// This is the count of commas outside quoted regions plus one.
    pub fn count_fields(&self, line: &str) -> usize {
        let mut count = 1;
        let mut in_quotes = false;

        for ch in line.chars() {
            // An escaped quote toggles twice, which leaves the state unchanged
            if ch == QUOTE {
                in_quotes = !in_quotes;
            } else if ch == DELIMITER && !in_quotes {
                count += 1;
            }
        }
        count
    }

    /// Parse a line and require exactly `expected` fields
    ///
    /// # Examples
    ///
    /// ```
    /// use csvline::{CsvError, LineParser};
    ///
    /// let parser = LineParser::new();
    /// assert!(parser.parse_line_exact("word,meaning", 2).is_ok());
    /// assert_eq!(
    ///     parser.parse_line_exact("word", 2),
    ///     Err(CsvError::FieldCount { expected: 2, found: 1 })
    /// );
    /// ```
    pub fn parse_line_exact(&self, line: &str, expected: usize) -> Result<Vec<String>> {
        let fields = self.parse_line(line);
        if fields.len() != expected {
            tracing::debug!(expected, found = fields.len(), "rejecting line with wrong field count");
            return Err(CsvError::FieldCount {
                expected,
                found: fields.len(),
            });
        }
        Ok(fields)
    }
}

/// Parse a line into trimmed fields with the default parser
pub fn parse_line(line: &str) -> Vec<String> {
    LineParser::new().parse_line(line)
}
