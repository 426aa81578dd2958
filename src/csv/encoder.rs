//! CSV line encoding that `LineParser` reads back unchanged

use super::{DELIMITER, QUOTE};

/// Encoder for writing one line of comma-separated fields
///
/// Fields containing a comma or a quote are wrapped in quotes with inner
/// quotes doubled; everything else is written verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineEncoder;

impl LineEncoder {
    /// Create a new line encoder
    pub fn new() -> Self {
        Self
    }

    /// Encode fields into a new line
    ///
    /// # Examples
    ///
    /// ```
    /// use csvline::{LineEncoder, LineParser};
    ///
    /// let fields = ["to be", "be, become", r#"the "verb""#];
    /// let line = LineEncoder::new().encode_line(&fields);
    /// assert_eq!(line, r#"to be,"be, become","the ""verb""""#);
    /// assert_eq!(LineParser::new().parse_line(&line), fields);
    /// ```
    pub fn encode_line<S: AsRef<str>>(&self, fields: &[S]) -> String {
        let mut line = String::new();
        self.encode_line_into(fields, &mut line);
        line
    }

    /// Encode fields onto the end of `buffer`
    pub fn encode_line_into<S: AsRef<str>>(&self, fields: &[S], buffer: &mut String) {
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                buffer.push(DELIMITER);
            }
            self.encode_field(field.as_ref(), buffer);
        }
    }

    fn encode_field(&self, field: &str, buffer: &mut String) {
        if !self.needs_quoting(field) {
            buffer.push_str(field);
            return;
        }

        buffer.push(QUOTE);
        for ch in field.chars() {
            if ch == QUOTE {
                buffer.push(QUOTE);
            }
            buffer.push(ch);
        }
        buffer.push(QUOTE);
    }

    /// Check if a field must be quoted to survive a parse
    pub fn needs_quoting(&self, field: &str) -> bool {
        field.contains([DELIMITER, QUOTE])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_fields() {
        let encoder = LineEncoder::new();
        assert_eq!(encoder.encode_line(&["a", "b", "c"]), "a,b,c");
    }

    #[test]
    fn test_quoted_fields() {
        let encoder = LineEncoder::new();
        assert_eq!(encoder.encode_line(&["a,b", "c"]), r#""a,b",c"#);
    }

    #[test]
    fn test_escaped_quotes() {
        let encoder = LineEncoder::new();
        assert_eq!(
            encoder.encode_line(&[r#"Say "Hello""#, "world"]),
            r#""Say ""Hello""",world"#
        );
    }

    #[test]
    fn test_empty_fields() {
        let encoder = LineEncoder::new();
        assert_eq!(encoder.encode_line(&["a", "", "c"]), "a,,c");
        assert_eq!(encoder.encode_line(&["", "", ""]), ",,");
        assert_eq!(encoder.encode_line::<&str>(&[]), "");
    }

    #[test]
    fn test_encode_into_appends() {
        let encoder = LineEncoder::new();
        let mut buffer = String::from("row: ");
        encoder.encode_line_into(&[String::from("x"), String::from("y,z")], &mut buffer);
        assert_eq!(buffer, r#"row: x,"y,z""#);
    }

    #[test]
    fn test_needs_quoting() {
        let encoder = LineEncoder::new();
        assert!(encoder.needs_quoting("a,b"));
        assert!(encoder.needs_quoting(r#"a"b"#));
        assert!(!encoder.needs_quoting("a b"));
        assert!(!encoder.needs_quoting(""));
    }
}
