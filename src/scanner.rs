use crate::error::{Span, TinyError};

const BLANKS: [char; 4] = [' ', '\n', '\t', '\r'];
const ESCAPABLE: [char; 5] = ['n', 't', 'r', '\\', '\''];
const LINE_COMMENT: &str = "//";

/// Cursor over the source text.
///
/// Every `match_*`/`scan_*` method skips blanks and comments first. A method
/// that does not match leaves the cursor where it was (after the skipped
/// blanks), so callers can try the next alternative.
pub struct Scanner {
    source: Vec<char>,
    current: usize,
}

impl Scanner {
    pub fn new(source: &str) -> Self {
        Self {
            source: source.chars().collect(),
            current: 0,
        }
    }

    pub fn position(&self) -> usize {
        self.current
    }

    /// Source length in characters.
    pub fn source_len(&self) -> usize {
        self.source.len()
    }

    pub fn reset(&mut self) {
        self.current = 0;
    }

    pub fn span_from(&self, start: usize) -> Span {
        Span::new(start, self.current.max(start))
    }

    /// Skips whitespace and `//` comments, including runs of both.
    pub fn skip_blanks(&mut self) {
        loop {
            while BLANKS.contains(&self.peek()) && !self.is_at_end() {
                self.advance();
            }

            if !self.starts_with(LINE_COMMENT) {
                break;
            }

            while !self.is_at_end() && self.peek() != '\n' {
                self.advance();
            }
        }
    }

    pub fn at_end(&mut self) -> bool {
        self.skip_blanks();
        self.is_at_end()
    }

    pub fn match_char(&mut self, expected: char) -> bool {
        self.skip_blanks();
        if self.is_at_end() || self.peek() != expected {
            false
        } else {
            self.advance();
            true
        }
    }

    pub fn match_literal(&mut self, expected: &str) -> bool {
        self.skip_blanks();
        if self.starts_with(expected) {
            self.current += expected.chars().count();
            true
        } else {
            false
        }
    }

    pub fn scan_identifier(&mut self) -> Option<String> {
        self.skip_blanks();
        let c = self.peek();
        if self.is_at_end() || !(c.is_ascii_alphabetic() || c == '_') {
            return None;
        }

        let start = self.current;
        while !self.is_at_end() && (self.peek().is_ascii_alphanumeric() || self.peek() == '_') {
            self.advance();
        }

        Some(self.source[start..self.current].iter().collect())
    }

    /// Scans a run of decimal digits. Only integers exist at this level.
    pub fn scan_number(&mut self) -> Result<Option<i64>, TinyError> {
        self.skip_blanks();
        let start = self.current;
        while !self.is_at_end() && self.peek().is_ascii_digit() {
            self.advance();
        }

        if self.current == start {
            return Ok(None);
        }

        let digits: String = self.source[start..self.current].iter().collect();
        match digits.parse::<i64>() {
            Ok(n) => Ok(Some(n)),
            Err(_) => Err(TinyError::scan_error(
                self.span_from(start),
                format!("Integer literal out of range: {}", digits),
            )),
        }
    }

    /// Scans `'...'` or raw `@'...'` and returns the decoded contents.
    pub fn scan_string(&mut self) -> Result<Option<String>, TinyError> {
        self.skip_blanks();
        let start = self.current;

        let escape = if self.match_char('@') {
            if !self.match_char('\'') {
                return Err(TinyError::scan_error_with_help(
                    self.span_from(start),
                    "Expected ''' after '@'".to_string(),
                    "Raw strings are written as @'text'.".to_string(),
                ));
            }
            false
        } else {
            if !self.match_char('\'') {
                return Ok(None);
            }
            true
        };

        // Blanks and '//' are string content here, so no skip_blanks() below.
        let mut contents = String::new();
        while !self.is_at_end() {
            let c = self.advance();
            if escape && c == '\\' {
                if self.is_at_end() {
                    break;
                }
                let escaped = self.advance();
                let decoded = match escaped {
                    'n' => '\n',
                    't' => '\t',
                    'r' => '\r',
                    c if ESCAPABLE.contains(&c) => c,
                    other => {
                        return Err(TinyError::scan_error_with_help(
                            Span::new(self.current - 2, self.current),
                            format!("Invalid escape sequence '\\{}'", other),
                            "Valid escapes are \\n, \\t, \\r, \\\\ and \\'. Use @'...' for raw strings."
                                .to_string(),
                        ));
                    }
                };
                contents.push(decoded);
            } else if c == '\'' {
                log::trace!("string literal {:?} at {}", contents, start);
                return Ok(Some(contents));
            } else {
                contents.push(c);
            }
        }

        Err(TinyError::scan_error(
            self.span_from(start),
            "Unterminated string".to_string(),
        ))
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn peek(&self) -> char {
        self.source.get(self.current).copied().unwrap_or('\0')
    }

    fn advance(&mut self) -> char {
        let c = self.peek();
        if !self.is_at_end() {
            self.current += 1;
        }
        c
    }

    fn starts_with(&self, expected: &str) -> bool {
        let mut pos = self.current;
        for c in expected.chars() {
            if self.source.get(pos) != Some(&c) {
                return false;
            }
            pos += 1;
        }
        true
    }
}
