//! Recursive-descent parser for LxSON text.
//!
//! LxSON accepts a superset of the JSON value grammar with a permissive
//! edge: single- or double-quoted strings without escape processing,
//! unquoted identifier keys, a `name { ... }` shorthand that produces
//! `["name", { ... }]`, and a fallback that returns any otherwise
//! unrecognized input as a plain string rather than failing.

use crate::cursor::Cursor;
use lxson_value::{Error, ParseDetail, Result, Value};

/// Parses LxSON `text` into a value tree.
///
/// # Errors
/// Returns a parse error carrying line, column, and the offending source
/// line if the text is malformed.
pub fn parse(text: &str) -> Result<Value> {
    Parser::new(text).parse()
}

/// Parses LxSON `text` that was extracted from a named source.
///
/// `file` and `line_offset` only affect error reporting: errors name the
/// file, and reported line numbers are shifted by `line_offset` so they
/// match the embedding document.
///
/// # Errors
/// Returns a parse error carrying source context if the text is malformed.
pub fn parse_named(file: &str, line_offset: u32, text: &str) -> Result<Value> {
    Parser::with_context(file, line_offset, text).parse()
}

/// Single-use recursive-descent parser over one source buffer.
///
/// Most callers want [`parse`] or [`parse_named`]; the struct form exists
/// for callers that build up source context separately.
pub struct Parser<'src> {
    cursor: Cursor<'src>,
    /// Source name reported in errors, if any.
    file: Option<String>,
    /// Added to reported line numbers for text embedded in a larger document.
    line_offset: u32,
}

impl<'src> Parser<'src> {
    /// Creates a parser over `source` with no file context.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            cursor: Cursor::new(source),
            file: None,
            line_offset: 0,
        }
    }

    /// Creates a parser over `source` that reports errors against `file`,
    /// with `line_offset` added to reported line numbers.
    #[must_use]
    pub fn with_context(file: impl Into<String>, line_offset: u32, source: &'src str) -> Self {
        Self {
            cursor: Cursor::new(source),
            file: Some(file.into()),
            line_offset,
        }
    }

    /// Parses the full source as one value.
    ///
    /// After the value, only trailing whitespace may remain; anything else
    /// is an error (typically a stray bracket or brace).
    ///
    /// # Errors
    /// Returns a parse error if the text is malformed or not fully consumed.
    pub fn parse(mut self) -> Result<Value> {
        let value = self.read_value()?;
        self.cursor.skip_whitespace();
        if self.cursor.peek().is_some() {
            return Err(self.error_at("unexpected text after the value"));
        }
        Ok(value)
    }

    fn read_value(&mut self) -> Result<Value> {
        self.cursor.skip_whitespace();
        match self.cursor.peek() {
            Some('\'' | '"') => Ok(Value::from(self.read_string()?)),
            Some('{') => self.read_object(),
            Some('[') => self.read_array(),
            Some(c) if c.is_ascii_digit() || c == '-' || c == '.' => Ok(self.read_number()),
            _ => {
                if self.eat_literal("true") {
                    Ok(Value::from(true))
                } else if self.eat_literal("false") {
                    Ok(Value::from(false))
                } else if self.peek_named_map() {
                    self.read_named_map()
                } else {
                    Ok(Value::from(self.read_to_end()))
                }
            }
        }
    }

    /// Reads an integer or, once a `.` appears, a float.
    ///
    /// Integer accumulation wraps on overflow rather than failing; the float
    /// path is seeded from the integer digits already read, with the sign
    /// applied last.
    fn read_number(&mut self) -> Value {
        self.cursor.skip_whitespace();

        let negative = self.cursor.eat('-');
        if negative {
            self.cursor.skip_whitespace();
        }

        let mut int_value: i64 = 0;
        while let Some(digit) = self.cursor.peek().and_then(|c| c.to_digit(10)) {
            int_value = int_value.wrapping_mul(10).wrapping_add(i64::from(digit));
            self.cursor.advance();
        }

        let value = if self.cursor.peek() == Some('.') {
            self.cursor.advance();
            #[allow(clippy::cast_precision_loss)]
            let mut float_value = int_value as f64;
            let mut divisor = 10.0;
            while let Some(digit) = self.cursor.peek().and_then(|c| c.to_digit(10)) {
                float_value += f64::from(digit) / divisor;
                divisor *= 10.0;
                self.cursor.advance();
            }
            Value::from(if negative { -float_value } else { float_value })
        } else {
            Value::from(if negative {
                int_value.wrapping_neg()
            } else {
                int_value
            })
        };

        self.cursor.skip_whitespace();
        value
    }

    /// Reads a quoted string. Either quote character delimits; there is no
    /// escape processing, so a string cannot contain its own delimiter.
    fn read_string(&mut self) -> Result<String> {
        self.cursor.skip_whitespace();

        let delimiter = if self.cursor.peek() == Some('\'') {
            '\''
        } else {
            '"'
        };
        self.expect(delimiter)?;

        let mut text = String::new();
        loop {
            match self.cursor.peek() {
                Some(c) if c == delimiter => break,
                Some(c) => {
                    text.push(c);
                    self.cursor.advance();
                }
                None => return Err(self.error_at("unterminated string")),
            }
        }
        self.expect(delimiter)?;

        Ok(text)
    }

    /// Consumes the rest of the input verbatim. This is the permissive
    /// fallback for input that matches no other production.
    fn read_to_end(&mut self) -> String {
        let text = self.cursor.rest().to_owned();
        while self.cursor.advance().is_some() {}
        text
    }

    /// Reads an identifier: a letter or `_`, then letters, digits, or `_`.
    fn read_unquoted_string(&mut self) -> String {
        let mut text = String::new();
        while let Some(c) = self.cursor.peek() {
            if c.is_ascii_alphanumeric() || c == '_' {
                text.push(c);
                self.cursor.advance();
            } else {
                break;
            }
        }
        text
    }

    fn read_array(&mut self) -> Result<Value> {
        let mut values = Value::array();

        self.cursor.skip_whitespace();
        self.expect('[')?;

        loop {
            self.cursor.skip_whitespace();
            if self.cursor.peek() == Some(']') {
                break;
            }

            let value = self.read_value()?;
            values.push(value)?;

            self.cursor.skip_whitespace();
            if !self.cursor.eat(',') {
                break;
            }
        }

        self.cursor.skip_whitespace();
        self.expect(']')?;

        Ok(values)
    }

    fn read_key(&mut self) -> Result<String> {
        match self.cursor.peek() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => Ok(self.read_unquoted_string()),
            _ => self.read_string(),
        }
    }

    fn read_object(&mut self) -> Result<Value> {
        let mut map = Value::map();

        self.cursor.skip_whitespace();
        self.expect('{')?;

        loop {
            self.cursor.skip_whitespace();
            if self.cursor.peek() == Some('}') {
                break;
            }

            let key = self.read_key()?;
            self.cursor.skip_whitespace();
            self.expect(':')?;

            self.cursor.skip_whitespace();
            let value = self.read_value()?;
            map.insert(&key, value)?;

            self.cursor.skip_whitespace();
            if !self.cursor.eat(',') {
                break;
            }
        }

        self.cursor.skip_whitespace();
        self.expect('}')?;

        Ok(map)
    }

    /// Bounded lookahead for the named-map shorthand: a run of letters,
    /// optional whitespace, then `{`. Probes a copy of the cursor and
    /// consumes nothing.
    fn peek_named_map(&self) -> bool {
        let mut probe = self.cursor;

        let mut letters = 0;
        while probe.peek().is_some_and(|c| c.is_ascii_alphabetic()) {
            probe.advance();
            letters += 1;
        }
        if letters == 0 {
            return false;
        }

        probe.skip_whitespace();
        probe.peek() == Some('{')
    }

    /// Reads `name { ... }` as the two-element array `["name", { ... }]`.
    fn read_named_map(&mut self) -> Result<Value> {
        let mut pair = Value::array();
        pair.push(self.read_unquoted_string())?;
        self.cursor.skip_whitespace();
        pair.push(self.read_object()?)?;
        Ok(pair)
    }

    /// Consumes `literal` if the input starts with it.
    fn eat_literal(&mut self, literal: &str) -> bool {
        if self.cursor.rest().starts_with(literal) {
            for _ in literal.chars() {
                self.cursor.advance();
            }
            true
        } else {
            false
        }
    }

    /// Consumes `expected` or fails with a parse error naming what was
    /// found instead.
    fn expect(&mut self, expected: char) -> Result<()> {
        match self.cursor.peek() {
            Some(c) if c == expected => {
                self.cursor.advance();
                Ok(())
            }
            Some(c) => Err(self.error_at(format!("expected '{expected}', found '{c}'"))),
            None => Err(self.error_at(format!("expected '{expected}', found end of input"))),
        }
    }

    /// Builds a parse error at the cursor's current position.
    fn error_at(&self, message: impl Into<String>) -> Error {
        Error::parse(ParseDetail {
            message: message.into(),
            file: self.file.clone(),
            line: self.line_offset + self.cursor.line(),
            column: self.cursor.column(),
            source_line: self.cursor.current_line_text().to_owned(),
        })
    }
}
