//! Position-tracking cursor over LxSON source text.
//!
//! The cursor is `Copy`, so bounded lookahead is a checkpoint of the cursor
//! value and a rewind by assignment.

/// Read position within one source buffer.
#[derive(Clone, Copy)]
pub(crate) struct Cursor<'src> {
    /// Source text being read.
    source: &'src str,
    /// Current byte offset in source.
    position: usize,
    /// Current line number (1-based).
    line: u32,
    /// Characters consumed on the current line.
    consumed_on_line: u32,
    /// Byte offset where the current line starts.
    line_start: usize,
}

impl<'src> Cursor<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            consumed_on_line: 0,
            line_start: 0,
        }
    }

    /// Returns the next character without consuming it, or `None` at end of
    /// input.
    pub(crate) fn peek(&self) -> Option<char> {
        self.source[self.position..].chars().next()
    }

    /// Returns the unread remainder of the source.
    pub(crate) fn rest(&self) -> &'src str {
        &self.source[self.position..]
    }

    /// Consumes and returns the next character, maintaining line and column
    /// bookkeeping.
    pub(crate) fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.consumed_on_line = 0;
            self.line_start = self.position;
        } else {
            self.consumed_on_line += 1;
        }
        Some(c)
    }

    /// Consumes the next character if it equals `expected`.
    pub(crate) fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    /// Current line number, 1-based.
    pub(crate) fn line(&self) -> u32 {
        self.line
    }

    /// Column of the next unread character, 1-based.
    pub(crate) fn column(&self) -> u32 {
        self.consumed_on_line + 1
    }

    /// The full text of the line the cursor is on, without its terminator.
    pub(crate) fn current_line_text(&self) -> &'src str {
        let rest = &self.source[self.line_start..];
        rest.find('\n').map_or(rest, |end| &rest[..end])
    }
}
