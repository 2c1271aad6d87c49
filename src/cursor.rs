//! Forward-only character cursor over one buffered line

use crate::error::{Result, TokenizeError};

/// Character stream the tokenizer consumes
///
/// Position only moves forward. The tokenizer advances the cursor through
/// [`LineCursor::get_next`] and never rewinds it.
pub trait LineCursor {
    /// True if at least one character remains
    fn has_next(&self) -> bool;

    /// Return the next character and advance past it
    ///
    /// Fails with [`TokenizeError::UnexpectedEndOfLine`] when the cursor is
    /// exhausted.
    fn get_next(&mut self) -> Result<char>;

    /// All unconsumed characters, without advancing
    fn remaining(&self) -> &str;

    /// Skip past everything that is left
    ///
    /// Called after the last field of a line has been taken from
    /// [`LineCursor::remaining`].
    fn advance_to_end(&mut self) {
        while self.has_next() {
            if self.get_next().is_err() {
                break;
            }
        }
    }
}

/// A line of text plus the byte offset consumed so far
///
/// # Examples
///
/// ```
/// use loadstream::{IndexedLine, LineCursor};
///
/// let mut line = IndexedLine::new("ab");
/// assert_eq!(line.get_next().unwrap(), 'a');
/// assert_eq!(line.remaining(), "b");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedLine {
    line: String,
    position: usize,
}

impl IndexedLine {
    /// Create a cursor positioned at the start of `line`
    pub fn new<S: Into<String>>(line: S) -> Self {
        Self {
            line: line.into(),
            position: 0,
        }
    }

    /// Byte offset of the next unread character
    pub fn position(&self) -> usize {
        self.position
    }

    /// True once every character has been consumed
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.line.len()
    }

    /// The full line, consumed or not
    pub fn as_str(&self) -> &str {
        &self.line
    }
}

impl LineCursor for IndexedLine {
    fn has_next(&self) -> bool {
        !self.is_exhausted()
    }

    fn get_next(&mut self) -> Result<char> {
        let ch = self.line[self.position..]
            .chars()
            .next()
            .ok_or(TokenizeError::UnexpectedEndOfLine {
                position: self.position,
            })?;
        self.position += ch.len_utf8();
        Ok(ch)
    }

    fn remaining(&self) -> &str {
        &self.line[self.position..]
    }

    fn advance_to_end(&mut self) {
        self.position = self.line.len();
    }
}

impl From<&str> for IndexedLine {
    fn from(line: &str) -> Self {
        IndexedLine::new(line)
    }
}

impl From<String> for IndexedLine {
    fn from(line: String) -> Self {
        IndexedLine::new(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_only() {
        let mut cursor = IndexedLine::new("xyz");
        assert!(cursor.has_next());
        assert_eq!(cursor.get_next(), Ok('x'));
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.remaining(), "yz");
        // remaining() does not advance
        assert_eq!(cursor.remaining(), "yz");
        assert_eq!(cursor.get_next(), Ok('y'));
        assert_eq!(cursor.get_next(), Ok('z'));
        assert!(!cursor.has_next());
        assert_eq!(cursor.remaining(), "");
    }

    #[test]
    fn test_read_past_end() {
        let mut cursor = IndexedLine::new("a");
        cursor.get_next().unwrap();
        assert_eq!(
            cursor.get_next(),
            Err(TokenizeError::UnexpectedEndOfLine { position: 1 })
        );
    }

    #[test]
    fn test_multibyte_chars() {
        let mut cursor = IndexedLine::new("é,ß");
        assert_eq!(cursor.get_next(), Ok('é'));
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.get_next(), Ok(','));
        assert_eq!(cursor.remaining(), "ß");
    }

    #[test]
    fn test_advance_to_end() {
        let mut cursor = IndexedLine::from("a,b,c");
        cursor.get_next().unwrap();
        cursor.advance_to_end();
        assert!(cursor.is_exhausted());
        assert_eq!(cursor.remaining(), "");
        assert_eq!(cursor.as_str(), "a,b,c");
    }

    #[test]
    fn test_empty_line() {
        let cursor = IndexedLine::new(String::new());
        assert!(!cursor.has_next());
        assert!(cursor.is_exhausted());
    }
}
