//! Tokenizer configuration

use crate::error::{Result, TokenizeError};

/// Delimiter, quote, escape and null sentinel used to split a line
///
/// Defaults to `,` delimiter, `"` quote, `\` escape and an empty null
/// sentinel, so a field that trims to nothing is null.
///
/// # Examples
///
/// ```
/// use loadstream::TokenizerConfig;
///
/// let config = TokenizerConfig::new()
///     .delimiter('|')
///     .no_escape()
///     .null_sentinel("NULL");
///
/// assert_eq!(config.delimiter_char(), Some('|'));
/// assert_eq!(config.escape_char(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TokenizerConfig {
    delimiter: Option<char>,
    escape: Option<char>,
    quote: Option<char>,
    null_sentinel: String,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            delimiter: Some(','),
            escape: Some('\\'),
            quote: Some('"'),
            null_sentinel: String::new(),
        }
    }
}

impl TokenizerConfig {
    /// Create a configuration with the default characters
    pub fn new() -> Self {
        Self::default()
    }

    /// Set field delimiter (builder pattern)
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Remove the delimiter; only whole-line extraction remains possible
    pub fn no_delimiter(mut self) -> Self {
        self.delimiter = None;
        self
    }

    /// Set quote character (builder pattern)
    pub fn quote(mut self, quote: char) -> Self {
        self.quote = Some(quote);
        self
    }

    /// Disable quoting
    pub fn no_quote(mut self) -> Self {
        self.quote = None;
        self
    }

    /// Set escape character (builder pattern)
    pub fn escape(mut self, escape: char) -> Self {
        self.escape = Some(escape);
        self
    }

    /// Disable escaping
    pub fn no_escape(mut self) -> Self {
        self.escape = None;
        self
    }

    /// Set the string that marks a null field (compared case-insensitively)
    pub fn null_sentinel<S: Into<String>>(mut self, sentinel: S) -> Self {
        self.null_sentinel = sentinel.into();
        self
    }

    /// Field delimiter, if any
    pub fn delimiter_char(&self) -> Option<char> {
        self.delimiter
    }

    /// Quote character, if quoting is enabled
    pub fn quote_char(&self) -> Option<char> {
        self.quote
    }

    /// Escape character, if escaping is enabled
    pub fn escape_char(&self) -> Option<char> {
        self.escape
    }

    /// String that marks a null field
    pub fn null_sentinel_str(&self) -> &str {
        &self.null_sentinel
    }

    /// Reject configurations that reuse the delimiter as quote or escape
    ///
    /// Quote and escape may be the same character, which gives doubled-quote
    /// escaping (`""` inside a quoted field).
    pub fn validate(&self) -> Result<()> {
        let Some(delimiter) = self.delimiter else {
            return Ok(());
        };

        for (role, ch) in [("quote", self.quote), ("escape", self.escape)] {
            if ch == Some(delimiter) {
                return Err(TokenizeError::ConflictingCharacters {
                    ch: delimiter,
                    first: "delimiter",
                    second: role,
                });
            }
        }
        Ok(())
    }
}
