//! Error types for field tokenizing

use thiserror::Error;

/// Errors raised while tokenizing a line
///
/// Running out of characters is not an error: [`crate::extract_field`]
/// reports it as `Ok(None)`. These variants cover caller misconfiguration
/// and reads the cursor could not satisfy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizeError {
    /// A non-last field was requested but no delimiter is configured
    #[error("no delimiter configured: only the last field of a line can be extracted")]
    MissingDelimiter,

    /// The same character was configured for two roles
    #[error("character {ch:?} is configured as both {first} and {second}")]
    ConflictingCharacters {
        ch: char,
        first: &'static str,
        second: &'static str,
    },

    /// The cursor was asked for a character past the end of the line
    #[error("unexpected end of line at byte {position}")]
    UnexpectedEndOfLine { position: usize },

    /// The line ended before the expected column was reached
    #[error("line ended before field {index}")]
    MissingField { index: usize },
}

/// Result type for tokenizer operations
pub type Result<T> = std::result::Result<T, TokenizeError>;
