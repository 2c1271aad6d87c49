//! Whole-line splitting on top of the field tokenizer
//!
//! The import pipeline knows how many columns each line carries and asks for
//! them one at a time, flagging the final column so it swallows the rest of
//! the line. [`LineSplitter`] packages that loop.

use crate::config::TokenizerConfig;
use crate::cursor::{IndexedLine, LineCursor};
use crate::error::{Result, TokenizeError};
use crate::tokenizer::extract_field;
use crate::types::FieldValue;
use tracing::debug;

/// Splits lines into fields with a fixed configuration
///
/// Holds only an immutable [`TokenizerConfig`], so one splitter can be
/// shared between threads. Each call creates its own cursor.
///
/// # Examples
///
/// ```
/// use loadstream::{FieldValue, LineSplitter, TokenizerConfig};
///
/// let splitter = LineSplitter::new(TokenizerConfig::new().null_sentinel("NULL")).unwrap();
/// let fields = splitter.split(r#"1,"Smith, J",NULL,free text, with commas"#, 4).unwrap();
///
/// assert_eq!(fields[1], FieldValue::from("Smith, J"));
/// assert!(fields[2].is_null());
/// assert_eq!(fields[3], FieldValue::from("free text, with commas"));
/// ```
#[derive(Debug, Clone)]
pub struct LineSplitter {
    config: TokenizerConfig,
}

impl LineSplitter {
    /// Create a splitter, rejecting conflicting configurations
    pub fn new(config: TokenizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration every split uses
    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Split `line` into exactly `columns` fields
    ///
    /// The last column takes the remainder of the line, delimiters included.
    /// If the line runs out before the last column,
    /// [`TokenizeError::MissingField`] names the first column that could not
    /// be filled.
    pub fn split(&self, line: &str, columns: usize) -> Result<Vec<FieldValue>> {
        let mut cursor = IndexedLine::new(line);
        self.split_cursor(&mut cursor, columns)
    }

    /// Same as [`LineSplitter::split`], over a caller-supplied cursor
    pub fn split_cursor<C>(&self, cursor: &mut C, columns: usize) -> Result<Vec<FieldValue>>
    where
        C: LineCursor + ?Sized,
    {
        let mut fields = Vec::with_capacity(columns);

        for index in 0..columns {
            let is_last_field = index + 1 == columns;
            match extract_field(cursor, &self.config, is_last_field)? {
                Some(field) => fields.push(field),
                None => {
                    debug!(index, columns, "line ended early");
                    return Err(TokenizeError::MissingField { index });
                }
            }
        }

        Ok(fields)
    }

    /// Split `line` into however many fields it holds
    ///
    /// Fields are extracted until the line is exhausted, so a trailing
    /// delimiter does not produce a trailing empty field. Without a
    /// configured delimiter the whole line is one field.
    pub fn split_all(&self, line: &str) -> Result<Vec<FieldValue>> {
        let mut cursor = IndexedLine::new(line);

        if self.config.delimiter_char().is_none() {
            let field = extract_field(&mut cursor, &self.config, true)?;
            return Ok(field.into_iter().collect());
        }

        let mut fields = Vec::new();
        while let Some(field) = extract_field(&mut cursor, &self.config, false)? {
            fields.push(field);
        }

        debug!(fields = fields.len(), "split line");
        Ok(fields)
    }

    /// Lazily split a sequence of lines, one result per line
    ///
    /// A failing line does not stop the iterator; the caller decides whether
    /// to skip it or abort.
    pub fn split_lines<'s, I>(
        &'s self,
        lines: I,
        columns: usize,
    ) -> impl Iterator<Item = Result<Vec<FieldValue>>> + 's
    where
        I: IntoIterator + 's,
        I::Item: AsRef<str>,
        I::IntoIter: 's,
    {
        lines
            .into_iter()
            .map(move |line| self.split(line.as_ref(), columns))
    }

    /// Split lines on the rayon pool, preserving input order
    #[cfg(feature = "parallel")]
    pub fn split_lines_par<S>(&self, lines: &[S], columns: usize) -> Vec<Result<Vec<FieldValue>>>
    where
        S: AsRef<str> + Sync,
    {
        use rayon::prelude::*;

        lines
            .par_iter()
            .map(|line| self.split(line.as_ref(), columns))
            .collect()
    }
}
