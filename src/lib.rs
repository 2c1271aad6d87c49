//! # loadstream
//!
//! Single-pass field tokenizer for bulk delimited-text import.
//!
//! A line is consumed through a forward-only [`LineCursor`], one field per
//! call. Each field honors a configurable delimiter, quote character, escape
//! character and null sentinel; the last field of a line takes the remainder
//! verbatim, delimiters included.
//!
//! ## Quick Start
//!
//! ```
//! use loadstream::{extract_field, FieldValue, IndexedLine, TokenizerConfig};
//!
//! let config = TokenizerConfig::new().null_sentinel("NULL");
//! let mut line = IndexedLine::new(r"42,a\,b,NULL");
//!
//! assert_eq!(extract_field(&mut line, &config, false).unwrap(), Some(FieldValue::from("42")));
//! assert_eq!(extract_field(&mut line, &config, false).unwrap(), Some(FieldValue::from("a,b")));
//! assert_eq!(extract_field(&mut line, &config, false).unwrap(), Some(FieldValue::Null));
//! assert_eq!(extract_field(&mut line, &config, false).unwrap(), None);
//! ```
//!
//! Splitting whole lines with a known column count:
//!
//! ```
//! use loadstream::{LineSplitter, TokenizerConfig};
//!
//! let splitter = LineSplitter::new(TokenizerConfig::new().delimiter('|')).unwrap();
//! let fields = splitter.split("7|'quoted'|rest|of|line", 3).unwrap();
//! assert_eq!(fields[2].as_str(), Some("rest|of|line"));
//! ```

pub mod config;
pub mod cursor;
pub mod error;
pub mod line_splitter;
pub mod tokenizer;
pub mod types;

pub use config::TokenizerConfig;
pub use cursor::{IndexedLine, LineCursor};
pub use error::{Result, TokenizeError};
pub use line_splitter::LineSplitter;
pub use tokenizer::{extract_field, extract_field_with, normalize};
pub use types::FieldValue;
