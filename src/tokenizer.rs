//! Field extraction over a [`LineCursor`]
//!
//! One call extracts one field. Non-last fields are scanned up to the next
//! delimiter that is neither quoted nor escaped; the last field of a line
//! takes whatever remains, delimiters included. Every raw token is then
//! unquoted, trimmed and checked against the null sentinel.

use crate::config::TokenizerConfig;
use crate::cursor::LineCursor;
use crate::error::{Result, TokenizeError};
use crate::types::FieldValue;
use tracing::trace;

/// Extract the next field from `cursor`
///
/// Returns `Ok(None)` when the cursor has no characters left and
/// `is_last_field` is false, so the caller can tell an exhausted line apart
/// from an empty field.
///
/// # Examples
///
/// ```
/// use loadstream::{extract_field, FieldValue, IndexedLine, TokenizerConfig};
///
/// let config = TokenizerConfig::new().null_sentinel("NULL");
/// let mut line = IndexedLine::new(r#""a,b", null ,c,d"#);
///
/// let first = extract_field(&mut line, &config, false).unwrap();
/// assert_eq!(first, Some(FieldValue::from("a,b")));
///
/// let second = extract_field(&mut line, &config, false).unwrap();
/// assert_eq!(second, Some(FieldValue::Null));
///
/// let rest = extract_field(&mut line, &config, true).unwrap();
/// assert_eq!(rest, Some(FieldValue::from("c,d")));
/// ```
pub fn extract_field<C>(
    cursor: &mut C,
    config: &TokenizerConfig,
    is_last_field: bool,
) -> Result<Option<FieldValue>>
where
    C: LineCursor + ?Sized,
{
    extract_field_with(
        cursor,
        config.null_sentinel_str(),
        config.delimiter_char(),
        config.escape_char(),
        config.quote_char(),
        is_last_field,
    )
}

/// Flat-argument form of [`extract_field`]
///
/// Fails with [`TokenizeError::MissingDelimiter`] when a non-last field is
/// requested without a delimiter.
pub fn extract_field_with<C>(
    cursor: &mut C,
    null_sentinel: &str,
    delimiter: Option<char>,
    escape: Option<char>,
    quote: Option<char>,
    is_last_field: bool,
) -> Result<Option<FieldValue>>
where
    C: LineCursor + ?Sized,
{
    if is_last_field {
        let field = normalize(cursor.remaining(), null_sentinel, quote);
        cursor.advance_to_end();
        return Ok(Some(field));
    }

    let delimiter = delimiter.ok_or(TokenizeError::MissingDelimiter)?;
    let raw = scan_for_boundary(cursor, delimiter, escape, quote)?;
    Ok(raw.map(|raw| normalize(&raw, null_sentinel, quote)))
}

/// Read one raw token, stopping at the next unquoted delimiter
///
/// `None` means the cursor was already exhausted.
pub(crate) fn scan_for_boundary<C>(
    cursor: &mut C,
    delimiter: char,
    escape: Option<char>,
    quote: Option<char>,
) -> Result<Option<String>>
where
    C: LineCursor + ?Sized,
{
    if !cursor.has_next() {
        trace!("cursor exhausted before field");
        return Ok(None);
    }

    let first = cursor.get_next()?;
    if first == delimiter {
        return Ok(Some(String::new()));
    }

    // The first character is taken literally, even when it is the escape
    let mut token = String::new();
    token.push(first);
    let started_inside_quote = quote == Some(first);
    inner_scan(cursor, token, delimiter, escape, quote, started_inside_quote).map(Some)
}

/// Append characters to `token` until an unquoted delimiter or end of line
///
/// Once a quote character is seen the token is no longer quoted; quoting is
/// never re-entered. An escape character is dropped and the character after
/// it is kept verbatim. An escape that is also the quote character closes
/// the quote before escaping. A dangling escape at the end of the line is
/// dropped.
fn inner_scan<C>(
    cursor: &mut C,
    mut token: String,
    delimiter: char,
    escape: Option<char>,
    quote: Option<char>,
    started_inside_quote: bool,
) -> Result<String>
where
    C: LineCursor + ?Sized,
{
    let mut in_quote = started_inside_quote;

    while cursor.has_next() {
        let c = cursor.get_next()?;
        if c == delimiter && !in_quote {
            break;
        }

        if escape == Some(c) {
            // With doubled-quote escaping the escape also closes the quote
            if quote == Some(c) {
                in_quote = false;
            }
            if cursor.has_next() {
                token.push(cursor.get_next()?);
            } else {
                trace!("dangling escape at end of line dropped");
            }
            continue;
        }

        token.push(c);
        if quote == Some(c) {
            in_quote = false;
        }
    }

    Ok(token)
}

/// Unquote, trim and null-check a raw token
///
/// One leading and one trailing quote are stripped when both are present; a
/// token consisting of a single quote character is kept as is.
pub fn normalize(raw: &str, null_sentinel: &str, quote: Option<char>) -> FieldValue {
    let unquoted = match quote {
        Some(q) => strip_quotes(raw, q),
        None => raw,
    };

    let trimmed = unquoted.trim();
    if matches_sentinel(trimmed, null_sentinel) {
        FieldValue::Null
    } else {
        FieldValue::Text(trimmed.to_string())
    }
}

fn strip_quotes(raw: &str, quote: char) -> &str {
    raw.strip_prefix(quote)
        .and_then(|inner| inner.strip_suffix(quote))
        .unwrap_or(raw)
}

fn matches_sentinel(field: &str, sentinel: &str) -> bool {
    field.eq_ignore_ascii_case(sentinel)
        || field
            .chars()
            .flat_map(char::to_lowercase)
            .eq(sentinel.chars().flat_map(char::to_lowercase))
}
