//! Type definitions for parsed fields

use std::fmt;

/// A single field extracted from a line
///
/// Either trimmed text or the null marker produced when the field matches
/// the configured null sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldValue {
    /// Field matched the null sentinel
    Null,
    /// Trimmed field text (may be empty)
    Text(String),
}

impl FieldValue {
    /// Borrow the text, or `None` for a null field
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Null => None,
            FieldValue::Text(s) => Some(s),
        }
    }

    /// Check if field is null
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Convert into the `String | null` shape handed to type converters
    pub fn into_option(self) -> Option<String> {
        match self {
            FieldValue::Null => None,
            FieldValue::Text(s) => Some(s),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => Ok(()),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<Option<String>> for FieldValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(FieldValue::Null, FieldValue::Text)
    }
}

impl From<FieldValue> for Option<String> {
    fn from(value: FieldValue) -> Self {
        value.into_option()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let text = FieldValue::from("abc");
        assert_eq!(text.as_str(), Some("abc"));
        assert!(!text.is_null());
        assert!(FieldValue::Null.is_null());
        assert_eq!(FieldValue::Null.as_str(), None);
    }

    #[test]
    fn test_option_conversions() {
        assert_eq!(FieldValue::from(None), FieldValue::Null);
        assert_eq!(
            FieldValue::from(Some("x".to_string())),
            FieldValue::Text("x".to_string())
        );
        let back: Option<String> = FieldValue::Text(String::new()).into();
        assert_eq!(back, Some(String::new()));
        assert_eq!(FieldValue::Null.into_option(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(FieldValue::from("a b").to_string(), "a b");
        assert_eq!(FieldValue::Null.to_string(), "");
    }
}
