//! The parsed MIME type value.

use crate::error::{Error, Result};
use crate::grammar::{trim_http_whitespace, trim_http_whitespace_end};
use crate::parameters::Parameters;
use crate::{parser, serializer};
use std::fmt;
use std::str::FromStr;

/// A parsed MIME type: type, subtype and ordered parameters.
///
/// Values are only produced by parsing and cannot be modified afterwards.
/// The `Display` implementation writes the canonical serialization.
///
/// # Examples
///
/// ```
/// use whatwg_mime::MimeType;
///
/// let mime: MimeType = "Text/HTML;Charset=utf-8;Name=this is quoted".parse().unwrap();
/// assert_eq!(mime.type_(), "text");
/// assert_eq!(mime.subtype(), "html");
/// assert_eq!(mime.essence(), "text/html");
/// assert_eq!(mime.to_string(), "text/html;charset=utf-8;name=\"this is quoted\"");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MimeType {
    type_: String,
    subtype: String,
    parameters: Parameters,
}

impl MimeType {
    /// Parses a MIME type string. See [`parse`](crate::parse).
    pub fn parse(input: &str) -> Result<Self> {
        parser::parse(input)
    }

    /// Builds a value from already-validated parts.
    pub(crate) fn from_parts(type_: &str, subtype: &str, parameters: Parameters) -> Self {
        Self {
            type_: trim_http_whitespace(type_).to_ascii_lowercase(),
            subtype: trim_http_whitespace_end(subtype).to_ascii_lowercase(),
            parameters,
        }
    }

    /// Returns the lower-case type, e.g. `text` in `text/html`.
    pub fn type_(&self) -> &str {
        &self.type_
    }

    /// Returns the lower-case subtype, e.g. `html` in `text/html`.
    pub fn subtype(&self) -> &str {
        &self.subtype
    }

    /// Returns the essence: `type/subtype` without parameters.
    pub fn essence(&self) -> String {
        format!("{}/{}", self.type_, self.subtype)
    }

    /// Returns the parameters in the order they first appeared.
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        serializer::write_mime_type(f, self)
    }
}

impl FromStr for MimeType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parser::parse(s)
    }
}

impl TryFrom<&str> for MimeType {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        parser::parse(s)
    }
}

/// Reports whether the input parses as a MIME type.
///
/// # Examples
///
/// ```
/// use whatwg_mime::is_valid;
///
/// assert!(is_valid("text/plain;charset=utf-8"));
/// assert!(!is_valid("text"));
/// assert!(!is_valid("   "));
/// ```
pub fn is_valid(input: &str) -> bool {
    parser::parse(input).is_ok()
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::MimeType;
    use serde::de::Error as DeError;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for MimeType {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for MimeType {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            MimeType::parse(&s).map_err(DeError::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let mime = MimeType::parse("\n\rTYpe/suBTypE\n\r\t ").unwrap();
        assert_eq!(mime.type_(), "type");
        assert_eq!(mime.subtype(), "subtype");
        assert_eq!(mime.essence(), "type/subtype");
        assert!(mime.parameters().is_empty());
    }

    #[test]
    fn test_from_str_and_try_from() {
        let a: MimeType = "A/B".parse().unwrap();
        let b = MimeType::try_from("a/b").unwrap();
        assert_eq!(a, b);

        assert_eq!("".parse::<MimeType>(), Err(Error::InvalidInput));
        assert!(MimeType::try_from("a").is_err());
    }

    #[test]
    fn test_equality_includes_parameters() {
        let a = MimeType::parse("a/b;c=d").unwrap();
        let b = MimeType::parse("a/b;c=e").unwrap();
        assert_ne!(a, b);
        assert_eq!(a.essence(), b.essence());
    }

    #[test]
    fn test_display() {
        let mime = MimeType::parse("a/b;c=d;e").unwrap();
        assert_eq!(format!("{mime}"), "a/b;c=d;e=d");
    }

    #[test]
    fn test_is_valid() {
        assert!(is_valid("a/b"));
        assert!(is_valid("a/b;💥=💥"));
        assert!(!is_valid(""));
        assert!(!is_valid("💥/b"));
        assert!(!is_valid("a/💥"));
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MimeType>();
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let mime = MimeType::parse("Text/HTML; charset=\"utf-8\"").unwrap();
        let json = serde_json::to_string(&mime).unwrap();
        assert_eq!(json, "\"text/html;charset=utf-8\"");

        let back: MimeType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mime);

        let err = serde_json::from_str::<MimeType>("\"text\"").unwrap_err();
        assert!(err.to_string().contains("Invalid subtype"));
    }
}
