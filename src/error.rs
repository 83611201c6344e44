//! Error types for the whatwg-mime crate.

use thiserror::Error;

/// The main error type for MIME type parsing.
///
/// Only the type and subtype can make an input invalid. Malformed parameters
/// are dropped by the parser and never surface here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input was empty after trimming HTTP whitespace.
    #[error("Invalid input: empty MIME type")]
    InvalidInput,

    /// The type segment is empty or contains non-token code points.
    #[error("Invalid type: {0:?}")]
    InvalidType(String),

    /// The subtype segment is empty or contains non-token code points.
    #[error("Invalid subtype: {0:?}")]
    InvalidSubtype(String),
}

/// Specialized Result type for MIME type operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidInput;
        assert_eq!(err.to_string(), "Invalid input: empty MIME type");

        let err = Error::InvalidType("te xt".to_string());
        assert_eq!(err.to_string(), "Invalid type: \"te xt\"");

        let err = Error::InvalidSubtype(String::new());
        assert_eq!(err.to_string(), "Invalid subtype: \"\"");
    }

    #[test]
    fn test_error_debug() {
        let err = Error::InvalidType("a b".to_string());
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("InvalidType"));
    }

    #[test]
    fn test_result_type() {
        let ok_result: Result<i32> = Ok(42);
        assert_eq!(ok_result.unwrap(), 42);

        let err_result: Result<i32> = Err(Error::InvalidInput);
        assert!(err_result.is_err());
    }
}
