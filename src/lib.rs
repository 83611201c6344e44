//! MIME type parsing and serialization following the WHATWG MIME Sniffing standard.
//!
//! This crate provides:
//! - Parsing of MIME type strings (`type/subtype;name=value`) into [`MimeType`]
//! - Canonical serialization with lower-cased type, subtype and parameter names
//! - Ordered, first-wins parameter handling
//! - A boolean validity check
//!
//! Parsing is pure and synchronous; values can be shared freely across threads.
//!
//! # Examples
//!
//! ```
//! use whatwg_mime::{is_valid, parse};
//!
//! let mime = parse("text/html;charset=\"shift_jis\"iso-2022-jp").unwrap();
//! assert_eq!(mime.essence(), "text/html");
//! assert_eq!(mime.to_string(), "text/html;charset=shift_jis");
//!
//! assert!(!is_valid("text/💥"));
//! ```
//!
//! # Features
//!
//! - `serde`: implements `Serialize` and `Deserialize` for [`MimeType`] using
//!   its string form.

pub mod error;
pub mod grammar;
pub mod mime_type;
pub mod parameters;
pub mod parser;
pub mod serializer;

// Re-export commonly used types
pub use error::{Error, Result};
pub use mime_type::{is_valid, MimeType};
pub use parameters::Parameters;
pub use parser::parse;
pub use serializer::serialize;
