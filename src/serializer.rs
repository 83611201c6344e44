//! MIME type serialization.
//!
//! Writes the canonical form `type/subtype;name=value;...`. Values that are
//! not tokens are wrapped in quotes. Embedded quotes and backslashes are
//! written as-is, so such values do not survive a parse/serialize cycle.

use crate::grammar::is_token;
use crate::mime_type::MimeType;
use std::fmt::{self, Write};

/// Serializes a MIME type to its canonical string.
///
/// # Examples
///
/// ```
/// use whatwg_mime::{parse, serialize};
///
/// let mime = parse("A/B;;;;C=D;;;;e=quote me;;").unwrap();
/// assert_eq!(serialize(&mime), "a/b;c=D;e=\"quote me\"");
/// ```
pub fn serialize(mime: &MimeType) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_mime_type(&mut out, mime);
    out
}

/// Writes the canonical form of `mime` into `out`.
pub(crate) fn write_mime_type<W: Write>(out: &mut W, mime: &MimeType) -> fmt::Result {
    out.write_str(mime.type_())?;
    out.write_char('/')?;
    out.write_str(mime.subtype())?;

    for (name, value) in mime.parameters() {
        out.write_char(';')?;
        out.write_str(name)?;
        match value {
            None => out.write_str("=\"\"")?,
            Some(value) if is_token(value) => {
                out.write_char('=')?;
                out.write_str(value)?;
            }
            Some(value) => {
                out.write_str("=\"")?;
                out.write_str(value)?;
                out.write_char('"')?;
            }
        }
    }

    Ok(())
}
