//! Grammar predicates for MIME type strings.
//!
//! Based on the HTTP token and quoted-string definitions used by the WHATWG
//! MIME Sniffing standard. Everything here works on `char`, so a character
//! outside the Basic Multilingual Plane is always a single unit.

/// Reports whether the character is an HTTP token code point.
///
/// token code point := "!" / "#" / "$" / "%" / "&" / "'" / "*" / "+" / "-" / "." /
///                     "^" / "_" / "`" / "|" / "~" / ALPHA / DIGIT
pub fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '!' | '#' | '$' | '%' | '&' | '\'' | '*' | '+' | '-' | '.' | '^' | '_' | '`' | '|' | '~'
        )
}

/// Reports whether the string is a non-empty run of HTTP token code points.
pub fn is_token(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_token_char)
}

/// Reports whether the character is HTTP whitespace (LF, CR, TAB or SPACE).
pub fn is_http_whitespace(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\t' | ' ')
}

/// Reports whether the character is an HTTP quoted-string token code point.
///
/// That is TAB, U+0020 through U+007E, or U+0080 through U+00FF.
pub fn is_quoted_string_char(c: char) -> bool {
    matches!(c, '\t' | '\u{20}'..='\u{7e}' | '\u{80}'..='\u{ff}')
}

/// Reports whether the string is a non-empty run of quoted-string code points.
pub fn is_quoted_string(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_quoted_string_char)
}

/// Strips leading and trailing HTTP whitespace.
pub fn trim_http_whitespace(s: &str) -> &str {
    s.trim_matches(is_http_whitespace)
}

/// Strips trailing HTTP whitespace only.
pub fn trim_http_whitespace_end(s: &str) -> &str {
    s.trim_end_matches(is_http_whitespace)
}
