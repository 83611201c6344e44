//! MIME type parsing.
//!
//! Implements the "parse a MIME type" algorithm from the WHATWG MIME Sniffing
//! standard as a seven-state machine over Unicode scalar values:
//!
//! ```text
//! Type -> Subtype -> ParamStart -> ParamName -> ParamValue -> QuotedString -> IgnoreUntilParam
//! ```
//!
//! Only the type and subtype can fail a parse. Parameters that do not fit the
//! grammar are dropped and parsing continues.

use crate::error::{Error, Result};
use crate::grammar::{
    is_http_whitespace, is_quoted_string, is_token, trim_http_whitespace,
    trim_http_whitespace_end,
};
use crate::mime_type::MimeType;
use crate::parameters::Parameters;
use std::mem;
use tracing::{debug, trace};

/// Parser states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Type,
    Subtype,
    /// Skips whitespace and semicolons before a parameter name.
    ParamStart,
    ParamName,
    ParamValue,
    QuotedString,
    /// Discards everything after a closing quote up to the next `;`.
    IgnoreUntilParam,
}

/// Parses a MIME type string such as `text/html;charset=utf-8`.
///
/// Leading and trailing HTTP whitespace is ignored. The type, subtype and
/// parameter names are lower-cased; parameter values keep their case.
///
/// # Errors
///
/// - [`Error::InvalidInput`] if the input is empty after trimming.
/// - [`Error::InvalidType`] if the type is empty or not a token.
/// - [`Error::InvalidSubtype`] if the subtype is empty or not a token.
///
/// # Examples
///
/// ```
/// use whatwg_mime::parse;
///
/// let mime = parse("Text/HTML; Charset=\"Shift_JIS\"").unwrap();
/// assert_eq!(mime.essence(), "text/html");
/// assert_eq!(mime.parameters().get("charset"), Some(Some("Shift_JIS")));
/// ```
pub fn parse(input: &str) -> Result<MimeType> {
    let input = trim_http_whitespace(input);
    if input.is_empty() {
        debug!("rejecting empty MIME type");
        return Err(Error::InvalidInput);
    }

    let mut parser = Parser::new();
    for c in input.chars() {
        parser.step(c);
    }
    parser.finish()
}

struct Parser {
    state: State,
    type_: String,
    subtype: String,
    param_name: String,
    /// `None` until a value character is seen for the current parameter.
    param_value: Option<String>,
    parameters: Parameters,
}

impl Parser {
    fn new() -> Self {
        Self {
            state: State::Type,
            type_: String::new(),
            subtype: String::new(),
            param_name: String::new(),
            param_value: None,
            parameters: Parameters::new(),
        }
    }

    fn transition(&mut self, state: State) {
        trace!("parser state {:?} -> {:?}", self.state, state);
        self.state = state;
    }

    fn step(&mut self, c: char) {
        match self.state {
            State::Type => match c {
                '/' => self.transition(State::Subtype),
                _ => self.type_.push(c),
            },
            State::Subtype => match c {
                ';' => self.transition(State::ParamStart),
                _ => self.subtype.push(c),
            },
            State::ParamStart => {
                if is_http_whitespace(c) || c == ';' {
                    return;
                }
                self.param_name.clear();
                self.param_name.push(c);
                self.transition(State::ParamName);
            }
            State::ParamName => match c {
                '=' => {
                    self.param_value = None;
                    self.transition(State::ParamValue);
                }
                ';' => {
                    // Whitespace after this point becomes part of the next name.
                    let name = mem::take(&mut self.param_name);
                    self.store(name, None);
                }
                _ => self.param_name.push(c),
            },
            State::ParamValue => match c {
                '"' => self.transition(State::QuotedString),
                ';' => {
                    if let Some(value) = self.param_value.as_mut() {
                        let len = trim_http_whitespace_end(value).len();
                        value.truncate(len);
                    }
                    let name = mem::take(&mut self.param_name);
                    let value = self.param_value.clone();
                    self.store(name, value);
                    self.transition(State::ParamStart);
                }
                _ => self.param_value.get_or_insert_with(String::new).push(c),
            },
            State::QuotedString => match c {
                '"' => {
                    let name = mem::take(&mut self.param_name);
                    let value = self.param_value.take();
                    self.store(name, value);
                    self.transition(State::IgnoreUntilParam);
                }
                // Dropped; the next character is not escaped.
                '\\' => {}
                _ => self.param_value.get_or_insert_with(String::new).push(c),
            },
            State::IgnoreUntilParam => {
                if c == ';' {
                    self.transition(State::ParamStart);
                }
            }
        }
    }

    /// Commits a parameter candidate.
    ///
    /// A valueless parameter is always stored, replacing any earlier value for
    /// the same name. A valued parameter is stored only if its name is new and
    /// its value is a non-empty quoted-string.
    fn store(&mut self, name: String, value: Option<String>) {
        let name = name.to_lowercase();
        match value {
            None => self.parameters.set(name, None),
            Some(value)
                if !name.is_empty()
                    && !self.parameters.contains_key(&name)
                    && is_quoted_string(&value) =>
            {
                self.parameters.set(name, Some(value));
            }
            Some(value) => {
                trace!(name = %name, value = %value, "dropping parameter");
            }
        }
    }

    fn finish(mut self) -> Result<MimeType> {
        // Input ended inside a name or an unquoted value.
        if !self.param_name.is_empty() {
            let name = mem::take(&mut self.param_name);
            let value = self.param_value.take();
            self.store(name, value);
        }

        if trim_http_whitespace(&self.type_).is_empty() || !is_token(&self.type_) {
            debug!(type_ = %self.type_, "rejecting MIME type with invalid type");
            return Err(Error::InvalidType(self.type_));
        }
        if trim_http_whitespace_end(&self.subtype).is_empty() || !is_token(&self.subtype) {
            debug!(subtype = %self.subtype, "rejecting MIME type with invalid subtype");
            return Err(Error::InvalidSubtype(self.subtype));
        }

        Ok(MimeType::from_parts(
            &self.type_,
            &self.subtype,
            self.parameters,
        ))
    }
}
