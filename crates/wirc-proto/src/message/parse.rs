//! Message parsing.
//!
//! A bounds-checked scan over one line. Every step works on string slices
//! and `find`, so no input (empty, all spaces, truncated) can index out of
//! range; malformed lines come back as a [`ParseError`].

use std::str::FromStr;

use tracing::trace;

use crate::error::ParseError;
use crate::tokenizer::Tokens;

use super::tags::{TagValue, Tags};
use super::types::{Message, Params};

/// Parse one line into a [`Message`].
///
/// Trailing line terminators are stripped. The stored [`Message::raw`] is
/// the line without them.
///
/// ```
/// use wirc_proto::{parse, ParseError};
///
/// let msg = parse("PING :abc123\r\n").unwrap();
/// assert_eq!(msg.command, "PING");
/// assert_eq!(msg.trailing(), Some("abc123"));
///
/// assert_eq!(parse("@badge=1").unwrap_err(), ParseError::UnterminatedTags);
/// ```
pub fn parse(line: &str) -> Result<Message, ParseError> {
    let line = line.trim_end_matches(['\r', '\n']);

    let mut rest = skip_spaces(line);
    if rest.is_empty() {
        return Err(ParseError::EmptyMessage);
    }

    let mut message = Message {
        raw: Some(line.to_owned()),
        ..Message::default()
    };

    if let Some(after_at) = rest.strip_prefix('@') {
        let end = after_at.find(' ').ok_or(ParseError::UnterminatedTags)?;
        parse_tags(&after_at[..end], &mut message.tags);
        rest = skip_spaces(&after_at[end..]);
    }

    if let Some(after_colon) = rest.strip_prefix(':') {
        let end = after_colon
            .find(' ')
            .ok_or(ParseError::UnterminatedPrefix)?;
        message.prefix = Some(after_colon[..end].to_owned());
        rest = skip_spaces(&after_colon[end..]);
    }

    let (command, params) = match rest.find(' ') {
        Some(end) => (&rest[..end], Some(&rest[end..])),
        None => (rest, None),
    };

    if command.is_empty() {
        return Err(ParseError::MissingCommand);
    }
    if !is_valid_command(command) {
        return Err(ParseError::InvalidCommand(command.to_owned()));
    }
    message.command = command.to_owned();

    if let Some(params) = params {
        parse_params(params, &mut message.params);
    }

    trace!(command = %message.command, params = message.params.len(), "parsed line");
    Ok(message)
}

impl FromStr for Message {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Message, Self::Err> {
        parse(s)
    }
}

fn skip_spaces(s: &str) -> &str {
    s.trim_start_matches(' ')
}

/// RFC 2812: `command = 1*letter / 3digit`.
fn is_valid_command(command: &str) -> bool {
    let bytes = command.as_bytes();
    let all_letters = bytes.iter().all(u8::is_ascii_alphabetic);
    let numeric = bytes.len() == 3 && bytes.iter().all(u8::is_ascii_digit);
    !bytes.is_empty() && (all_letters || numeric)
}

/// Parse the tag block between `@` and the first space.
///
/// Empty entries (`a;;b`, a trailing `;`) are skipped; a repeated key keeps
/// its last value.
fn parse_tags(block: &str, tags: &mut Tags) {
    for entry in Tokens::new(block, ";") {
        let mut pair = Tokens::new(entry, "=");
        let Some(key) = pair.next() else {
            continue;
        };
        if key.is_empty() {
            continue;
        }

        let value = match pair.remainder() {
            Some(value) => TagValue::Text(value.to_owned()),
            None => TagValue::Flag,
        };
        tags.insert(key.to_owned(), value);
    }
}

/// Parse everything after the command.
///
/// Runs of spaces separate parameters; a parameter starting with `:` takes
/// the rest of the line.
fn parse_params(mut rest: &str, params: &mut Params) {
    loop {
        rest = skip_spaces(rest);
        if rest.is_empty() {
            break;
        }

        if let Some(trailing) = rest.strip_prefix(':') {
            params.trailing = Some(trailing.to_owned());
            break;
        }

        match rest.find(' ') {
            Some(end) => {
                params.middle.push(rest[..end].to_owned());
                rest = &rest[end..];
            }
            None => {
                params.middle.push(rest.to_owned());
                break;
            }
        }
    }
}
