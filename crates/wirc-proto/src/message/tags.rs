//! IRCv3 message tags.

use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

/// Tag map of a message.
///
/// Keys are unique and iterate in sorted order, so serialization is
/// deterministic.
pub type Tags = BTreeMap<String, TagValue>;

/// Value of a single tag.
///
/// Values are kept exactly as they appeared on the wire; escape sequences
/// such as `\s` or `\:` are not decoded.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TagValue {
    /// Key present without `=`.
    Flag,
    /// Key followed by `=` and a (possibly empty) value.
    Text(String),
}

impl TagValue {
    /// The text value, if any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TagValue::Flag => None,
            TagValue::Text(value) => Some(value),
        }
    }

    /// Whether this is a valueless flag.
    pub fn is_flag(&self) -> bool {
        matches!(self, TagValue::Flag)
    }
}

impl From<&str> for TagValue {
    fn from(value: &str) -> Self {
        TagValue::Text(value.to_owned())
    }
}

impl From<String> for TagValue {
    fn from(value: String) -> Self {
        TagValue::Text(value)
    }
}

impl From<Option<&str>> for TagValue {
    fn from(value: Option<&str>) -> Self {
        value.map_or(TagValue::Flag, TagValue::from)
    }
}

/// Wire form of one tag entry: `key` or `key=value`.
pub(crate) struct TagEntry<'a>(pub &'a str, pub &'a TagValue);

impl Display for TagEntry<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.1 {
            TagValue::Flag => f.write_str(self.0),
            TagValue::Text(value) => write!(f, "{}={}", self.0, value),
        }
    }
}
