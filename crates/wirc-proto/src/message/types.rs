use super::tags::{TagValue, Tags};

/// Positional parameters of a message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params {
    /// Space-delimited parameters, in arrival order.
    pub middle: Vec<String>,
    /// Final parameter introduced by `:`; may contain spaces or be empty.
    pub trailing: Option<String>,
}

impl Params {
    /// Whether there are no parameters at all.
    pub fn is_empty(&self) -> bool {
        self.middle.is_empty() && self.trailing.is_none()
    }

    /// Total number of parameters, trailing included.
    pub fn len(&self) -> usize {
        self.middle.len() + usize::from(self.trailing.is_some())
    }

    /// All parameters in order, trailing last.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.middle
            .iter()
            .map(String::as_str)
            .chain(self.trailing.as_deref())
    }
}

/// An owned IRC message.
///
/// Produced by [`parse`](super::parse) from one line, or built with the
/// `with_*` methods for sending.
///
/// # Example
///
/// ```
/// use wirc_proto::Message;
///
/// let msg: Message = ":irc.example.com 001 nick :Welcome".parse().unwrap();
/// assert_eq!(msg.prefix.as_deref(), Some("irc.example.com"));
/// assert_eq!(msg.params.middle, ["nick"]);
///
/// let pong = Message::new("PONG").with_trailing("abc123");
/// assert_eq!(pong.to_string(), "PONG :abc123");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Message {
    /// Original line. When set, serialization emits it verbatim.
    pub raw: Option<String>,
    /// IRCv3 message tags.
    pub tags: Tags,
    /// Source of the message (`server` or `nick!user@host`).
    pub prefix: Option<String>,
    /// Command verb or three digit numeric.
    pub command: String,
    /// Command parameters.
    pub params: Params,
}

impl Message {
    /// Create a message with the given command and nothing else.
    #[must_use]
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            ..Self::default()
        }
    }

    /// Add or replace a tag.
    #[must_use]
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<TagValue>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    /// Set the message source.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Append a middle parameter.
    #[must_use]
    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.params.middle.push(param.into());
        self
    }

    /// Set the trailing parameter.
    #[must_use]
    pub fn with_trailing(mut self, trailing: impl Into<String>) -> Self {
        self.params.trailing = Some(trailing.into());
        self
    }

    /// Attach a raw line to send instead of the reconstructed one.
    #[must_use]
    pub fn with_raw(mut self, raw: impl Into<String>) -> Self {
        self.raw = Some(raw.into());
        self
    }

    /// Drop the stored raw line so the message is rebuilt from its fields.
    ///
    /// Parsed messages remember their source line; clear it before
    /// sending an edited copy.
    #[must_use]
    pub fn without_raw(mut self) -> Self {
        self.raw = None;
        self
    }

    /// Look up a tag.
    pub fn tag(&self, key: &str) -> Option<&TagValue> {
        self.tags.get(key)
    }

    /// Text value of a tag, `None` for missing tags and flags.
    pub fn tag_text(&self, key: &str) -> Option<&str> {
        self.tag(key).and_then(TagValue::as_text)
    }

    /// Whether a tag is present as a valueless flag.
    pub fn has_flag(&self, key: &str) -> bool {
        self.tag(key).is_some_and(TagValue::is_flag)
    }

    /// Middle parameters.
    pub fn middle(&self) -> &[String] {
        &self.params.middle
    }

    /// Trailing parameter.
    pub fn trailing(&self) -> Option<&str> {
        self.params.trailing.as_deref()
    }

    /// Nickname part of a `nick!user@host` prefix.
    ///
    /// Server prefixes (no `!` or `@`) yield `None`.
    pub fn source_nickname(&self) -> Option<&str> {
        let prefix = self.prefix.as_deref()?;
        let end = prefix.find(['!', '@'])?;
        Some(&prefix[..end]).filter(|nick| !nick.is_empty())
    }
}
