use std::fmt::{self, Display, Formatter};

use super::tags::TagEntry;
use super::types::Message;

/// Serialize a message to its wire form, without CRLF.
///
/// A message carrying [`Message::raw`] is returned verbatim. Otherwise the
/// line is rebuilt from tags, prefix, command and parameters; nothing is
/// escaped, so parameters must not contain CR/LF and only the trailing
/// parameter may contain spaces or start with `:`.
///
/// ```
/// use wirc_proto::{serialize, Message};
///
/// let msg = Message::new("PRIVMSG")
///     .with_tag("badge", "1")
///     .with_tag("vip", None::<&str>)
///     .with_param("#chan")
///     .with_trailing("hi");
/// assert_eq!(serialize(&msg), "@badge=1;vip PRIVMSG #chan :hi");
/// ```
pub fn serialize(message: &Message) -> String {
    message.to_string()
}

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(ref raw) = self.raw {
            return f.write_str(raw);
        }

        if !self.tags.is_empty() {
            f.write_str("@")?;

            for (i, (key, value)) in self.tags.iter().enumerate() {
                if i > 0 {
                    f.write_str(";")?;
                }
                write!(f, "{}", TagEntry(key, value))?;
            }

            f.write_str(" ")?;
        }

        if let Some(ref prefix) = self.prefix {
            write!(f, ":{} ", prefix)?;
        }

        write!(f, "{} ", self.command)?;

        for param in &self.params.middle {
            write!(f, "{} ", param)?;
        }

        if let Some(ref trailing) = self.params.trailing {
            write!(f, ":{}", trailing)?;
        }

        Ok(())
    }
}
