//! Outbound side of a session.

use tokio::sync::mpsc;
use tracing::{trace, warn};
use wirc_proto::{Message, RawSender};

/// Cloneable handle that queues outbound lines for the connection task.
///
/// Sending never blocks. Lines queued after the session ended are logged
/// and discarded.
#[derive(Debug, Clone)]
pub struct IrcHandle {
    tx: mpsc::UnboundedSender<String>,
}

impl IrcHandle {
    /// Wrap the sending half of a session's outbound queue.
    pub fn new(tx: mpsc::UnboundedSender<String>) -> Self {
        Self { tx }
    }

    /// Queue one line, without CRLF.
    ///
    /// Returns `false` when the session has ended and the line was dropped.
    pub fn send_raw(&self, line: impl Into<String>) -> bool {
        let line = line.into();
        trace!(%line, "queue outbound");
        if self.tx.send(line).is_err() {
            warn!("outbound queue closed, dropping line");
            return false;
        }
        true
    }

    /// Queue a message; a parsed message goes out as its original line.
    pub fn write(&self, message: &Message) {
        self.send_raw(message.to_string());
    }

    /// Log in: `CAP REQ` when capabilities are given, then `PASS` and `NICK`.
    pub fn authenticate(&self, pass: &str, nick: &str, caps: Option<&str>) {
        if let Some(caps) = caps {
            self.request_caps(caps);
        }
        self.send_raw(format!("PASS {}", pass));
        self.nick(nick);
    }

    /// Request IRCv3 capabilities (space separated).
    pub fn request_caps(&self, caps: &str) {
        self.send_raw(format!("CAP REQ :{}", caps));
    }

    pub fn nick(&self, nick: &str) {
        self.send_raw(format!("NICK {}", nick));
    }

    /// Send the `USER` registration line.
    pub fn user(&self, username: &str, realname: &str) {
        self.send_raw(format!("USER {} 0 * :{}", username, realname));
    }

    /// Join a channel; the leading `#` is optional.
    pub fn join(&self, channel: &str) {
        let channel = channel.strip_prefix('#').unwrap_or(channel);
        self.send_raw(format!("JOIN #{}", channel));
    }

    pub fn privmsg(&self, target: &str, text: &str) {
        self.send_raw(format!("PRIVMSG {} :{}", target, text));
    }
}

impl RawSender for IrcHandle {
    fn send_raw(&self, line: &str) {
        IrcHandle::send_raw(self, line);
    }
}
