//! Handler that records callbacks for later assertions.

use wirc::proto::Message;
use wirc::{Handler, IrcHandle};

/// Records every callback; registers as `nick` on connect.
#[derive(Debug, Default)]
pub struct Recorder {
    pub nick: String,
    pub connects: usize,
    pub messages: Vec<Message>,
    pub errors: Vec<String>,
}

impl Recorder {
    pub fn new(nick: &str) -> Self {
        Self {
            nick: nick.to_string(),
            ..Self::default()
        }
    }

    /// Commands of all delivered messages, in order.
    #[allow(dead_code)]
    pub fn commands(&self) -> Vec<&str> {
        self.messages.iter().map(|m| m.command.as_str()).collect()
    }
}

impl Handler for Recorder {
    fn on_connect(&mut self, irc: &IrcHandle) {
        self.connects += 1;
        irc.nick(&self.nick);
    }

    fn on_message(&mut self, _irc: &IrcHandle, message: &Message) {
        self.messages.push(message.clone());
    }

    fn on_error(&mut self, reason: &str) {
        self.errors.push(reason.to_string());
    }
}
