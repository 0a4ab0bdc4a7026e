use wirc_proto::{Message, MessageConsumer};

use super::handle::IrcHandle;

/// Callbacks for one client session.
///
/// All methods run on the reader task; blocking in them stalls the
/// connection.
pub trait Handler {
    /// The transport is up. Register here (`authenticate`, `join`, ...).
    fn on_connect(&mut self, _irc: &IrcHandle) {}

    /// One parsed inbound message, in arrival order.
    ///
    /// `PING` probes are answered before this is called.
    fn on_message(&mut self, irc: &IrcHandle, message: &Message);

    /// The session failed; `reason` is human readable.
    fn on_error(&mut self, _reason: &str) {}
}

/// Adapts a [`Handler`] to the splitter's consumer interface.
pub(super) struct Dispatch<'a, H: ?Sized> {
    handler: &'a mut H,
    irc: &'a IrcHandle,
}

impl<'a, H: Handler + ?Sized> Dispatch<'a, H> {
    pub(super) fn new(handler: &'a mut H, irc: &'a IrcHandle) -> Self {
        Self { handler, irc }
    }
}

impl<H: Handler + ?Sized> MessageConsumer for Dispatch<'_, H> {
    fn on_message(&mut self, message: &Message) {
        self.handler.on_message(self.irc, message);
    }
}
