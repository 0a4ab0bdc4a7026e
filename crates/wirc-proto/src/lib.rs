//! # wirc-proto
//!
//! Wire codec and framing layer for IRC (RFC 1459 / RFC 2812) with the
//! IRCv3 message-tags extension.
//!
//! - [`split`]: separator tokenizer used by both directions
//! - [`Message`]: parsed line with tags, prefix, command and parameters
//! - [`FrameSplitter`]: turns a batched delivery into messages and answers
//!   keepalive probes on the way
//! - [`LineCodec`]: tokio codec that reassembles lines from a byte stream
//!
//! ## Parsing and serializing
//!
//! ```rust
//! use wirc_proto::{Message, TagValue};
//!
//! let msg: Message = "@badge=1;vip PRIVMSG #chan :hi".parse().unwrap();
//! assert_eq!(msg.command, "PRIVMSG");
//! assert_eq!(msg.tag("vip"), Some(&TagValue::Flag));
//! assert_eq!(msg.trailing(), Some("hi"));
//!
//! let reply = Message::new("PRIVMSG").with_param("#chan").with_trailing("hello");
//! assert_eq!(reply.to_string(), "PRIVMSG #chan :hello");
//! ```
//!
//! ## Splitting a batch
//!
//! ```rust
//! use std::cell::RefCell;
//! use wirc_proto::{FrameSplitter, Message, RawSender};
//!
//! struct Outbox(RefCell<Vec<String>>);
//!
//! impl RawSender for Outbox {
//!     fn send_raw(&self, line: &str) {
//!         self.0.borrow_mut().push(line.to_owned());
//!     }
//! }
//!
//! let mut splitter = FrameSplitter::new(Outbox(RefCell::new(Vec::new())));
//! let mut seen = Vec::new();
//! splitter.on_batch("PING :abc123\r\n:srv 001 me :hi\r\n", &mut |m: &Message| {
//!     seen.push(m.command.clone())
//! });
//!
//! assert_eq!(seen, ["PING", "001"]);
//! assert_eq!(splitter.sender().0.borrow().as_slice(), ["PONG :abc123"]);
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod error;
pub mod frame;
#[cfg(feature = "tokio")]
pub mod line;
pub mod message;
pub mod tokenizer;

pub use self::error::{ParseError, ProtocolError};
pub use self::frame::{BatchReport, FrameSplitter, LineOutcome, MessageConsumer, RawSender};
#[cfg(feature = "tokio")]
pub use self::line::LineCodec;
pub use self::message::{parse, serialize, Message, Params, TagValue, Tags};
pub use self::tokenizer::{split, Tokens};

/// Line delimiter on the wire.
pub const CRLF: &str = "\r\n";

/// Maximum accepted line length in bytes (tags included).
pub const MAX_LINE_LEN: usize = 8191;
