//! Batch framing and keepalive handling.
//!
//! A transport hands over payloads that bundle one or more CRLF-delimited
//! lines. [`FrameSplitter`] splits them, parses each line, answers `PING`
//! probes through a [`RawSender`] and forwards every parsed message to a
//! [`MessageConsumer`], in order.

use tracing::{debug, trace};

use crate::message::{parse, Message};
use crate::tokenizer::Tokens;
use crate::CRLF;

/// Keepalive probe verb.
pub const PING: &str = "PING";

/// Keepalive reply verb.
pub const PONG: &str = "PONG";

/// Fire-and-forget hand-off of an outbound line to the transport.
///
/// Implementations must not block; a send queue is the usual choice.
pub trait RawSender {
    /// Queue one line (without CRLF) for sending.
    fn send_raw(&self, line: &str);
}

impl<T: RawSender + ?Sized> RawSender for &T {
    fn send_raw(&self, line: &str) {
        (**self).send_raw(line)
    }
}

/// Receiver of parsed messages.
pub trait MessageConsumer {
    /// Called once per parsed message, in arrival order.
    fn on_message(&mut self, message: &Message);
}

impl<F> MessageConsumer for F
where
    F: FnMut(&Message),
{
    fn on_message(&mut self, message: &Message) {
        self(message)
    }
}

/// What happened to a single line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineOutcome {
    /// The line was blank.
    Skipped,
    /// The line was malformed and dropped.
    Dropped,
    /// The line was delivered to the consumer.
    Delivered {
        /// Whether a keepalive reply was sent for it.
        replied: bool,
    },
}

/// Per-batch counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Messages forwarded to the consumer.
    pub delivered: usize,
    /// Malformed lines that were dropped.
    pub dropped: usize,
    /// Keepalive replies sent.
    pub replies: usize,
}

impl BatchReport {
    fn record(&mut self, outcome: LineOutcome) {
        match outcome {
            LineOutcome::Skipped => {}
            LineOutcome::Dropped => self.dropped += 1,
            LineOutcome::Delivered { replied } => {
                self.delivered += 1;
                self.replies += usize::from(replied);
            }
        }
    }
}

/// Splits batches into messages and answers keepalive probes.
///
/// Holds no buffer: every payload handed to [`on_batch`](Self::on_batch)
/// must consist of complete lines. Byte streams with arbitrary chunk
/// boundaries go through [`LineCodec`](crate::LineCodec) first and are fed
/// line by line with [`on_line`](Self::on_line).
#[derive(Debug)]
pub struct FrameSplitter<S> {
    sender: S,
}

impl<S: RawSender> FrameSplitter<S> {
    /// Create a splitter that sends keepalive replies through `sender`.
    pub fn new(sender: S) -> Self {
        Self { sender }
    }

    /// The sender used for keepalive replies.
    pub fn sender(&self) -> &S {
        &self.sender
    }

    /// Process one batch of CRLF-delimited lines.
    ///
    /// Malformed lines are dropped without aborting the batch.
    pub fn on_batch<C>(&mut self, payload: &str, consumer: &mut C) -> BatchReport
    where
        C: MessageConsumer + ?Sized,
    {
        let mut report = BatchReport::default();

        for line in Tokens::new(payload, CRLF) {
            report.record(self.on_line(line, consumer));
        }

        trace!(
            delivered = report.delivered,
            dropped = report.dropped,
            replies = report.replies,
            "batch processed"
        );
        report
    }

    /// Process a single line.
    pub fn on_line<C>(&mut self, line: &str, consumer: &mut C) -> LineOutcome
    where
        C: MessageConsumer + ?Sized,
    {
        if line.trim_matches(|c: char| matches!(c, ' ' | '\r' | '\n')).is_empty() {
            return LineOutcome::Skipped;
        }

        let message = match parse(line) {
            Ok(message) => message,
            Err(error) => {
                debug!(%error, line, "dropping malformed line");
                return LineOutcome::Dropped;
            }
        };

        let replied = self.answer_keepalive(&message);
        consumer.on_message(&message);

        LineOutcome::Delivered { replied }
    }

    fn answer_keepalive(&self, message: &Message) -> bool {
        if message.command != PING {
            return false;
        }

        match message.trailing() {
            Some(token) => {
                self.sender.send_raw(&format!("{PONG} :{token}"));
                true
            }
            None => false,
        }
    }
}
