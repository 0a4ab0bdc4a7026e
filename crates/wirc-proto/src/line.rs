//! Line codec for byte-stream transports.
//!
//! TCP delivers bytes with arbitrary chunk boundaries. [`LineCodec`] buffers
//! partial lines across reads and yields complete lines without their
//! terminator; on the way out it appends CRLF.

use bytes::BytesMut;
use tokio_util::codec::{Decoder, Encoder};

use crate::error::{ProtocolError, Result};
use crate::MAX_LINE_LEN;

/// Newline-delimited codec with a line length limit.
///
/// Input is decoded as UTF-8; invalid sequences are replaced rather than
/// rejected so that a single bad byte cannot end the stream.
#[derive(Debug, Clone)]
pub struct LineCodec {
    /// Index of next byte to check for newline
    next_index: usize,
    max_len: usize,
}

impl LineCodec {
    /// Create a codec with the default [`MAX_LINE_LEN`] limit.
    pub fn new() -> Self {
        Self::with_max_len(MAX_LINE_LEN)
    }

    /// Create a codec with a custom line length limit.
    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            next_index: 0,
            max_len,
        }
    }

    /// Cut outgoing data at its first line ending.
    ///
    /// Anything after an embedded CR or LF would otherwise reach the peer as
    /// a separate command.
    pub fn sanitize(data: &str) -> &str {
        match data.find(['\r', '\n']) {
            Some(pos) => &data[..pos],
            None => data,
        }
    }
}

impl Default for LineCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for LineCodec {
    type Item = String;
    type Error = ProtocolError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<String>> {
        let Some(offset) = src[self.next_index..].iter().position(|b| *b == b'\n') else {
            // No complete line yet - remember where we stopped
            self.next_index = src.len();

            if src.len() > self.max_len {
                return Err(ProtocolError::LineTooLong {
                    actual: src.len(),
                    limit: self.max_len,
                });
            }
            return Ok(None);
        };

        let line = src.split_to(self.next_index + offset + 1);
        self.next_index = 0;

        if line.len() > self.max_len {
            return Err(ProtocolError::LineTooLong {
                actual: line.len(),
                limit: self.max_len,
            });
        }

        let text = String::from_utf8_lossy(&line);
        Ok(Some(text.trim_end_matches(['\r', '\n']).to_owned()))
    }
}

impl Encoder<String> for LineCodec {
    type Error = ProtocolError;

    fn encode(&mut self, msg: String, dst: &mut BytesMut) -> Result<()> {
        let line = Self::sanitize(&msg);
        dst.reserve(line.len() + 2);
        dst.extend_from_slice(line.as_bytes());
        dst.extend_from_slice(b"\r\n");
        Ok(())
    }
}
