//! Error types for the wire codec.
//!
//! [`ParseError`] describes why a single line is not a structurally valid
//! message. [`ProtocolError`] covers the stream level: I/O and framing
//! limits.

use thiserror::Error;

/// Convenience type alias for Results using [`ProtocolError`].
pub type Result<T, E = ProtocolError> = std::result::Result<T, E>;

/// Structural failures of a single line.
///
/// These are never fatal: the frame splitter drops the offending line and
/// moves on to the next one.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    /// The line was empty.
    #[error("empty message")]
    EmptyMessage,

    /// A `@` tag block was not followed by a space.
    #[error("unterminated tags section")]
    UnterminatedTags,

    /// A `:` prefix was not followed by a space.
    #[error("unterminated prefix")]
    UnterminatedPrefix,

    /// Tags or prefix were present but no command followed.
    #[error("missing command")]
    MissingCommand,

    /// The command token is neither letters nor a three digit numeric.
    #[error("invalid command: {0:?}")]
    InvalidCommand(String),
}

/// Stream level errors.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProtocolError {
    /// I/O error during reading or writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A line exceeded the configured maximum length.
    #[error("line too long: {actual} bytes (limit: {limit})")]
    LineTooLong {
        /// Bytes buffered for the line.
        actual: usize,
        /// Maximum allowed length.
        limit: usize,
    },
}
