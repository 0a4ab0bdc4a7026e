//! wirc - IRC client over WebSocket or TCP.
//!
//! Wire handling lives in [`wirc_proto`]; this crate adds the async
//! transport loop, configuration and logging setup.

pub mod client;
pub mod config;
pub mod error;
pub mod telemetry;

pub use client::{Endpoint, Handler, Irc, IrcHandle};
pub use config::Config;
pub use error::ClientError;
pub use wirc_proto as proto;
