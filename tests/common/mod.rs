//! Integration test common infrastructure.
//!
//! Provides in-process IRC servers for the client to connect to and a
//! handler that records every callback.

pub mod recorder;
pub mod server;

#[allow(unused_imports)]
pub use recorder::Recorder;
#[allow(unused_imports)]
pub use server::{TcpPeer, WsPeer};
