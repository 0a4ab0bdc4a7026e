use std::fmt;
use std::str::FromStr;

use url::{Host, Url};

use crate::error::ClientError;

/// Default plaintext IRC port.
pub const DEFAULT_TCP_PORT: u16 = 6667;

/// Where and how to connect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// IRC over WebSocket.
    ///
    /// Every text or binary frame must hold whole lines; a line split across
    /// frames is parsed as two messages.
    WebSocket(String),
    /// Plain IRC over a TCP byte stream.
    Tcp {
        /// Host name or address, IPv6 without brackets.
        host: String,
        /// Port, [`DEFAULT_TCP_PORT`] when the URL has none.
        port: u16,
    },
}

impl FromStr for Endpoint {
    type Err = ClientError;

    /// Accepts `ws://`, `wss://`, `irc://host[:port]` and `tcp://host[:port]`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ClientError::InvalidUrl(s.to_owned());
        let url = Url::parse(s).map_err(|_| invalid())?;

        match url.scheme() {
            "ws" | "wss" => Ok(Self::WebSocket(s.to_owned())),
            "irc" | "tcp" => {
                let host = match url.host() {
                    Some(Host::Domain(domain)) if !domain.is_empty() => domain.to_owned(),
                    Some(Host::Ipv4(addr)) => addr.to_string(),
                    Some(Host::Ipv6(addr)) => addr.to_string(),
                    _ => return Err(invalid()),
                };

                Ok(Self::Tcp {
                    host,
                    port: url.port().unwrap_or(DEFAULT_TCP_PORT),
                })
            }
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WebSocket(url) => f.write_str(url),
            Self::Tcp { host, port } if host.contains(':') => {
                write!(f, "irc://[{}]:{}", host, port)
            }
            Self::Tcp { host, port } => write!(f, "irc://{}:{}", host, port),
        }
    }
}
