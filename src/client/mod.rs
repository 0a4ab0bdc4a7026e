//! IRC client session.
//!
//! [`Irc::run`] connects to an [`Endpoint`], hands the [`Handler`] an
//! [`IrcHandle`] for outbound lines and feeds inbound data through a
//! [`FrameSplitter`], which answers `PING` before dispatching each message.
//! Reading and writing share one `select!` loop; no task is spawned.

mod endpoint;
mod handle;
mod handler;

pub use endpoint::{Endpoint, DEFAULT_TCP_PORT};
pub use handle::IrcHandle;
pub use handler::Handler;

use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::Message as WsMessage;
use tokio_util::codec::Framed;
use tracing::{debug, info, Instrument};
use wirc_proto::{FrameSplitter, LineCodec, MAX_LINE_LEN};

use crate::config::ConnectionConfig;
use crate::error::ClientError;
use crate::telemetry::spans;

use handler::Dispatch;

/// Client for a single IRC connection.
///
/// There is no reconnection: a transport failure is reported to
/// [`Handler::on_error`] and returned from [`run`](Self::run).
#[derive(Debug, Clone)]
pub struct Irc {
    endpoint: Endpoint,
    max_line_len: usize,
}

impl Irc {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            max_line_len: MAX_LINE_LEN,
        }
    }

    /// Build a client from the `[connection]` section.
    pub fn from_config(config: &ConnectionConfig) -> Result<Self, ClientError> {
        let endpoint = config.url.parse()?;
        Ok(Self::new(endpoint).with_max_line_len(config.max_line_len))
    }

    /// Limit inbound line length on TCP connections.
    pub fn with_max_line_len(mut self, max_line_len: usize) -> Self {
        self.max_line_len = max_line_len;
        self
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Connect and process the session until it ends.
    ///
    /// Only returns on failure; a server closing the connection is
    /// [`ClientError::Closed`].
    pub async fn run<H>(&self, handler: &mut H) -> Result<(), ClientError>
    where
        H: Handler + ?Sized,
    {
        let span = spans::connection(&self.endpoint.to_string());

        let result = async {
            let (tx, mut rx) = mpsc::unbounded_channel();
            let irc = IrcHandle::new(tx);

            match &self.endpoint {
                Endpoint::WebSocket(url) => run_websocket(url, &irc, &mut rx, handler).await,
                Endpoint::Tcp { host, port } => {
                    let codec = LineCodec::with_max_len(self.max_line_len);
                    run_tcp(host, *port, codec, &irc, &mut rx, handler).await
                }
            }
        }
        .instrument(span.clone())
        .await;

        if let Err(ref error) = result {
            span.in_scope(|| info!(error = %error, code = error.error_code(), "session ended"));
            handler.on_error(&error.to_string());
        }
        result
    }
}

async fn run_websocket<H>(
    url: &str,
    irc: &IrcHandle,
    rx: &mut mpsc::UnboundedReceiver<String>,
    handler: &mut H,
) -> Result<(), ClientError>
where
    H: Handler + ?Sized,
{
    let (mut ws, _) = tokio_tungstenite::connect_async(url).await?;
    info!("websocket connected");

    handler.on_connect(irc);
    let mut splitter = FrameSplitter::new(irc.clone());

    loop {
        tokio::select! {
            biased;

            Some(line) = rx.recv() => {
                let line = LineCodec::sanitize(&line).to_owned();
                ws.send(WsMessage::Text(line)).await?;
            }

            frame = ws.next() => match frame {
                Some(Ok(WsMessage::Text(text))) => {
                    splitter.on_batch(&text, &mut Dispatch::new(handler, irc));
                }
                Some(Ok(WsMessage::Binary(data))) => {
                    let text = String::from_utf8_lossy(&data);
                    splitter.on_batch(&text, &mut Dispatch::new(handler, irc));
                }
                Some(Ok(WsMessage::Close(frame))) => {
                    debug!(?frame, "close frame received");
                    return Err(ClientError::Closed);
                }
                // Control frames are answered by tungstenite
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => return Err(ClientError::Closed),
            },
        }
    }
}

async fn run_tcp<H>(
    host: &str,
    port: u16,
    codec: LineCodec,
    irc: &IrcHandle,
    rx: &mut mpsc::UnboundedReceiver<String>,
    handler: &mut H,
) -> Result<(), ClientError>
where
    H: Handler + ?Sized,
{
    let stream = TcpStream::connect((host, port)).await?;
    stream.set_nodelay(true)?;
    info!("tcp connected");

    let mut framed = Framed::new(stream, codec);

    handler.on_connect(irc);
    let mut splitter = FrameSplitter::new(irc.clone());

    loop {
        tokio::select! {
            biased;

            Some(line) = rx.recv() => {
                framed.send(line).await?;
            }

            line = framed.next() => match line {
                Some(Ok(line)) => {
                    splitter.on_line(&line, &mut Dispatch::new(handler, irc));
                }
                Some(Err(e)) => return Err(e.into()),
                None => return Err(ClientError::Closed),
            },
        }
    }
}
