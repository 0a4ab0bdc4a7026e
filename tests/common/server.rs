//! In-process servers.
//!
//! Each peer accepts exactly one client on an ephemeral port.

use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::{TcpListener, TcpStream};
use tokio::time::timeout;
use tokio_tungstenite::tungstenite::Message as WsMessage;
use tokio_tungstenite::WebSocketStream;

const RECV_TIMEOUT: Duration = Duration::from_secs(5);

/// Bind an ephemeral listener, returning it with its address.
pub async fn bind() -> anyhow::Result<(TcpListener, String)> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?.to_string();
    Ok((listener, addr))
}

/// Server side of a plain TCP connection.
pub struct TcpPeer {
    lines: Lines<BufReader<OwnedReadHalf>>,
    writer: OwnedWriteHalf,
}

impl TcpPeer {
    /// Accept one client.
    pub async fn accept(listener: &TcpListener) -> anyhow::Result<Self> {
        let (stream, _) = listener.accept().await?;
        let (read_half, write_half) = stream.into_split();
        Ok(Self {
            lines: BufReader::new(read_half).lines(),
            writer: write_half,
        })
    }

    /// Write bytes as-is, without adding a terminator.
    pub async fn send_bytes(&mut self, data: &[u8]) -> anyhow::Result<()> {
        self.writer.write_all(data).await?;
        self.writer.flush().await?;
        Ok(())
    }

    /// Receive one line without its terminator.
    pub async fn recv_line(&mut self) -> anyhow::Result<String> {
        timeout(RECV_TIMEOUT, self.lines.next_line())
            .await??
            .ok_or_else(|| anyhow::anyhow!("client closed the connection"))
    }
}

/// Server side of a WebSocket connection.
pub struct WsPeer {
    ws: WebSocketStream<TcpStream>,
}

impl WsPeer {
    /// Accept one client and complete the WebSocket handshake.
    pub async fn accept(listener: &TcpListener) -> anyhow::Result<Self> {
        let (stream, _) = listener.accept().await?;
        let ws = tokio_tungstenite::accept_async(stream).await?;
        Ok(Self { ws })
    }

    /// Send one text frame.
    pub async fn send_text(&mut self, text: &str) -> anyhow::Result<()> {
        self.ws.send(WsMessage::Text(text.to_string())).await?;
        Ok(())
    }

    /// Send one binary frame.
    pub async fn send_binary(&mut self, data: &[u8]) -> anyhow::Result<()> {
        self.ws.send(WsMessage::Binary(data.to_vec())).await?;
        Ok(())
    }

    /// Receive the next text frame, skipping control frames.
    pub async fn recv_text(&mut self) -> anyhow::Result<String> {
        loop {
            let frame = timeout(RECV_TIMEOUT, self.ws.next())
                .await?
                .ok_or_else(|| anyhow::anyhow!("client closed the connection"))??;

            match frame {
                WsMessage::Text(text) => return Ok(text),
                WsMessage::Close(_) => anyhow::bail!("client sent close"),
                _ => continue,
            }
        }
    }

    /// Start the closing handshake.
    pub async fn close(mut self) -> anyhow::Result<()> {
        self.ws.close(None).await?;
        Ok(())
    }
}
