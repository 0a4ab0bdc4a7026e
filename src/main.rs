//! wirc - log an IRC session to the terminal.
//!
//! Usage: `wirc [config.toml]`

use tracing::{error, info, warn};
use wirc::config::{Config, ConnectionConfig};
use wirc::proto::Message;
use wirc::{Handler, Irc, IrcHandle};

/// Registers on connect and logs every message.
struct LogHandler {
    connection: ConnectionConfig,
}

impl Handler for LogHandler {
    fn on_connect(&mut self, irc: &IrcHandle) {
        let conn = &self.connection;

        match conn.resolve_pass() {
            Some(pass) => irc.authenticate(&pass, &conn.nick, conn.caps.as_deref()),
            None => {
                if let Some(ref caps) = conn.caps {
                    irc.request_caps(caps);
                }
                irc.nick(&conn.nick);
            }
        }

        if let Some(ref user) = conn.user {
            irc.user(user, conn.realname.as_deref().unwrap_or(user));
        }

        for channel in &conn.channels {
            irc.join(channel);
        }
        info!(nick = %conn.nick, channels = conn.channels.len(), "registration sent");
    }

    fn on_message(&mut self, _irc: &IrcHandle, message: &Message) {
        info!(
            command = %message.command,
            source = message.source_nickname().unwrap_or("-"),
            "{}",
            message
        );
    }

    fn on_error(&mut self, reason: &str) {
        error!(%reason, "connection error");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());

    let config = Config::load(&config_path).map_err(|e| {
        eprintln!("failed to load config {}: {}", config_path, e);
        e
    })?;

    wirc::telemetry::init(&config.logging.level);

    let irc = Irc::from_config(&config.connection)?;
    info!(endpoint = %irc.endpoint(), "Starting wirc");

    let mut handler = LogHandler {
        connection: config.connection,
    };

    tokio::select! {
        result = irc.run(&mut handler) => result?,
        _ = tokio::signal::ctrl_c() => warn!("interrupted, shutting down"),
    }

    Ok(())
}
