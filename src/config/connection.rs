//! Connection settings.

use serde::Deserialize;

/// Environment variable consulted when no password is configured.
pub const PASS_ENV_VAR: &str = "WIRC_PASS";

/// Server endpoint, identity and channels to join.
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectionConfig {
    /// `ws://`, `wss://`, `irc://` or `tcp://` URL.
    pub url: String,
    /// Nickname sent with `NICK`.
    pub nick: String,
    /// Server password sent with `PASS`.
    pub pass: Option<String>,
    /// Space-separated capabilities for `CAP REQ`.
    pub caps: Option<String>,
    /// Username for `USER`; no `USER` line is sent when unset.
    pub user: Option<String>,
    /// Real name for `USER`, defaults to the username.
    pub realname: Option<String>,
    /// Channels joined after authentication.
    #[serde(default)]
    pub channels: Vec<String>,
    /// Longest inbound line accepted on byte-stream transports.
    #[serde(default = "default_max_line_len")]
    pub max_line_len: usize,
}

impl ConnectionConfig {
    /// Configured password, falling back to [`PASS_ENV_VAR`].
    pub fn resolve_pass(&self) -> Option<String> {
        self.resolve_pass_with(|key| std::env::var(key).ok())
    }

    fn resolve_pass_with<F>(&self, env: F) -> Option<String>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        self.pass
            .clone()
            .or_else(|| env(PASS_ENV_VAR))
            .filter(|pass| !pass.is_empty())
    }
}

fn default_max_line_len() -> usize {
    wirc_proto::MAX_LINE_LEN
}
