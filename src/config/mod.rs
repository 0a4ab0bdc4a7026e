//! Configuration loading and management.
//!
//! - [`types`]: the [`Config`] root and its loader
//! - [`connection`]: server endpoint, identity and channels

mod connection;
mod types;

pub use connection::{ConnectionConfig, PASS_ENV_VAR};
pub use types::{Config, ConfigError, LoggingConfig};
