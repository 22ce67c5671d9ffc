//! Configuration management for the todos server.
//!
//! Loads configuration from environment variables with sensible defaults.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use todos_core::validation::DEFAULT_MAX_TITLE_LEN;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Session cookie and store configuration
    pub session: SessionConfig,
    /// Upper bound on list and todo titles, in characters
    pub max_title_len: usize,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to bind to
    pub port: u16,
    /// Directory served under `/static`
    pub public_dir: PathBuf,
    /// Graceful shutdown timeout in seconds
    pub shutdown_timeout: u64,
}

/// Session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Name of the cookie carrying the session id
    pub cookie_name: String,
    /// Idle lifetime of a session in seconds; every request renews it
    pub ttl_secs: u64,
    /// Whether new sessions start with the sample lists
    pub seed: bool,
}

impl SessionConfig {
    /// Returns the session lifetime as a `Duration`
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: "todos.sid".to_string(),
            ttl_secs: 31 * 24 * 60 * 60,
            seed: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
                public_dir: PathBuf::from("public"),
                shutdown_timeout: 10,
            },
            session: SessionConfig::default(),
            max_title_len: DEFAULT_MAX_TITLE_LEN,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unset or unparsable variables fall back to their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            server: ServerConfig {
                host: env::var("TODOS_HOST").unwrap_or(defaults.server.host),
                port: parse_var("TODOS_PORT").unwrap_or(defaults.server.port),
                public_dir: env::var("TODOS_PUBLIC_DIR")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.server.public_dir),
                shutdown_timeout: parse_var("TODOS_SHUTDOWN_TIMEOUT_SECS")
                    .unwrap_or(defaults.server.shutdown_timeout),
            },
            session: SessionConfig {
                cookie_name: env::var("TODOS_SESSION_COOKIE")
                    .unwrap_or(defaults.session.cookie_name),
                ttl_secs: parse_var("TODOS_SESSION_TTL_SECS")
                    .unwrap_or(defaults.session.ttl_secs),
                seed: parse_var("TODOS_SEED").unwrap_or(defaults.session.seed),
            },
            max_title_len: parse_var("TODOS_MAX_TITLE_LEN").unwrap_or(defaults.max_title_len),
        }
    }

    /// Address the server binds to, as `host:port`
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|s| s.parse().ok())
}
