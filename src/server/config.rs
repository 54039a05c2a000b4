//! Command-line and environment configuration for the server binary.

use clap::{Parser, ValueEnum};
use std::net::SocketAddr;
use thiserror::Error;

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Multi-line, human-oriented output.
    Pretty,
    /// One JSON object per event.
    Json,
    /// Single-line output.
    #[default]
    Compact,
}

/// Server configuration; every flag can also be set through the
/// environment.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "tasklists-server", about = "Task list backend", version)]
pub struct ServerConfig {
    /// Socket address the HTTP server binds to.
    #[arg(long, env = "LISTEN_ADDR", default_value = "127.0.0.1:8080")]
    pub listen_addr: String,

    /// `PostgreSQL` connection URL; the in-memory store is used when unset.
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum number of pooled database connections.
    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = 10)]
    pub database_max_connections: u32,

    /// Log level or `EnvFilter` directive; `RUST_LOG` takes precedence.
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Log output format.
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Invalid configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The listen address is not a socket address.
    #[error("invalid listen address `{0}`")]
    InvalidListenAddr(String),

    /// The connection pool would be empty.
    #[error("database max connections must be greater than 0")]
    ZeroPoolSize,
}

impl ServerConfig {
    /// Checks the configuration before any resource is acquired.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidListenAddr`] when the listen address
    /// does not parse, or [`ConfigError::ZeroPoolSize`] when the pool size
    /// is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.socket_addr()?;
        if self.database_max_connections == 0 {
            return Err(ConfigError::ZeroPoolSize);
        }
        Ok(())
    }

    /// Parses the listen address.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidListenAddr`] when the value is not a
    /// socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.listen_addr
            .parse()
            .map_err(|_| ConfigError::InvalidListenAddr(self.listen_addr.clone()))
    }
}
