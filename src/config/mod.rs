//! Configuration handling for the scout binaries.
//!
//! Everything is read from environment variables with defaults that match
//! what the agent has always shipped with. `Config::from_env` validates the
//! numeric values so a bad timeout is caught before any page is fetched.

use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

use crate::telemetry::LogFormat;

/// Environment variable names.
pub const ENV_OUT_DIR: &str = "SCOUT_OUT_DIR";
pub const ENV_FETCH_TIMEOUT_SECS: &str = "SCOUT_FETCH_TIMEOUT_SECS";
pub const ENV_USER_AGENT: &str = "SCOUT_USER_AGENT";
pub const ENV_BIND_ADDR: &str = "SCOUT_BIND_ADDR";
pub const ENV_LOG_FORMAT: &str = "SCOUT_LOG_FORMAT";

const DEFAULT_OUT_DIR: &str = "out_basic";
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 20;
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64)";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8010";

/// Runtime configuration shared by the CLI and the agent server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    out_dir: PathBuf,
    fetch_timeout: Duration,
    user_agent: String,
    bind_addr: String,
    log_format: LogFormat,
}

impl Config {
    pub fn new(
        out_dir: impl Into<PathBuf>,
        fetch_timeout: Duration,
        user_agent: impl Into<String>,
        bind_addr: impl Into<String>,
        log_format: LogFormat,
    ) -> Self {
        Self {
            out_dir: out_dir.into(),
            fetch_timeout,
            user_agent: user_agent.into(),
            bind_addr: bind_addr.into(),
            log_format,
        }
    }

    /// Load from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let out_dir = env::var(ENV_OUT_DIR).unwrap_or_else(|_| DEFAULT_OUT_DIR.to_string());
        let user_agent =
            env::var(ENV_USER_AGENT).unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());
        let bind_addr = env::var(ENV_BIND_ADDR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let fetch_timeout = match env::var(ENV_FETCH_TIMEOUT_SECS) {
            Ok(raw) => parse_timeout(&raw)?,
            Err(_) => Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
        };

        let log_format = match env::var(ENV_LOG_FORMAT) {
            Ok(raw) => raw.parse()?,
            Err(_) => LogFormat::Text,
        };

        Ok(Self {
            out_dir: PathBuf::from(out_dir),
            fetch_timeout,
            user_agent,
            bind_addr,
            log_format,
        })
    }

    /// Directory the content packs are written into.
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Upper bound for a single page retrieval.
    pub fn fetch_timeout(&self) -> Duration {
        self.fetch_timeout
    }

    /// Client identity sent with every request.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// TCP bind address (host:port) for the agent server.
    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }

    pub fn log_format(&self) -> LogFormat {
        self.log_format
    }

    pub fn with_out_dir(mut self, out_dir: impl Into<PathBuf>) -> Self {
        self.out_dir = out_dir.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(
            DEFAULT_OUT_DIR,
            Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            DEFAULT_USER_AGENT,
            DEFAULT_BIND_ADDR,
            LogFormat::Text,
        )
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        field: ENV_FETCH_TIMEOUT_SECS,
        reason: format!("expected whole seconds, got '{raw}'"),
    })?;
    if secs == 0 {
        return Err(ConfigError::InvalidValue {
            field: ENV_FETCH_TIMEOUT_SECS,
            reason: "timeout must be greater than zero".to_string(),
        });
    }
    Ok(Duration::from_secs(secs))
}

/// Errors that can occur while building a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
