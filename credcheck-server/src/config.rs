//! Server configuration read from the environment

use anyhow::Context;
use credcheck_core::{CredentialChecker, CredentialStore};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

/// Default listen address
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

/// Console log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => anyhow::bail!("unknown log format '{}' (expected text or json)", other),
        }
    }
}

/// Startup configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address to listen on
    pub bind_address: SocketAddr,

    /// Credentials file replacing the built-in store
    pub credentials_file: Option<PathBuf>,

    /// Export traces over OTLP
    pub otel_enabled: bool,

    /// Console log format
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Read configuration from process environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_address = lookup("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
            .parse::<SocketAddr>()
            .context("Invalid BIND_ADDRESS")?;

        let credentials_file = lookup("CREDENTIALS_FILE")
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        let otel_enabled = lookup("OTEL_ENABLED")
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(false);

        let log_format = match lookup("LOG_FORMAT") {
            Some(value) => value.parse::<LogFormat>().context("Invalid LOG_FORMAT")?,
            None => LogFormat::default(),
        };

        Ok(ServerConfig {
            bind_address,
            credentials_file,
            otel_enabled,
            log_format,
        })
    }

    /// Build the checker: from the credentials file when set, otherwise the built-in store
    pub fn build_checker(&self) -> anyhow::Result<CredentialChecker> {
        let store = match &self.credentials_file {
            Some(path) => CredentialStore::load(path)
                .with_context(|| format!("Failed to load credentials from {}", path.display()))?,
            None => CredentialStore::builtin(),
        };
        Ok(CredentialChecker::new(store))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind_address: SocketAddr::from(([0, 0, 0, 0], 3000)),
            credentials_file: None,
            otel_enabled: false,
            log_format: LogFormat::default(),
        }
    }
}
