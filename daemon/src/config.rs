//! Daemon configuration with TOML file support.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;

use pactchain_ledger::LedgerConfig;
use pactchain_utils::LogFormat;
use pactchain_work::Difficulty;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Configuration for a pactchain daemon.
///
/// Loaded from a TOML file via [`DaemonConfig::from_toml_file`], then
/// overridden field by field from the command line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaemonConfig {
    /// Address the HTTP server binds to.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: IpAddr,

    /// HTTP port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Leading zero hex digits required of every proof.
    #[serde(default)]
    pub difficulty: Difficulty,

    /// Give up a proof search after this many candidates.
    #[serde(default)]
    pub max_proof_attempts: Option<u64>,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_listen_addr() -> IpAddr {
    IpAddr::V4(Ipv4Addr::LOCALHOST)
}

fn default_port() -> u16 {
    5000
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl DaemonConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.listen_addr, self.port)
    }

    pub fn ledger_config(&self) -> LedgerConfig {
        LedgerConfig {
            difficulty: self.difficulty,
            max_proof_attempts: self.max_proof_attempts,
        }
    }
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            port: default_port(),
            difficulty: Difficulty::default(),
            max_proof_attempts: None,
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_gives_defaults() {
        let config = DaemonConfig::from_toml_str("").unwrap();
        assert_eq!(config, DaemonConfig::default());
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:5000");
        assert_eq!(config.difficulty.leading_zeros(), 4);
    }

    #[test]
    fn parses_every_field() {
        let config = DaemonConfig::from_toml_str(
            r#"
            listen_addr = "0.0.0.0"
            port = 8080
            difficulty = 3
            max_proof_attempts = 1000000
            log_level = "debug"
            log_format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.difficulty.leading_zeros(), 3);
        assert_eq!(config.max_proof_attempts, Some(1_000_000));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_format, LogFormat::Json);

        let ledger = config.ledger_config();
        assert_eq!(ledger.difficulty, config.difficulty);
        assert_eq!(ledger.max_proof_attempts, Some(1_000_000));
    }

    #[test]
    fn rejects_out_of_range_difficulty() {
        assert!(matches!(
            DaemonConfig::from_toml_str("difficulty = 65"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn reads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port = 7000").unwrap();
        let config = DaemonConfig::from_toml_file(file.path()).unwrap();
        assert_eq!(config.port, 7000);
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(matches!(
            DaemonConfig::from_toml_file(&path),
            Err(ConfigError::Read { .. })
        ));
    }
}
