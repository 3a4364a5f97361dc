//! pactchain daemon: entry point for running an agreement ledger node.

mod config;
mod shutdown;

use std::net::IpAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use pactchain_ledger::Ledger;
use pactchain_rpc::RpcServer;
use pactchain_utils::LogFormat;
use pactchain_work::Difficulty;

use crate::config::DaemonConfig;

#[derive(Parser)]
#[command(name = "pactchain", about = "Proof-of-work ledger of signed agreements")]
struct Cli {
    /// Address the HTTP server binds to.
    #[arg(long, env = "PACTCHAIN_LISTEN_ADDR")]
    listen_addr: Option<IpAddr>,

    /// HTTP port.
    #[arg(long, env = "PACTCHAIN_PORT")]
    port: Option<u16>,

    /// Leading zero hex digits every proof must produce (0-64).
    #[arg(long, env = "PACTCHAIN_DIFFICULTY", value_parser = parse_difficulty)]
    difficulty: Option<Difficulty>,

    /// Give up a proof search after this many candidates.
    #[arg(long, env = "PACTCHAIN_MAX_PROOF_ATTEMPTS")]
    max_proof_attempts: Option<u64>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "PACTCHAIN_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "PACTCHAIN_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long, env = "PACTCHAIN_CONFIG")]
    config: Option<PathBuf>,
}

fn parse_difficulty(s: &str) -> Result<Difficulty, String> {
    let zeros: u8 = s.parse().map_err(|e| format!("{e}"))?;
    Difficulty::new(zeros).map_err(|e| e.to_string())
}

impl Cli {
    fn into_config(self) -> anyhow::Result<DaemonConfig> {
        let base = match &self.config {
            Some(path) => DaemonConfig::from_toml_file(path)?,
            None => DaemonConfig::default(),
        };

        Ok(DaemonConfig {
            listen_addr: self.listen_addr.unwrap_or(base.listen_addr),
            port: self.port.unwrap_or(base.port),
            difficulty: self.difficulty.unwrap_or(base.difficulty),
            max_proof_attempts: self.max_proof_attempts.or(base.max_proof_attempts),
            log_level: self.log_level.unwrap_or(base.log_level),
            log_format: self.log_format.unwrap_or(base.log_format),
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.clone();
    let config = cli.into_config()?;

    pactchain_utils::init_logging(config.log_format, &config.log_level);
    if let Some(path) = config_path {
        tracing::info!("Loaded config from {}", path.display());
    }

    tracing::info!(
        "Starting pactchain on {} (difficulty {}, proof ceiling {})",
        config.socket_addr(),
        config.difficulty.leading_zeros(),
        config
            .max_proof_attempts
            .map(|n| n.to_string())
            .unwrap_or_else(|| "none".into()),
    );

    let ledger = Arc::new(Ledger::new(config.ledger_config()));
    let server = RpcServer::new(config.socket_addr(), Arc::clone(&ledger))?;
    server.start(shutdown::shutdown_signal()).await?;

    tracing::info!(blocks = ledger.len(), "pactchain exited cleanly");
    Ok(())
}
