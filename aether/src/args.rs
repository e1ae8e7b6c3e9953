use std::path::PathBuf;

use clap::Parser;

/// Aether control plane
#[derive(Debug, Parser)]
#[command(name = "aether", about = "Control plane for telemetry collection")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "aether.toml", env = "AETHER_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "AETHER_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,

    /// Log filter directive (e.g. "info" or "aether=debug")
    #[arg(long, default_value = "info", env = "AETHER_LOG")]
    pub log_filter: String,
}
