use std::path::PathBuf;

use clap::Parser;

/// Wayfinder relay
#[derive(Debug, Parser)]
#[command(
    name = "wayfinder",
    about = "Relay for voice transcription, sign reading, and speech synthesis"
)]
pub struct Args {
    /// Path to configuration file (optional; defaults apply when missing)
    #[arg(short, long, default_value = "wayfinder.toml", env = "WAYFINDER_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "WAYFINDER_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,

    /// Override the log filter (e.g. `debug` or `tower_http=debug,info`)
    #[arg(long)]
    pub log: Option<String>,
}
