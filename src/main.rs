//! RinkBot - ice-hockey contest strategy client
//!
//! Connects to the match server, performs the handshake, and plays the
//! match tick by tick until the server calls it over.

mod config;
mod model;
mod network;
mod protocol;
mod runner;
mod strategy;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use config::Config;
use network::GameClient;
use runner::Runner;
use strategy::{BaselineStrategy, Strategy};

/// RinkBot - ice-hockey contest strategy client
#[derive(Parser)]
#[command(name = "rinkbot")]
#[command(author = "RinkBot Contributors")]
#[command(version = "0.1.0")]
#[command(about = "Play an ice-hockey contest match against a remote server", long_about = None)]
struct Cli {
    /// Match server host
    host: Option<String>,

    /// Match server port
    port: Option<u16>,

    /// Authentication token
    token: Option<String>,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Print the effective configuration and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration, then let the command line win argument by argument.
    let mut config = if let Some(config_path) = &cli.config {
        Config::load(config_path)?
    } else {
        Config::load_default().unwrap_or_default()
    };

    if let Some(host) = cli.host {
        config.connection.host = host;
    }
    if let Some(port) = cli.port {
        config.connection.port = port;
    }
    if let Some(token) = cli.token {
        config.connection.token = token;
    }

    // Initialize logging
    let filter = if cli.verbose || config.log.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    if cli.print_config {
        println!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    tracing::info!(
        "Connecting to {}:{}",
        config.connection.host,
        config.connection.port
    );

    let client = GameClient::connect(&config.connection.host, config.connection.port).await?;

    let runner = Runner::new(client, config.connection.token.clone());
    runner
        .run(|| Box::new(BaselineStrategy) as Box<dyn Strategy>)
        .await?;

    tracing::info!("Match finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from(["rinkbot", "127.0.0.1", "31001", "token"]);
        assert!(cli.is_ok());
    }

    #[test]
    fn test_partial_arguments_are_accepted() {
        // Host alone is a valid invocation; port and token keep defaults.
        let cli = Cli::try_parse_from(["rinkbot", "rink.example.net"]).unwrap();
        assert_eq!(cli.host.as_deref(), Some("rink.example.net"));
        assert_eq!(cli.port, None);
        assert_eq!(cli.token, None);
    }
}
