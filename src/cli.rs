//! CLI commands implementation.

use clap::{Parser, Subcommand};
use console::style;

use crate::config::Settings;
use crate::scrape::{self, SiteEndpoints, StreamResolver};

#[derive(Parser)]
#[command(name = "streamgate")]
#[command(about = "Catalog scraper and stream URL resolver for vidorra.to")]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Start the JSON API gateway
    Serve {
        /// Address to bind to: PORT, HOST, or HOST:PORT (default: 127.0.0.1:3000)
        #[arg(default_value = "127.0.0.1:3000")]
        bind: String,
    },

    /// Scrape the catalog once and print it as JSON
    Catalog,

    /// Resolve the direct stream URL for a video ID
    Resolve {
        /// Numeric video ID from the catalog
        video_id: String,
    },
}

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = Settings::default();

    match cli.command {
        Commands::Serve { bind } => cmd_serve(&settings, &bind).await,
        Commands::Catalog => cmd_catalog(&settings).await,
        Commands::Resolve { video_id } => cmd_resolve(&settings, &video_id).await,
    }
}

async fn cmd_serve(settings: &Settings, bind: &str) -> anyhow::Result<()> {
    let (host, port) = parse_bind_address(bind)?;

    println!(
        "{} Starting streamgate server at http://{}:{}",
        style("→").cyan(),
        host,
        port
    );
    println!("  Press Ctrl+C to stop");

    crate::server::serve(settings, &host, port).await
}

async fn cmd_catalog(settings: &Settings) -> anyhow::Result<()> {
    let client = scrape::build_client(settings.request_timeout());
    let endpoints = SiteEndpoints::default();

    let videos = scrape::fetch_catalog(&client, &endpoints).await;
    println!("{}", serde_json::to_string_pretty(&videos)?);

    Ok(())
}

async fn cmd_resolve(settings: &Settings, video_id: &str) -> anyhow::Result<()> {
    let client = scrape::build_client(settings.request_timeout());
    let resolver = StreamResolver::new(client, SiteEndpoints::default());

    match resolver.resolve(video_id).await {
        Ok(url) => {
            println!("{}", url);
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {}", style("✗").red(), e);
            Err(anyhow::anyhow!("resolution failed: {}", e))
        }
    }
}

/// Parse a bind address that can be:
/// - Just a port: "3000" -> 127.0.0.1:3000
/// - Just a host: "0.0.0.0" -> 0.0.0.0:3000
/// - Host and port: "0.0.0.0:3000" -> 0.0.0.0:3000
fn parse_bind_address(bind: &str) -> anyhow::Result<(String, u16)> {
    // Try parsing as just a port number
    if let Ok(port) = bind.parse::<u16>() {
        return Ok(("127.0.0.1".to_string(), port));
    }

    // Try parsing as host:port
    if let Some((host, port_str)) = bind.rsplit_once(':') {
        if let Ok(port) = port_str.parse::<u16>() {
            return Ok((host.to_string(), port));
        }
    }

    // Must be just a host, use default port
    Ok((bind.to_string(), 3000))
}
