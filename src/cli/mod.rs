//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod config;
pub mod query;
pub mod serve;
pub mod status;
pub mod stdio;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// MCP tool server for the BGS 1:50,000 geology WMS
#[derive(Parser)]
#[command(name = "bgs-geology")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the MCP HTTP server (foreground)
    Serve(serve::ServeArgs),

    /// Serve MCP over stdin/stdout
    Stdio(stdio::StdioArgs),

    /// Query geology at a point
    Location(query::LocationArgs),

    /// Print a GetMap URL for an area
    MapUrl(query::MapUrlArgs),

    /// List geology layers
    Layers(query::LayersArgs),

    /// Print the WMS capabilities document
    Capabilities,

    /// Print service information
    Info,

    /// Manage configuration
    Config(config::ConfigArgs),

    /// Check whether the HTTP server is running
    Status,
}

/// Run the CLI
pub async fn run() -> crate::error::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => serve::run(args).await,
        Commands::Stdio(args) => stdio::run(args).await,
        Commands::Location(args) => query::location(args).await,
        Commands::MapUrl(args) => query::map_url(args),
        Commands::Layers(args) => query::layers(args),
        Commands::Capabilities => query::capabilities().await,
        Commands::Info => query::info(),
        Commands::Config(args) => config::run(args),
        Commands::Status => status::run().await,
    }
}

/// Initialize logging to stderr
///
/// `RUST_LOG` overrides `default_level`. Stdout stays free for command
/// output and MCP frames.
pub fn init_logging(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}
