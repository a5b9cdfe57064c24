//! bgs-geology CLI entry point
//!
//! MCP server and command-line client for the BGS geology WMS

use bgs_geology::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
