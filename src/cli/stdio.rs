//! Stdio command handler
//!
//! Runs the MCP handler over stdin/stdout for hosts that spawn the server
//! as a child process.

use crate::cli::init_logging;
use crate::config::Config;
use crate::error::Result;
use crate::mcp::McpHandler;
use crate::tools::GeologyTools;
use clap::Args;

/// Stdio command arguments
#[derive(Args)]
pub struct StdioArgs {
    /// Override the WMS endpoint
    #[arg(long)]
    pub endpoint: Option<String>,
}

/// Run the stdio command
pub async fn run(args: StdioArgs) -> Result<()> {
    init_logging("warn");

    let mut config = Config::load()?;
    if let Some(endpoint) = args.endpoint {
        config.wms.endpoint = endpoint;
    }

    let handler = McpHandler::new(GeologyTools::from_config(&config)?);
    handler.run_stdio().await?;
    Ok(())
}
