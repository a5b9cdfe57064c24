//! Server shared state
//!
//! Holds configuration and the tool handler for the HTTP server.

use crate::config::Config;
use crate::error::Result;
use crate::mcp::McpHandler;
use crate::tools::GeologyTools;
use chrono::{DateTime, Utc};

/// Shared state for the HTTP server
pub struct AppState {
    /// Configuration
    pub config: Config,

    /// MCP handler (owns the geology tools)
    pub mcp: McpHandler,

    /// When the server started
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Create new application state
    pub fn new(config: Config) -> Result<Self> {
        let tools = GeologyTools::from_config(&config)?;
        Ok(Self::with_tools(config, tools))
    }

    /// Create state around an existing tool set
    pub fn with_tools(config: Config, tools: GeologyTools) -> Self {
        Self {
            config,
            mcp: McpHandler::new(tools),
            started_at: Utc::now(),
        }
    }

    /// Geology tools
    pub fn tools(&self) -> &GeologyTools {
        self.mcp.tools()
    }

    /// Seconds since the server started
    pub fn uptime_secs(&self) -> u64 {
        (Utc::now() - self.started_at).num_seconds().max(0) as u64
    }
}
