//! Status command handler
//!
//! Reports whether the HTTP server is up and which WMS it talks to.

use crate::config::Config;
use crate::error::Result;

/// Run the status command
pub async fn run() -> Result<()> {
    let config = Config::load()?;

    println!("bgs-geology v{}", env!("CARGO_PKG_VERSION"));
    println!("Config: {}", Config::config_path()?.display());
    println!("WMS endpoint: {}", config.wms.endpoint);
    println!();

    check_server_status(&config).await;
    Ok(())
}

/// Check if the server is running
async fn check_server_status(config: &Config) {
    let url = format!("http://{}/api/status", config.server_addr());

    match reqwest::get(&url).await {
        Ok(response) => {
            if response.status().is_success() {
                println!(
                    "Server: RUNNING on {} (MCP at {})",
                    config.server_addr(),
                    config.server.mcp_path
                );
                if let Ok(body) = response.text().await {
                    if let Ok(status) = serde_json::from_str::<serde_json::Value>(&body) {
                        if let Some(version) = status.get("version").and_then(|v| v.as_str()) {
                            println!("  Version: {}", version);
                        }
                        if let Some(uptime) = status.get("uptime_secs").and_then(|v| v.as_u64()) {
                            println!("  Uptime: {}s", uptime);
                        }
                    }
                }
            } else {
                println!("Server: ERROR (status {})", response.status());
            }
        }
        Err(_) => {
            println!("Server: NOT RUNNING on {}", config.server_addr());
        }
    }
}
