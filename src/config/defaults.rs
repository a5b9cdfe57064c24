//! Default configuration values
//!
//! Named constants for all tunable parameters

use crate::constants::wms::BGS_GEOLOGY_WMS_URL;

/// Default WMS endpoint
pub const DEFAULT_ENDPOINT: &str = BGS_GEOLOGY_WMS_URL;

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User-Agent sent to the WMS
pub const DEFAULT_USER_AGENT: &str = concat!("bgs-geology/", env!("CARGO_PKG_VERSION"));

/// Default geology layer for point queries
pub const DEFAULT_GEOLOGY_TYPE: &str = "bedrock";

/// Default GetFeatureInfo response format
pub const DEFAULT_INFO_FORMAT: &str = "text/html";

/// Default GetMap image format
pub const DEFAULT_IMAGE_FORMAT: &str = "image/png";

/// Default map image width in pixels
pub const DEFAULT_WIDTH: u32 = 450;

/// Default map image height in pixels
pub const DEFAULT_HEIGHT: u32 = 450;

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 8083;

/// Default path of the MCP endpoint
pub const DEFAULT_MCP_PATH: &str = "/mcp";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "bgs-geology";
