//! Configuration management
//!
//! Loads and saves configuration from XDG-compliant paths.
//! Config location: ~/.config/bgs-geology/config.toml

pub mod defaults;

use crate::error::{Error, Result};
use defaults::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Upstream WMS settings
    #[serde(default)]
    pub wms: WmsConfig,

    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Default tool argument values
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Upstream WMS settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WmsConfig {
    /// WMS endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// User-Agent header
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Path the MCP endpoint is mounted on
    #[serde(default = "default_mcp_path")]
    pub mcp_path: String,
}

/// Default tool argument values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Layer used when a point query names none
    #[serde(default = "default_geology_type")]
    pub geology_type: String,

    /// GetFeatureInfo response format
    #[serde(default = "default_info_format")]
    pub info_format: String,

    /// GetMap image format
    #[serde(default = "default_image_format")]
    pub image_format: String,

    /// Map image width in pixels
    #[serde(default = "default_width")]
    pub width: u32,

    /// Map image height in pixels
    #[serde(default = "default_height")]
    pub height: u32,
}

// Default value functions for serde
fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}
fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}
fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}
fn default_host() -> String {
    DEFAULT_HOST.to_string()
}
fn default_port() -> u16 {
    DEFAULT_PORT
}
fn default_mcp_path() -> String {
    DEFAULT_MCP_PATH.to_string()
}
fn default_geology_type() -> String {
    DEFAULT_GEOLOGY_TYPE.to_string()
}
fn default_info_format() -> String {
    DEFAULT_INFO_FORMAT.to_string()
}
fn default_image_format() -> String {
    DEFAULT_IMAGE_FORMAT.to_string()
}
fn default_width() -> u32 {
    DEFAULT_WIDTH
}
fn default_height() -> u32 {
    DEFAULT_HEIGHT
}

impl Default for WmsConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            mcp_path: default_mcp_path(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            geology_type: default_geology_type(),
            info_format: default_info_format(),
            image_format: default_image_format(),
            width: default_width(),
            height: default_height(),
        }
    }
}

impl WmsConfig {
    /// Request timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default path
    ///
    /// Creates default config if file doesn't exist
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = fs::read_to_string(&path)
                .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;

            toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Failed to parse config file: {}", e)))
        } else {
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&path, content)
            .map_err(|e| Error::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Get a configuration value by key path
    ///
    /// Key format: "section.key"
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["wms", "endpoint"] => Some(self.wms.endpoint.clone()),
            ["wms", "timeout_secs"] => Some(self.wms.timeout_secs.to_string()),
            ["wms", "user_agent"] => Some(self.wms.user_agent.clone()),

            ["server", "host"] => Some(self.server.host.clone()),
            ["server", "port"] => Some(self.server.port.to_string()),
            ["server", "mcp_path"] => Some(self.server.mcp_path.clone()),

            ["defaults", "geology_type"] => Some(self.defaults.geology_type.clone()),
            ["defaults", "info_format"] => Some(self.defaults.info_format.clone()),
            ["defaults", "image_format"] => Some(self.defaults.image_format.clone()),
            ["defaults", "width"] => Some(self.defaults.width.to_string()),
            ["defaults", "height"] => Some(self.defaults.height.to_string()),

            _ => None,
        }
    }

    /// Set a configuration value by key path
    ///
    /// Returns error if key is invalid or value type is wrong
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["wms", "endpoint"] => {
                self.wms.endpoint = value.to_string();
            }
            ["wms", "timeout_secs"] => {
                self.wms.timeout_secs = value
                    .parse()
                    .map_err(|_| Error::Config(format!("Invalid timeout value: {}", value)))?;
            }
            ["wms", "user_agent"] => {
                self.wms.user_agent = value.to_string();
            }

            ["server", "host"] => {
                self.server.host = value.to_string();
            }
            ["server", "port"] => {
                self.server.port = value
                    .parse()
                    .map_err(|_| Error::Config(format!("Invalid port value: {}", value)))?;
            }
            ["server", "mcp_path"] => {
                if !value.starts_with('/') {
                    return Err(Error::Config(format!(
                        "MCP path must start with '/': {}",
                        value
                    )));
                }
                self.server.mcp_path = value.to_string();
            }

            ["defaults", "geology_type"] => {
                self.defaults.geology_type = value.to_string();
            }
            ["defaults", "info_format"] => {
                self.defaults.info_format = value.to_string();
            }
            ["defaults", "image_format"] => {
                self.defaults.image_format = value.to_string();
            }
            ["defaults", "width"] => {
                self.defaults.width = value
                    .parse()
                    .map_err(|_| Error::Config(format!("Invalid width value: {}", value)))?;
            }
            ["defaults", "height"] => {
                self.defaults.height = value
                    .parse()
                    .map_err(|_| Error::Config(format!("Invalid height value: {}", value)))?;
            }

            _ => {
                return Err(Error::Config(format!("Unknown config key: {}", key)));
            }
        }

        Ok(())
    }

    /// List all available config keys
    pub fn available_keys() -> Vec<&'static str> {
        vec![
            "wms.endpoint",
            "wms.timeout_secs",
            "wms.user_agent",
            "server.host",
            "server.port",
            "server.mcp_path",
            "defaults.geology_type",
            "defaults.info_format",
            "defaults.image_format",
            "defaults.width",
            "defaults.height",
        ]
    }

    /// Get server address as "host:port"
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    fn with_temp_config<F: FnOnce()>(f: F) {
        let temp_dir = TempDir::new().unwrap();
        env::set_var("XDG_CONFIG_HOME", temp_dir.path());
        f();
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert!(config.wms.endpoint.contains("map.bgs.ac.uk"));
        assert_eq!(config.wms.timeout_secs, 30);
        assert_eq!(config.server.port, 8083);
        assert_eq!(config.server.mcp_path, "/mcp");
        assert_eq!(config.defaults.geology_type, "bedrock");
        assert_eq!(config.defaults.width, 450);
    }

    #[test]
    fn test_get_set() {
        let mut config = Config::default();

        assert_eq!(config.get("defaults.info_format"), Some("text/html".to_string()));

        config.set("defaults.info_format", "text/xml").unwrap();
        assert_eq!(config.get("defaults.info_format"), Some("text/xml".to_string()));

        config.set("wms.timeout_secs", "5").unwrap();
        assert_eq!(config.wms.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_get_invalid_key() {
        let config = Config::default();
        assert_eq!(config.get("invalid.key"), None);
    }

    #[test]
    fn test_set_invalid_key() {
        let mut config = Config::default();
        assert!(config.set("invalid.key", "value").is_err());
    }

    #[test]
    fn test_set_invalid_value() {
        let mut config = Config::default();
        assert!(config.set("server.port", "not_a_number").is_err());
        assert!(config.set("defaults.width", "-1").is_err());
        assert!(config.set("server.mcp_path", "mcp").is_err());
    }

    #[test]
    fn test_save_and_load() {
        with_temp_config(|| {
            let mut config = Config::default();
            config.wms.endpoint = "http://localhost:9000/wms".to_string();
            config.server.port = 9090;
            config.save().unwrap();

            let loaded = Config::load().unwrap();
            assert_eq!(loaded.wms.endpoint, "http://localhost:9000/wms");
            assert_eq!(loaded.server.port, 9090);
        });
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let loaded: Config = toml::from_str("[server]\nport = 9999\n").unwrap();
        assert_eq!(loaded.server.port, 9999);
        assert_eq!(loaded.server.host, "127.0.0.1");
        assert_eq!(loaded.wms.timeout_secs, 30);
        assert_eq!(loaded.defaults.image_format, "image/png");
    }

    #[test]
    fn test_serialization_format() {
        let toml = toml::to_string_pretty(&Config::default()).unwrap();

        assert!(toml.contains("[wms]"));
        assert!(toml.contains("[server]"));
        assert!(toml.contains("[defaults]"));
    }

    #[test]
    fn test_server_addr() {
        assert_eq!(Config::default().server_addr(), "127.0.0.1:8083");
    }

    #[test]
    fn test_available_keys_all_gettable() {
        let config = Config::default();
        for key in Config::available_keys() {
            assert!(config.get(key).is_some(), "{} should be readable", key);
        }
    }
}
