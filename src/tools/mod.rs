//! Geology tools
//!
//! The five operations offered to tool hosts. Every operation returns text;
//! failures are rendered as `Error: ...` so a host can pass the outcome
//! straight back to its caller.
//!
//! - get_geology_at_location: GetFeatureInfo at a point
//! - get_available_geology_layers: the layer table
//! - get_capabilities: raw GetCapabilities document
//! - get_geology_map_url: GetMap URL for an area
//! - get_service_info: usage notes

pub mod definitions;
pub mod info;

use crate::config::{Config, DefaultsConfig};
use crate::error::{Error, Result};
use crate::geo::{BoundingBox, GeoPoint};
use crate::geology::{layer_catalog, GeologyLayer, LayerCatalog};
use crate::wms::{build_map_url, ImageFormat, InfoFormat, WmsClient};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Text outcome of a tool call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolOutput {
    pub text: String,
    /// Set when `text` describes a failure
    pub is_error: bool,
}

impl ToolOutput {
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(err: &Error) -> Self {
        Self {
            text: format!("Error: {}", err),
            is_error: true,
        }
    }

    fn from_result(result: Result<String>) -> Self {
        match result {
            Ok(text) => Self::ok(text),
            Err(e) => {
                if e.is_validation() {
                    debug!("Rejected tool input: {}", e);
                } else {
                    warn!("Tool call failed: {}", e);
                }
                Self::error(&e)
            }
        }
    }
}

/// Tool implementations bound to one WMS endpoint
#[derive(Debug, Clone)]
pub struct GeologyTools {
    client: WmsClient,
    defaults: DefaultsConfig,
}

impl GeologyTools {
    pub fn new(client: WmsClient, defaults: DefaultsConfig) -> Self {
        Self { client, defaults }
    }

    /// Build tools from the full configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(
            WmsClient::from_config(&config.wms)?,
            config.defaults.clone(),
        ))
    }

    pub fn client(&self) -> &WmsClient {
        &self.client
    }

    /// Default argument values applied by the dispatcher
    pub fn defaults(&self) -> &DefaultsConfig {
        &self.defaults
    }

    /// Layer table: friendly name -> WMS layer and description
    pub fn get_available_geology_layers(&self) -> LayerCatalog {
        layer_catalog()
    }

    /// Geological information at a point
    pub async fn get_geology_at_location(
        &self,
        latitude: f64,
        longitude: f64,
        geology_type: &str,
        format_type: &str,
    ) -> ToolOutput {
        info!(
            "get_geology_at_location({}, {}, {}, {})",
            latitude, longitude, geology_type, format_type
        );
        ToolOutput::from_result(
            self.query_location(latitude, longitude, geology_type, format_type)
                .await,
        )
    }

    /// Point query with typed errors, shared by the tool and REST surfaces
    pub async fn query_location(
        &self,
        latitude: f64,
        longitude: f64,
        geology_type: &str,
        format_type: &str,
    ) -> Result<String> {
        let point = GeoPoint::validated(latitude, longitude)?;
        let layer: GeologyLayer = geology_type.parse()?;
        let format: InfoFormat = format_type.parse()?;

        let body = self.client.get_feature_info(layer, point, format).await?;

        if body.trim().is_empty() {
            Ok(format!("No geological data available at {}", point))
        } else {
            Ok(format!("Geological data at {}:\n\n{}", point, body))
        }
    }

    /// Raw WMS capabilities document
    pub async fn get_capabilities(&self) -> ToolOutput {
        info!("get_capabilities()");
        match self.client.get_capabilities().await {
            Ok(body) => ToolOutput::ok(body),
            Err(e) => ToolOutput {
                text: format!("Error getting capabilities: {}", e),
                is_error: true,
            },
        }
    }

    /// GetMap URL for an area. Never touches the network.
    #[allow(clippy::too_many_arguments)]
    pub fn get_geology_map_url(
        &self,
        layer: &str,
        min_lat: f64,
        min_lon: f64,
        max_lat: f64,
        max_lon: f64,
        width: u32,
        height: u32,
        format_type: &str,
    ) -> ToolOutput {
        ToolOutput::from_result(self.map_url(
            layer,
            BoundingBox::new(min_lat, min_lon, max_lat, max_lon),
            width,
            height,
            format_type,
        ))
    }

    /// Map URL with typed errors, shared by the tool and REST surfaces
    pub fn map_url(
        &self,
        layer: &str,
        bbox: BoundingBox,
        width: u32,
        height: u32,
        format_type: &str,
    ) -> Result<String> {
        let layer = GeologyLayer::resolve(layer)?;
        let format: ImageFormat = format_type.parse()?;
        build_map_url(self.client.endpoint(), layer, bbox, width, height, format)
    }

    /// Usage notes and service metadata
    pub fn get_service_info(&self) -> String {
        info::service_info(self.client.endpoint())
    }
}
