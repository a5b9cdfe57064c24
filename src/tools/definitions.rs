//! Tool definitions and argument dispatch
//!
//! Describes each tool with a JSON schema and decodes JSON arguments into
//! calls on [`GeologyTools`], filling in configured defaults.

use crate::error::{Error, Result};
use crate::tools::{GeologyTools, ToolOutput};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Number, Value};
use tracing::info;

pub const GET_GEOLOGY_AT_LOCATION: &str = "get_geology_at_location";
pub const GET_AVAILABLE_GEOLOGY_LAYERS: &str = "get_available_geology_layers";
pub const GET_CAPABILITIES: &str = "get_capabilities";
pub const GET_GEOLOGY_MAP_URL: &str = "get_geology_map_url";
pub const GET_SERVICE_INFO: &str = "get_service_info";

/// Tool definition as advertised to hosts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Arguments of get_geology_at_location
#[derive(Debug, Clone, Deserialize)]
pub struct LocationArgs {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub geology_type: Option<String>,
    #[serde(default)]
    pub format_type: Option<String>,
}

/// Arguments of get_geology_map_url
#[derive(Debug, Clone, Deserialize)]
pub struct MapUrlArgs {
    pub layer: String,
    pub min_lat: f64,
    pub min_lon: f64,
    pub max_lat: f64,
    pub max_lon: f64,
    /// Integer, or a float with no fractional part
    #[serde(default)]
    pub width: Option<Number>,
    #[serde(default)]
    pub height: Option<Number>,
    #[serde(default)]
    pub format_type: Option<String>,
}

/// Every tool the server offers
pub fn list_tools() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: GET_GEOLOGY_AT_LOCATION.to_string(),
            description: "Get geological information at a specific geographic location from BGS data.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "latitude": {
                        "type": "number",
                        "description": "Latitude in decimal degrees (WGS84), 49 to 61"
                    },
                    "longitude": {
                        "type": "number",
                        "description": "Longitude in decimal degrees (WGS84), -8 to 2"
                    },
                    "geology_type": {
                        "type": "string",
                        "enum": ["bedrock", "superficial_deposits", "artificial_ground", "mass_movement", "linear_features"],
                        "default": "bedrock",
                        "description": "Geological data type"
                    },
                    "format_type": {
                        "type": "string",
                        "enum": ["text/html", "text/xml", "text/plain"],
                        "default": "text/html",
                        "description": "Response format"
                    }
                },
                "required": ["latitude", "longitude"]
            }),
        },
        ToolDefinition {
            name: GET_AVAILABLE_GEOLOGY_LAYERS.to_string(),
            description: "Get available geological data layers from the BGS WMS service".to_string(),
            input_schema: json!({ "type": "object", "properties": {} }),
        },
        ToolDefinition {
            name: GET_CAPABILITIES.to_string(),
            description: "Get WMS capabilities document showing all available geological layers and metadata".to_string(),
            input_schema: json!({ "type": "object", "properties": {} }),
        },
        ToolDefinition {
            name: GET_GEOLOGY_MAP_URL.to_string(),
            description: "Generate WMS GetMap URL for geological visualization. Use small areas (0.05-0.15 degree boxes); data is only visible between 1:100,000 and 1:25,000 scale.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "layer": {
                        "type": "string",
                        "description": "Layer name (see get_available_geology_layers); friendly or WMS name"
                    },
                    "min_lat": { "type": "number", "description": "Minimum latitude (south boundary)" },
                    "min_lon": { "type": "number", "description": "Minimum longitude (west boundary)" },
                    "max_lat": { "type": "number", "description": "Maximum latitude (north boundary)" },
                    "max_lon": { "type": "number", "description": "Maximum longitude (east boundary)" },
                    "width": { "type": "integer", "default": 450, "description": "Image width in pixels" },
                    "height": { "type": "integer", "default": 450, "description": "Image height in pixels" },
                    "format_type": {
                        "type": "string",
                        "enum": ["image/png", "image/gif", "image/jpeg"],
                        "default": "image/png",
                        "description": "Image format"
                    }
                },
                "required": ["layer", "min_lat", "min_lon", "max_lat", "max_lon"]
            }),
        },
        ToolDefinition {
            name: GET_SERVICE_INFO.to_string(),
            description: "Get information about the BGS Geology 50K WMS service".to_string(),
            input_schema: json!({ "type": "object", "properties": {} }),
        },
    ]
}

/// Decode tool arguments; a missing arguments object counts as empty
fn parse_args<T: DeserializeOwned>(arguments: Value) -> Result<T> {
    let arguments = if arguments.is_null() {
        json!({})
    } else {
        arguments
    };
    serde_json::from_value(arguments).map_err(|e| Error::InvalidArguments(e.to_string()))
}

fn dimension(label: &str, value: Option<&Number>, default: u32) -> Result<u32> {
    let Some(n) = value else {
        return Ok(default);
    };

    let whole = match n.as_u64() {
        Some(v) => u32::try_from(v).ok(),
        None => n
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= f64::from(u32::MAX))
            .map(|f| f as u32),
    };

    whole.filter(|v| *v > 0).ok_or_else(|| {
        Error::InvalidDimensions(format!("{} must be a positive integer, got {}", label, n))
    })
}

impl GeologyTools {
    /// Run a tool by name
    ///
    /// Only an unknown tool name is an `Err`; everything else, including bad
    /// arguments, comes back as a `ToolOutput`.
    pub async fn call(&self, name: &str, arguments: Value) -> Result<ToolOutput> {
        info!("Tool call: {}", name);

        let output = match name {
            GET_GEOLOGY_AT_LOCATION => match parse_args::<LocationArgs>(arguments) {
                Ok(args) => {
                    let defaults = self.defaults();
                    self.get_geology_at_location(
                        args.latitude,
                        args.longitude,
                        args.geology_type.as_deref().unwrap_or(&defaults.geology_type),
                        args.format_type.as_deref().unwrap_or(&defaults.info_format),
                    )
                    .await
                }
                Err(e) => ToolOutput::error(&e),
            },
            GET_AVAILABLE_GEOLOGY_LAYERS => {
                match serde_json::to_string_pretty(&self.get_available_geology_layers()) {
                    Ok(text) => ToolOutput::ok(text),
                    Err(e) => ToolOutput::error(&Error::Json(e)),
                }
            }
            GET_CAPABILITIES => self.get_capabilities().await,
            GET_GEOLOGY_MAP_URL => match self.map_url_from_args(arguments) {
                Ok(output) => output,
                Err(e) => ToolOutput::error(&e),
            },
            GET_SERVICE_INFO => ToolOutput::ok(self.get_service_info()),
            _ => {
                return Err(Error::InvalidArguments(format!("Unknown tool: {}", name)));
            }
        };

        Ok(output)
    }

    fn map_url_from_args(&self, arguments: Value) -> Result<ToolOutput> {
        let args: MapUrlArgs = parse_args(arguments)?;
        let defaults = self.defaults();
        let width = dimension("width", args.width.as_ref(), defaults.width)?;
        let height = dimension("height", args.height.as_ref(), defaults.height)?;

        Ok(self.get_geology_map_url(
            &args.layer,
            args.min_lat,
            args.min_lon,
            args.max_lat,
            args.max_lon,
            width,
            height,
            args.format_type.as_deref().unwrap_or(&defaults.image_format),
        ))
    }
}
