//! Service description text

use crate::constants::wms::{CRS, VERSION};
use crate::geology::GeologyLayer;

/// Human-readable notes about the service and how to use the tools
pub fn service_info(endpoint: &str) -> String {
    let layers = GeologyLayer::ALL
        .iter()
        .map(|l| format!("- {} ({}): {}", l.name(), l.wms_name(), l.description()))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "BGS Geology 50K MCP Server

Provides access to British Geological Survey 1:50,000 scale geological maps via WMS.

Endpoint: {endpoint}
Protocol: WMS {VERSION} ({CRS}, longitude/latitude axis order)
Coverage: Great Britain (England, Wales, Scotland)
Query bounds: latitude 49 to 61, longitude -8 to 2
Scale: 1:50,000 (visible between 1:100,000 and 1:25,000 scale)
Coordinate systems: WGS84 (CRS:84) and British National Grid
Data source: BGS/UKRI under Open Government Licence

Geological Layers:
{layers}

Tools:
- get_geology_at_location(latitude, longitude, geology_type, format_type) - Get geological data at point
- get_available_geology_layers() - List available geological data types
- get_capabilities() - Get full WMS capabilities document
- get_geology_map_url(layer, min_lat, min_lon, max_lat, max_lon, width, height, format_type) - Generate map visualization URL
- get_service_info() - This text

Example: get_geology_at_location(51.5074, -0.1278, \"bedrock\", \"text/html\")
Map example: get_geology_map_url(\"bedrock\", 51.0, -1.0, 51.1, -0.9)

Note: For visible maps, use smaller areas (0.05-0.15 degree boxes) as data is only visible at 1:25,000 to 1:100,000 scale.
Try bedrock or superficial_deposits layers first as they have better coverage than mass_movement.

Working examples:
- London bedrock: get_geology_map_url(\"bedrock\", 51.45, -0.15, 51.55, -0.05)
- BGS test area: get_geology_map_url(\"superficial_deposits\", 50.991, -2.215, 51.051, -2.155)"
    )
}
