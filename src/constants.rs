//! Centralized constants for the bgs-geology crate
//!
//! Protocol and geographic constants shared across modules.

/// Geographic constants
pub mod geo {
    /// Southern edge of the UK query region (degrees latitude)
    pub const UK_MIN_LAT: f64 = 49.0;

    /// Northern edge of the UK query region (degrees latitude)
    pub const UK_MAX_LAT: f64 = 61.0;

    /// Western edge of the UK query region (degrees longitude)
    pub const UK_MIN_LON: f64 = -8.0;

    /// Eastern edge of the UK query region (degrees longitude)
    pub const UK_MAX_LON: f64 = 2.0;

    /// Half-width of the box built around a feature query point (~200 m)
    pub const FEATURE_BUFFER_DEGREES: f64 = 0.002;
}

/// WMS protocol constants
pub mod wms {
    /// BGS 1:50,000 detailed geology WMS endpoint
    pub const BGS_GEOLOGY_WMS_URL: &str =
        "https://map.bgs.ac.uk/arcgis/services/BGS_Detailed_Geology/MapServer/WMSServer";

    /// Protocol version spoken to the endpoint
    pub const VERSION: &str = "1.3.0";

    /// WGS84 with longitude-first axis order
    pub const CRS: &str = "CRS:84";

    /// Style name requested for every layer
    pub const STYLE: &str = "default";

    /// Pixel size of the virtual image used for GetFeatureInfo
    pub const FEATURE_IMAGE_SIZE: u32 = 450;

    /// Query pixel (centre of the virtual image)
    pub const FEATURE_PIXEL: u32 = FEATURE_IMAGE_SIZE / 2;
}

/// MCP protocol constants
pub mod mcp {
    /// Server name advertised during initialize
    pub const SERVER_NAME: &str = "bgs-geology";

    /// MCP protocol revision implemented
    pub const PROTOCOL_VERSION: &str = "2024-11-05";

    /// JSON-RPC version string
    pub const JSONRPC_VERSION: &str = "2.0";
}
