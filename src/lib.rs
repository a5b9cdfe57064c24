//! bgs-geology: MCP tool server for the BGS 1:50,000 geology WMS
//!
//! A library and CLI that turns coordinates and layer names into OGC WMS
//! 1.3.0 requests against the British Geological Survey map service and
//! exposes them as MCP tools.
//!
//! ## Features
//!
//! - Point geology lookups via GetFeatureInfo
//! - GetMap URL construction for an area
//! - Raw GetCapabilities passthrough
//! - MCP over stdio or HTTP, plus a small REST mirror
//!
//! ## Quick Start
//!
//! ```rust
//! use bgs_geology::constants::wms::BGS_GEOLOGY_WMS_URL;
//! use bgs_geology::geo::BoundingBox;
//! use bgs_geology::geology::GeologyLayer;
//! use bgs_geology::wms::{build_map_url, ImageFormat};
//!
//! let bbox = BoundingBox::new(51.0, -1.0, 51.5, 0.0);
//! let url = build_map_url(
//!     BGS_GEOLOGY_WMS_URL,
//!     GeologyLayer::Bedrock,
//!     bbox,
//!     800,
//!     600,
//!     ImageFormat::Png,
//! )
//! .unwrap();
//!
//! assert!(url.contains("BBOX=-1,51,0,51.5"));
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod geo;
pub mod geology;
pub mod mcp;
pub mod server;
pub mod tools;
pub mod wms;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use geo::{BoundingBox, GeoPoint};
pub use geology::GeologyLayer;
pub use tools::{GeologyTools, ToolOutput};
pub use wms::WmsClient;
