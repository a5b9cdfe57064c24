//! WMS 1.3.0 request construction
//!
//! Turns validated geometry and resolved layers into the key/value query
//! strings the BGS endpoint understands. Only the three operations the tools
//! need are modelled: GetFeatureInfo, GetMap and GetCapabilities.
//!
//! All geometry is sent as `CRS=CRS:84`, which puts longitude before
//! latitude. Callers work in (lat, lon); the swap happens here and nowhere
//! else.

pub mod client;

use crate::constants::wms::{CRS, FEATURE_IMAGE_SIZE, FEATURE_PIXEL, STYLE, VERSION};
use crate::error::{Error, Result};
use crate::geo::{BoundingBox, GeoPoint};
use crate::geology::GeologyLayer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use client::WmsClient;

/// Response formats accepted for GetFeatureInfo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InfoFormat {
    #[serde(rename = "text/html")]
    #[default]
    Html,
    #[serde(rename = "text/xml")]
    Xml,
    #[serde(rename = "text/plain")]
    Text,
}

impl InfoFormat {
    pub const ALL: [InfoFormat; 3] = [InfoFormat::Html, InfoFormat::Xml, InfoFormat::Text];

    /// MIME type string
    pub fn mime(&self) -> &'static str {
        match self {
            InfoFormat::Html => "text/html",
            InfoFormat::Xml => "text/xml",
            InfoFormat::Text => "text/plain",
        }
    }
}

impl fmt::Display for InfoFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mime())
    }
}

impl FromStr for InfoFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|f| f.mime() == wanted)
            .ok_or_else(|| {
                Error::UnsupportedFormat(format!(
                    "'{}' is not a feature info format. Use: {}",
                    s,
                    mime_list(&Self::ALL.map(|f| f.mime()))
                ))
            })
    }
}

/// Image formats accepted for GetMap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ImageFormat {
    #[serde(rename = "image/png")]
    #[default]
    Png,
    #[serde(rename = "image/gif")]
    Gif,
    #[serde(rename = "image/jpeg")]
    Jpeg,
}

impl ImageFormat {
    pub const ALL: [ImageFormat; 3] = [ImageFormat::Png, ImageFormat::Gif, ImageFormat::Jpeg];

    /// MIME type string
    pub fn mime(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Gif => "image/gif",
            ImageFormat::Jpeg => "image/jpeg",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mime())
    }
}

impl FromStr for ImageFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|f| f.mime() == wanted)
            .ok_or_else(|| {
                Error::UnsupportedFormat(format!(
                    "'{}' is not an image format. Use: {}",
                    s,
                    mime_list(&Self::ALL.map(|f| f.mime()))
                ))
            })
    }
}

fn mime_list(mimes: &[&str]) -> String {
    mimes.join(", ")
}

/// One outbound WMS call
#[derive(Debug, Clone, PartialEq)]
pub enum WmsRequest {
    /// Service metadata document
    GetCapabilities,

    /// Feature attributes at a point
    GetFeatureInfo {
        layer: GeologyLayer,
        point: GeoPoint,
        format: InfoFormat,
    },

    /// Rendered map image for an area
    GetMap {
        layer: GeologyLayer,
        bbox: BoundingBox,
        width: u32,
        height: u32,
        format: ImageFormat,
    },
}

impl WmsRequest {
    /// Build a validated GetFeatureInfo request
    pub fn feature_info(layer: GeologyLayer, point: GeoPoint, format: InfoFormat) -> Result<Self> {
        point.validate()?;
        Ok(WmsRequest::GetFeatureInfo {
            layer,
            point,
            format,
        })
    }

    /// Build a validated GetMap request
    pub fn map(
        layer: GeologyLayer,
        bbox: BoundingBox,
        width: u32,
        height: u32,
        format: ImageFormat,
    ) -> Result<Self> {
        bbox.validate()?;
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions(format!(
                "width and height must be positive, got {}x{}",
                width, height
            )));
        }
        Ok(WmsRequest::GetMap {
            layer,
            bbox,
            width,
            height,
            format,
        })
    }

    /// WMS `REQUEST` value
    pub fn operation(&self) -> &'static str {
        match self {
            WmsRequest::GetCapabilities => "GetCapabilities",
            WmsRequest::GetFeatureInfo { .. } => "GetFeatureInfo",
            WmsRequest::GetMap { .. } => "GetMap",
        }
    }

    /// Ordered key/value parameters for this request
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("SERVICE", "WMS".to_string()),
            ("VERSION", VERSION.to_string()),
            ("REQUEST", self.operation().to_string()),
        ];

        match self {
            WmsRequest::GetCapabilities => {}
            WmsRequest::GetFeatureInfo {
                layer,
                point,
                format,
            } => {
                params.extend([
                    ("LAYERS", layer.wms_name().to_string()),
                    ("QUERY_LAYERS", layer.wms_name().to_string()),
                    ("STYLES", STYLE.to_string()),
                    ("CRS", CRS.to_string()),
                    ("BBOX", point.feature_box().to_crs84_string()),
                    ("WIDTH", FEATURE_IMAGE_SIZE.to_string()),
                    ("HEIGHT", FEATURE_IMAGE_SIZE.to_string()),
                    ("I", FEATURE_PIXEL.to_string()),
                    ("J", FEATURE_PIXEL.to_string()),
                    ("INFO_FORMAT", format.mime().to_string()),
                    ("RADIUS", "0".to_string()),
                ]);
            }
            WmsRequest::GetMap {
                layer,
                bbox,
                width,
                height,
                format,
            } => {
                params.extend([
                    ("LAYERS", layer.wms_name().to_string()),
                    ("STYLES", STYLE.to_string()),
                    ("CRS", CRS.to_string()),
                    ("BBOX", bbox.to_crs84_string()),
                    ("WIDTH", width.to_string()),
                    ("HEIGHT", height.to_string()),
                    ("FORMAT", format.mime().to_string()),
                ]);
            }
        }

        params
    }

    /// Encoded query string, without the leading `?`
    pub fn query_string(&self) -> String {
        self.params()
            .iter()
            .map(|(key, value)| format!("{}={}", key, encode_value(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Full request URL against `endpoint`
    pub fn url(&self, endpoint: &str) -> String {
        let separator = if endpoint.contains('?') { '&' } else { '?' };
        format!("{}{}{}", endpoint, separator, self.query_string())
    }
}

/// Percent-encode a parameter value
///
/// `,` `/` and `:` are legal in a query component and WMS servers expect
/// them literal in BBOX, CRS and MIME values.
fn encode_value(value: &str) -> String {
    urlencoding::encode(value)
        .replace("%2C", ",")
        .replace("%2F", "/")
        .replace("%3A", ":")
}

/// Build a GetMap URL for a layer and area
///
/// Pure string assembly; the only failures are validation failures.
pub fn build_map_url(
    endpoint: &str,
    layer: GeologyLayer,
    bbox: BoundingBox,
    width: u32,
    height: u32,
    format: ImageFormat,
) -> Result<String> {
    Ok(WmsRequest::map(layer, bbox, width, height, format)?.url(endpoint))
}
