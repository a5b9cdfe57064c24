//! Query points

use crate::constants::geo::FEATURE_BUFFER_DEGREES;
use crate::error::Result;
use crate::geo::{check_lat, check_lon, BoundingBox};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A geographic point (latitude, longitude) in WGS84 decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    /// Create a new point
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Validate that the point lies within the UK query region
    ///
    /// Latitude: 49 to 61
    /// Longitude: -8 to 2
    pub fn validate(&self) -> Result<()> {
        check_lat("Latitude", self.lat)?;
        check_lon("Longitude", self.lon)?;
        Ok(())
    }

    /// Build a validated point
    pub fn validated(lat: f64, lon: f64) -> Result<Self> {
        let point = Self::new(lat, lon);
        point.validate()?;
        Ok(point)
    }

    /// Square box centred on this point, `buffer` degrees to each side
    ///
    /// Not validated: a point on the UK edge yields a box that pokes past it,
    /// which the WMS accepts.
    pub fn buffered(&self, buffer: f64) -> BoundingBox {
        BoundingBox {
            min_lat: self.lat - buffer,
            min_lon: self.lon - buffer,
            max_lat: self.lat + buffer,
            max_lon: self.lon + buffer,
        }
    }

    /// The box used for GetFeatureInfo around this point
    pub fn feature_box(&self) -> BoundingBox {
        self.buffered(FEATURE_BUFFER_DEGREES)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lon)
    }
}
