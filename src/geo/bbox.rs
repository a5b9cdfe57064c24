//! Bounding boxes

use crate::error::{Error, Result};
use crate::geo::{check_lat, check_lon};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A latitude/longitude bounding box in WGS84 decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub min_lon: f64,
    pub max_lat: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    /// Create a new bounding box. Argument order follows the tool surface:
    /// south, west, north, east.
    pub fn new(min_lat: f64, min_lon: f64, max_lat: f64, max_lon: f64) -> Self {
        Self {
            min_lat,
            min_lon,
            max_lat,
            max_lon,
        }
    }

    /// Validate ordering and UK bounds
    ///
    /// Ordering is checked first so an inverted box is always reported as
    /// such, whatever its individual values.
    pub fn validate(&self) -> Result<()> {
        if self.min_lat.partial_cmp(&self.max_lat) != Some(Ordering::Less) {
            return Err(Error::InvalidCoordinates(format!(
                "min_lat ({}) must be less than max_lat ({})",
                self.min_lat, self.max_lat
            )));
        }
        if self.min_lon.partial_cmp(&self.max_lon) != Some(Ordering::Less) {
            return Err(Error::InvalidCoordinates(format!(
                "min_lon ({}) must be less than max_lon ({})",
                self.min_lon, self.max_lon
            )));
        }
        check_lat("min_lat", self.min_lat)?;
        check_lon("min_lon", self.min_lon)?;
        check_lat("max_lat", self.max_lat)?;
        check_lon("max_lon", self.max_lon)?;
        Ok(())
    }

    /// Serialize for a CRS:84 `BBOX` parameter: `west,south,east,north`
    pub fn to_crs84_string(&self) -> String {
        format!(
            "{},{},{},{}",
            self.min_lon, self.min_lat, self.max_lon, self.max_lat
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_london_box() {
        assert!(BoundingBox::new(51.45, -0.15, 51.55, -0.05).validate().is_ok());
    }

    #[test]
    fn test_inverted_latitude_rejected() {
        let err = BoundingBox::new(51.55, -0.15, 51.45, -0.05)
            .validate()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidCoordinates(_)));
        assert!(err.to_string().contains("min_lat"));
    }

    #[test]
    fn test_inverted_longitude_rejected() {
        let err = BoundingBox::new(51.45, -0.05, 51.55, -0.15)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("min_lon"));
    }

    #[test]
    fn test_degenerate_box_rejected() {
        assert!(BoundingBox::new(51.5, -0.1, 51.5, 0.0).validate().is_err());
        assert!(BoundingBox::new(51.4, 0.0, 51.5, 0.0).validate().is_err());
    }

    #[test]
    fn test_ordering_reported_even_when_out_of_range() {
        // Both latitudes are out of range, ordering error wins.
        let err = BoundingBox::new(70.0, -0.15, 65.0, -0.05)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("must be less than"));
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let err = BoundingBox::new(40.0, -0.15, 51.55, -0.05)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("min_lat 40"));

        let err = BoundingBox::new(51.45, -0.15, 51.55, 5.0)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("max_lon 5"));
    }

    #[test]
    fn test_nan_rejected() {
        assert!(BoundingBox::new(f64::NAN, -0.15, 51.55, -0.05)
            .validate()
            .is_err());
    }

    #[test]
    fn test_crs84_axis_order() {
        let bbox = BoundingBox::new(51.45, -0.15, 51.55, -0.05);
        assert_eq!(bbox.to_crs84_string(), "-0.15,51.45,-0.05,51.55");
    }
}
