//! Geographic value types
//!
//! Points and bounding boxes in WGS84 decimal degrees, validated against the
//! region the BGS 1:50,000 survey covers.

pub mod bbox;
pub mod point;

pub use bbox::BoundingBox;
pub use point::GeoPoint;

use crate::constants::geo::{UK_MAX_LAT, UK_MAX_LON, UK_MIN_LAT, UK_MIN_LON};
use crate::error::{Error, Result};

/// Check a latitude against the UK bounds
///
/// `label` names the value in the error message (e.g. "Latitude", "min_lat").
pub(crate) fn check_lat(label: &str, lat: f64) -> Result<()> {
    if !lat.is_finite() {
        return Err(Error::InvalidCoordinates(format!(
            "{} must be a finite number, got {}",
            label, lat
        )));
    }
    if !(UK_MIN_LAT..=UK_MAX_LAT).contains(&lat) {
        return Err(Error::InvalidCoordinates(format!(
            "{} {} is outside UK bounds [{}, {}]",
            label, lat, UK_MIN_LAT, UK_MAX_LAT
        )));
    }
    Ok(())
}

/// Check a longitude against the UK bounds
pub(crate) fn check_lon(label: &str, lon: f64) -> Result<()> {
    if !lon.is_finite() {
        return Err(Error::InvalidCoordinates(format!(
            "{} must be a finite number, got {}",
            label, lon
        )));
    }
    if !(UK_MIN_LON..=UK_MAX_LON).contains(&lon) {
        return Err(Error::InvalidCoordinates(format!(
            "{} {} is outside UK bounds [{}, {}]",
            label, lon, UK_MIN_LON, UK_MAX_LON
        )));
    }
    Ok(())
}
