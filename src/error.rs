//! Error types for bgs-geology

use thiserror::Error;

/// Main error type for bgs-geology operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown layer: {0}")]
    UnknownLayer(String),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("WMS request failed: {0}")]
    UpstreamRequestFailed(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Server error: {0}")]
    Server(String),
}

impl Error {
    /// Stable machine-readable code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Error::UnknownLayer(_) => "UNKNOWN_LAYER",
            Error::InvalidCoordinates(_) => "INVALID_COORDINATES",
            Error::UnsupportedFormat(_) => "UNSUPPORTED_FORMAT",
            Error::InvalidDimensions(_) => "INVALID_DIMENSIONS",
            Error::InvalidArguments(_) => "INVALID_ARGUMENTS",
            Error::UpstreamRequestFailed(_) | Error::Http(_) => "UPSTREAM_REQUEST_FAILED",
            Error::Config(_) => "CONFIG_ERROR",
            _ => "INTERNAL_ERROR",
        }
    }

    /// True for failures caused by the caller's input rather than the service
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::UnknownLayer(_)
                | Error::InvalidCoordinates(_)
                | Error::UnsupportedFormat(_)
                | Error::InvalidDimensions(_)
                | Error::InvalidArguments(_)
        )
    }
}

/// Result type alias for bgs-geology operations
pub type Result<T> = std::result::Result<T, Error>;
