//! HTTP client for the BGS geology WMS
//!
//! One shared `reqwest::Client` with a per-request timeout. Failures of any
//! kind (connect, timeout, non-2xx) surface as `UpstreamRequestFailed` so
//! callers can report them as text. No retries.

use crate::config::WmsConfig;
use crate::error::{Error, Result};
use crate::geo::GeoPoint;
use crate::geology::GeologyLayer;
use crate::wms::{InfoFormat, WmsRequest};
use std::time::Duration;
use tracing::{debug, warn};

/// WMS endpoint client
#[derive(Debug, Clone)]
pub struct WmsClient {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl WmsClient {
    /// Create a client for `endpoint`
    pub fn new(endpoint: impl Into<String>, timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            timeout,
        })
    }

    /// Create a client from the `[wms]` config section
    pub fn from_config(config: &WmsConfig) -> Result<Self> {
        Self::new(&config.endpoint, config.timeout(), &config.user_agent)
    }

    /// Configured endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Full URL for a request against this endpoint
    pub fn url_for(&self, request: &WmsRequest) -> String {
        request.url(&self.endpoint)
    }

    /// Issue a request and return the response body as text
    pub async fn fetch(&self, request: &WmsRequest) -> Result<String> {
        let url = self.url_for(request);
        debug!("WMS {} -> {}", request.operation(), url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!("WMS {} failed: {}", request.operation(), e);
            self.describe(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("WMS {} returned status {}", request.operation(), status);
            return Err(Error::UpstreamRequestFailed(format!(
                "WMS returned status: {}",
                status
            )));
        }

        response.text().await.map_err(|e| self.describe(e))
    }

    /// GetFeatureInfo at a point
    pub async fn get_feature_info(
        &self,
        layer: GeologyLayer,
        point: GeoPoint,
        format: InfoFormat,
    ) -> Result<String> {
        let request = WmsRequest::feature_info(layer, point, format)?;
        self.fetch(&request).await
    }

    /// GetCapabilities document
    pub async fn get_capabilities(&self) -> Result<String> {
        self.fetch(&WmsRequest::GetCapabilities).await
    }

    fn describe(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::UpstreamRequestFailed(format!(
                "request timed out after {}s",
                self.timeout.as_secs_f64()
            ))
        } else {
            Error::UpstreamRequestFailed(format!("request to {} failed: {}", self.endpoint, err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockWms;
    use axum::http::StatusCode;

    fn client_for(endpoint: &str) -> WmsClient {
        WmsClient::new(endpoint, Duration::from_secs(5), "bgs-geology-test").unwrap()
    }

    #[test]
    fn test_from_config() {
        let client = WmsClient::from_config(&WmsConfig::default()).unwrap();
        assert!(client.endpoint().contains("map.bgs.ac.uk"));
    }

    #[tokio::test]
    async fn test_feature_info_hits_endpoint() {
        let mock = MockWms::start(StatusCode::OK, "<p>London Clay Formation</p>").await;
        let client = client_for(&mock.endpoint);

        let body = client
            .get_feature_info(
                GeologyLayer::Bedrock,
                GeoPoint::new(51.5074, -0.1278),
                InfoFormat::Html,
            )
            .await
            .unwrap();

        assert_eq!(body, "<p>London Clay Formation</p>");

        let requests = mock.requests();
        assert_eq!(requests.len(), 1);
        let query = &requests[0];
        assert!(query.contains("REQUEST=GetFeatureInfo"));
        assert!(query.contains("QUERY_LAYERS=BGS.50k.Bedrock"));
        assert!(query.contains("INFO_FORMAT=text/html"));
        assert!(query.contains("CRS=CRS:84"));
    }

    #[tokio::test]
    async fn test_capabilities() {
        let mock = MockWms::start(StatusCode::OK, "<WMS_Capabilities/>").await;
        let client = client_for(&mock.endpoint);

        let body = client.get_capabilities().await.unwrap();
        assert_eq!(body, "<WMS_Capabilities/>");
        assert_eq!(
            mock.requests()[0],
            "SERVICE=WMS&VERSION=1.3.0&REQUEST=GetCapabilities"
        );
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let mock = MockWms::start(StatusCode::INTERNAL_SERVER_ERROR, "boom").await;
        let client = client_for(&mock.endpoint);

        let err = client.get_capabilities().await.unwrap_err();
        assert!(matches!(err, Error::UpstreamRequestFailed(_)));
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_timeout_reported() {
        let mock =
            MockWms::start_with_delay(StatusCode::OK, "late", Duration::from_secs(2)).await;
        let client =
            WmsClient::new(&mock.endpoint, Duration::from_millis(100), "bgs-geology-test")
                .unwrap();

        let err = client.get_capabilities().await.unwrap_err();
        assert!(matches!(err, Error::UpstreamRequestFailed(_)));
        assert!(err.to_string().contains("timed out"));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint() {
        let client = client_for("http://127.0.0.1:1/wms");

        let err = client.get_capabilities().await.unwrap_err();
        assert!(matches!(err, Error::UpstreamRequestFailed(_)));
    }

    #[tokio::test]
    async fn test_invalid_point_never_sent() {
        let mock = MockWms::start(StatusCode::OK, "unused").await;
        let client = client_for(&mock.endpoint);

        let err = client
            .get_feature_info(
                GeologyLayer::Bedrock,
                GeoPoint::new(10.0, 10.0),
                InfoFormat::Html,
            )
            .await
            .unwrap_err();

        assert!(matches!(err, Error::InvalidCoordinates(_)));
        assert!(mock.requests().is_empty());
    }
}
