//! HTTP routes
//!
//! `POST {mcp_path}` carries MCP JSON-RPC; `/api/*` mirrors the tools as
//! plain REST endpoints.

use crate::config::defaults::DEFAULT_MCP_PATH;
use crate::error::Error;
use crate::geo::BoundingBox;
use crate::geology::LayerCatalog;
use crate::server::state::AppState;

use axum::{
    extract::{Query, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info_span, warn, Instrument};
use uuid::Uuid;

/// Header carrying the per-request correlation id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Create the router
pub fn create_router(state: Arc<AppState>) -> Router {
    let mcp_path = if state.config.server.mcp_path.starts_with('/') {
        state.config.server.mcp_path.clone()
    } else {
        warn!(
            "Ignoring MCP path '{}', using {}",
            state.config.server.mcp_path, DEFAULT_MCP_PATH
        );
        DEFAULT_MCP_PATH.to_string()
    };

    Router::new()
        .route(&mcp_path, post(mcp_handler))
        .route("/api/status", get(status_handler))
        .route("/api/layers", get(layers_handler))
        .route("/api/info", get(info_handler))
        .route("/api/capabilities", get(capabilities_handler))
        .route("/api/location", get(location_handler))
        .route("/api/map-url", get(map_url_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.code.as_str() {
            "UPSTREAM_REQUEST_FAILED" => StatusCode::BAD_GATEWAY,
            "INTERNAL_ERROR" | "CONFIG_ERROR" => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        };
        (status, Json(self)).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError {
            code: err.code().to_string(),
            error: err.to_string(),
        }
    }
}

/// MCP JSON-RPC endpoint
///
/// POST {mcp_path}
async fn mcp_handler(State(state): State<Arc<AppState>>, body: String) -> Response {
    let request_id = Uuid::new_v4();
    let span = info_span!("mcp", %request_id);

    let mut response = match state.mcp.handle_message(&body).instrument(span).await {
        Some(reply) => Json(reply).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    };

    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

/// Status response
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Server is running
    pub running: bool,
    /// Server version
    pub version: String,
    /// Upstream WMS endpoint
    pub endpoint: String,
    /// Server start time
    pub started_at: DateTime<Utc>,
    /// Uptime in seconds
    pub uptime_secs: u64,
}

/// Server status endpoint
///
/// GET /api/status
async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        running: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoint: state.tools().client().endpoint().to_string(),
        started_at: state.started_at,
        uptime_secs: state.uptime_secs(),
    })
}

/// List geology layers
///
/// GET /api/layers
async fn layers_handler(State(state): State<Arc<AppState>>) -> Json<LayerCatalog> {
    Json(state.tools().get_available_geology_layers())
}

/// Service description
///
/// GET /api/info
async fn info_handler(State(state): State<Arc<AppState>>) -> String {
    state.tools().get_service_info()
}

/// Raw capabilities document
///
/// GET /api/capabilities
async fn capabilities_handler(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let body = state.tools().client().get_capabilities().await?;
    Ok(([(header::CONTENT_TYPE, "text/xml")], body))
}

/// Point query parameters
#[derive(Debug, Deserialize)]
pub struct LocationQuery {
    pub lat: f64,
    pub lon: f64,
    pub geology_type: Option<String>,
    pub format_type: Option<String>,
}

/// Geology at a point
///
/// GET /api/location?lat=..&lon=..
async fn location_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LocationQuery>,
) -> Result<String, ApiError> {
    let defaults = &state.config.defaults;
    let text = state
        .tools()
        .query_location(
            query.lat,
            query.lon,
            query.geology_type.as_deref().unwrap_or(&defaults.geology_type),
            query.format_type.as_deref().unwrap_or(&defaults.info_format),
        )
        .await?;
    Ok(text)
}

/// Map URL parameters
#[derive(Debug, Deserialize)]
pub struct MapUrlQuery {
    pub layer: String,
    pub min_lat: f64,
    pub min_lon: f64,
    pub max_lat: f64,
    pub max_lon: f64,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub format_type: Option<String>,
}

/// Build a GetMap URL
///
/// GET /api/map-url?layer=..&min_lat=..
async fn map_url_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MapUrlQuery>,
) -> Result<String, ApiError> {
    let defaults = &state.config.defaults;
    let url = state.tools().map_url(
        &query.layer,
        BoundingBox::new(query.min_lat, query.min_lon, query.max_lat, query.max_lon),
        query.width.unwrap_or(defaults.width),
        query.height.unwrap_or(defaults.height),
        query.format_type.as_deref().unwrap_or(&defaults.image_format),
    )?;
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::test_support::MockWms;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn create_test_state(endpoint: &str) -> Arc<AppState> {
        let mut config = Config::default();
        config.wms.endpoint = endpoint.to_string();
        Arc::new(AppState::new(config).unwrap())
    }

    async fn get_request(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, body.to_vec())
    }

    async fn post_mcp(app: Router, body: serde_json::Value) -> Response<Body> {
        app.oneshot(
            Request::builder()
                .method("POST")
                .uri("/mcp")
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_status_endpoint() {
        let app = create_router(create_test_state("https://example.org/wms"));
        let (status, body) = get_request(app, "/api/status").await;

        assert_eq!(status, StatusCode::OK);
        let parsed: StatusResponse = serde_json::from_slice(&body).unwrap();
        assert!(parsed.running);
        assert_eq!(parsed.endpoint, "https://example.org/wms");
    }

    #[tokio::test]
    async fn test_layers_endpoint() {
        let app = create_router(create_test_state("https://example.org/wms"));
        let (status, body) = get_request(app, "/api/layers").await;

        assert_eq!(status, StatusCode::OK);
        let layers: LayerCatalog = serde_json::from_slice(&body).unwrap();
        assert_eq!(layers.len(), 5);
        assert_eq!(layers["artificial_ground"].layer_name, "BGS.50k.Artificial.ground");
        assert_eq!(layers.get_index(0).map(|(k, _)| k.as_str()), Some("bedrock"));
    }

    #[tokio::test]
    async fn test_info_endpoint() {
        let app = create_router(create_test_state("https://example.org/wms"));
        let (status, body) = get_request(app, "/api/info").await;

        assert_eq!(status, StatusCode::OK);
        assert!(String::from_utf8(body).unwrap().contains("BGS Geology 50K"));
    }

    #[tokio::test]
    async fn test_map_url_endpoint() {
        let app = create_router(create_test_state("https://example.org/wms"));
        let (status, body) = get_request(
            app,
            "/api/map-url?layer=bedrock&min_lat=51.45&min_lon=-0.15&max_lat=51.55&max_lon=-0.05&format_type=image/jpeg",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let url = String::from_utf8(body).unwrap();
        assert!(url.contains("BBOX=-0.15,51.45,-0.05,51.55"));
        assert!(url.contains("WIDTH=450"));
        assert!(url.contains("FORMAT=image/jpeg"));
    }

    #[tokio::test]
    async fn test_map_url_inverted_box() {
        let app = create_router(create_test_state("https://example.org/wms"));
        let (status, body) = get_request(
            app,
            "/api/map-url?layer=bedrock&min_lat=51.55&min_lon=-0.15&max_lat=51.45&max_lon=-0.05",
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let err: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(err.code, "INVALID_COORDINATES");
    }

    #[tokio::test]
    async fn test_location_outside_uk() {
        let mock = MockWms::start(StatusCode::OK, "unused").await;
        let app = create_router(create_test_state(&mock.endpoint));
        let (status, body) = get_request(app, "/api/location?lat=10&lon=10").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let err: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(err.code, "INVALID_COORDINATES");
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn test_location_success() {
        let mock = MockWms::start(StatusCode::OK, "THANET FORMATION").await;
        let app = create_router(create_test_state(&mock.endpoint));
        let (status, body) =
            get_request(app, "/api/location?lat=51.3&lon=1.3&geology_type=bedrock").await;

        assert_eq!(status, StatusCode::OK);
        let text = String::from_utf8(body).unwrap();
        assert!(text.starts_with("Geological data at 51.3000, 1.3000"));
        assert!(text.contains("THANET FORMATION"));
    }

    #[tokio::test]
    async fn test_capabilities_upstream_failure() {
        let app = create_router(create_test_state("http://127.0.0.1:1/wms"));
        let (status, body) = get_request(app, "/api/capabilities").await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        let err: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(err.code, "UPSTREAM_REQUEST_FAILED");
    }

    #[tokio::test]
    async fn test_mcp_initialize() {
        let app = create_router(create_test_state("https://example.org/wms"));
        let response = post_mcp(
            app,
            serde_json::json!({"jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {}}),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["result"]["serverInfo"]["name"], "bgs-geology");
    }

    #[tokio::test]
    async fn test_mcp_notification_accepted() {
        let app = create_router(create_test_state("https://example.org/wms"));
        let response = post_mcp(
            app,
            serde_json::json!({"jsonrpc": "2.0", "method": "notifications/initialized"}),
        )
        .await;

        assert_eq!(response.status(), StatusCode::ACCEPTED);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_mcp_tool_call() {
        let app = create_router(create_test_state("https://example.org/wms"));
        let response = post_mcp(
            app,
            serde_json::json!({
                "jsonrpc": "2.0",
                "id": 2,
                "method": "tools/call",
                "params": { "name": "get_available_geology_layers", "arguments": {} }
            }),
        )
        .await;

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        let text = value["result"]["content"][0]["text"].as_str().unwrap();
        assert!(text.contains("BGS.50k.Linear.features"));
    }

    #[tokio::test]
    async fn test_custom_mcp_path() {
        let mut config = Config::default();
        config.server.mcp_path = "/rpc".to_string();
        let app = create_router(Arc::new(AppState::new(config).unwrap()));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/rpc")
                    .body(Body::from(r#"{"jsonrpc":"2.0","id":1,"method":"ping"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
