//! HTTP server
//!
//! Axum router exposing the font APIs and serving the compiled front-end
//! bundle. Both font endpoints always answer 200; detection failures fold
//! into the fallback list instead of surfacing as errors.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::fonts::defaults::{defaults_for, OsDisplay};
use crate::fonts::{detect_system_fonts, list_folder_fonts, DetectError};
use crate::types::{FolderFont, FontCategory, FontSource, Platform, ServerConfig, SystemFont};

/// Server errors
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("server terminated: {0}")]
    Serve(std::io::Error),
}

/// Shared server state
pub struct ServerState {
    config: ServerConfig,
    start_time: Instant,
    request_count: RwLock<u64>,
}

impl ServerState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            start_time: Instant::now(),
            request_count: RwLock::new(0),
        }
    }

    async fn count_request(&self) {
        let mut count = self.request_count.write().await;
        *count += 1;
    }

    async fn request_count(&self) -> u64 {
        *self.request_count.read().await
    }
}

/// `/api/system-fonts` response body
#[derive(Debug, Serialize)]
pub struct SystemFontsResponse {
    pub fonts: Vec<SystemFont>,
    pub os: Platform,
    pub config: OsDisplay,
}

/// `/health` response body
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub total_requests: u64,
}

// =============================================================================
// Route handlers
// =============================================================================

/// `GET /api/fonts`: fonts shipped in the local folder.
async fn handle_folder_fonts(State(state): State<Arc<ServerState>>) -> Json<Vec<FolderFont>> {
    state.count_request().await;

    let fonts = list_folder_fonts(&state.config.fonts_dir);
    info!(count = fonts.len(), "listed folder fonts");

    Json(fonts)
}

/// `GET /api/system-fonts`: fonts installed on the host OS.
async fn handle_system_fonts(State(state): State<Arc<ServerState>>) -> Json<SystemFontsResponse> {
    state.count_request().await;

    let platform = Platform::current();
    let detected = detect_system_fonts(platform).await;
    Json(assemble_system_fonts(detected, platform))
}

/// Wrap detection output with OS metadata, substituting the fallback list
/// when detection failed or found nothing.
fn assemble_system_fonts(
    detected: Result<Vec<SystemFont>, DetectError>,
    platform: Platform,
) -> SystemFontsResponse {
    let fonts = match detected {
        Ok(fonts) if !fonts.is_empty() => {
            info!(count = fonts.len(), ?platform, "detected system fonts");
            fonts
        }
        Ok(_) => {
            warn!(?platform, "no system fonts detected, serving fallback list");
            fallback_fonts(platform)
        }
        Err(err) => {
            error!(%err, ?platform, "system font detection failed, serving fallback list");
            fallback_fonts(platform)
        }
    };

    SystemFontsResponse {
        fonts,
        os: platform,
        config: defaults_for(platform).display,
    }
}

/// Fixed substitute list used whenever live detection yields nothing.
fn fallback_fonts(platform: Platform) -> Vec<SystemFont> {
    defaults_for(platform)
        .fallback_fonts
        .iter()
        .map(|name| SystemFont {
            name: (*name).to_string(),
            file: (*name).to_string(),
            path: (*name).to_string(),
            source: FontSource::System,
            os: platform,
            category: FontCategory::Unknown,
        })
        .collect()
}

/// `GET /health`
async fn handle_health(State(state): State<Arc<ServerState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        total_requests: state.request_count().await,
    })
}

// =============================================================================
// Router and startup
// =============================================================================

/// Build the router: JSON APIs, font file serving, SPA bundle with fallback
/// to `index.html`, permissive CORS, request tracing.
pub fn build_router(state: Arc<ServerState>) -> Router {
    let index = state.config.static_dir.join("index.html");
    let bundle = ServeDir::new(&state.config.static_dir).fallback(ServeFile::new(index));

    Router::new()
        .route("/api/fonts", get(handle_folder_fonts))
        .route("/api/system-fonts", get(handle_system_fonts))
        .route("/health", get(handle_health))
        .nest_service("/fonts", ServeDir::new(&state.config.fonts_dir))
        .fallback_service(bundle)
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn start_server(config: ServerConfig) -> Result<(), ServerError> {
    let addr = config.bind_addr();
    let state = Arc::new(ServerState::new(config));
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;

    info!("listening on http://{addr}");
    info!("folder fonts API: http://{addr}/api/fonts");
    info!("system fonts API: http://{addr}/api/system-fonts");

    axum::serve(listener, router).await.map_err(ServerError::Serve)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use std::fs::File;
    use std::path::Path;
    use tempfile::tempdir;
    use tower::ServiceExt;

    fn test_router(fonts_dir: &Path) -> Router {
        let config = ServerConfig {
            fonts_dir: fonts_dir.to_path_buf(),
            ..ServerConfig::default()
        };
        build_router(Arc::new(ServerState::new(config)))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        serde_json::from_slice(&bytes).expect("Failed to parse body")
    }

    #[tokio::test]
    async fn test_folder_fonts_endpoint_lists_descriptors() {
        let dir = tempdir().expect("Failed to create temp dir");
        File::create(dir.path().join("OpenSansBold.woff2")).expect("Failed to create file");

        let response = test_router(dir.path())
            .oneshot(
                Request::builder()
                    .uri("/api/fonts")
                    .body(Body::empty())
                    .expect("Failed to build request"),
            )
            .await
            .expect("Request failed");

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let fonts = json.as_array().expect("expected a JSON array");
        assert_eq!(fonts.len(), 1);
        assert_eq!(fonts[0]["name"], "Open Sans Bold");
        assert_eq!(fonts[0]["path"], "/fonts/OpenSansBold.woff2");
        assert_eq!(fonts[0]["type"], "folder");
    }

    #[tokio::test]
    async fn test_folder_fonts_endpoint_empty_for_missing_dir() {
        let response = test_router(Path::new("/no/such/fonts/dir"))
            .oneshot(
                Request::builder()
                    .uri("/api/fonts")
                    .body(Body::empty())
                    .expect("Failed to build request"),
            )
            .await
            .expect("Request failed");

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json.as_array().map(Vec::len), Some(0));
    }

    #[tokio::test]
    async fn test_system_fonts_endpoint_shape() {
        let dir = tempdir().expect("Failed to create temp dir");

        let response = test_router(dir.path())
            .oneshot(
                Request::builder()
                    .uri("/api/system-fonts")
                    .body(Body::empty())
                    .expect("Failed to build request"),
            )
            .await
            .expect("Request failed");

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;

        // Detected or fallback, the response carries a non-empty font list
        // plus OS metadata.
        let fonts = json["fonts"].as_array().expect("expected fonts array");
        assert!(!fonts.is_empty());
        assert!(json["os"].is_string());
        assert!(json["config"]["name"].is_string());
        assert!(json["config"]["icon"].is_string());

        let categories = [
            "serif",
            "sansSerif",
            "monospace",
            "display",
            "system",
            "unknown",
        ];
        for font in fonts {
            assert_eq!(font["type"], "system");
            assert!(!font["name"].as_str().expect("name").is_empty());
            let category = font["category"].as_str().expect("category");
            assert!(categories.contains(&category), "bad category: {category}");
        }
    }

    #[tokio::test]
    async fn test_post_on_api_paths_is_method_not_allowed() {
        for path in ["/api/fonts", "/api/system-fonts"] {
            let dir = tempdir().expect("Failed to create temp dir");
            let response = test_router(dir.path())
                .oneshot(
                    Request::builder()
                        .method(Method::POST)
                        .uri(path)
                        .body(Body::empty())
                        .expect("Failed to build request"),
                )
                .await
                .expect("Request failed");

            assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        }
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let dir = tempdir().expect("Failed to create temp dir");

        let response = test_router(dir.path())
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .expect("Failed to build request"),
            )
            .await
            .expect("Request failed");

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let health: HealthResponse =
            serde_json::from_slice(&bytes).expect("Failed to parse health body");
        assert_eq!(health.status, "healthy");
        assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_empty_detection_assembles_fallback_response() {
        let response = assemble_system_fonts(Ok(Vec::new()), Platform::Linux);
        assert_eq!(response.fonts.len(), 15);
        assert_eq!(response.os, Platform::Linux);
        assert_eq!(response.config.name, "Linux");
        assert!(response
            .fonts
            .iter()
            .all(|f| f.category == FontCategory::Unknown));
    }

    #[test]
    fn test_failed_detection_assembles_fallback_response() {
        let err = DetectError::CommandFailed {
            command: "fc-list : family".to_string(),
            code: 1,
        };
        let response = assemble_system_fonts(Err(err), Platform::Linux);
        assert_eq!(response.fonts.len(), 15);
        assert!(response
            .fonts
            .iter()
            .all(|f| f.category == FontCategory::Unknown && f.os == Platform::Linux));
    }

    #[test]
    fn test_detected_fonts_pass_through_untouched() {
        let detected = vec![SystemFont {
            name: "Menlo".to_string(),
            file: "Menlo".to_string(),
            path: "Menlo".to_string(),
            source: FontSource::System,
            os: Platform::MacOs,
            category: FontCategory::Unknown,
        }];
        let response = assemble_system_fonts(Ok(detected), Platform::MacOs);
        assert_eq!(response.fonts.len(), 1);
        assert_eq!(response.fonts[0].name, "Menlo");
        assert_eq!(response.config.name, "macOS");
    }

    #[test]
    fn test_fallback_list_is_tagged_unknown() {
        let fonts = fallback_fonts(Platform::Linux);
        assert_eq!(fonts.len(), 15);
        for font in &fonts {
            assert_eq!(font.category, FontCategory::Unknown);
            assert_eq!(font.os, Platform::Linux);
            assert_eq!(font.source, FontSource::System);
            assert_eq!(font.name, font.file);
            assert_eq!(font.file, font.path);
        }
    }
}
