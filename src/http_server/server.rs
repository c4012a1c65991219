//! # HTTP Server
//!
//! Combines the route groups into one Axum application and serves it.

use std::net::SocketAddr;

use axum::extract::Request;
use axum::http::{header, StatusCode};
use axum::middleware::map_response;
use axum::response::{IntoResponse, Response};
use axum::{Router, ServiceExt};
use tokio::net::TcpListener;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;

use crate::db::Database;

use super::config::HttpServerConfig;
use super::errors::ApiError;
use super::routes::{endpoints, mount};

/// State shared by every handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Database,
}

/// Build the router with all endpoints
pub fn build_router(state: AppState) -> Router {
    mount(endpoints())
        .fallback(route_not_found)
        .layer(map_response(method_not_allowed_as_json))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// The full application: the router behind trailing-slash normalization.
///
/// Normalization has to wrap the router rather than sit inside it, since
/// it must rewrite the path before routing happens.
pub fn app(db: Database) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(AppState { db }))
}

async fn route_not_found() -> ApiError {
    ApiError::NotFound("Route not found")
}

/// Axum answers a known path with the wrong method with an empty 405.
async fn method_not_allowed_as_json(response: Response) -> Response {
    if response.status() != StatusCode::METHOD_NOT_ALLOWED {
        return response;
    }

    let allow = response.headers().get(header::ALLOW).cloned();
    let mut json = ApiError::MethodNotAllowed.into_response();
    if let Some(allow) = allow {
        json.headers_mut().insert(header::ALLOW, allow);
    }
    json
}

/// HTTP server bound to a configuration and a store
pub struct HttpServer {
    config: HttpServerConfig,
    app: NormalizePath<Router>,
}

impl HttpServer {
    pub fn new(config: HttpServerConfig, db: Database) -> Self {
        Self {
            config,
            app: app(db),
        }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Serve until Ctrl-C.
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid socket address '{}': {}", self.config.socket_addr(), e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        tracing::info!(%addr, "starblog listening");

        axum::serve(listener, ServiceExt::<Request>::into_make_service(self.app))
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_server_with_custom_port() {
        let db = Database::in_memory().await.unwrap();
        let server = HttpServer::new(HttpServerConfig::with_port(8080), db);
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[tokio::test]
    async fn test_router_builds() {
        let db = Database::in_memory().await.unwrap();
        let _router = build_router(AppState { db });
    }

    #[tokio::test]
    async fn test_method_not_allowed_keeps_allow_header() {
        let response = (StatusCode::METHOD_NOT_ALLOWED, [(header::ALLOW, "POST,DELETE")])
            .into_response();

        let mapped = method_not_allowed_as_json(response).await;
        assert_eq!(mapped.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(mapped.headers()[header::ALLOW], "POST,DELETE");
        assert_eq!(mapped.headers()[header::CONTENT_TYPE], "application/json");
    }

    #[tokio::test]
    async fn test_other_responses_pass_through() {
        let mapped = method_not_allowed_as_json(StatusCode::NO_CONTENT.into_response()).await;
        assert_eq!(mapped.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_invalid_host_is_reported() {
        let db = Database::in_memory().await.unwrap();
        let config = HttpServerConfig {
            host: "not a host".to_string(),
            ..HttpServerConfig::with_port(0)
        };

        let err = HttpServer::new(config, db).start().await.unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
    }
}
