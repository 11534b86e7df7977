// Server module - Provides reusable HTTP server functionality
// Used by main.rs and by the integration tests

use axum::Router;
use axum::http::HeaderValue;
use std::net::{SocketAddr, TcpListener};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api;
use crate::api_docs::ApiDoc;
use crate::infrastructure::AppState;
use crate::infrastructure::config::Config;

/// Build the full application router: REST, SOAP, health and API docs
pub fn build_router(state: AppState, cors_allowed_origins: &[String]) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .merge(api::api_router(state))
        .layer(cors_layer(cors_allowed_origins))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if allowed_origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let mut origins = Vec::new();
    for origin in allowed_origins {
        match origin.parse::<HeaderValue>() {
            Ok(v) => origins.push(v),
            Err(e) => tracing::error!("Failed to parse CORS origin '{}': {}", origin, e),
        }
    }
    cors.allow_origin(origins)
}

/// Find an available port starting from the preferred port on a specific IP
pub fn find_available_port_on_ip(preferred_port: u16, ip: &str) -> Option<u16> {
    // Try preferred port first
    if TcpListener::bind((ip, preferred_port)).is_ok() {
        return Some(preferred_port);
    }

    // Scan next 100 ports
    ((preferred_port.saturating_add(1))..(preferred_port.saturating_add(100)))
        .find(|&port| TcpListener::bind((ip, port)).is_ok())
}

/// Bind the configured address and serve until the process exits
pub async fn serve(config: &Config, state: AppState) -> Result<(), String> {
    let port = find_available_port_on_ip(config.port, &config.host)
        .ok_or_else(|| format!("Failed to find available port on {}", config.host))?;

    if port != config.port {
        tracing::warn!(
            "Preferred port {} was not available, using port {} instead",
            config.port,
            port
        );
    }

    let addr: SocketAddr = format!("{}:{}", config.host, port)
        .parse()
        .map_err(|e| format!("Invalid listen address {}:{}: {}", config.host, port, e))?;

    let app = build_router(state, &config.cors_allowed_origins);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind to {}: {}", addr, e))?;

    tracing::info!("Item catalog listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| format!("HTTP server error: {}", e))
}
