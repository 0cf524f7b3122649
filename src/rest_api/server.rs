//! # HTTP Server
//!
//! Assembles the resource routers into one axum app and serves it.

use std::net::SocketAddr;

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use sea_orm::DbConn;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

use super::mission_routes::mission_routes;
use super::planet_routes::planet_routes;
use super::scientist_routes::scientist_routes;
use super::AppState;

/// HTTP server for the mission-control API
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over an already-connected (and migrated) database.
    pub fn new(config: ServerConfig, db: DbConn) -> Self {
        let router = Self::build_router(&config, db);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &ServerConfig, db: DbConn) -> Router {
        let state = AppState { db };

        // Configure CORS from config
        let cors = if config.cors_origins.is_empty() {
            // If no origins configured, use permissive for development
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .route("/", get(home))
            .merge(scientist_routes())
            .merge(planet_routes())
            .merge(mission_routes())
            .with_state(state)
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .socket_addr()
            .parse()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

        let listener = TcpListener::bind(addr).await?;
        tracing::info!(%addr, "mission-control listening");

        axum::serve(listener, self.router).await
    }
}

/// GET / - liveness: 200 with an empty body.
async fn home() -> StatusCode {
    StatusCode::OK
}
