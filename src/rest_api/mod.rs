//! # REST API Module
//!
//! HTTP endpoints for the scientist/planet/mission resources, plus the
//! server assembly (router, CORS, request tracing).

pub mod errors;
pub mod mission_routes;
pub mod planet_routes;
pub mod scientist_routes;
pub mod server;
pub mod views;

pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;

use sea_orm::DbConn;

/// Shared state for all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: DbConn,
}
