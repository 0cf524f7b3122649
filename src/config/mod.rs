//! # Server Configuration
//!
//! Host, port, CORS, and database URL. Everything has a default so the
//! server runs with zero configuration against a local SQLite file;
//! environment variables override the defaults, CLI flags override both.

use serde::{Deserialize, Serialize};

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 5555)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins; empty means permissive (development)
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Database connection string (default: local SQLite file)
    #[serde(default = "default_database_url")]
    pub database_url: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5555
}

fn default_database_url() -> String {
    "sqlite://mission_control.db?mode=rwc".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            database_url: default_database_url(),
        }
    }
}

impl ServerConfig {
    /// Build a config from the environment: `HOST`, `PORT`, and
    /// `DATABASE_URL`, each falling back to the default when unset.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(host) = std::env::var("HOST") {
            config.host = host;
        }
        if let Ok(port) = std::env::var("PORT") {
            match port.parse() {
                Ok(port) => config.port = port,
                Err(_) => tracing::warn!(%port, "ignoring unparseable PORT"),
            }
        }
        if let Ok(url) = std::env::var("DATABASE_URL") {
            config.database_url = url;
        }

        config
    }

    /// Create a config with a specific port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
