//! CLI command implementations
//!
//! Commands build their config by layering CLI flags over environment
//! variables over defaults, then run on a fresh tokio runtime.

use sea_orm::{Database, DbConn};
use sea_orm_migration::MigratorTrait;

use crate::config::ServerConfig;
use crate::migration::Migrator;
use crate::rest_api::HttpServer;

use super::args::{Cli, Command};
use super::errors::CliResult;

/// Dispatch a parsed CLI invocation.
pub fn run_command(cli: Cli) -> CliResult<()> {
    let runtime = tokio::runtime::Runtime::new()?;

    match cli.command {
        Command::Serve {
            host,
            port,
            database_url,
        } => {
            let mut config = ServerConfig::from_env();
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(url) = database_url {
                config.database_url = url;
            }

            runtime.block_on(serve(config))
        }
        Command::Migrate { database_url } => {
            let mut config = ServerConfig::from_env();
            if let Some(url) = database_url {
                config.database_url = url;
            }

            runtime.block_on(migrate(config))
        }
    }
}

/// Connect to the database and bring the schema up to date.
pub async fn connect(database_url: &str) -> Result<DbConn, sea_orm::DbErr> {
    tracing::info!(url = database_url, "connecting to database");
    let db = Database::connect(database_url).await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}

async fn serve(config: ServerConfig) -> CliResult<()> {
    let db = connect(&config.database_url).await?;
    let server = HttpServer::new(config, db);
    server.start().await?;
    Ok(())
}

async fn migrate(config: ServerConfig) -> CliResult<()> {
    connect(&config.database_url).await?;
    tracing::info!("migrations applied");
    Ok(())
}
