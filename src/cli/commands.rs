//! CLI command implementations
//!
//! Each command owns its tokio runtime; nothing async leaks into `main`.

use std::path::Path;

use crate::db::{Database, SeedDocument, SeedReport};
use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::init_logging;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Main CLI entry point
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    init_logging(cli.log_format);
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { server } => serve(server.into()),
        Command::Seed { database, file } => {
            let report = seed(&database.database_url, file.as_deref())?;
            println!("{}", serde_json::to_string(&report)?);
            Ok(())
        }
    }
}

/// Open the store and serve HTTP until interrupted.
pub fn serve(config: HttpServerConfig) -> CliResult<()> {
    config.validate().map_err(CliError::config_error)?;

    let rt = runtime()?;
    rt.block_on(async {
        let db = open_database(&config.database_url).await?;
        let server = HttpServer::new(config, db.clone());

        let result = server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)));

        db.close().await;
        result
    })
}

/// Load a seed document (or the bundled one) into the store.
pub fn seed(database_url: &str, file: Option<&Path>) -> CliResult<SeedReport> {
    HttpServerConfig {
        database_url: database_url.to_string(),
        ..Default::default()
    }
    .validate()
    .map_err(CliError::config_error)?;

    let document = match file {
        Some(path) => SeedDocument::load(path)?,
        None => SeedDocument::builtin()?,
    };

    let rt = runtime()?;
    rt.block_on(async {
        let db = open_database(database_url).await?;
        let report = document.apply(&db).await;
        db.close().await;
        Ok::<_, CliError>(report?)
    })
}

fn runtime() -> CliResult<tokio::runtime::Runtime> {
    tokio::runtime::Runtime::new()
        .map_err(|e| CliError::io_error(format!("Failed to create tokio runtime: {}", e)))
}

async fn open_database(url: &str) -> CliResult<Database> {
    Database::connect(url).await.map_err(|e| {
        CliError::database_error(format!("Failed to open database '{}': {}", url, e))
    })
}
