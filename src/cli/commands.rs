//! CLI command implementations
//!
//! `serve` boots the store, seeds it when a dataset is configured, and runs
//! the HTTP API until Ctrl-C. `seed` performs only the seeding step.

use std::path::Path;
use std::sync::Arc;

use serde_json::json;
use tracing::{info, warn};

use crate::auth::JwtManager;
use crate::http_server::HttpServer;
use crate::observability::{init_tracing, DEFAULT_FILTER};
use crate::service::SalaryService;
use crate::storage::{seed, SalaryRepository, SqliteSalaryRepository};

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::write_response;

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => {
            let mut config = Config::resolve(config.as_deref())?;
            if let Some(port) = port {
                config.server.port = port;
            }
            serve(config)
        }
        Command::Seed { config, dataset } => {
            let config = Config::resolve(config.as_deref())?;
            seed_command(&config, &dataset)
        }
    }
}

/// Open the configured SQLite store, creating the table if needed
pub fn open_repository(config: &Config) -> CliResult<Arc<dyn SalaryRepository>> {
    let repo = SqliteSalaryRepository::open(&config.database_path)?;
    Ok(Arc::new(repo))
}

/// Build the HTTP server from configuration and an opened store
pub fn build_server(config: &Config, repository: Arc<dyn SalaryRepository>) -> HttpServer {
    HttpServer::new(
        config.server.clone(),
        SalaryService::new(repository),
        Arc::new(config.credentials.clone()),
        JwtManager::new(config.jwt_config()),
    )
}

/// Start the HTTP API
pub fn serve(config: Config) -> CliResult<()> {
    init_tracing(config.log_format, DEFAULT_FILTER)?;

    if config.uses_default_secret() {
        warn!("jwt_secret is the built-in placeholder; set it in the config file or via SALARIES_JWT_SECRET");
    }

    let repository = open_repository(&config)?;

    if let Some(dataset) = &config.dataset_path {
        seed::seed_from_file(repository.as_ref(), dataset)?;
    }

    let server = build_server(&config, repository);
    info!(addr = %server.socket_addr(), "starting salaries API");

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Seed the configured store from a dataset file and report the result
pub fn seed_command(config: &Config, dataset: &Path) -> CliResult<()> {
    init_tracing(config.log_format, DEFAULT_FILTER)?;

    let inserted = seed_dataset(config, dataset)?;
    write_response(json!({
        "dataset": dataset.display().to_string(),
        "inserted": inserted,
    }))
}

/// Seed the configured store; returns how many records were inserted
pub fn seed_dataset(config: &Config, dataset: &Path) -> CliResult<usize> {
    let repository = open_repository(config)?;
    let inserted = seed::seed_from_file(repository.as_ref(), dataset)?;
    Ok(inserted)
}
