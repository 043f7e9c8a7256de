//! CLI module for the salaries service
//!
//! Provides command-line interface for:
//! - serve: Open the store, optionally seed it, and run the HTTP API
//! - seed: One-shot dataset load into an empty store

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{build_server, open_repository, run, run_command, seed_dataset, serve};
pub use config::{Config, JWT_SECRET_ENV};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::write_response;
