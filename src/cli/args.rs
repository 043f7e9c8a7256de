//! CLI argument definitions using clap
//!
//! Commands:
//! - salaries serve [--config <path>] [--port <port>]
//! - salaries seed [--config <path>] --dataset <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Salary records API with aggregate statistics
#[derive(Parser, Debug)]
#[command(name = "salaries")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP API
    Serve {
        /// Path to JSON configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Load a JSON dataset into an empty salaries table and exit
    Seed {
        /// Path to JSON configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        /// JSON array of salary records
        #[arg(long)]
        dataset: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
