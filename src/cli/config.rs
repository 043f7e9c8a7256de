//! Service configuration
//!
//! Loaded from an optional JSON file. Every field has a default so an empty
//! object (or no file at all) yields a runnable local setup.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::{DEFAULT_SECRET, DEFAULT_TOKEN_TTL_SECS};
use crate::auth::{JwtConfig, StaticCredentials};
use crate::http_server::HttpServerConfig;
use crate::observability::LogFormat;

use super::errors::{CliError, CliResult};

/// Environment variable that overrides `jwt_secret`
pub const JWT_SECRET_ENV: &str = "SALARIES_JWT_SECRET";

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// SQLite database file (`:memory:` for a throwaway store)
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,

    /// Dataset seeded into an empty table when the server starts
    #[serde(default)]
    pub dataset_path: Option<PathBuf>,

    /// Shared HMAC secret for access tokens
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,

    /// Access token lifetime in seconds
    #[serde(default = "default_token_ttl_secs")]
    pub token_ttl_secs: i64,

    /// The single login pair
    #[serde(default)]
    pub credentials: StaticCredentials,

    /// Log output format
    #[serde(default)]
    pub log_format: LogFormat,

    /// HTTP binding and CORS
    #[serde(default)]
    pub server: HttpServerConfig,
}

fn default_database_path() -> PathBuf {
    PathBuf::from("salaries.db")
}

fn default_jwt_secret() -> String {
    DEFAULT_SECRET.to_string()
}

fn default_token_ttl_secs() -> i64 {
    DEFAULT_TOKEN_TTL_SECS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            dataset_path: None,
            jwt_secret: default_jwt_secret(),
            token_ttl_secs: default_token_ttl_secs(),
            credentials: StaticCredentials::default(),
            log_format: LogFormat::default(),
            server: HttpServerConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        Self::from_json(&content)
    }

    /// Parse and validate configuration JSON
    pub fn from_json(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load from the given file, or fall back to defaults, then apply
    /// environment overrides
    pub fn resolve(path: Option<&Path>) -> CliResult<Self> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Ok(secret) = env::var(JWT_SECRET_ENV) {
            config.jwt_secret = secret;
            config.validate()?;
        }

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> CliResult<()> {
        if self.jwt_secret.is_empty() {
            return Err(CliError::config_error("jwt_secret must not be empty"));
        }

        if self.token_ttl_secs <= 0 {
            return Err(CliError::config_error("token_ttl_secs must be > 0"));
        }

        if self.credentials.username.is_empty() || self.credentials.password.is_empty() {
            return Err(CliError::config_error(
                "credentials.username and credentials.password must not be empty",
            ));
        }

        if self.database_path.as_os_str().is_empty() {
            return Err(CliError::config_error("database_path must not be empty"));
        }

        Ok(())
    }

    /// Whether the placeholder secret is still in use
    pub fn uses_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_SECRET
    }

    /// Token manager configuration
    pub fn jwt_config(&self) -> JwtConfig {
        JwtConfig {
            secret: self.jwt_secret.clone(),
            access_token_ttl: Duration::seconds(self.token_ttl_secs),
        }
    }
}
