//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the users
//! file is read or the server starts.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8000`)
//! - `USERS_FILE` - Path to the users JSON document (default: `users.json`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub users_file: String,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
        let users_file = env::var("USERS_FILE").unwrap_or_else(|_| "users.json".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Self {
            listen_addr,
            users_file,
            log_level,
            log_format,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    /// - `users_file` is empty
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.users_file.trim().is_empty() {
            anyhow::bail!("USERS_FILE must not be empty");
        }

        Ok(())
    }

    /// Returns whether logs should be emitted as JSON lines.
    pub fn is_json_logging(&self) -> bool {
        self.log_format == "json"
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Users file: {}", self.users_file);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
