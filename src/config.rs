//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Required Variables
//!
//! - `SAVEFILE` - Filesystem path of the snapshot file. The process refuses
//!   to start without it; an empty value counts as unset.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8001`)
//! - `FLUSH_INTERVAL_SECS` - Seconds between snapshot flush cycles (default: 5)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the snapshot file holding the persisted store.
    pub save_file: PathBuf,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Seconds between snapshot flush cycles.
    pub flush_interval_secs: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `SAVEFILE` is missing or empty.
    pub fn from_env() -> Result<Self> {
        let save_file = env::var("SAVEFILE")
            .ok()
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .context("SAVEFILE must be set")?;

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8001".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let flush_interval_secs = env::var("FLUSH_INTERVAL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        Ok(Self {
            save_file,
            listen_addr,
            log_level,
            log_format,
            flush_interval_secs,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `flush_interval_secs` is zero or implausibly large
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    pub fn validate(&self) -> Result<()> {
        if self.flush_interval_secs == 0 {
            anyhow::bail!("FLUSH_INTERVAL_SECS must be greater than 0");
        }

        if self.flush_interval_secs > 86_400 {
            anyhow::bail!(
                "FLUSH_INTERVAL_SECS is too large (max: 86400), got {}",
                self.flush_interval_secs
            );
        }

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

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Snapshot file: {}", self.save_file.display());
        tracing::info!("  Flush interval: {}s", self.flush_interval_secs);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn base_config() -> Config {
        Config {
            save_file: PathBuf::from("/tmp/links.json"),
            listen_addr: "0.0.0.0:8001".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            flush_interval_secs: 5,
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = base_config();
        assert!(config.validate().is_ok());

        // Test invalid flush interval
        config.flush_interval_secs = 0;
        assert!(config.validate().is_err());

        config.flush_interval_secs = 100_000;
        assert!(config.validate().is_err());

        config.flush_interval_secs = 5;

        // Test invalid log format
        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        // Test invalid listen address
        config.listen_addr = "8001".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_missing_save_file_is_fatal() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("SAVEFILE");
        }

        assert!(Config::from_env().is_err());
    }

    #[test]
    #[serial]
    fn test_empty_save_file_is_fatal() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("SAVEFILE", "");
        }

        assert!(Config::from_env().is_err());

        // Cleanup
        unsafe {
            env::remove_var("SAVEFILE");
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("SAVEFILE", "/var/lib/snaplink/links.json");
            env::remove_var("LISTEN");
            env::remove_var("LOG_FORMAT");
            env::remove_var("FLUSH_INTERVAL_SECS");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(
            config.save_file,
            PathBuf::from("/var/lib/snaplink/links.json")
        );
        assert_eq!(config.listen_addr, "0.0.0.0:8001");
        assert_eq!(config.log_format, "text");
        assert_eq!(config.flush_interval_secs, 5);

        // Cleanup
        unsafe {
            env::remove_var("SAVEFILE");
        }
    }

    #[test]
    #[serial]
    fn test_flush_interval_override() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("SAVEFILE", "/tmp/links.json");
            env::set_var("FLUSH_INTERVAL_SECS", "30");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.flush_interval_secs, 30);

        // Unparseable values fall back to the default
        unsafe {
            env::set_var("FLUSH_INTERVAL_SECS", "soon");
        }
        let config = Config::from_env().unwrap();
        assert_eq!(config.flush_interval_secs, 5);

        // Cleanup
        unsafe {
            env::remove_var("SAVEFILE");
            env::remove_var("FLUSH_INTERVAL_SECS");
        }
    }
}
