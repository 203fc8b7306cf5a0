//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `REACHABILITY_TIMEOUT_SECONDS` - Upper bound on one reachability probe
//!   (default: 10, range: 1-300)
//! - `CODE_GENERATION_MAX_ATTEMPTS` - Collisions tolerated while generating a
//!   short code (default: 10000, min: 1)

use anyhow::Result;
use std::env;
use std::time::Duration;

use crate::application::services::link_service::DEFAULT_MAX_ATTEMPTS;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Timeout applied to every outbound reachability probe.
    pub reachability_timeout_seconds: u64,
    /// Cap on generated-code collisions before a shorten request fails.
    pub code_generation_max_attempts: usize,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unparseable numeric values fall back to their defaults.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let reachability_timeout_seconds = env::var("REACHABILITY_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let code_generation_max_attempts = env::var("CODE_GENERATION_MAX_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_ATTEMPTS);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            reachability_timeout_seconds,
            code_generation_max_attempts,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    /// - `reachability_timeout_seconds` is outside 1-300
    /// - `code_generation_max_attempts` is 0
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

        if self.reachability_timeout_seconds == 0 || self.reachability_timeout_seconds > 300 {
            anyhow::bail!(
                "REACHABILITY_TIMEOUT_SECONDS must be between 1 and 300, got {}",
                self.reachability_timeout_seconds
            );
        }

        if self.code_generation_max_attempts == 0 {
            anyhow::bail!("CODE_GENERATION_MAX_ATTEMPTS must be at least 1");
        }

        Ok(())
    }

    pub fn reachability_timeout(&self) -> Duration {
        Duration::from_secs(self.reachability_timeout_seconds)
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!(
            "  Reachability timeout: {}s",
            self.reachability_timeout_seconds
        );
        tracing::info!(
            "  Code generation attempts: {}",
            self.code_generation_max_attempts
        );
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
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn valid_config() -> Config {
        Config {
            listen_addr: "0.0.0.0:8000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            reachability_timeout_seconds: 10,
            code_generation_max_attempts: 100,
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "8000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "127.0.0.1:8000".to_string();
        config.reachability_timeout_seconds = 0;
        assert!(config.validate().is_err());

        config.reachability_timeout_seconds = 301;
        assert!(config.validate().is_err());

        config.reachability_timeout_seconds = 300;
        config.code_generation_max_attempts = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_reachability_timeout_duration() {
        let config = valid_config();
        assert_eq!(config.reachability_timeout(), Duration::from_secs(10));
    }

    #[test]
    #[serial]
    fn test_defaults_when_unset() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("LOG_FORMAT");
            env::remove_var("REACHABILITY_TIMEOUT_SECONDS");
            env::remove_var("CODE_GENERATION_MAX_ATTEMPTS");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:8000");
        assert_eq!(config.log_format, "text");
        assert_eq!(config.reachability_timeout_seconds, 10);
        assert_eq!(config.code_generation_max_attempts, DEFAULT_MAX_ATTEMPTS);
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_values_from_env() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("LISTEN", "127.0.0.1:9000");
            env::set_var("LOG_FORMAT", "json");
            env::set_var("REACHABILITY_TIMEOUT_SECONDS", "3");
            env::set_var("CODE_GENERATION_MAX_ATTEMPTS", "50");
        }

        let config = load_from_env().unwrap();

        assert_eq!(config.listen_addr, "127.0.0.1:9000");
        assert_eq!(config.log_format, "json");
        assert_eq!(config.reachability_timeout_seconds, 3);
        assert_eq!(config.code_generation_max_attempts, 50);

        // Cleanup
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("LOG_FORMAT");
            env::remove_var("REACHABILITY_TIMEOUT_SECONDS");
            env::remove_var("CODE_GENERATION_MAX_ATTEMPTS");
        }
    }

    #[test]
    #[serial]
    fn test_unparseable_number_falls_back_to_default() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("REACHABILITY_TIMEOUT_SECONDS", "soon");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.reachability_timeout_seconds, 10);

        unsafe {
            env::remove_var("REACHABILITY_TIMEOUT_SECONDS");
        }
    }

    #[test]
    #[serial]
    fn test_invalid_log_format_rejected_on_load() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("LOG_FORMAT", "xml");
        }

        assert!(load_from_env().is_err());

        unsafe {
            env::remove_var("LOG_FORMAT");
        }
    }
}
