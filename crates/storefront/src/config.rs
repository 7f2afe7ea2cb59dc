//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `SHOWROOM_HOST` - Bind address (default: 127.0.0.1)
//! - `SHOWROOM_PORT` - Listen port (default: 3000)
//! - `SHOWROOM_DATA_PATH` - JSON file backing the content store
//!   (default: showroom-data.json; `:memory:` keeps content in memory)
//! - `SHOWROOM_ADMIN_USERNAME` - Editor login name (default: admin)
//! - `SHOWROOM_ADMIN_PASSWORD` - Editor password (default: brasil10)
//! - `SHOWROOM_WHATSAPP_NUMBER` - Number used in contact links
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error sample rate, 0.0 to 1.0 (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Trace sample rate, 0.0 to 1.0 (default: 0.0)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use secrecy::SecretString;
use showroom_admin::AdminCredentials;
use showroom_admin::session::{DEFAULT_PASSWORD, DEFAULT_USERNAME};
use thiserror::Error;

use crate::display::DEFAULT_WHATSAPP_NUMBER;

/// Data path value selecting the in-memory backend.
pub const MEMORY_DATA_PATH: &str = ":memory:";

/// Default JSON file backing the content store.
pub const DEFAULT_DATA_PATH: &str = "showroom-data.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Where content is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Content lives only as long as the process.
    Memory,
    /// Content is persisted to a JSON file.
    File(PathBuf),
}

impl DataSource {
    fn parse(value: &str) -> Self {
        if value == MEMORY_DATA_PATH {
            Self::Memory
        } else {
            Self::File(PathBuf::from(value))
        }
    }
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct ShowroomConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Content store backend
    pub data: DataSource,
    /// Editor login name
    pub admin_username: String,
    /// Editor password
    pub admin_password: SecretString,
    /// Number used in WhatsApp contact links
    pub whatsapp_number: String,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
    /// Fraction of errors sent to Sentry
    pub sentry_sample_rate: f32,
    /// Fraction of transactions traced
    pub sentry_traces_sample_rate: f32,
}

impl Default for ShowroomConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            data: DataSource::Memory,
            admin_username: DEFAULT_USERNAME.to_string(),
            admin_password: SecretString::from(DEFAULT_PASSWORD),
            whatsapp_number: DEFAULT_WHATSAPP_NUMBER.to_string(),
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.0,
        }
    }
}

impl ShowroomConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let env = Env(lookup);

        Ok(Self {
            host: env.parse_or("SHOWROOM_HOST", "127.0.0.1")?,
            port: env.parse_or("SHOWROOM_PORT", "3000")?,
            data: DataSource::parse(&env.get_or("SHOWROOM_DATA_PATH", DEFAULT_DATA_PATH)),
            admin_username: env.get_or("SHOWROOM_ADMIN_USERNAME", DEFAULT_USERNAME),
            admin_password: SecretString::from(
                env.get_or("SHOWROOM_ADMIN_PASSWORD", DEFAULT_PASSWORD),
            ),
            whatsapp_number: env.get_or("SHOWROOM_WHATSAPP_NUMBER", DEFAULT_WHATSAPP_NUMBER),
            sentry_dsn: env.get("SENTRY_DSN"),
            sentry_environment: env.get("SENTRY_ENVIRONMENT"),
            sentry_sample_rate: env.sample_rate("SENTRY_SAMPLE_RATE", "1.0")?,
            sentry_traces_sample_rate: env.sample_rate("SENTRY_TRACES_SAMPLE_RATE", "0.0")?,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Credentials accepted by the editor login.
    #[must_use]
    pub fn admin_credentials(&self) -> AdminCredentials {
        AdminCredentials::new(self.admin_username.clone(), self.admin_password.clone())
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

struct Env<F>(F);

impl<F: Fn(&str) -> Option<String>> Env<F> {
    /// Get an optional variable. Empty values count as unset.
    fn get(&self, key: &str) -> Option<String> {
        (self.0)(key).filter(|value| !value.is_empty())
    }

    /// Get a variable with a default value.
    fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }

    /// Parse a variable, falling back to a default.
    fn parse_or<T>(&self, key: &str, default: &str) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        self.get_or(key, default)
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
    }

    /// Parse a rate between 0.0 and 1.0.
    fn sample_rate(&self, key: &str, default: &str) -> Result<f32, ConfigError> {
        let rate: f32 = self.parse_or(key, default)?;
        if (0.0..=1.0).contains(&rate) {
            Ok(rate)
        } else {
            Err(ConfigError::InvalidEnvVar(
                key.to_string(),
                format!("must be between 0.0 and 1.0 (got {rate})"),
            ))
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use secrecy::ExposeSecret;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<ShowroomConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        ShowroomConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
        assert_eq!(config.data, DataSource::File(PathBuf::from(DEFAULT_DATA_PATH)));
        assert_eq!(config.admin_username, "admin");
        assert_eq!(config.admin_password.expose_secret(), "brasil10");
        assert_eq!(config.whatsapp_number, "5534991483602");
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn test_memory_data_path() {
        let config = load(&[("SHOWROOM_DATA_PATH", ":memory:")]).unwrap();
        assert_eq!(config.data, DataSource::Memory);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("SHOWROOM_HOST", "0.0.0.0"),
            ("SHOWROOM_PORT", "8080"),
            ("SHOWROOM_ADMIN_USERNAME", "loja"),
            ("SENTRY_TRACES_SAMPLE_RATE", "0.25"),
        ])
        .unwrap();
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.admin_credentials().username(), "loja");
        assert!((config.sentry_traces_sample_rate - 0.25).abs() < f32::EPSILON);
    }

    #[test]
    fn test_invalid_port() {
        let err = load(&[("SHOWROOM_PORT", "porta")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(key, _) if key == "SHOWROOM_PORT"));
    }

    #[test]
    fn test_sample_rate_out_of_range() {
        assert!(load(&[("SENTRY_SAMPLE_RATE", "1.5")]).is_err());
    }

    #[test]
    fn test_debug_redacts_password() {
        let debug = format!("{:?}", load(&[]).unwrap());
        assert!(!debug.contains("brasil10"));
    }
}
