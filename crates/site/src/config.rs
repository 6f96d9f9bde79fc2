//! Site configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; the defaults suit local development.
//!
//! - `ECOBID_HOST` - Bind address (default: 127.0.0.1)
//! - `ECOBID_PORT` - Listen port (default: 3000)
//! - `ECOBID_BASE_URL` - Public URL for the site (default: <http://localhost:3000>)
//! - `ECOBID_MATCHING_DELAY_MS` - Simulated designer-matching delay (default: 3000)
//! - `ECOBID_ORDER_DELAY_MS` - Simulated order-processing delay (default: 1500)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag (default: development)
//! - `SENTRY_SAMPLE_RATE` - Sentry error sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Sentry performance trace sample rate (default: 0.0)

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Site application configuration.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the site
    pub base_url: String,
    /// How long the matchmaker pretends to search for designers
    pub matching_delay: Duration,
    /// How long checkout pretends to process an order
    pub order_delay: Duration,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment tag
    pub sentry_environment: String,
    /// Sentry error sample rate
    pub sentry_sample_rate: f32,
    /// Sentry performance trace sample rate
    pub sentry_traces_sample_rate: f32,
}

impl SiteConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = parse_env_or_default::<IpAddr>("ECOBID_HOST", "127.0.0.1")?;
        let port = parse_env_or_default::<u16>("ECOBID_PORT", "3000")?;

        let base_url = get_env_or_default("ECOBID_BASE_URL", "http://localhost:3000");
        url::Url::parse(&base_url)
            .map_err(|e| ConfigError::InvalidEnvVar("ECOBID_BASE_URL".to_string(), e.to_string()))?;

        let matching_delay = Duration::from_millis(parse_env_or_default::<u64>(
            "ECOBID_MATCHING_DELAY_MS",
            "3000",
        )?);
        let order_delay =
            Duration::from_millis(parse_env_or_default::<u64>("ECOBID_ORDER_DELAY_MS", "1500")?);

        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_env_or_default("SENTRY_ENVIRONMENT", "development");
        let sentry_sample_rate = parse_env_or_default::<f32>("SENTRY_SAMPLE_RATE", "1.0")?;
        let sentry_traces_sample_rate =
            parse_env_or_default::<f32>("SENTRY_TRACES_SAMPLE_RATE", "0.0")?;

        Ok(Self {
            host,
            port,
            base_url,
            matching_delay,
            order_delay,
            sentry_dsn,
            sentry_environment,
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get an environment variable with a default value and parse it.
fn parse_env_or_default<T>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    get_env_or_default(key, default)
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_or_default_uses_default() {
        // Variable is never set, so the default string is parsed
        let port: u16 = parse_env_or_default("ECOBID_TEST_UNSET_PORT", "8080").unwrap();
        assert_eq!(port, 8080);
    }

    #[test]
    fn test_parse_env_or_default_invalid_default() {
        let result = parse_env_or_default::<u16>("ECOBID_TEST_UNSET_PORT", "not-a-port");
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));
    }

    #[test]
    fn test_socket_addr() {
        let config = SiteConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            matching_delay: Duration::from_millis(3000),
            order_delay: Duration::from_millis(1500),
            sentry_dsn: None,
            sentry_environment: "development".to_string(),
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.0,
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }
}
