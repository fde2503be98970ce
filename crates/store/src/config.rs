//! Cart configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional:
//! - `CARTWHEEL_CATALOG_URL` - Remote catalog endpoint
//!   (default: the public course-api cart feed)
//! - `CARTWHEEL_REQUEST_TIMEOUT_SECS` - Catalog request timeout in seconds.
//!   Unset means no timeout: a hung catalog call keeps the cart loading
//!   indefinitely.
//! - `SENTRY_DSN` - Sentry error tracking DSN (used by the CLI binary)

use thiserror::Error;
use url::Url;

/// Default remote catalog endpoint.
pub const DEFAULT_CATALOG_URL: &str = "https://course-api.com/react-useReducer-cart-project";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Cart application configuration.
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// Remote catalog endpoint serving the initial item list.
    pub catalog_url: Url,
    /// Catalog request timeout; `None` disables the timeout entirely.
    pub request_timeout_secs: Option<u64>,
    /// Sentry DSN for error tracking.
    pub sentry_dsn: Option<String>,
}

impl CartConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let catalog_url = get_env_or_default("CARTWHEEL_CATALOG_URL", DEFAULT_CATALOG_URL)
            .parse::<Url>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("CARTWHEEL_CATALOG_URL".to_owned(), e.to_string())
            })?;

        let request_timeout_secs = match get_optional_env("CARTWHEEL_REQUEST_TIMEOUT_SECS") {
            Some(raw) => Some(raw.parse::<u64>().map_err(|e| {
                ConfigError::InvalidEnvVar(
                    "CARTWHEEL_REQUEST_TIMEOUT_SECS".to_owned(),
                    e.to_string(),
                )
            })?),
            None => None,
        };

        let sentry_dsn = get_optional_env("SENTRY_DSN");

        Ok(Self {
            catalog_url,
            request_timeout_secs,
            sentry_dsn,
        })
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

#[cfg(test)]
#[allow(clippy::unwrap_used, unsafe_code)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_url_parses() {
        let url = DEFAULT_CATALOG_URL.parse::<Url>().unwrap();
        assert_eq!(url.host_str(), Some("course-api.com"));
    }

    // Environment mutation is process-global, so the whole lifecycle runs in
    // one test to avoid interleaving with other env-touching tests.
    #[test]
    fn test_from_env_lifecycle() {
        // env::set_var/remove_var are unsafe in edition 2024
        unsafe {
            std::env::remove_var("CARTWHEEL_CATALOG_URL");
            std::env::remove_var("CARTWHEEL_REQUEST_TIMEOUT_SECS");
        }
        let config = CartConfig::from_env().unwrap();
        assert_eq!(config.catalog_url.as_str(), DEFAULT_CATALOG_URL);
        assert!(config.request_timeout_secs.is_none());

        unsafe {
            std::env::set_var("CARTWHEEL_CATALOG_URL", "http://localhost:8080/items");
            std::env::set_var("CARTWHEEL_REQUEST_TIMEOUT_SECS", "30");
        }
        let config = CartConfig::from_env().unwrap();
        assert_eq!(config.catalog_url.as_str(), "http://localhost:8080/items");
        assert_eq!(config.request_timeout_secs, Some(30));

        unsafe {
            std::env::set_var("CARTWHEEL_CATALOG_URL", "not a url");
        }
        let err = CartConfig::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "CARTWHEEL_CATALOG_URL"));

        unsafe {
            std::env::set_var("CARTWHEEL_CATALOG_URL", "http://localhost:8080/items");
            std::env::set_var("CARTWHEEL_REQUEST_TIMEOUT_SECS", "soon");
        }
        let err = CartConfig::from_env().unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "CARTWHEEL_REQUEST_TIMEOUT_SECS")
        );

        unsafe {
            std::env::remove_var("CARTWHEEL_CATALOG_URL");
            std::env::remove_var("CARTWHEEL_REQUEST_TIMEOUT_SECS");
        }
    }
}
