//! Environment-driven application configuration.
//!
//! Configuration is loaded once at startup from process environment
//! variables, with a `.env` file honoured when present. Only
//! `DATABASE_URL` is required; every other setting has a default.

use std::env;
use std::fmt::Display;
use std::str::FromStr;

use thiserror::Error;

/// Errors raised while loading configuration from the environment.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("missing required environment variable: {0}")]
    MissingVar(String),

    /// An environment variable holds a value that cannot be parsed.
    #[error("invalid value for {key}: {message}")]
    InvalidValue {
        /// Environment variable name.
        key: String,
        /// Why the value was rejected.
        message: String,
    },
}

/// Application configuration resolved at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `PostgreSQL` connection string.
    pub database_url: String,
    /// Connection pool size for the task store.
    pub database_pool_size: u32,
    /// Host the HTTP listener binds to.
    pub host: String,
    /// Port the HTTP listener binds to.
    pub port: u16,
    /// Allowed CORS origins; a literal `*` permits any origin.
    pub cors_origins: Vec<String>,
}

impl AppConfig {
    /// Creates a configuration from explicit values.
    #[must_use]
    pub const fn new(
        database_url: String,
        database_pool_size: u32,
        host: String,
        port: u16,
        cors_origins: Vec<String>,
    ) -> Self {
        Self {
            database_url,
            database_pool_size,
            host,
            port,
            cors_origins,
        }
    }

    /// Loads configuration from environment variables.
    ///
    /// Reads a `.env` file first when one is present. `DATABASE_URL` is
    /// required. `APP_HOST` defaults to `0.0.0.0`, `APP_PORT` to `8000`,
    /// `DATABASE_POOL_SIZE` to `5`, and `CORS_ORIGINS` to `*`
    /// (comma-separated list).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVar`] when `DATABASE_URL` is absent,
    /// or [`ConfigError::InvalidValue`] when a numeric variable fails to
    /// parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let database_url = required_var("DATABASE_URL")?;
        let database_pool_size = optional_parsed_var("DATABASE_POOL_SIZE", 5)?;
        let host = optional_var("APP_HOST", "0.0.0.0");
        let port = optional_parsed_var("APP_PORT", 8000)?;
        let cors_origins = split_origins(&optional_var("CORS_ORIGINS", "*"));

        Ok(Self {
            database_url,
            database_pool_size,
            host,
            port,
            cors_origins,
        })
    }
}

fn required_var(key: &str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::MissingVar(key.to_owned()))
}

fn optional_var(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn optional_parsed_var<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    env::var(key).map_or_else(
        |_| Ok(default),
        |value| {
            value.parse().map_err(|parse_error: T::Err| ConfigError::InvalidValue {
                key: key.to_owned(),
                message: parse_error.to_string(),
            })
        },
    )
}

/// Splits a comma-separated origin list, dropping empty entries.
fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    // Tests that mutate process environment variables are deliberately
    // absent; `std::env::set_var` is unsafe under edition 2024 and test
    // binaries run threads concurrently.

    #[rstest]
    fn new_stores_explicit_values() {
        let config = AppConfig::new(
            "postgresql://localhost/taskdesk".to_owned(),
            3,
            "127.0.0.1".to_owned(),
            9000,
            vec!["http://localhost:3000".to_owned()],
        );

        assert_eq!(config.database_url, "postgresql://localhost/taskdesk");
        assert_eq!(config.database_pool_size, 3);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9000);
        assert_eq!(config.cors_origins, vec!["http://localhost:3000".to_owned()]);
    }

    #[rstest]
    #[case("*", vec!["*"])]
    #[case("http://a.test,http://b.test", vec!["http://a.test", "http://b.test"])]
    #[case(" http://a.test , http://b.test ", vec!["http://a.test", "http://b.test"])]
    #[case("http://a.test,,", vec!["http://a.test"])]
    fn split_origins_trims_and_drops_empty_entries(
        #[case] raw: &str,
        #[case] expected: Vec<&str>,
    ) {
        assert_eq!(split_origins(raw), expected);
    }

    #[rstest]
    fn missing_var_error_names_the_variable() {
        let error = ConfigError::MissingVar("DATABASE_URL".to_owned());
        assert_eq!(
            error.to_string(),
            "missing required environment variable: DATABASE_URL"
        );
    }

    #[rstest]
    fn invalid_value_error_names_key_and_reason() {
        let error = ConfigError::InvalidValue {
            key: "APP_PORT".to_owned(),
            message: "invalid digit found in string".to_owned(),
        };
        assert_eq!(
            error.to_string(),
            "invalid value for APP_PORT: invalid digit found in string"
        );
    }
}
