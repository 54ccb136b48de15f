//! HTTP server configuration object and helpers.

use std::env;

use thiserror::Error;

/// Environment variable naming the listen port.
const PORT_ENV: &str = "PORT";

/// Port used when `PORT` is unset or empty.
pub const DEFAULT_PORT: u16 = 3000;

/// Error raised when configuration cannot be read from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `PORT` is set but does not parse as a TCP port number.
    #[error("invalid PORT value `{value}`: {source}")]
    InvalidPort {
        /// The raw environment value.
        value: String,
        /// Underlying parse failure.
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Runtime configuration for the HTTP server.
///
/// Read once at startup and passed explicitly to server construction; nothing
/// consults the environment after this point.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub(crate) port: u16,
}

impl ServerConfig {
    /// Construct a configuration listening on `port`.
    #[must_use]
    pub fn new(port: u16) -> Self {
        Self { port }
    }

    /// Read configuration from the process environment.
    ///
    /// `PORT` selects the listen port; unset or empty falls back to
    /// [`DEFAULT_PORT`].
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidPort`] when `PORT` is set to a value
    /// that does not parse as a port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var(PORT_ENV) {
            Ok(value) if !value.is_empty() => {
                let port = value
                    .parse()
                    .map_err(|source| ConfigError::InvalidPort { value, source })?;
                Ok(Self::new(port))
            }
            _ => Ok(Self::new(DEFAULT_PORT)),
        }
    }

    /// Return the port the server will listen on.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PORT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use env_lock::lock_env;
    use rstest::rstest;

    #[rstest]
    fn default_port_used_when_unset() {
        let _guard = lock_env([(PORT_ENV, None::<String>)]);
        let config = ServerConfig::from_env().expect("config should load");
        assert_eq!(config.port(), DEFAULT_PORT);
    }

    #[rstest]
    fn empty_port_treated_as_unset() {
        let _guard = lock_env([(PORT_ENV, Some(String::new()))]);
        let config = ServerConfig::from_env().expect("config should load");
        assert_eq!(config.port(), DEFAULT_PORT);
    }

    #[rstest]
    fn numeric_port_is_honoured() {
        let _guard = lock_env([(PORT_ENV, Some("8123".to_owned()))]);
        let config = ServerConfig::from_env().expect("config should load");
        assert_eq!(config.port(), 8123);
    }

    #[rstest]
    #[case("banana")]
    #[case("70000")]
    #[case("-1")]
    fn unparseable_port_is_rejected(#[case] raw: &str) {
        let _guard = lock_env([(PORT_ENV, Some(raw.to_owned()))]);
        let err = ServerConfig::from_env().expect_err("config should fail");
        assert!(matches!(err, ConfigError::InvalidPort { .. }));
    }
}
