use std::{env, time::Duration};
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "https://blockchain.info";

/// Bounded so that a hung server cannot block a lookup forever.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Largest response body read from the server, 256 MiB.
///
/// `rawaddr` pages of busy addresses are tens of megabytes, well past ureq's 10 MiB default.
pub const DEFAULT_MAX_BODY_SIZE: u64 = 256 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Error parsing RAWADDR_TIMEOUT")]
    Timeout(#[source] std::num::ParseIntError),

    #[error("RAWADDR_TIMEOUT must be greater than zero")]
    ZeroTimeout,
}

/// Lookup settings, read from the environment.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Base URL of the `rawaddr` API server.
    pub api_url: String,

    /// Upper bound on the whole request, from connect to the last byte of the body.
    pub timeout: Duration,

    /// Upper bound on the response body in bytes. Larger bodies are a decode error.
    pub max_body_size: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_body_size: DEFAULT_MAX_BODY_SIZE,
        }
    }
}

impl Config {
    /// Read `RAWADDR_URL` and `RAWADDR_TIMEOUT`, falling back to defaults when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(env::var("RAWADDR_URL").ok(), env::var("RAWADDR_TIMEOUT").ok())
    }

    fn from_vars(api_url: Option<String>, timeout: Option<String>) -> Result<Self, ConfigError> {
        let api_url = api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let timeout = match timeout {
            Some(secs) => secs.trim().parse().map_err(ConfigError::Timeout)?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        if timeout == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(Self {
            api_url,
            timeout: Duration::from_secs(timeout),
            max_body_size: DEFAULT_MAX_BODY_SIZE,
        })
    }
}
