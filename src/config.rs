use crate::error::{Result, SaplingError};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

pub const DEFAULT_HOSTNAME: &str = "https://api.sapling.ai";
pub const DEFAULT_PATHNAME: &str = "/api/v1/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api_key: String,
    /// Scheme and host, overridable for self-hosted deployments.
    pub hostname: String,
    pub pathname: String,
    pub timeout: Duration,
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            hostname: DEFAULT_HOSTNAME.into(),
            pathname: DEFAULT_PATHNAME.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a config from `SAPLING_*` variables resolved through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup("SAPLING_API_KEY").ok_or_else(|| {
            SaplingError::Config("SAPLING_API_KEY environment variable not set".into())
        })?;

        let timeout_secs = match lookup("SAPLING_TIMEOUT_SECS") {
            Some(v) => v.parse().map_err(|_| {
                SaplingError::Config(format!("SAPLING_TIMEOUT_SECS is not a number: {v}"))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            api_key,
            hostname: lookup("SAPLING_HOSTNAME").unwrap_or_else(|| DEFAULT_HOSTNAME.into()),
            pathname: lookup("SAPLING_PATHNAME").unwrap_or_else(|| DEFAULT_PATHNAME.into()),
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = hostname.into();
        self
    }

    pub fn with_pathname(mut self, pathname: impl Into<String>) -> Self {
        self.pathname = pathname.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Base URL every endpoint path is appended to, e.g. `https://api.sapling.ai/api/v1/`.
    pub fn url_endpoint(&self) -> String {
        format!("{}{}", self.hostname, self.pathname)
    }
}
