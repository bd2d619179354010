// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Client configuration.

use url::Url;

/// Default request timeout, in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the Dealer Hub client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend (scheme + host + optional port).
    pub base_url: Url,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Creates a configuration with the default timeout.
    #[must_use]
    pub const fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Parses a configuration from a base URL string.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidBaseUrl` if the string is not a valid
    /// URL.
    pub fn parse(base_url: &str) -> Result<Self, ConfigError> {
        let parsed: Url = base_url
            .parse()
            .map_err(|_| ConfigError::InvalidBaseUrl(base_url.to_string()))?;
        Ok(Self::new(parsed))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The base URL could not be parsed.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    /// The underlying HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),
}
