//! Client-wide configuration.

use std::time::Duration;

use tokio_util::sync::CancellationToken;
use url::Url;

use crate::{Error, Headers, Result};

/// Default API version sent in `Accept-Version`.
pub const DEFAULT_API_VERSION: &str = "v1";

/// Default API base URL.
pub const DEFAULT_API_URL: &str = "https://api.unsplash.com";

/// Initial parameters that apply to all calls.
///
/// Immutable once built; the composer shares it read-only between calls.
#[derive(Debug, Clone)]
pub struct InitConfig {
    access_key: Option<String>,
    api_version: String,
    api_url: Url,
    headers: Headers,
    timeout: Option<Duration>,
    signal: Option<CancellationToken>,
}

impl InitConfig {
    /// Create a new configuration builder.
    #[must_use]
    pub fn builder() -> InitConfigBuilder {
        InitConfigBuilder::default()
    }

    /// Access key used for `Authorization: Client-ID <key>`.
    #[must_use]
    pub fn access_key(&self) -> Option<&str> {
        self.access_key.as_deref()
    }

    /// API version sent in `Accept-Version`.
    #[must_use]
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// API base URL.
    #[must_use]
    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    /// Default headers for every call.
    #[must_use]
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Default timeout for every call.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Client-wide cancellation signal.
    #[must_use]
    pub const fn signal(&self) -> Option<&CancellationToken> {
        self.signal.as_ref()
    }
}

/// Builder for [`InitConfig`].
#[derive(Debug, Clone, Default)]
pub struct InitConfigBuilder {
    access_key: Option<String>,
    api_version: Option<String>,
    api_url: Option<String>,
    headers: Headers,
    timeout: Option<Duration>,
    signal: Option<CancellationToken>,
}

impl InitConfigBuilder {
    /// Set the access key.
    #[must_use]
    pub fn access_key(mut self, access_key: impl Into<String>) -> Self {
        self.access_key = Some(access_key.into());
        self
    }

    /// Set the API version.
    #[must_use]
    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = Some(api_version.into());
        self
    }

    /// Set the API base URL.
    #[must_use]
    pub fn api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    /// Add a default header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Set the default timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set a client-wide cancellation signal.
    #[must_use]
    pub fn signal(mut self, signal: CancellationToken) -> Self {
        self.signal = Some(signal);
        self
    }

    /// Build the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if the base URL cannot be parsed, and
    /// [`Error::InvalidRequest`] if it cannot be a base (e.g. `mailto:`).
    pub fn build(self) -> Result<InitConfig> {
        let api_url = Url::parse(self.api_url.as_deref().unwrap_or(DEFAULT_API_URL))?;
        if api_url.cannot_be_a_base() {
            return Err(Error::invalid_request(format!(
                "API URL cannot be a base: {api_url}"
            )));
        }

        Ok(InitConfig {
            access_key: self.access_key,
            api_version: self
                .api_version
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            api_url,
            headers: self.headers,
            timeout: self.timeout,
            signal: self.signal,
        })
    }
}
