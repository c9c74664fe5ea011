//! Transport settings of [`HyperClient`](crate::HyperClient).

use std::time::Duration;

use crate::Request;

/// Settings of the hyper transport, set through
/// [`HyperClientBuilder`](crate::HyperClientBuilder).
///
/// Calls composed by an [`ApiClient`](crate::ApiClient) already carry the
/// per-call or [`InitConfig`](splash_core::InitConfig) timeout; `timeout` only
/// covers requests that reach the transport without one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Fallback timeout for a whole call, queueing in middleware included.
    pub timeout: Duration,
    /// TCP connect timeout.
    pub connect_timeout: Duration,
    /// Idle connections kept per host.
    pub pool_idle_per_host: usize,
    /// How long an idle connection stays pooled.
    pub pool_idle_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            pool_idle_per_host: 32,
            pool_idle_timeout: Duration::from_secs(90),
        }
    }
}

impl ClientConfig {
    /// Deadline applied to `request`: its own timeout, else the fallback.
    #[must_use]
    pub fn request_timeout(&self, request: &Request) -> Duration {
        request.timeout().unwrap_or(self.timeout)
    }
}
