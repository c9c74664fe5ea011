//! Transport trait.
//!
//! [`HttpClient`] is the only seam between the pipeline and the network. The
//! `splash` crate ships a hyper-based implementation; tests and embedders can
//! provide their own.

use std::future::Future;
use std::sync::Arc;

use crate::{Request, Response, Result};

/// Core HTTP transport trait.
///
/// Implementations must honour the request's signal and timeout: a cancelled
/// signal resolves to [`Error::Aborted`](crate::Error::Aborted), an elapsed
/// timeout to [`Error::Timeout`](crate::Error::Timeout).
pub trait HttpClient: Send + Sync {
    /// Execute an HTTP request and return the buffered response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails for any reason:
    /// - Network errors
    /// - TLS errors
    /// - Timeouts
    /// - Cancellation
    fn execute(&self, request: Request) -> impl Future<Output = Result<Response>> + Send;
}

impl<C: HttpClient> HttpClient for Arc<C> {
    fn execute(&self, request: Request) -> impl Future<Output = Result<Response>> + Send {
        self.as_ref().execute(request)
    }
}
