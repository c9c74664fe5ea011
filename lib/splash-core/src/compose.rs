//! Endpoint descriptors and per-call overrides.
//!
//! An endpoint is described by a pure function from its typed arguments to a
//! [`BaseRequestParams`] (pathname, query, method). [`create_request_handler`]
//! wraps that function into a [`HandleRequest`], which merges the caller's
//! [`CallOverrides`] on top.
//!
//! [`CallOverrides`] has no pathname, query or method: per-call options can
//! only touch transport-level knobs, never the URL shape.
//!
//! # Example
//!
//! ```
//! use splash_core::{
//!     BaseRequestParams, CallOverrides, HandleRequest, Query, create_request_handler,
//! };
//!
//! let list_photos = create_request_handler(|page: u32| {
//!     BaseRequestParams::get("/photos").with_query(Query::new().with("page", page))
//! });
//!
//! let params = list_photos.handle(2, CallOverrides::new().header("X-Trace", "1"));
//! assert_eq!(params.pathname, "/photos");
//! assert_eq!(params.headers.get("x-trace"), Some("1"));
//! ```

use std::marker::PhantomData;
use std::time::Duration;

use bytes::Bytes;
use tokio_util::sync::CancellationToken;

use crate::{ContentType, Headers, Method, Query, Result, to_form, to_json};

// ============================================================================
// Endpoint Descriptor
// ============================================================================

/// The params generated by an endpoint definition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaseRequestParams {
    /// Path relative to the API base URL.
    pub pathname: String,
    /// Query parameters; undefined entries are never serialized.
    pub query: Query,
    /// HTTP method, `GET` by default.
    pub method: Method,
}

impl BaseRequestParams {
    /// Creates params for `pathname` with an empty query and the default method.
    #[must_use]
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            query: Query::new(),
            method: Method::default(),
        }
    }

    /// `GET pathname`.
    #[must_use]
    pub fn get(pathname: impl Into<String>) -> Self {
        Self::new(pathname).with_method(Method::Get)
    }

    /// `POST pathname`.
    #[must_use]
    pub fn post(pathname: impl Into<String>) -> Self {
        Self::new(pathname).with_method(Method::Post)
    }

    /// `PUT pathname`.
    #[must_use]
    pub fn put(pathname: impl Into<String>) -> Self {
        Self::new(pathname).with_method(Method::Put)
    }

    /// `DELETE pathname`.
    #[must_use]
    pub fn delete(pathname: impl Into<String>) -> Self {
        Self::new(pathname).with_method(Method::Delete)
    }

    /// Sets the query.
    #[must_use]
    pub fn with_query(mut self, query: Query) -> Self {
        self.query = query;
        self
    }

    /// Sets the method.
    #[must_use]
    pub const fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Complete params without any per-call override.
    #[must_use]
    pub fn into_complete(self) -> CompleteRequestParams {
        CompleteRequestParams::merge(self, CallOverrides::default())
    }
}

// ============================================================================
// Per-call Overrides
// ============================================================================

/// Additional transport options provided by the caller on a per-call basis.
#[derive(Debug, Clone, Default)]
pub struct CallOverrides {
    /// Headers merged over the init-level headers.
    pub headers: Headers,
    /// Request body.
    pub body: Option<Bytes>,
    /// Cancellation signal for this call.
    pub signal: Option<CancellationToken>,
    /// Timeout for this call.
    pub timeout: Option<Duration>,
}

impl CallOverrides {
    /// No overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Merges headers.
    #[must_use]
    pub fn headers(mut self, headers: &Headers) -> Self {
        self.headers.merge(headers);
        self
    }

    /// Sets a raw body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets a JSON body and the matching `Content-Type`.
    pub fn json<T: serde::Serialize>(self, value: &T) -> Result<Self> {
        let body = to_json(value)?;
        Ok(self
            .header("Content-Type", ContentType::Json.as_str())
            .body(body))
    }

    /// Sets a form URL-encoded body and the matching `Content-Type`.
    pub fn form<T: serde::Serialize>(self, value: &T) -> Result<Self> {
        let body = to_form(value)?;
        Ok(self
            .header("Content-Type", ContentType::FormUrlEncoded.as_str())
            .body(body))
    }

    /// Sets the cancellation signal.
    #[must_use]
    pub fn signal(mut self, signal: CancellationToken) -> Self {
        self.signal = Some(signal);
        self
    }

    /// Sets the timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

// ============================================================================
// Complete Params
// ============================================================================

/// Endpoint params with the per-call overrides applied.
#[derive(Debug, Clone, Default)]
pub struct CompleteRequestParams {
    /// Path relative to the API base URL.
    pub pathname: String,
    /// Query parameters.
    pub query: Query,
    /// HTTP method.
    pub method: Method,
    /// Per-call headers.
    pub headers: Headers,
    /// Request body.
    pub body: Option<Bytes>,
    /// Cancellation signal.
    pub signal: Option<CancellationToken>,
    /// Timeout.
    pub timeout: Option<Duration>,
}

impl CompleteRequestParams {
    /// Shallow-merges `overrides` over `base`.
    #[must_use]
    pub fn merge(base: BaseRequestParams, overrides: CallOverrides) -> Self {
        let BaseRequestParams {
            pathname,
            query,
            method,
        } = base;
        let CallOverrides {
            headers,
            body,
            signal,
            timeout,
        } = overrides;

        Self {
            pathname,
            query,
            method,
            headers,
            body,
            signal,
            timeout,
        }
    }
}

// ============================================================================
// Request Handler
// ============================================================================

/// Turns typed call arguments and per-call overrides into complete params.
pub trait HandleRequest<Args>: Send + Sync {
    /// Build the params for one call.
    fn handle(&self, args: Args, overrides: CallOverrides) -> CompleteRequestParams;
}

/// [`HandleRequest`] built by [`create_request_handler`].
pub struct RequestHandler<Args, F> {
    build: F,
    _marker: PhantomData<fn(Args)>,
}

impl<Args, F: Clone> Clone for RequestHandler<Args, F> {
    fn clone(&self) -> Self {
        Self {
            build: self.build.clone(),
            _marker: PhantomData,
        }
    }
}

impl<Args, F> std::fmt::Debug for RequestHandler<Args, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestHandler")
            .field("args", &std::any::type_name::<Args>())
            .finish_non_exhaustive()
    }
}

impl<Args, F> HandleRequest<Args> for RequestHandler<Args, F>
where
    F: Fn(Args) -> BaseRequestParams + Send + Sync,
{
    fn handle(&self, args: Args, overrides: CallOverrides) -> CompleteRequestParams {
        CompleteRequestParams::merge((self.build)(args), overrides)
    }
}

/// Type-checks an endpoint definition and adds the per-call overrides to it.
///
/// `build` must be pure: the same arguments always describe the same endpoint.
pub fn create_request_handler<Args, F>(build: F) -> RequestHandler<Args, F>
where
    F: Fn(Args) -> BaseRequestParams + Send + Sync,
{
    RequestHandler {
        build,
        _marker: PhantomData,
    }
}
