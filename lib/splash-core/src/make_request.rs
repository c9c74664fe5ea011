//! Request composition and dispatch.
//!
//! [`init_make_request`] captures the client-wide [`InitConfig`] and a
//! transport. Binding an endpoint's request and response handlers yields an
//! [`Endpoint`] whose [`call`](Endpoint::call) runs the whole pipeline:
//! compose, dispatch, classify.
//!
//! # Precedence
//!
//! Headers are merged key-by-key (case-insensitive), later layers winning:
//!
//! 1. [`InitConfig::headers`]
//! 2. [`CallOverrides::headers`](crate::CallOverrides::headers)
//! 3. `Accept-Version: <api_version>` (forced)
//! 4. `Authorization: Client-ID <access_key>` (forced, only with an access key)
//!
//! Method, body and URL come from the endpoint params only. For signal and
//! timeout the per-call value wins; the init-level value fills the gap.

use std::marker::PhantomData;
use std::sync::Arc;

use tracing::trace;

use crate::{
    ApiResult, CallOverrides, CompleteRequestParams, DefaultErrorClassifier, ErrorClassifier,
    HandleRequest, HandleResponse, Headers, HttpClient, InitConfig, Request, Result,
    ToQueryPairs, add_query_to_url, append_pathname_to_url, handle_fetch_response,
};

/// Header carrying the API version.
pub const ACCEPT_VERSION_HEADER: &str = "Accept-Version";

/// Header carrying the access key.
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Merge header layers in precedence order (see the module docs).
#[must_use]
pub fn merge_headers(config: &InitConfig, call_headers: &Headers) -> Headers {
    let mut headers = config.headers().clone();
    headers.merge(call_headers);
    headers.insert(ACCEPT_VERSION_HEADER, config.api_version());
    if let Some(access_key) = config.access_key() {
        headers.insert(AUTHORIZATION_HEADER, format!("Client-ID {access_key}"));
    }
    headers
}

/// Binder returned by [`init_make_request`].
pub struct MakeRequest<C> {
    config: Arc<InitConfig>,
    transport: Arc<C>,
    classifier: Arc<dyn ErrorClassifier>,
}

impl<C> Clone for MakeRequest<C> {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            transport: Arc::clone(&self.transport),
            classifier: Arc::clone(&self.classifier),
        }
    }
}

impl<C> std::fmt::Debug for MakeRequest<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MakeRequest")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Capture the client-wide configuration and the transport.
///
/// Non-2xx bodies are classified with [`DefaultErrorClassifier`] unless
/// [`MakeRequest::with_classifier`] says otherwise.
#[must_use]
pub fn init_make_request<C: HttpClient>(config: InitConfig, transport: C) -> MakeRequest<C> {
    MakeRequest {
        config: Arc::new(config),
        transport: Arc::new(transport),
        classifier: Arc::new(DefaultErrorClassifier),
    }
}

impl<C: HttpClient> MakeRequest<C> {
    /// Use a custom classifier for non-2xx bodies.
    #[must_use]
    pub fn with_classifier(mut self, classifier: impl ErrorClassifier) -> Self {
        self.classifier = Arc::new(classifier);
        self
    }

    /// The client-wide configuration.
    #[must_use]
    pub fn config(&self) -> &InitConfig {
        &self.config
    }

    /// The transport.
    #[must_use]
    pub fn transport(&self) -> &C {
        &self.transport
    }

    /// Build the final request from complete params, without dispatching it.
    ///
    /// Pure: composing the same params twice yields identical requests.
    #[must_use]
    pub fn compose(&self, params: CompleteRequestParams) -> Request {
        let CompleteRequestParams {
            pathname,
            query,
            method,
            headers,
            body,
            signal,
            timeout,
        } = params;

        let url = append_pathname_to_url(self.config.api_url().clone(), &pathname);
        let url = add_query_to_url(url, &query.to_query_pairs());
        let headers = merge_headers(&self.config, &headers);
        let signal = signal.or_else(|| self.config.signal().cloned());
        let timeout = timeout.or(self.config.timeout());

        trace!(%method, %url, "composed request");

        Request::builder(method, url)
            .headers(headers)
            .maybe_body(body)
            .signal(signal)
            .timeout(timeout)
            .build()
    }

    /// Compose, dispatch and classify one call.
    pub async fn send<T, R>(
        &self,
        params: CompleteRequestParams,
        handle_response: &R,
    ) -> Result<ApiResult<T>>
    where
        R: HandleResponse<T>,
    {
        let request = self.compose(params);
        let response = self.transport.execute(request).await?;
        handle_fetch_response(handle_response, self.classifier.as_ref(), response).await
    }

    /// Bind an endpoint's request and response handlers.
    #[must_use]
    pub fn bind<Args, T, Q, R>(
        &self,
        handle_request: Q,
        handle_response: R,
    ) -> Endpoint<C, Q, R, Args, T>
    where
        Q: HandleRequest<Args>,
        R: HandleResponse<T>,
    {
        Endpoint {
            make_request: self.clone(),
            handle_request,
            handle_response,
            _marker: PhantomData,
        }
    }
}

/// A callable endpoint: typed arguments in, [`ApiResult`] out.
pub struct Endpoint<C, Q, R, Args, T> {
    make_request: MakeRequest<C>,
    handle_request: Q,
    handle_response: R,
    _marker: PhantomData<fn(Args) -> T>,
}

impl<C, Q: Clone, R: Clone, Args, T> Clone for Endpoint<C, Q, R, Args, T> {
    fn clone(&self) -> Self {
        Self {
            make_request: self.make_request.clone(),
            handle_request: self.handle_request.clone(),
            handle_response: self.handle_response.clone(),
            _marker: PhantomData,
        }
    }
}

impl<C, Q, R, Args, T> std::fmt::Debug for Endpoint<C, Q, R, Args, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Endpoint")
            .field("make_request", &self.make_request)
            .finish_non_exhaustive()
    }
}

impl<C, Q, R, Args, T> Endpoint<C, Q, R, Args, T>
where
    C: HttpClient,
    Q: HandleRequest<Args>,
    R: HandleResponse<T>,
{
    /// Call the endpoint without per-call overrides.
    pub async fn call(&self, args: Args) -> Result<ApiResult<T>> {
        self.call_with(args, CallOverrides::default()).await
    }

    /// Call the endpoint with per-call overrides.
    ///
    /// # Errors
    ///
    /// Only unexpected failures are errors (transport, cancellation, handler
    /// bugs). API errors and decoding failures are in the [`ApiResult`].
    pub async fn call_with(&self, args: Args, overrides: CallOverrides) -> Result<ApiResult<T>> {
        let params = self.handle_request.handle(args, overrides);
        self.make_request.send(params, &self.handle_response).await
    }

    /// Build the request a call would send, without dispatching it.
    #[must_use]
    pub fn request(&self, args: Args, overrides: CallOverrides) -> Request {
        self.make_request
            .compose(self.handle_request.handle(args, overrides))
    }
}
