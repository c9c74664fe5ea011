//! Response handlers: turning a 2xx [`Response`] into a typed value.

use std::future::Future;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use crate::{Response, Result, from_json_value, get_json_response};

/// Decodes the body of a successful response.
///
/// Return [`Error::Decoding`](crate::Error::Decoding) when the body is not what
/// was expected: the classifier recovers it into an
/// [`ApiResult::Error`](crate::ApiResult::Error). Any other error is fatal and
/// propagates to the caller.
///
/// Implemented for async closures taking the [`Response`]:
///
/// ```
/// use splash_core::{HandleResponse, Response, Result};
///
/// fn body_length() -> impl HandleResponse<usize> {
///     |response: Response| async move { Ok::<_, splash_core::Error>(response.body().len()) }
/// }
/// ```
pub trait HandleResponse<T>: Send + Sync {
    /// Decode the response.
    fn handle(&self, response: Response) -> impl Future<Output = Result<T>> + Send;
}

impl<T, F, Fut> HandleResponse<T> for F
where
    F: Fn(Response) -> Fut + Send + Sync,
    Fut: Future<Output = Result<T>> + Send,
{
    fn handle(&self, response: Response) -> impl Future<Output = Result<T>> + Send {
        self(response)
    }
}

/// Handler that trusts the payload shape: the body is JSON-decoded into `T`
/// without any further validation.
///
/// Built with [`cast_response`].
#[derive(Debug)]
pub struct CastResponse<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for CastResponse<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for CastResponse<T> {}

impl<T> Default for CastResponse<T> {
    fn default() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> HandleResponse<T> for CastResponse<T>
where
    T: DeserializeOwned + Send,
{
    fn handle(&self, response: Response) -> impl Future<Output = Result<T>> + Send {
        async move {
            let json = get_json_response(&response)?;
            from_json_value(json)
        }
    }
}

/// A [`HandleResponse`] that only JSON-decodes the body into `T`.
///
/// Decode failures still go through the classifier's recovery path.
#[must_use]
pub fn cast_response<T>() -> CastResponse<T>
where
    T: DeserializeOwned + Send,
{
    CastResponse::default()
}
