//! Core types and traits for the splash API client.
//!
//! This crate holds everything that does not need a network stack:
//! - [`init_make_request`], [`create_request_handler`] and [`Endpoint`] - the request composer
//! - [`handle_fetch_response`], [`ApiResult`] and [`ErrorClassifier`] - the response classifier
//! - [`cast_response`] and [`HandleResponse`] - response decoding
//! - [`InitConfig`], [`BaseRequestParams`] and [`CallOverrides`] - the three configuration layers
//! - [`Request`], [`Response`] and [`HttpClient`] - the transport seam
//! - [`Error`] and [`Result`] - error handling
//! - [`CancellationToken`] - cancellation signal (re-exported from `tokio-util`)
//!
//! The hyper-based transport lives in the `splash` crate.

mod body;
mod classify;
mod client;
mod compose;
mod error;
mod handle;
mod headers;
mod init_config;
mod make_request;
mod method;
pub mod prelude;
mod query;
mod request;
mod response;
mod result;
mod url_build;

pub use body::{
    ContentType, EXPECTED_JSON_RESPONSE, UNPARSABLE_JSON_RESPONSE, from_json, from_json_value,
    get_json_response, is_json_response, to_form, to_json,
};
pub use classify::handle_fetch_response;
pub use client::HttpClient;
pub use compose::{
    BaseRequestParams, CallOverrides, CompleteRequestParams, HandleRequest, RequestHandler,
    create_request_handler,
};
pub use error::{
    DefaultErrorClassifier, Error, ErrorClassifier, ErrorSource, Errors, Result,
    UNRECOGNISED_ERROR_BODY,
};
pub use handle::{CastResponse, HandleResponse, cast_response};
pub use headers::Headers;
pub use init_config::{DEFAULT_API_URL, DEFAULT_API_VERSION, InitConfig, InitConfigBuilder};
pub use make_request::{
    ACCEPT_VERSION_HEADER, AUTHORIZATION_HEADER, Endpoint, MakeRequest, init_make_request,
    merge_headers,
};
pub use method::Method;
pub use query::{IntoQueryValue, Query, QueryValue};
pub use request::{Request, RequestBuilder};
pub use response::Response;
pub use result::ApiResult;
pub use url_build::{add_query_to_url, append_pathname_to_url};

pub use tokio_util::sync::CancellationToken;

/// Trait for types that can be converted to query parameter pairs.
///
/// Entries without a value are skipped; list values repeat their key.
///
/// # Example
///
/// ```
/// use splash_core::{Query, ToQueryPairs};
///
/// let query = Query::new()
///     .with("query", "red car")
///     .with("page", None::<u32>)
///     .with("orientation", "landscape");
///
/// assert_eq!(
///     query.to_query_pairs(),
///     vec![
///         ("query".to_string(), "red car".to_string()),
///         ("orientation".to_string(), "landscape".to_string()),
///     ]
/// );
/// ```
pub trait ToQueryPairs {
    /// Convert this type to a vector of key-value pairs for query parameters.
    fn to_query_pairs(&self) -> Vec<(String, String)>;
}
