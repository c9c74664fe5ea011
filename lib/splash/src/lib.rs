//! Typed client for the Unsplash JSON API.
//!
//! Endpoints are plain functions from typed arguments to a path, query and
//! method. Binding them to an [`ApiClient`] gives an async call returning an
//! [`ApiResult`]: either the decoded payload or the API's error messages.
//!
//! # Example
//!
//! ```no_run
//! use serde::Deserialize;
//! use splash::prelude::*;
//!
//! #[derive(Debug, Deserialize)]
//! struct Photo {
//!     id: String,
//!     likes: u32,
//! }
//!
//! # async fn run() -> splash::Result<()> {
//! let api = splash::create_api(InitConfig::builder().access_key("my-access-key").build()?);
//!
//! let get_photo = api.bind(
//!     create_request_handler(|id: String| BaseRequestParams::get(format!("/photos/{id}"))),
//!     cast_response::<Photo>(),
//! );
//!
//! match get_photo.call("Dwu85P9SOIk".to_string()).await? {
//!     ApiResult::Success { response, .. } => println!("{} likes", response.likes),
//!     ApiResult::Error { status, errors, .. } => eprintln!("{status}: {errors:?}"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! `Err` is reserved for failures the caller did not ask to recover from:
//! transport errors, cancellation, timeouts and handler bugs.

mod api_client;
mod client;
mod config;
mod connector;
pub mod middleware;
pub mod prelude;

pub use api_client::{ApiClient, create_api, create_api_with};
pub use client::{BoxedService, HyperClient, HyperClientBuilder, ServiceFuture};
pub use config::ClientConfig;

// Re-export tower for middleware composition
pub use tower;

// Re-export core types
pub use splash_core::{
    ApiResult, BaseRequestParams, CallOverrides, CancellationToken, CastResponse,
    CompleteRequestParams, ContentType, DefaultErrorClassifier, Endpoint, Error, ErrorClassifier,
    ErrorSource, Errors, HandleRequest, HandleResponse, Headers, HttpClient, InitConfig,
    InitConfigBuilder, MakeRequest, Method, Query, QueryValue, Request, RequestBuilder, Response,
    Result, ToQueryPairs, UNRECOGNISED_ERROR_BODY, cast_response,
    create_request_handler, from_json, handle_fetch_response, init_make_request, to_form, to_json,
};
