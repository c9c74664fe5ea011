//! Prelude module for convenient imports.
//!
//! ```
//! use splash_core::prelude::*;
//! ```

pub use crate::{
    ApiResult, BaseRequestParams, CallOverrides, CancellationToken, Endpoint, Error, ErrorSource,
    HandleRequest, HandleResponse, Headers, HttpClient, InitConfig, Method, Query, Request,
    Response, Result, cast_response, create_request_handler, init_make_request,
};
