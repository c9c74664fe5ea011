//! Prelude module for convenient imports.
//!
//! ```
//! use splash::prelude::*;
//! ```

pub use crate::{
    ApiClient, ApiResult, BaseRequestParams, CallOverrides, CancellationToken, ClientConfig,
    Error, ErrorSource, HttpClient, HyperClient, InitConfig, Method, Query, Result,
    cast_response, create_api, create_request_handler,
};
