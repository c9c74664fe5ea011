//! Tower middleware layers for the splash transport.
//!
//! Layers wrap the raw hyper service through [`HyperClientBuilder::layer`]:
//! each layer wraps the ones added before it, so the last one added sees
//! requests first.
//!
//! # Available Layers
//!
//! - [`LoggingLayer`] - Logs requests/responses using `tracing`
//! - [`ConcurrencyLimitLayer`] - Limits concurrent requests (from tower)
//!
//! Any other `tower::Layer` whose service maps [`Request`](crate::Request) to
//! [`Response`](crate::Response) with [`Error`](crate::Error) works too.
//!
//! # Example
//!
//! ```
//! use splash::HyperClient;
//! use splash::middleware::{ConcurrencyLimitLayer, LoggingLayer};
//!
//! let client = HyperClient::builder()
//!     .layer(ConcurrencyLimitLayer::new(8))
//!     .layer(LoggingLayer::debug())
//!     .build();
//! # drop(client);
//! ```
//!
//! [`HyperClientBuilder::layer`]: crate::HyperClientBuilder::layer

mod logging;

pub use logging::{LogLevel, Logging, LoggingLayer};

pub use tower::limit::ConcurrencyLimitLayer;
pub use tower::Layer;
